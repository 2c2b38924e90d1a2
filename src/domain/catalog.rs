use super::cake::CakeType;
use super::money::Price;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const NINE_ROUND: [Decimal; 3] = [dec!(12.00), dec!(24.00), dec!(36.00)];
const TWELVE_ROUND: [Decimal; 3] = [dec!(14.00), dec!(28.00), dec!(42.00)];
const EIGHTEEN_SQUARE: Decimal = dec!(30.00);
const TWENTY_FOUR_SQUARE: Decimal = dec!(48.00);

/// Static base price table, keyed by cake type and layer count.
///
/// Square cakes have a single price and ignore the layer argument.
/// Round cakes only have prices for 1 to 3 layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCatalog;

impl PriceCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn base_price(&self, cake_type: CakeType, layers: i64) -> Option<Price> {
        let amount = match cake_type {
            CakeType::NineRound => round_tier(&NINE_ROUND, layers)?,
            CakeType::TwelveRound => round_tier(&TWELVE_ROUND, layers)?,
            CakeType::EighteenSquare => EIGHTEEN_SQUARE,
            CakeType::TwentyFourSquare => TWENTY_FOUR_SQUARE,
        };
        Some(Price::new(amount))
    }
}

fn round_tier(tiers: &[Decimal; 3], layers: i64) -> Option<Decimal> {
    let index = usize::try_from(layers).ok()?.checked_sub(1)?;
    tiers.get(index).copied()
}
