use super::cake::CakeType;
use super::catalog::PriceCatalog;
use super::money::Price;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price adjustment chosen from the delivery state/region text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionalAdjustment {
    /// Missouri or Kansas delivery, 15% off.
    Local,
    /// Everywhere else, 20% on top.
    OutOfArea,
}

impl RegionalAdjustment {
    /// Classifies a free-text region.
    ///
    /// Exact `MO`/`KS` codes match, and so does any text *containing*
    /// `MISSOURI` or `KANSAS` (so "Kansas City" is local). Case and
    /// surrounding whitespace are ignored.
    pub fn for_region(region: &str) -> Self {
        let region = region.trim().to_uppercase();
        if region == "MO"
            || region == "KS"
            || region.contains("MISSOURI")
            || region.contains("KANSAS")
        {
            RegionalAdjustment::Local
        } else {
            RegionalAdjustment::OutOfArea
        }
    }

    pub fn factor(self) -> Decimal {
        match self {
            RegionalAdjustment::Local => dec!(0.85),
            RegionalAdjustment::OutOfArea => dec!(1.20),
        }
    }

    /// Applies the factor and rounds to cents.
    pub fn apply(self, base: Price) -> Price {
        (base * self.factor()).round_to_cents()
    }
}

/// Base and regionally adjusted price of one cake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub base: Price,
    pub total: Price,
}

#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    catalog: PriceCatalog,
}

impl PricingEngine {
    pub fn new(catalog: PriceCatalog) -> Self {
        Self { catalog }
    }

    /// Looks up the base price and applies the regional adjustment.
    ///
    /// Fails with `PricingFailure` when the catalog has no positive price for
    /// the combination.
    pub fn price(&self, cake_type: CakeType, layers: i64, region: &str) -> Result<Quote> {
        let base = self
            .catalog
            .base_price(cake_type, layers)
            .filter(Price::is_positive)
            .ok_or(OrderError::PricingFailure { cake_type, layers })?;

        Ok(Quote {
            base,
            total: RegionalAdjustment::for_region(region).apply(base),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjusted(base: Decimal, region: &str) -> Price {
        RegionalAdjustment::for_region(region).apply(Price::new(base))
    }

    #[test]
    fn test_local_discount() {
        assert_eq!(adjusted(dec!(12.00), "MO"), Price::new(dec!(10.20)));
        assert_eq!(adjusted(dec!(12.00), "ks"), Price::new(dec!(10.20)));
        assert_eq!(adjusted(dec!(12.00), "  Missouri "), Price::new(dec!(10.20)));
    }

    #[test]
    fn test_substring_match_is_lenient() {
        assert_eq!(adjusted(dec!(12.00), "Kansas City"), Price::new(dec!(10.20)));
        assert_eq!(adjusted(dec!(12.00), "arkansas"), Price::new(dec!(10.20)));
    }

    #[test]
    fn test_out_of_area_surcharge() {
        assert_eq!(adjusted(dec!(12.00), "CA"), Price::new(dec!(14.40)));
        assert_eq!(adjusted(dec!(12.00), ""), Price::new(dec!(14.40)));
        assert_eq!(adjusted(dec!(12.00), "MOX"), Price::new(dec!(14.40)));
    }

    #[test]
    fn test_price_quote() {
        let engine = PricingEngine::default();
        let quote = engine.price(CakeType::TwelveRound, 2, "MO").unwrap();
        assert_eq!(quote.base, Price::new(dec!(28.00)));
        assert_eq!(quote.total, Price::new(dec!(23.80)));

        let quote = engine.price(CakeType::TwentyFourSquare, 1, "Texas").unwrap();
        assert_eq!(quote.base, Price::new(dec!(48.00)));
        assert_eq!(quote.total, Price::new(dec!(57.60)));
    }

    #[test]
    fn test_price_failure() {
        let engine = PricingEngine::default();
        assert!(matches!(
            engine.price(CakeType::NineRound, 5, "MO"),
            Err(OrderError::PricingFailure { layers: 5, .. })
        ));
    }
}
