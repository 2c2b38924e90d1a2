use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cake sizes offered on the order form.
///
/// Serialized with the same values the form posts (`9-round`, `18-square`, ...),
/// which is also how the type is written to the order log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CakeType {
    #[serde(rename = "9-round")]
    NineRound,
    #[serde(rename = "12-round")]
    TwelveRound,
    #[serde(rename = "18-square")]
    EighteenSquare,
    #[serde(rename = "24-square")]
    TwentyFourSquare,
}

impl CakeType {
    pub const ALL: [CakeType; 4] = [
        CakeType::NineRound,
        CakeType::TwelveRound,
        CakeType::EighteenSquare,
        CakeType::TwentyFourSquare,
    ];

    /// Form/log value of the variant.
    pub fn code(self) -> &'static str {
        match self {
            CakeType::NineRound => "9-round",
            CakeType::TwelveRound => "12-round",
            CakeType::EighteenSquare => "18-square",
            CakeType::TwentyFourSquare => "24-square",
        }
    }

    /// Human-readable label shown on the form and the receipt.
    pub fn label(self) -> &'static str {
        match self {
            CakeType::NineRound => "9\" Round",
            CakeType::TwelveRound => "12\" Round",
            CakeType::EighteenSquare => "18×18\" Square",
            CakeType::TwentyFourSquare => "24×24\" Square",
        }
    }

    pub fn is_round(self) -> bool {
        matches!(self, CakeType::NineRound | CakeType::TwelveRound)
    }

    pub fn is_square(self) -> bool {
        !self.is_round()
    }
}

impl fmt::Display for CakeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCakeType(pub String);

impl FromStr for CakeType {
    type Err = UnknownCakeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CakeType::ALL
            .into_iter()
            .find(|cake| cake.code() == s)
            .ok_or_else(|| UnknownCakeType(s.to_string()))
    }
}

/// Number of stacked layers. Only round cakes come in more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerCount(u8);

impl LayerCount {
    pub const ONE: Self = Self(1);
    pub const MAX: u8 = 3;

    pub fn new(layers: i64) -> Option<Self> {
        match layers {
            1..=3 => Some(Self(layers as u8)),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
