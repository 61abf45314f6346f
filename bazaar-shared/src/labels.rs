use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier a shop uses to address a product template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum ProductLabel {
    Apple,
    WaterMelon,
    Orange,
    Kiwi,
    RandomFruit,
    Mamsung,
    APhone,
    ZeroPlus,
    RandomSmartPhone,
}

impl ProductLabel {
    pub const ALL: [ProductLabel; 9] = [
        ProductLabel::Apple,
        ProductLabel::WaterMelon,
        ProductLabel::Orange,
        ProductLabel::Kiwi,
        ProductLabel::RandomFruit,
        ProductLabel::Mamsung,
        ProductLabel::APhone,
        ProductLabel::ZeroPlus,
        ProductLabel::RandomSmartPhone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductLabel::Apple => "Apple",
            ProductLabel::WaterMelon => "WaterMelon",
            ProductLabel::Orange => "Orange",
            ProductLabel::Kiwi => "Kiwi",
            ProductLabel::RandomFruit => "random_fruit",
            ProductLabel::Mamsung => "Mamsung",
            ProductLabel::APhone => "aPhone",
            ProductLabel::ZeroPlus => "ZeroPlus",
            ProductLabel::RandomSmartPhone => "random_smart_phone",
        }
    }
}

impl fmt::Display for ProductLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductLabel {
    type Err = LabelParseError;

    /// Case-insensitive; accepts the display name as well as the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductLabel::ALL
            .iter()
            .copied()
            .find(|label| {
                label.as_str().eq_ignore_ascii_case(wanted)
                    || format!("{:?}", label).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| LabelParseError(wanted.to_string()))
    }
}

impl TryFrom<String> for ProductLabel {
    type Error = LabelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductLabel> for String {
    fn from(label: ProductLabel) -> Self {
        label.as_str().to_string()
    }
}

/// Names a sub-registry inside a composite registry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FactoryLabel {
    Fruit,
    SmartPhone,
    FruitStand,
}

impl FactoryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactoryLabel::Fruit => "FruitFactory",
            FactoryLabel::SmartPhone => "SmartPhoneFactory",
            FactoryLabel::FruitStand => "FruitStandFactory",
        }
    }
}

impl fmt::Display for FactoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown product label: {0}")]
pub struct LabelParseError(pub String);
