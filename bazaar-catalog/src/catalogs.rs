//! Static catalogs stocked by the built-in registries.
//!
//! Each product kind has one explicit factory function returning its template.

use crate::product::{ProductAttributes, ProductTemplate};
use bazaar_shared::ProductLabel;

/// Signature of a catalog a registry stocks from
pub type Catalog = fn() -> Vec<ProductTemplate>;

fn fruit(
    label: ProductLabel,
    name: &str,
    price_cents: i64,
    shape: &str,
    taste: &str,
    vitamins: &[&str],
    high_fiber: bool,
) -> ProductTemplate {
    ProductTemplate {
        label,
        name: name.to_string(),
        price_cents,
        shape: shape.to_string(),
        attributes: ProductAttributes::Fruit {
            taste: taste.to_string(),
            vitamins: vitamins.iter().map(|v| v.to_string()).collect(),
            high_fiber,
        },
    }
}

fn smart_phone(
    label: ProductLabel,
    name: &str,
    price_cents: i64,
    shape: &str,
    brand: &str,
    battery: &str,
    five_g: bool,
) -> ProductTemplate {
    ProductTemplate {
        label,
        name: name.to_string(),
        price_cents,
        shape: shape.to_string(),
        attributes: ProductAttributes::SmartPhone {
            brand: brand.to_string(),
            battery: battery.to_string(),
            five_g,
        },
    }
}

pub fn apple() -> ProductTemplate {
    fruit(ProductLabel::Apple, "Apple", 1000, "Roundish", "Sweet & Tart", &["riboflavin", "thiamin", "B6"], true)
}

pub fn water_melon() -> ProductTemplate {
    fruit(ProductLabel::WaterMelon, "WaterMelon", 545, "Oval", "Sweet & fruity", &["A", "B6", "C"], false)
}

pub fn mamsung() -> ProductTemplate {
    smart_phone(ProductLabel::Mamsung, "Mamsung", 302938, "Z shape", "Mamsung (Mouth Morea)", "5500mh", true)
}

/// Priced well beyond any demo wallet
pub fn a_phone() -> ProductTemplate {
    smart_phone(ProductLabel::APhone, "aPhone", 18928938, "Rectangle", "aPhone", "6000mh", false)
}

pub fn stand_apple() -> ProductTemplate {
    fruit(
        ProductLabel::Apple,
        "Apple",
        1000,
        "Apple has roundish shape",
        "Apple tastes sweet , tart or a little of both",
        &[],
        false,
    )
}

pub fn stand_orange() -> ProductTemplate {
    fruit(
        ProductLabel::Orange,
        "Orange",
        2000,
        "Orange has spherical shape",
        "Orange tastes sweet and tart",
        &[],
        false,
    )
}

pub fn stand_kiwi() -> ProductTemplate {
    fruit(ProductLabel::Kiwi, "Kiwi", 10000, "Kiwi has ovoid shape", "Kiwi tastes sweet and sour", &[], false)
}

pub fn fruits() -> Vec<ProductTemplate> {
    vec![apple(), water_melon()]
}

pub fn smart_phones() -> Vec<ProductTemplate> {
    vec![mamsung(), a_phone()]
}

/// Catalog of the single-factory fruit stand
pub fn fruit_stand() -> Vec<ProductTemplate> {
    vec![stand_apple(), stand_orange(), stand_kiwi()]
}
