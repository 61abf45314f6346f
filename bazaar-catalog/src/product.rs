use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use bazaar_shared::{format_cents, ProductLabel};
use std::fmt;

/// Product kinds in the catalog taxonomy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductKind {
    Fruit,
    SmartPhone,
}

impl ProductKind {
    /// Root segment of every category path for this kind
    pub fn root_category(&self) -> &'static str {
        match self {
            ProductKind::Fruit => "Fruit",
            ProductKind::SmartPhone => "SmartPhone",
        }
    }
}

/// Parent-to-child category path, e.g. `Fruit -> Apple`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    segments: Vec<String>,
}

impl Category {
    pub fn new(kind: ProductKind, leaf: &str) -> Self {
        Self {
            segments: vec![kind.root_category().to_string(), leaf.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn root(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(" -> "))
    }
}

/// Kind-specific attributes carried by templates and products
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductAttributes {
    Fruit {
        taste: String,
        vitamins: Vec<String>,
        high_fiber: bool,
    },
    SmartPhone {
        brand: String,
        battery: String,
        five_g: bool,
    },
}

impl ProductAttributes {
    pub fn kind(&self) -> ProductKind {
        match self {
            ProductAttributes::Fruit { .. } => ProductKind::Fruit,
            ProductAttributes::SmartPhone { .. } => ProductKind::SmartPhone,
        }
    }
}

/// Stored blueprint a registry hands out; never sold itself
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductTemplate {
    pub label: ProductLabel,
    pub name: String,
    pub price_cents: i64,
    pub shape: String,
    pub attributes: ProductAttributes,
}

impl ProductTemplate {
    pub fn kind(&self) -> ProductKind {
        self.attributes.kind()
    }

    pub fn category(&self) -> Category {
        Category::new(self.kind(), &self.name)
    }

    /// Build a fresh product from this template
    pub fn instantiate(&self) -> Product {
        Product {
            id: Uuid::new_v4(),
            label: self.label,
            name: self.name.clone(),
            category: self.category(),
            price_cents: self.price_cents,
            shape: self.shape.clone(),
            attributes: self.attributes.clone(),
            created_at: Utc::now(),
        }
    }
}

/// A purchased item, one per instantiation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub label: ProductLabel,
    pub name: String,
    pub category: Category,
    pub price_cents: i64,
    pub shape: String,
    pub attributes: ProductAttributes,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        self.attributes.kind()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] at {}", self.name, self.category, format_cents(self.price_cents))
    }
}
