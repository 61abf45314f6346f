use std::collections::HashMap;
use bazaar_shared::ProductLabel;
use crate::catalogs::{self, Catalog};
use crate::product::{Product, ProductTemplate};

/// Common surface of every product factory a shop can sell from.
///
/// Lookups are total: an unknown label yields `None`/`false`, never an error.
pub trait ProductFactory: Send + Sync {
    /// Register the factory's fixed catalog. Repeated calls leave the same state.
    fn stock_all(&mut self);

    /// Check if the label is currently stocked
    fn has(&self, label: &ProductLabel) -> bool;

    /// Get the stored template without instantiating it
    fn template(&self, label: &ProductLabel) -> Option<&ProductTemplate>;

    /// Build a fresh product for the label
    fn instantiate(&self, label: &ProductLabel) -> Option<Product> {
        self.template(label).map(ProductTemplate::instantiate)
    }

    /// Stocked labels, sorted
    fn labels(&self) -> Vec<ProductLabel>;
}

/// Label-keyed template store for one product category
#[derive(Debug, Clone)]
pub struct ProductRegistry {
    name: String,
    catalog: Catalog,
    entries: HashMap<ProductLabel, ProductTemplate>,
}

impl ProductRegistry {
    pub fn new(name: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            name: name.into(),
            catalog,
            entries: HashMap::new(),
        }
    }

    pub fn fruits() -> Self {
        Self::new("Fruits", catalogs::fruits)
    }

    pub fn smart_phones() -> Self {
        Self::new("SmartPhones", catalogs::smart_phones)
    }

    pub fn fruit_stand() -> Self {
        Self::new("FruitStand", catalogs::fruit_stand)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a template under the label, replacing any previous entry.
    /// The template is re-keyed so products built from it carry `label`.
    pub fn register(&mut self, label: ProductLabel, mut template: ProductTemplate) {
        tracing::debug!("{} now has {}", self.name, label);
        template.label = label;
        self.entries.insert(label, template);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProductFactory for ProductRegistry {
    fn stock_all(&mut self) {
        tracing::info!("Stocking all items of {}", self.name);
        for template in (self.catalog)() {
            self.register(template.label, template);
        }
    }

    fn has(&self, label: &ProductLabel) -> bool {
        self.entries.contains_key(label)
    }

    fn template(&self, label: &ProductLabel) -> Option<&ProductTemplate> {
        self.entries.get(label)
    }

    fn labels(&self) -> Vec<ProductLabel> {
        let mut labels: Vec<_> = self.entries.keys().copied().collect();
        labels.sort();
        labels
    }
}
