use bazaar_shared::{FactoryLabel, ProductLabel};
use crate::product::ProductTemplate;
use crate::registry::{ProductFactory, ProductRegistry};

/// One lookup surface over several named registries.
///
/// Sub-registries are searched in registration order and the first one
/// holding a label owns it. Collisions are not rejected on registration;
/// use [`CompositeRegistry::ensure_unique_labels`] to enforce uniqueness.
#[derive(Debug, Clone, Default)]
pub struct CompositeRegistry {
    registries: Vec<(FactoryLabel, ProductRegistry)>,
}

impl CompositeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty composite; `stock_all` fans out to fruits and smart phones
    pub fn standard() -> Self {
        Self::new()
    }

    /// Add a named sub-registry. Re-using a factory label replaces the
    /// registry in place, keeping its position in the resolution order.
    pub fn register(&mut self, factory_label: FactoryLabel, registry: ProductRegistry) {
        match self.registries.iter_mut().find(|(existing, _)| *existing == factory_label) {
            Some(slot) => slot.1 = registry,
            None => self.registries.push((factory_label, registry)),
        }
    }

    pub fn registry(&self, factory_label: FactoryLabel) -> Option<&ProductRegistry> {
        self.registries
            .iter()
            .find(|(existing, _)| *existing == factory_label)
            .map(|(_, registry)| registry)
    }

    pub fn registry_mut(&mut self, factory_label: FactoryLabel) -> Option<&mut ProductRegistry> {
        self.registries
            .iter_mut()
            .find(|(existing, _)| *existing == factory_label)
            .map(|(_, registry)| registry)
    }

    /// Factory labels in resolution order
    pub fn factory_labels(&self) -> Vec<FactoryLabel> {
        self.registries.iter().map(|(label, _)| *label).collect()
    }

    /// First sub-registry claiming the label
    pub fn resolve_owner(&self, label: &ProductLabel) -> Option<FactoryLabel> {
        let owner = self
            .registries
            .iter()
            .find(|(_, registry)| registry.has(label))
            .map(|(factory_label, _)| *factory_label);
        tracing::debug!("Resolved {} to {:?}", label, owner);
        owner
    }

    /// Labels claimed by more than one sub-registry, with every claimant
    pub fn duplicate_labels(&self) -> Vec<(ProductLabel, Vec<FactoryLabel>)> {
        let mut duplicates = Vec::new();
        for label in ProductLabel::ALL {
            let owners: Vec<_> = self
                .registries
                .iter()
                .filter(|(_, registry)| registry.has(&label))
                .map(|(factory_label, _)| *factory_label)
                .collect();
            if owners.len() > 1 {
                duplicates.push((label, owners));
            }
        }
        duplicates
    }

    pub fn ensure_unique_labels(&self) -> Result<(), CatalogError> {
        match self.duplicate_labels().into_iter().next() {
            Some((label, owners)) => Err(CatalogError::DuplicateLabel {
                label,
                first: owners[0],
                second: owners[1],
            }),
            None => Ok(()),
        }
    }
}

impl ProductFactory for CompositeRegistry {
    fn stock_all(&mut self) {
        tracing::info!("Stocking all product factories");
        self.register(FactoryLabel::Fruit, ProductRegistry::fruits());
        self.register(FactoryLabel::SmartPhone, ProductRegistry::smart_phones());

        for (_, registry) in self.registries.iter_mut() {
            registry.stock_all();
        }

        for (label, owners) in self.duplicate_labels() {
            tracing::warn!(
                "{} is stocked by {:?}; {} wins",
                label,
                owners,
                owners[0]
            );
        }
    }

    fn has(&self, label: &ProductLabel) -> bool {
        self.resolve_owner(label).is_some()
    }

    fn template(&self, label: &ProductLabel) -> Option<&ProductTemplate> {
        let owner = self.resolve_owner(label)?;
        self.registry(owner)?.template(label)
    }

    fn labels(&self) -> Vec<ProductLabel> {
        let mut labels: Vec<_> = self
            .registries
            .iter()
            .flat_map(|(_, registry)| registry.labels())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Label {label} is stocked by both {first} and {second}")]
    DuplicateLabel {
        label: ProductLabel,
        first: FactoryLabel,
        second: FactoryLabel,
    },
}
