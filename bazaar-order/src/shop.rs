use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;
use uuid::Uuid;
use bazaar_catalog::{CompositeRegistry, Product, ProductFactory, ProductTemplate};
use bazaar_core::Wallet;
use bazaar_shared::{format_cents, ProductLabel, PurchaseCompletedEvent, PurchaseRejectedEvent};

/// Sells products from a factory and charges the caller's wallet.
///
/// The factory sits behind `Arc<RwLock<_>>` so prototype clones share the
/// same catalog. Each purchase holds the read lock for the whole
/// check-then-charge sequence, and `buy` borrows the wallet mutably, so the
/// price checked is always the price charged.
#[derive(Debug)]
pub struct Shop<F: ProductFactory = CompositeRegistry> {
    id: Uuid,
    name: String,
    factory: Arc<RwLock<F>>,
}

impl<F: ProductFactory> Shop<F> {
    pub fn new(name: impl Into<String>, factory: F) -> Self {
        Self::with_shared_factory(name, Arc::new(RwLock::new(factory)))
    }

    /// Open a shop over a factory that other shops may also sell from
    pub fn with_shared_factory(name: impl Into<String>, factory: Arc<RwLock<F>>) -> Self {
        let name = name.into();
        tracing::info!("A shop is opened with name {}", name);
        Self {
            id: Uuid::new_v4(),
            name,
            factory,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shares_catalog_with(&self, other: &Shop<F>) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }

    pub(crate) fn shared_factory(&self) -> Arc<RwLock<F>> {
        Arc::clone(&self.factory)
    }

    /// Stock the factory with its full catalog
    pub fn stock_all(&self) -> Result<(), ShopError> {
        self.write_factory()?.stock_all();
        tracing::info!("{} is stocked", self.name);
        Ok(())
    }

    /// Mutate the underlying factory; visible to every shop sharing it
    pub fn update_catalog<R>(&self, update: impl FnOnce(&mut F) -> R) -> Result<R, ShopError> {
        let mut factory = self.write_factory()?;
        Ok(update(&mut factory))
    }

    pub fn is_available(&self, label: ProductLabel) -> Result<bool, ShopError> {
        Ok(self.read_factory()?.has(&label))
    }

    pub fn price_of(&self, label: ProductLabel) -> Result<Option<i64>, ShopError> {
        Ok(self.read_factory()?.template(&label).map(|template| template.price_cents))
    }

    /// Stocked labels, sorted
    pub fn catalog(&self) -> Result<Vec<ProductLabel>, ShopError> {
        Ok(self.read_factory()?.labels())
    }

    /// Dry run of a purchase. Domain failures are logged and reported as
    /// `Ok(false)`; anything else is returned as an error.
    pub fn can_buy<W: Wallet + ?Sized>(&self, wallet: &W, label: ProductLabel) -> Result<bool, ShopError> {
        let factory = self.read_factory()?;
        match self.authorize(&factory, wallet, label) {
            Ok(_) => Ok(true),
            Err(err) if err.is_domain() => {
                let event = PurchaseRejectedEvent {
                    shop_id: self.id,
                    shop_name: self.name.clone(),
                    owner: wallet.owner().to_string(),
                    label,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                };
                tracing::warn!(event = %event.to_json(), "{}", err);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Validate, charge the template price and hand over a fresh product.
    /// The wallet is untouched when validation fails.
    pub fn buy<W: Wallet + ?Sized>(&self, wallet: &mut W, label: ProductLabel) -> Result<Product, ShopError> {
        let factory = self.read_factory()?;
        let template = self.authorize(&factory, &*wallet, label)?;

        let price_cents = template.price_cents;
        wallet.debit(price_cents);
        let product = template.instantiate();

        let event = PurchaseCompletedEvent {
            shop_id: self.id,
            shop_name: self.name.clone(),
            product_id: product.id,
            owner: wallet.owner().to_string(),
            label,
            price_cents,
            remaining_balance_cents: wallet.balance(),
            timestamp: Utc::now(),
        };
        tracing::info!(
            event = %event.to_json(),
            "{} sold {} to {} for {}",
            self.name,
            label,
            wallet.owner(),
            format_cents(price_cents)
        );

        Ok(product)
    }

    /// Stock check, then affordability check against the template price
    fn authorize<'a, W: Wallet + ?Sized>(
        &self,
        factory: &'a F,
        wallet: &W,
        label: ProductLabel,
    ) -> Result<&'a ProductTemplate, ShopError> {
        let not_available = || ShopError::ItemNotAvailable {
            label,
            shop: self.name.clone(),
        };

        if !factory.has(&label) {
            return Err(not_available());
        }
        let template = factory.template(&label).ok_or_else(not_available)?;

        if wallet.balance() < template.price_cents {
            return Err(ShopError::InsufficientBalance {
                owner: wallet.owner().to_string(),
                label,
                balance_cents: wallet.balance(),
                price_cents: template.price_cents,
            });
        }

        Ok(template)
    }

    fn read_factory(&self) -> Result<RwLockReadGuard<'_, F>, ShopError> {
        self.factory
            .read()
            .map_err(|_| ShopError::CatalogUnavailable(self.name.clone()))
    }

    fn write_factory(&self) -> Result<RwLockWriteGuard<'_, F>, ShopError> {
        self.factory
            .write()
            .map_err(|_| ShopError::CatalogUnavailable(self.name.clone()))
    }
}

fn cents(amount: &i64) -> String {
    format_cents(*amount)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("{label} is not available in {shop}")]
    ItemNotAvailable {
        label: ProductLabel,
        shop: String,
    },

    #[error("{owner} doesn't have enough balance to buy {label}: has {}, needs {}", cents(.balance_cents), cents(.price_cents))]
    InsufficientBalance {
        owner: String,
        label: ProductLabel,
        balance_cents: i64,
        price_cents: i64,
    },

    #[error("Catalog of {0} is unavailable")]
    CatalogUnavailable(String),
}

impl ShopError {
    /// Expected purchase failures, as opposed to infrastructure faults
    pub fn is_domain(&self) -> bool {
        matches!(self, ShopError::ItemNotAvailable { .. } | ShopError::InsufficientBalance { .. })
    }
}
