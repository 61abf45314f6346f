use bazaar_catalog::ProductFactory;
use crate::shop::Shop;

/// Types that can produce a configured copy of themselves
pub trait Prototype {
    type Params;

    fn clone_with(&self, params: Self::Params) -> Self;
}

/// A cloned shop gets its own name and id but sells from the same factory
/// instance. Stocking is not re-run and wallets are never part of the clone.
impl<F: ProductFactory> Prototype for Shop<F> {
    type Params = String;

    fn clone_with(&self, new_name: String) -> Self {
        tracing::info!("Cloning {} as {}", self.name(), new_name);
        Shop::with_shared_factory(new_name, self.shared_factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_catalog::{catalogs, CompositeRegistry};
    use bazaar_core::{Customer, Wallet};
    use bazaar_shared::{FactoryLabel, ProductLabel};

    fn prototype_shop() -> Shop {
        let shop = Shop::new("PrototypeItemShop", CompositeRegistry::standard());
        shop.stock_all().unwrap();
        shop
    }

    #[test]
    fn test_clone_has_own_identity() {
        let shop = prototype_shop();
        let clone = shop.clone_with("AnotherPrototypeItemShop".to_string());

        assert_eq!(clone.name(), "AnotherPrototypeItemShop");
        assert_ne!(clone.id(), shop.id());
        assert!(clone.shares_catalog_with(&shop));
    }

    #[test]
    fn test_clone_resolves_same_labels_without_restocking() {
        let shop = prototype_shop();
        let clone = shop.clone_with("Another".to_string());

        assert_eq!(clone.catalog().unwrap(), shop.catalog().unwrap());
        for label in ProductLabel::ALL {
            assert_eq!(clone.is_available(label).unwrap(), shop.is_available(label).unwrap());
        }
    }

    #[test]
    fn test_catalog_changes_are_shared() {
        let shop = prototype_shop();
        let clone = shop.clone_with("Another".to_string());

        clone
            .update_catalog(|composite| {
                if let Some(fruits) = composite.registry_mut(FactoryLabel::Fruit) {
                    fruits.register(ProductLabel::Orange, catalogs::stand_orange());
                }
            })
            .unwrap();

        assert!(shop.is_available(ProductLabel::Orange).unwrap());
    }

    #[test]
    fn test_purchases_only_touch_caller_wallet() {
        let shop = prototype_shop();
        let clone = shop.clone_with("Another".to_string());
        let before = shop.catalog().unwrap();

        let mut memba = Customer::new("Memba", 400000);
        let mut bhawa = Customer::new("Bhawa", 500000);

        let apple = shop.buy(&mut memba, ProductLabel::Apple).unwrap();
        let melon = clone.buy(&mut bhawa, ProductLabel::WaterMelon).unwrap();

        assert_eq!(memba.balance(), 400000 - apple.price_cents);
        assert_eq!(bhawa.balance(), 500000 - melon.price_cents);
        assert_eq!(shop.catalog().unwrap(), before);
        assert!(shop.can_buy(&memba, ProductLabel::WaterMelon).unwrap());
    }

    #[test]
    fn test_unstocked_clone_stays_unstocked() {
        let shop = Shop::new("Fresh", CompositeRegistry::standard());
        let clone = shop.clone_with("FreshClone".to_string());
        assert!(clone.catalog().unwrap().is_empty());

        shop.stock_all().unwrap();
        assert!(clone.is_available(ProductLabel::Mamsung).unwrap());
    }
}
