use bazaar_app::{run_abstract_factory, run_fruit_stand, run_prototype, Config, CustomerPlan};
use bazaar_catalog::{catalogs, CompositeRegistry, ProductFactory, ProductRegistry};
use bazaar_core::{CashWallet, Wallet};
use bazaar_order::{Prototype, Shop, ShopError};
use bazaar_shared::{FactoryLabel, ProductLabel};

fn shop_with_oranges() -> Shop {
    let shop = Shop::new("PrototypeItemShop", CompositeRegistry::standard());
    shop.stock_all().unwrap();
    shop.update_catalog(|composite| {
        if let Some(fruits) = composite.registry_mut(FactoryLabel::Fruit) {
            fruits.register(ProductLabel::Orange, catalogs::stand_orange());
        }
    })
    .unwrap();
    shop
}

#[test]
fn test_orange_with_4000_balance() {
    let shop = shop_with_oranges();
    let mut wallet = CashWallet::new("Memba", 400000);
    let price = shop.price_of(ProductLabel::Orange).unwrap().unwrap();
    assert!(price <= 400000);

    assert!(shop.can_buy(&wallet, ProductLabel::Orange).unwrap());
    let orange = shop.buy(&mut wallet, ProductLabel::Orange).unwrap();

    assert_eq!(orange.name, "Orange");
    assert_eq!(wallet.balance(), 400000 - price);
}

#[test]
fn test_balance_of_110_after_kiwi() {
    let shop = Shop::new("CornerFruitStand", ProductRegistry::fruit_stand());
    shop.stock_all().unwrap();
    let mut wallet = CashWallet::new("Rohan", 11000);

    shop.buy(&mut wallet, ProductLabel::Kiwi).unwrap();
    assert_eq!(wallet.balance(), 1000);

    assert!(!shop.can_buy(&wallet, ProductLabel::Orange).unwrap());
    let err = shop.buy(&mut wallet, ProductLabel::Orange).unwrap_err();
    assert!(matches!(err, ShopError::InsufficientBalance { price_cents: 2000, balance_cents: 1000, .. }));
    assert_eq!(wallet.balance(), 1000);
}

#[test]
fn test_unknown_label_leaves_state_untouched() {
    let shop = shop_with_oranges();
    let mut wallet = CashWallet::new("Memba", 400000);
    let catalog = shop.catalog().unwrap();

    assert!(!shop.can_buy(&wallet, ProductLabel::RandomFruit).unwrap());
    assert!(matches!(
        shop.buy(&mut wallet, ProductLabel::RandomFruit),
        Err(ShopError::ItemNotAvailable { .. })
    ));

    assert_eq!(wallet.balance(), 400000);
    assert_eq!(shop.catalog().unwrap(), catalog);
}

#[test]
fn test_can_buy_implies_buy_charges_exact_price() {
    let shop = shop_with_oranges();
    let budgets = [0, 545, 999, 1000, 302938, 400000, 18928938];

    for budget in budgets {
        for label in ProductLabel::ALL {
            let mut wallet = CashWallet::new("Probe", budget);
            let allowed = shop.can_buy(&wallet, label).unwrap();
            let result = shop.buy(&mut wallet, label);

            match shop.price_of(label).unwrap() {
                Some(price) if allowed => {
                    assert!(result.is_ok());
                    assert_eq!(wallet.balance(), budget - price);
                }
                _ => {
                    assert!(!allowed);
                    assert!(result.is_err());
                    assert_eq!(wallet.balance(), budget);
                }
            }
        }
    }
}

#[test]
fn test_clone_shares_catalog() {
    let shop = shop_with_oranges();
    let another = shop.clone_with("AnotherPrototypeItemShop".to_string());
    let mut bhawa = CashWallet::new("Bhawa", 500000);

    assert!(another.shares_catalog_with(&shop));
    assert_eq!(another.catalog().unwrap(), shop.catalog().unwrap());

    let orange = another.buy(&mut bhawa, ProductLabel::Orange).unwrap();
    assert_eq!(bhawa.balance(), 500000 - orange.price_cents);
    assert!(shop.is_available(ProductLabel::Orange).unwrap());
}

#[test]
fn test_fruit_stand_scenario() {
    let outcome = run_fruit_stand(&Config::default()).unwrap();
    let rohan = outcome.customer("Rohan").unwrap();

    let bought: Vec<_> = rohan.basket().iter().map(|p| p.label).collect();
    assert_eq!(bought, vec![ProductLabel::Kiwi, ProductLabel::Apple]);
    assert_eq!(rohan.balance(), 0);
}

#[test]
fn test_abstract_factory_scenario() {
    let outcome = run_abstract_factory(&Config::default()).unwrap();
    let rohan = outcome.customer("Rohan").unwrap();

    let bought: Vec<_> = rohan.basket().iter().map(|p| p.label).collect();
    assert_eq!(bought, vec![ProductLabel::Apple, ProductLabel::WaterMelon, ProductLabel::Mamsung]);
    assert_eq!(rohan.balance(), 400000 - 1000 - 545 - 302938);
    assert_eq!(rohan.basket()[2].category.to_string(), "SmartPhone -> Mamsung");
}

#[test]
fn test_prototype_scenario() {
    let outcome = run_prototype(&Config::default()).unwrap();

    assert!(outcome.shared_catalog);
    assert_eq!(outcome.cloned.shop_name, "AnotherPrototypeItemShop");

    // Orange is not stocked by the standard fruit registry
    let memba = outcome.original.customer("Memba").unwrap();
    assert_eq!(memba.basket().len(), 1);
    assert_eq!(memba.balance(), 399000);

    let bhawa = outcome.cloned.customer("Bhawa").unwrap();
    assert_eq!(bhawa.basket().len(), 1);
    assert_eq!(bhawa.balance(), 499000);
}

#[test]
fn test_customer_with_nothing_affordable() {
    let mut config = Config::default();
    config.scenarios.fruit_stand = vec![CustomerPlan::new("Broke", 500, &[ProductLabel::Apple])];

    let outcome = run_fruit_stand(&config).unwrap();
    let broke = outcome.customer("Broke").unwrap();

    assert!(broke.basket().is_empty());
    assert!(broke.list_basket().is_err());
    assert_eq!(broke.balance(), 500);
}

#[test]
fn test_composite_stocking_is_idempotent() {
    let mut once = CompositeRegistry::standard();
    once.stock_all();
    let mut twice = CompositeRegistry::standard();
    twice.stock_all();
    twice.stock_all();

    assert_eq!(once.labels(), twice.labels());
    for label in ProductLabel::ALL {
        assert_eq!(once.template(&label), twice.template(&label));
    }
}
