use serde::Deserialize;
use std::env;
use bazaar_shared::ProductLabel;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub shops: ShopsConfig,
    pub scenarios: ScenariosConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShopsConfig {
    pub fruit_stand: String,
    pub abstract_factory: String,
    pub prototype: String,
    pub prototype_clone: String,
}

impl Default for ShopsConfig {
    fn default() -> Self {
        Self {
            fruit_stand: "CornerFruitStand".to_string(),
            abstract_factory: "ItemShop".to_string(),
            prototype: "PrototypeItemShop".to_string(),
            prototype_clone: "AnotherPrototypeItemShop".to_string(),
        }
    }
}

/// A customer's starting balance and the labels they try to buy, in order
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomerPlan {
    pub name: String,
    pub balance_cents: i64,
    #[serde(default)]
    pub shopping_list: Vec<ProductLabel>,
}

impl CustomerPlan {
    pub fn new(name: &str, balance_cents: i64, shopping_list: &[ProductLabel]) -> Self {
        Self {
            name: name.to_string(),
            balance_cents,
            shopping_list: shopping_list.to_vec(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScenariosConfig {
    pub fruit_stand: Vec<CustomerPlan>,
    pub abstract_factory: Vec<CustomerPlan>,
    pub prototype: Vec<CustomerPlan>,
    pub prototype_clone: Vec<CustomerPlan>,
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        use ProductLabel::*;
        Self {
            fruit_stand: vec![CustomerPlan::new("Rohan", 11000, &[Kiwi, Orange, Apple])],
            abstract_factory: vec![CustomerPlan::new(
                "Rohan",
                400000,
                &[Apple, WaterMelon, Mamsung, APhone, RandomSmartPhone],
            )],
            prototype: vec![CustomerPlan::new("Memba", 400000, &[Orange, Apple])],
            prototype_clone: vec![CustomerPlan::new("Bhawa", 500000, &[Orange, Apple])],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Built-in defaults cover everything, so every file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("BAZAAR").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
