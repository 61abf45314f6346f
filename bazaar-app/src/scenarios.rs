//! The three demonstration runs: a single-factory fruit stand, a shop over
//! the composite product factory, and a prototype clone of such a shop.
//!
//! Nothing here runs on its own; `main` and the integration tests call in.

use bazaar_catalog::{CompositeRegistry, ProductFactory, ProductRegistry};
use bazaar_core::{Customer, Wallet};
use bazaar_order::{Prototype, Shop};
use bazaar_shared::format_cents;
use serde::Serialize;
use crate::app_config::{Config, CustomerPlan};
use crate::error::AppResult;

/// What one shop sold to its customers
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub shop_name: String,
    pub customers: Vec<Customer>,
}

impl ScenarioOutcome {
    pub fn customer(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.name() == name)
    }

    pub fn summary(&self) -> serde_json::Value {
        let customers: Vec<_> = self.customers.iter().map(CustomerSummary::from).collect();
        serde_json::json!({
            "shop": self.shop_name,
            "customers": customers,
        })
    }
}

#[derive(Debug, Serialize)]
struct CustomerSummary {
    name: String,
    balance: String,
    basket: Vec<String>,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name().to_string(),
            balance: format_cents(customer.balance()),
            basket: customer.basket().iter().map(|product| product.name.clone()).collect(),
        }
    }
}

#[derive(Debug)]
pub struct PrototypeOutcome {
    pub original: ScenarioOutcome,
    pub cloned: ScenarioOutcome,
    pub shared_catalog: bool,
}

/// Walk the shopping list, buying whatever the shop says the customer can
pub fn go_shopping<F: ProductFactory>(shop: &Shop<F>, plan: &CustomerPlan) -> AppResult<Customer> {
    let mut customer = Customer::new(plan.name.clone(), plan.balance_cents);

    for label in &plan.shopping_list {
        if shop.can_buy(&customer, *label)? {
            let product = shop.buy(&mut customer, *label)?;
            customer.add_to_basket(product);
        }
    }

    match customer.list_basket() {
        Ok(basket) => tracing::info!(
            "{} leaves {} with {} item(s) and {} left",
            customer.name(),
            shop.name(),
            basket.len(),
            format_cents(customer.balance())
        ),
        Err(err) => tracing::warn!("{}", err),
    }

    Ok(customer)
}

fn serve_all<F: ProductFactory>(shop: &Shop<F>, plans: &[CustomerPlan]) -> AppResult<ScenarioOutcome> {
    let customers = plans
        .iter()
        .map(|plan| go_shopping(shop, plan))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(ScenarioOutcome {
        shop_name: shop.name().to_string(),
        customers,
    })
}

/// One registry, one shop
pub fn run_fruit_stand(config: &Config) -> AppResult<ScenarioOutcome> {
    let shop = Shop::new(config.shops.fruit_stand.clone(), ProductRegistry::fruit_stand());
    shop.stock_all()?;
    serve_all(&shop, &config.scenarios.fruit_stand)
}

/// Fruits and smart phones behind one composite factory
pub fn run_abstract_factory(config: &Config) -> AppResult<ScenarioOutcome> {
    let shop = Shop::new(config.shops.abstract_factory.clone(), CompositeRegistry::standard());
    shop.stock_all()?;
    serve_all(&shop, &config.scenarios.abstract_factory)
}

/// Stock one shop, clone it without restocking, and sell from both
pub fn run_prototype(config: &Config) -> AppResult<PrototypeOutcome> {
    let shop = Shop::new(config.shops.prototype.clone(), CompositeRegistry::standard());
    shop.stock_all()?;
    let original = serve_all(&shop, &config.scenarios.prototype)?;

    let another = shop.clone_with(config.shops.prototype_clone.clone());
    let cloned = serve_all(&another, &config.scenarios.prototype_clone)?;

    Ok(PrototypeOutcome {
        original,
        cloned,
        shared_catalog: another.shares_catalog_with(&shop),
    })
}
