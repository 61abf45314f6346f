use bazaar_catalog::Product;
use bazaar_shared::format_cents;
use crate::wallet::Wallet;
use crate::{CoreError, CoreResult};

/// A shopper: a wallet plus the basket of everything bought so far
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    balance_cents: i64,
    basket: Vec<Product>,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance_cents: i64) -> Self {
        Self {
            name: name.into(),
            balance_cents,
            basket: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top up the wallet
    pub fn credit(&mut self, amount_cents: i64) {
        self.balance_cents += amount_cents;
        tracing::debug!("{} balance is now {}", self.name, format_cents(self.balance_cents));
    }

    pub fn add_to_basket(&mut self, product: Product) {
        tracing::info!("{} bought {}", self.name, product.name);
        self.basket.push(product);
    }

    pub fn basket(&self) -> &[Product] {
        &self.basket
    }

    /// Basket contents, or an error when nothing has been bought
    pub fn list_basket(&self) -> CoreResult<&[Product]> {
        if self.basket.is_empty() {
            return Err(CoreError::EmptyBasket(self.name.clone()));
        }
        for product in &self.basket {
            tracing::info!("{} has {}", self.name, product);
        }
        Ok(&self.basket)
    }

    pub fn basket_total(&self) -> i64 {
        self.basket.iter().map(|product| product.price_cents).sum()
    }
}

impl Wallet for Customer {
    fn balance(&self) -> i64 {
        self.balance_cents
    }

    fn debit(&mut self, amount_cents: i64) {
        self.balance_cents -= amount_cents;
    }

    fn owner(&self) -> &str {
        &self.name
    }
}
