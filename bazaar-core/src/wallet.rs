/// Balance-holding party a shop charges on purchase.
///
/// `debit` is the only mutation a shop performs. It does not floor the
/// balance at zero; callers check affordability before debiting.
pub trait Wallet: Send + Sync {
    /// Current balance in cents
    fn balance(&self) -> i64;

    /// Subtract the amount unconditionally
    fn debit(&mut self, amount_cents: i64);

    /// Name of the wallet's owner
    fn owner(&self) -> &str;
}

/// Wallet with no basket, for callers that only need a balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashWallet {
    owner: String,
    balance_cents: i64,
}

impl CashWallet {
    pub fn new(owner: impl Into<String>, balance_cents: i64) -> Self {
        Self {
            owner: owner.into(),
            balance_cents,
        }
    }
}

impl Wallet for CashWallet {
    fn balance(&self) -> i64 {
        self.balance_cents
    }

    fn debit(&mut self, amount_cents: i64) {
        self.balance_cents -= amount_cents;
    }

    fn owner(&self) -> &str {
        &self.owner
    }
}
