pub mod wallet;
pub mod customer;

pub use wallet::{CashWallet, Wallet};
pub use customer::Customer;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}'s basket is empty")]
    EmptyBasket(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
