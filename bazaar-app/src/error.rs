use bazaar_order::ShopError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Shop(#[from] ShopError),
}

pub type AppResult<T> = Result<T, AppError>;
