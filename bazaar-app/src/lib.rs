pub mod app_config;
pub mod error;
pub mod scenarios;

pub use app_config::{Config, CustomerPlan};
pub use error::{AppError, AppResult};
pub use scenarios::{run_abstract_factory, run_fruit_stand, run_prototype, PrototypeOutcome, ScenarioOutcome};
