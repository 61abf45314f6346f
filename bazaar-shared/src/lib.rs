pub mod labels;
pub mod money;
pub mod models {
    pub mod events;
}

pub use labels::{FactoryLabel, LabelParseError, ProductLabel};
pub use models::events::{PurchaseCompletedEvent, PurchaseRejectedEvent};
pub use money::format_cents;
