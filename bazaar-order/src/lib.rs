pub mod shop;
pub mod prototype;

pub use shop::{Shop, ShopError};
pub use prototype::Prototype;
