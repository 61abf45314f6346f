pub mod product;
pub mod catalogs;
pub mod registry;
pub mod composite;

pub use product::{Category, Product, ProductAttributes, ProductKind, ProductTemplate};
pub use registry::{ProductFactory, ProductRegistry};
pub use composite::{CatalogError, CompositeRegistry};
