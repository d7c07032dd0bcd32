pub mod aggregate;
pub mod query;

pub use aggregate::{Product, ProductCatalog, ProductId};
pub use query::{filter_products, ProductFilter};
