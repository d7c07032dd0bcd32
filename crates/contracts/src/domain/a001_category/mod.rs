pub mod aggregate;

pub use aggregate::{Category, CategoryFilter, CategoryId, ALL_CATEGORIES};
