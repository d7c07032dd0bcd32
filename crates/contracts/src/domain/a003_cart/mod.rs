pub mod aggregate;

pub use aggregate::{Cart, CartChange, CartGroups, CartLine, CartTotals};
