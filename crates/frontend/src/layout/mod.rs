pub mod hero;
pub mod order_context;

pub use order_context::{use_order, OrderContext};
