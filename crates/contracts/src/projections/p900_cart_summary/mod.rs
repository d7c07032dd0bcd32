pub mod dto;

pub use dto::{CartSection, CartSectionKind, CartSummary};
