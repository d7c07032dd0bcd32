pub mod aggregate;

pub use aggregate::{toggle_rodizio_mode, RodizioMode, RodizioSettings};
