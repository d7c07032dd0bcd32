pub mod config;
pub mod menu;
