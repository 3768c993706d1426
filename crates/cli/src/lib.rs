//! `stockbook-cli` — demonstration entry point for the inventory store.

pub mod config;
pub mod demo;

pub use config::Config;
pub use demo::run_demo;
