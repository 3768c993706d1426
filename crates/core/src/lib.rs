//! `stockbook-core` — domain building blocks for the stock tracker.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod quantity;

pub use error::{StockError, StockResult};
pub use quantity::Quantity;
