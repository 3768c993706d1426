//! Inventory store with JSON file persistence.
//!
//! One [`Inventory`] value owns the whole stock mapping. Callers create it,
//! mutate it through add/remove, and load or save it wholesale.

pub mod audit;
pub mod persistence;
pub mod report;
pub mod store;

pub use audit::AuditEntry;
pub use persistence::{DEFAULT_DATA_FILE, LoadOutcome, PersistenceError};
pub use report::InventoryReport;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, RemoveOutcome};

pub use stockbook_core::{Quantity, StockError, StockResult};
