//! Environment configuration.

use std::path::PathBuf;

use stockbook_inventory::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const DATA_FILE_VAR: &str = "STOCKBOOK_DATA_FILE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKBOOK_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File used by save/load.
    pub data_file: PathBuf,
    /// Items strictly below this count are reported as low.
    pub low_stock_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_file = lookup(DATA_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_VAR) {
            None => defaults.low_stock_threshold,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "{LOW_STOCK_THRESHOLD_VAR} is not an integer; using default {}",
                    defaults.low_stock_threshold
                );
                defaults.low_stock_threshold
            }),
        };

        Self {
            data_file,
            low_stock_threshold,
        }
    }
}
