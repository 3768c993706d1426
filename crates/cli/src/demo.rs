//! Fixed demonstration of the inventory operations.

use std::io::Write;

use anyhow::Context;
use stockbook_inventory::Inventory;

use crate::config::Config;

/// Run the sample sequence, writing its output to `out`.
///
/// Returns the inventory as it stands after the final reload.
pub fn run_demo<W: Write>(config: &Config, mut out: W) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();
    let mut logs = Vec::new();

    inventory.add_item("apple", 10, Some(&mut logs))?;
    inventory.add_item("banana", -2, Some(&mut logs))?;
    inventory.add_item("widget", 5, Some(&mut logs))?;
    inventory.remove_item("apple", 3);
    inventory.remove_item("orange", 1);

    for entry in &logs {
        tracing::debug!(audit = %entry, "audit entry");
    }

    let apple = inventory
        .get_qty("apple")
        .context("apple should be in stock after the sample adds")?;
    writeln!(out, "Apple stock: {apple}")?;
    writeln!(
        out,
        "Low items: {:?}",
        inventory.check_low_items(config.low_stock_threshold)
    )?;

    inventory
        .save_data(&config.data_file)
        .with_context(|| format!("failed to save inventory to {}", config.data_file.display()))?;
    inventory
        .load_data(&config.data_file)
        .with_context(|| format!("failed to load inventory from {}", config.data_file.display()))?;

    inventory
        .write_report(&mut out)
        .context("failed to write inventory report")?;

    Ok(inventory)
}
