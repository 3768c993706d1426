//! Plain-text inventory report.

use std::io::{self, Write};

use crate::store::Inventory;

/// Borrowed view that renders every item and its quantity, one per line.
#[derive(Debug, Clone, Copy)]
pub struct InventoryReport<'a> {
    inventory: &'a Inventory,
}

impl core::fmt::Display for InventoryReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (name, quantity) in self.inventory.iter() {
            writeln!(f, "{name} -> {quantity}")?;
        }
        Ok(())
    }
}

impl Inventory {
    pub fn report(&self) -> InventoryReport<'_> {
        InventoryReport { inventory: self }
    }

    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.report())?;
        out.flush()
    }

    /// Write the report to stdout.
    pub fn print_data(&self) -> io::Result<()> {
        self.write_report(io::stdout().lock())
    }
}
