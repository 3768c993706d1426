use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use stockbook_core::{Quantity, StockError, StockResult};

use crate::audit::AuditEntry;

/// Threshold used by the low-stock check when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// What `remove_item` did.
///
/// Removal never fails; the non-applied kinds leave the mapping untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// Stock was reduced and the item is still tracked.
    Decremented { remaining: Quantity },
    /// Stock dropped to zero or below; the item was deleted.
    Pruned,
    /// The item is not tracked.
    NotFound,
    /// The stored quantity is not a number.
    NotNumeric,
    /// Subtracting would overflow.
    Overflow,
}

impl RemoveOutcome {
    /// Whether the mapping changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, RemoveOutcome::Decremented { .. } | RemoveOutcome::Pruned)
    }
}

/// In-memory stock mapping: item name -> quantity.
///
/// Iteration follows insertion order (file order after a load). Equality
/// ignores order. Only `remove_item` prunes non-positive entries; `add_item`
/// may leave an item at zero or below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub(crate) items: IndexMap<String, Quantity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` (any sign) to `item`, starting from zero for new items.
    ///
    /// An empty item name is ignored. When `logs` is given, an audit entry
    /// stamped with the current time is appended on success.
    pub fn add_item(
        &mut self,
        item: &str,
        qty: i64,
        logs: Option<&mut Vec<AuditEntry>>,
    ) -> StockResult<()> {
        self.add_item_at(item, qty, logs, Utc::now())
    }

    /// Same as [`Inventory::add_item`] with an explicit audit timestamp.
    pub fn add_item_at(
        &mut self,
        item: &str,
        qty: i64,
        logs: Option<&mut Vec<AuditEntry>>,
        at: DateTime<Utc>,
    ) -> StockResult<()> {
        if item.is_empty() {
            tracing::debug!(delta = qty, "ignoring add for empty item name");
            return Ok(());
        }

        let next = match self.items.get(item) {
            Some(current) => current.plus(item, qty)?,
            None => Quantity::Count(qty),
        };
        tracing::debug!(item, delta = qty, quantity = %next, "stock added");
        self.items.insert(item.to_owned(), next);

        if let Some(logs) = logs {
            logs.push(AuditEntry::added(item, qty, at));
        }
        Ok(())
    }

    /// Take `qty` away from `item`, deleting it once it reaches zero or below.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> RemoveOutcome {
        let remaining = match self.items.get(item).map(|q| q.minus(item, qty)) {
            None => {
                tracing::debug!(item, delta = qty, "remove ignored: item not tracked");
                return RemoveOutcome::NotFound;
            }
            Some(Ok(n)) => n,
            Some(Err(StockError::NotNumeric(_))) => {
                tracing::debug!(item, delta = qty, "remove ignored: quantity is not numeric");
                return RemoveOutcome::NotNumeric;
            }
            Some(Err(err)) => {
                tracing::debug!(item, delta = qty, error = %err, "remove ignored");
                return RemoveOutcome::Overflow;
            }
        };

        if remaining.is_depleted() {
            self.items.shift_remove(item);
            tracing::debug!(item, delta = qty, "stock depleted; item removed");
            RemoveOutcome::Pruned
        } else {
            tracing::debug!(item, delta = qty, quantity = %remaining, "stock removed");
            self.items.insert(item.to_owned(), remaining.clone());
            RemoveOutcome::Decremented { remaining }
        }
    }

    /// Stored quantity for `item`, whatever its kind.
    pub fn get_qty(&self, item: &str) -> StockResult<&Quantity> {
        self.items
            .get(item)
            .ok_or_else(|| StockError::missing_item(item))
    }

    /// Names of items whose quantity is strictly below `threshold`, in iteration order.
    ///
    /// Non-numeric quantities cannot be compared and are left out.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|(name, quantity)| match quantity.is_below(threshold) {
                Some(low) => low.then(|| name.clone()),
                None => {
                    tracing::warn!(item = %name, %quantity, "skipping non-numeric quantity in low-stock check");
                    None
                }
            })
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items and quantities in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.items.iter().map(|(name, q)| (name.as_str(), q))
    }
}

impl FromIterator<(String, i64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(name, count)| (name, Quantity::Count(count)))
                .collect(),
        }
    }
}
