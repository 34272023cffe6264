//! Inventory entity - tracks item quantities
//!
//! The inventory is a pure data structure - I/O operations are handled by
//! the `persist` module. Quantities are `u64`, so negative or fractional
//! counts are rejected at the parse boundaries rather than here.

use std::collections::BTreeMap;

use crate::audit::{addition_line, AuditSink};
use crate::error::{StockError, StockResult};

/// In-memory mapping of item names to stock counts.
///
/// Keys are always non-empty. `remove` deletes depleted entries rather than
/// keeping them at zero; a zero entry can only appear via `add(item, 0)` or
/// a loaded file that stores an explicit `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    quantities: BTreeMap<String, u64>,
}

impl Inventory {
    /// Create a new empty inventory
    pub fn new() -> Self {
        Self {
            quantities: BTreeMap::new(),
        }
    }

    /// Check if the inventory has no entries
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Get the number of tracked items
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Add `qty` units of `item`, creating the entry if absent.
    ///
    /// `add(item, 0)` is valid and creates an entry at zero. Counts saturate
    /// at `u64::MAX` rather than wrapping.
    pub fn add(&mut self, item: &str, qty: u64) -> StockResult<()> {
        if item.is_empty() {
            return Err(StockError::EmptyItemName);
        }
        let entry = self.quantities.entry(item.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
        Ok(())
    }

    /// Add `qty` units of `item` and append a timestamped line to `sink`.
    pub fn add_logged(
        &mut self,
        item: &str,
        qty: u64,
        sink: &mut impl AuditSink,
    ) -> StockResult<()> {
        self.add(item, qty)?;
        sink.record(addition_line(item, qty));
        Ok(())
    }

    /// Remove `qty` units of `item`.
    ///
    /// Returns `Ok(false)` when the item is not tracked (nothing to remove,
    /// not an error). When the remaining count would be zero or the removal
    /// overshoots, the entry is deleted entirely - the item is treated as
    /// fully depleted, never stored at zero or below.
    pub fn remove(&mut self, item: &str, qty: u64) -> StockResult<bool> {
        if item.is_empty() {
            return Err(StockError::EmptyItemName);
        }
        if qty == 0 {
            return Err(StockError::ZeroRemoval);
        }

        match self.quantities.get_mut(item) {
            None => Ok(false),
            Some(current) => {
                if *current > qty {
                    *current -= qty;
                } else {
                    self.quantities.remove(item);
                }
                Ok(true)
            }
        }
    }

    /// Get the stored quantity for `item`, or `0` if it is not tracked.
    pub fn quantity(&self, item: &str) -> StockResult<u64> {
        if item.is_empty() {
            return Err(StockError::EmptyItemName);
        }
        Ok(self.quantities.get(item).copied().unwrap_or(0))
    }

    /// Item names with quantity strictly below `threshold`, in name order.
    pub fn low_items(&self, threshold: u64) -> Vec<String> {
        self.quantities
            .iter()
            .filter(|(_, &qty)| qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Iterate over all entries in name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.quantities.iter().map(|(name, &qty)| (name.as_str(), qty))
    }

    /// Insert an already-validated entry, replacing any previous count.
    ///
    /// Used by `persist::load` when rebuilding an inventory from a file;
    /// callers must guarantee `item` is non-empty.
    pub(crate) fn set_raw(&mut self, item: String, qty: u64) {
        self.quantities.insert(item, qty);
    }
}
