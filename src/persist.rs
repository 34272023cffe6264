//! JSON persistence for the inventory
//!
//! The on-disk format is a single JSON object mapping item names to
//! non-negative integer counts, e.g. `{"apple": 7, "banana": 2}`. No
//! version field, no envelope.
//!
//! Saves go through a tempfile-then-rename so a crash mid-write never
//! leaves a truncated inventory file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{StockError, StockResult};
use crate::inventory::Inventory;

/// Serialized form of the inventory file: a bare name -> count object.
///
/// Loading does not use this type - the load path goes through
/// `serde_json::Value` so one malformed entry can be dropped without
/// failing the whole file.
#[derive(Serialize)]
struct SavedInventory<'a>(BTreeMap<&'a str, u64>);

/// Load an inventory from a JSON file.
///
/// Returns a fresh `Inventory`; callers replace their store with the result
/// rather than merging. Entries whose value is not numeric, truncates below
/// zero, or whose key is empty are silently dropped - one bad entry does not
/// fail the whole load.
pub fn load(path: &Path) -> StockResult<Inventory> {
    let content = fs::read_to_string(path)?;
    let raw: serde_json::Map<String, Value> =
        serde_json::from_str(&content).map_err(|e| StockError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut inventory = Inventory::new();
    for (name, value) in raw {
        if name.is_empty() {
            continue;
        }
        if let Some(qty) = coerce_quantity(&value) {
            inventory.set_raw(name, qty);
        }
    }
    Ok(inventory)
}

/// Save the inventory to `path` as pretty-printed JSON, atomically.
pub fn save(inventory: &Inventory, path: &Path) -> StockResult<()> {
    let saved = SavedInventory(inventory.entries().collect());
    let content = serde_json::to_string_pretty(&saved).map_err(|e| StockError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_atomic(path, &content)
}

/// Accept integers and floats, truncating floats toward zero; reject
/// anything negative or non-numeric.
fn coerce_quantity(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        let truncated = f.trunc();
        if truncated >= 0.0 && truncated <= u64::MAX as f64 {
            return Some(truncated as u64);
        }
    }
    None
}

/// Write content to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, content: &str) -> StockResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| StockError::Io(e.error))?;
    Ok(())
}
