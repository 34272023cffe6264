//! Stocktake - inventory tracking with JSON persistence
//!
//! Stocktake keeps a mapping of item names to non-negative stock counts,
//! supports adding and removing stock, low-stock queries, and a plain-text
//! report, and persists the whole store to a single JSON file.

pub mod audit;
pub mod error;
pub mod inventory;
pub mod persist;
pub mod report;

// Re-exports for convenience
pub use audit::{addition_line, AuditSink};
pub use error::{StockError, StockResult};
pub use inventory::Inventory;
