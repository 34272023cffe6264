//! Error types for Stocktake
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stocktake operations
pub type StockResult<T> = Result<T, StockError>;

/// Main error type for Stocktake operations
#[derive(Error, Debug)]
pub enum StockError {
    /// Item names must be non-empty
    #[error("item name must be non-empty")]
    EmptyItemName,

    /// Removal quantity must be at least 1
    #[error("removal quantity must be positive")]
    ZeroRemoval,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inventory file is not a valid JSON object
    #[error("invalid inventory data in {file}: {message}")]
    Parse { file: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_empty_item_name() {
        let err = StockError::EmptyItemName;
        assert_eq!(err.to_string(), "item name must be non-empty");
    }

    #[test]
    fn test_error_display_parse() {
        let err = StockError::Parse {
            file: PathBuf::from("inventory.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid inventory data in inventory.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_error_display_zero_removal() {
        let err = StockError::ZeroRemoval;
        assert_eq!(err.to_string(), "removal quantity must be positive");
    }
}
