use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stocktake - inventory tracking with JSON persistence
#[derive(Parser, Debug)]
#[command(name = "stocktake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Inventory file to read and write
    #[arg(short, long, global = true, default_value = "inventory.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add stock for an item (creates the item if new)
    Add {
        /// Item name
        item: String,

        /// Units to add
        qty: u64,

        /// Append the audit line for this addition to a file
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Remove stock for an item (deletes it when depleted)
    Remove {
        /// Item name
        item: String,

        /// Units to remove
        qty: u64,
    },

    /// Show the stored quantity for an item (0 if untracked)
    Quantity {
        /// Item name
        item: String,
    },

    /// List items with stock strictly below a threshold
    Low {
        /// Low-stock threshold
        #[arg(short, long, default_value_t = 5)]
        threshold: u64,
    },

    /// Print a report of every item and its quantity
    Report,
}
