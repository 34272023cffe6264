//! Stocktake CLI - inventory tracking with JSON persistence
//!
//! Usage: stocktake <COMMAND>
//!
//! Commands:
//!   add       Add stock for an item
//!   remove    Remove stock for an item
//!   quantity  Show the stored quantity for an item
//!   low       List items below a stock threshold
//!   report    Print the full inventory report

mod cli;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use stocktake::{persist, report, Inventory};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { item, qty, log } => cmd_add(&cli.file, &item, qty, log, cli.json),
        Commands::Remove { item, qty } => cmd_remove(&cli.file, &item, qty, cli.json),
        Commands::Quantity { item } => cmd_quantity(&cli.file, &item, cli.json),
        Commands::Low { threshold } => cmd_low(&cli.file, threshold, cli.json),
        Commands::Report => cmd_report(&cli.file, cli.json),
    }
}

/// Load the inventory file, falling back to an empty store when the file
/// does not exist yet. A present but unreadable or corrupt file is an error.
fn load_or_empty(file: &Path) -> Result<Inventory> {
    if file.exists() {
        persist::load(file).with_context(|| format!("failed to load {}", file.display()))
    } else {
        Ok(Inventory::new())
    }
}

fn save(inventory: &Inventory, file: &Path) -> Result<()> {
    persist::save(inventory, file).with_context(|| format!("failed to save {}", file.display()))
}

fn cmd_add(file: &Path, item: &str, qty: u64, log: Option<PathBuf>, json: bool) -> Result<()> {
    let mut inventory = load_or_empty(file)?;

    let mut audit: Vec<String> = Vec::new();
    inventory.add_logged(item, qty, &mut audit)?;
    save(&inventory, file)?;

    if let Some(log_path) = log {
        append_lines(&log_path, &audit)
            .with_context(|| format!("failed to append to {}", log_path.display()))?;
    }

    let total = inventory.quantity(item)?;
    if json {
        let output = serde_json::json!({
            "event": "add",
            "item": item,
            "added": qty,
            "quantity": total
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Added {qty} of {item} (now {total})");
    }

    Ok(())
}

fn cmd_remove(file: &Path, item: &str, qty: u64, json: bool) -> Result<()> {
    let mut inventory = load_or_empty(file)?;

    let found = inventory.remove(item, qty)?;
    if found {
        save(&inventory, file)?;
    }

    let remaining = inventory.quantity(item)?;
    if json {
        let output = serde_json::json!({
            "event": "remove",
            "item": item,
            "found": found,
            "quantity": remaining
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if found {
        println!("Removed {qty} of {item} (now {remaining})");
    } else {
        println!("Nothing to remove: {item} is not tracked");
    }

    Ok(())
}

fn cmd_quantity(file: &Path, item: &str, json: bool) -> Result<()> {
    let inventory = load_or_empty(file)?;
    let qty = inventory.quantity(item)?;

    if json {
        let output = serde_json::json!({
            "event": "quantity",
            "item": item,
            "quantity": qty
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{item}: {qty}");
    }

    Ok(())
}

fn cmd_low(file: &Path, threshold: u64, json: bool) -> Result<()> {
    let inventory = load_or_empty(file)?;
    let low = inventory.low_items(threshold);

    if json {
        let output = serde_json::json!({
            "event": "low",
            "threshold": threshold,
            "items": low
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if low.is_empty() {
        println!("No items below {threshold}");
    } else {
        for name in low {
            println!("{name}");
        }
    }

    Ok(())
}

fn cmd_report(file: &Path, json: bool) -> Result<()> {
    let inventory = load_or_empty(file)?;

    if json {
        let items: serde_json::Map<String, serde_json::Value> = inventory
            .entries()
            .map(|(name, qty)| (name.to_string(), serde_json::json!(qty)))
            .collect();
        let output = serde_json::json!({
            "event": "report",
            "items": items
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print!("{}", report::render(&inventory));
    }

    Ok(())
}

fn append_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
