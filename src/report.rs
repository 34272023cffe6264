//! Plain-text inventory report

use crate::inventory::Inventory;

/// Render the report: a header line followed by one `<item> -> <qty>` line
/// per entry, in name order. An empty inventory renders the bare header.
pub fn render(inventory: &Inventory) -> String {
    let mut out = String::from("Items Report\n");
    for (name, qty) in inventory.entries() {
        out.push_str(&format!("{name} -> {qty}\n"));
    }
    out
}
