//! Audit sink for stock additions
//!
//! The sink is supplied by the caller; the inventory never owns or persists
//! the log. Any ordered, appendable collection of lines qualifies - the CLI
//! uses a plain `Vec<String>` and flushes it to a file afterwards.

use chrono::{SecondsFormat, Utc};

/// Destination for audit lines produced by `Inventory::add_logged`
pub trait AuditSink {
    /// Append one line to the sink
    fn record(&mut self, line: String);
}

impl AuditSink for Vec<String> {
    fn record(&mut self, line: String) {
        self.push(line);
    }
}

/// Format the audit line for one addition, stamped with the current UTC time
/// at seconds precision.
pub fn addition_line(item: &str, qty: u64) -> String {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!("{stamp}: Added {qty} of {item}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_line_format() {
        let line = addition_line("apple", 12);
        let (stamp, rest) = line.split_once(": ").expect("line has a stamp");
        assert_eq!(rest, "Added 12 of apple");
        // RFC 3339, seconds precision, UTC designator
        assert!(stamp.ends_with('Z'), "stamp should be UTC: {stamp}");
        assert!(
            chrono::DateTime::parse_from_rfc3339(stamp).is_ok(),
            "stamp should parse as RFC 3339: {stamp}"
        );
    }

    #[test]
    fn vec_sink_preserves_order() {
        let mut sink: Vec<String> = Vec::new();
        sink.record("first".to_string());
        sink.record("second".to_string());
        assert_eq!(sink, vec!["first", "second"]);
    }
}
