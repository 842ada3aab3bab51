//! In-memory audit trail
//!
//! Keeps every audit entry of the session and optionally mirrors each one to
//! an `AuditLogger`. A failing file write is logged and does not undo the
//! ledger change it describes.

use super::entry::AuditEntry;
use super::logger::AuditLogger;

#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
    sink: Option<AuditLogger>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append each entry to `logger`
    pub fn with_logger(logger: AuditLogger) -> Self {
        Self {
            entries: Vec::new(),
            sink: Some(logger),
        }
    }

    pub fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.sink {
            if let Err(err) = logger.log(&entry) {
                tracing::warn!(path = %logger.path().display(), error = %err, "audit log write failed");
            }
        }
        self.entries.push(entry);
    }

    /// Entries oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The most recent `count` entries, oldest first
    pub fn recent(&self, count: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseLedger, NewExpense};
    use crate::models::Money;
    use tempfile::TempDir;

    fn entry(i: i64) -> AuditEntry {
        let expense = ExpenseLedger::new()
            .create_expense(NewExpense::new(
                format!("Expense {}", i),
                Money::from_minor(i * 100),
                "food",
            ))
            .unwrap();
        AuditEntry::expense_recorded(&expense)
    }

    #[test]
    fn test_recent() {
        let mut trail = AuditTrail::new();
        for i in 1..=5 {
            trail.record(entry(i));
        }
        let recent: Vec<_> = trail.recent(2).iter().map(|e| e.entity_name.as_str()).collect();
        assert_eq!(recent, vec!["Expense 4", "Expense 5"]);
        assert_eq!(trail.recent(50).len(), 5);
    }

    #[test]
    fn test_mirrors_to_logger() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let mut trail = AuditTrail::with_logger(logger.clone());

        trail.record(entry(1));
        trail.record(entry(2));

        assert_eq!(trail.len(), 2);
        assert_eq!(logger.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_write_failure_keeps_entry() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let logger = AuditLogger::new(temp.path().to_path_buf());
        let mut trail = AuditTrail::with_logger(logger);

        trail.record(entry(1));
        assert_eq!(trail.len(), 1);
    }
}
