//! Audit history display

use crate::audit::AuditEntry;

/// One line per entry, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{GoalLedger, NewGoal};
    use crate::models::Money;

    #[test]
    fn test_format_audit_entries() {
        assert_eq!(format_audit_entries(&[]), "No changes recorded.\n");

        let goal = GoalLedger::new()
            .create_goal(NewGoal::new("Bike", Money::from_minor(200_000)))
            .unwrap();
        let output = format_audit_entries(&[
            AuditEntry::goal_created(&goal),
            AuditEntry::goal_deleted(&goal),
        ]);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("CREATE goal-1 Bike: target: 2000.00, saved: 0.00"));
        assert!(lines[1].ends_with("DELETE goal-1 Bike"));
    }
}
