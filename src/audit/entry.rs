//! Audit entries
//!
//! One entry per change to a goal or an expense. Entries are built straight
//! from the domain types, so the summary line reads the same wherever the
//! change was made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Expense, Goal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Goal,
    Expense,
}

/// Who made a change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// A command typed by the user
    #[default]
    User,
    /// The completion scheduler clearing a finished goal
    Scheduler,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    /// Display form of the id, e.g. "goal-3"
    pub entity_id: String,
    /// Goal name or expense description
    pub entity_name: String,
    #[serde(default)]
    pub origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

fn snapshot<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    match serde_json::to_value(value) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!(error = %err, "could not snapshot entity for audit");
            None
        }
    }
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: String,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            origin: Origin::User,
            before: None,
            after: None,
            summary: None,
        }
    }

    pub fn goal_created(goal: &Goal) -> Self {
        Self {
            after: snapshot(goal),
            summary: Some(format!("target: {}, saved: {}", goal.target, goal.current)),
            ..Self::new(
                Operation::Create,
                EntityType::Goal,
                goal.id.to_string(),
                goal.name.clone(),
            )
        }
    }

    /// Savings added to a goal
    pub fn goal_saved(before: &Goal, after: &Goal) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            summary: Some(format!("current: {} -> {}", before.current, after.current)),
            ..Self::new(
                Operation::Update,
                EntityType::Goal,
                after.id.to_string(),
                after.name.clone(),
            )
        }
    }

    pub fn goal_deleted(goal: &Goal) -> Self {
        Self {
            before: snapshot(goal),
            ..Self::new(
                Operation::Delete,
                EntityType::Goal,
                goal.id.to_string(),
                goal.name.clone(),
            )
        }
    }

    /// A completed goal taken off the board by the scheduler
    pub fn goal_cleared(goal: &Goal) -> Self {
        Self {
            origin: Origin::Scheduler,
            summary: Some("removed after completion".to_string()),
            ..Self::goal_deleted(goal)
        }
    }

    pub fn expense_recorded(expense: &Expense) -> Self {
        Self {
            after: snapshot(expense),
            summary: Some(format!(
                "{} {} on {}",
                expense.amount, expense.category, expense.date
            )),
            ..Self::new(
                Operation::Create,
                EntityType::Expense,
                expense.id.to_string(),
                expense.description.clone(),
            )
        }
    }

    /// One line, e.g. "2024-03-28 10:00:00 UPDATE goal-2 New Laptop: current: 1200.00 -> 1500.00"
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_id,
            self.entity_name
        );
        if let Some(summary) = &self.summary {
            line.push_str(": ");
            line.push_str(summary);
        }
        if self.origin == Origin::Scheduler {
            line.push_str(" [auto]");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseLedger, GoalLedger, NewExpense, NewGoal};
    use crate::models::Money;

    fn laptop() -> Goal {
        let mut ledger = GoalLedger::new();
        ledger
            .create_goal(
                NewGoal::new("New Laptop", Money::from_minor(150_000))
                    .with_current(Money::from_minor(120_000)),
            )
            .unwrap()
    }

    #[test]
    fn test_goal_created() {
        let entry = AuditEntry::goal_created(&laptop());
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Goal);
        assert_eq!(entry.entity_id, "goal-1");
        assert_eq!(entry.after.as_ref().unwrap()["name"], "New Laptop");
        assert_eq!(
            entry.summary.as_deref(),
            Some("target: 1500.00, saved: 1200.00")
        );
    }

    #[test]
    fn test_goal_saved_keeps_both_sides() {
        let before = laptop();
        let mut after = before.clone();
        after.current = Money::from_minor(150_000);

        let entry = AuditEntry::goal_saved(&before, &after);
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.before.as_ref().unwrap()["current"], 120_000);
        assert_eq!(entry.after.as_ref().unwrap()["current"], 150_000);
        assert_eq!(
            entry.summary.as_deref(),
            Some("current: 1200.00 -> 1500.00")
        );
    }

    #[test]
    fn test_goal_cleared_is_marked_automatic() {
        let entry = AuditEntry::goal_cleared(&laptop());
        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.origin, Origin::Scheduler);
        assert!(entry.after.is_none());
        assert!(entry
            .format_human_readable()
            .ends_with("DELETE goal-1 New Laptop: removed after completion [auto]"));

        assert_eq!(AuditEntry::goal_deleted(&laptop()).origin, Origin::User);
    }

    #[test]
    fn test_expense_line() {
        let mut ledger = ExpenseLedger::new();
        let expense = ledger
            .create_expense(
                NewExpense::new("Petrol", Money::from_minor(2_500), "transportation")
                    .on(chrono::NaiveDate::from_ymd_opt(2024, 3, 27).unwrap()),
            )
            .unwrap();

        let line = AuditEntry::expense_recorded(&expense).format_human_readable();
        assert!(line.ends_with("CREATE exp-1 Petrol: 25.00 Transportation on 2024-03-27"));
    }

    #[test]
    fn test_origin_defaults_when_missing() {
        let json = r#"{"timestamp":"2024-03-28T10:00:00Z","operation":"delete",
            "entity_type":"goal","entity_id":"goal-2","entity_name":"New Laptop"}"#;
        let entry: AuditEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.origin, Origin::User);
        assert!(entry.summary.is_none());
    }
}
