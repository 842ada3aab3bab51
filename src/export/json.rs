//! JSON Export functionality
//!
//! Writes a versioned snapshot of the dashboard's goals, expenses and habit
//! scores. The snapshot is a view of in-memory state; nothing reads it back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::dashboard::Dashboard;
use crate::error::{FinTrackError, FinTrackResult};
use crate::ledger::GoalView;
use crate::models::{Expense, HabitScore, Money};
use crate::notify::Notifier;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything on the dashboard at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Goals with their derived progress
    pub goals: Vec<GoalView>,

    /// Expenses, most recent first
    pub expenses: Vec<Expense>,

    pub habits: Vec<HabitScore>,

    pub metadata: SnapshotMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotMetadata {
    pub goal_count: usize,
    pub expense_count: usize,
    pub total_saved: Money,
    pub total_target: Money,
    pub total_spent: Money,
    /// Earliest expense date
    pub earliest_expense: Option<String>,
    /// Latest expense date
    pub latest_expense: Option<String>,
}

impl Snapshot {
    pub fn from_dashboard<N: Notifier>(dashboard: &Dashboard<N>) -> Self {
        let goals = dashboard.goal_views();
        let expenses = dashboard.expenses().expenses().to_vec();
        let (total_target, total_saved) = dashboard.goals().totals();

        let metadata = SnapshotMetadata {
            goal_count: goals.len(),
            expense_count: expenses.len(),
            total_saved,
            total_target,
            total_spent: dashboard.expenses().total(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            goals,
            expenses,
            habits: dashboard.habit_board().scores().to_vec(),
            metadata,
        }
    }
}

/// Export a dashboard snapshot as pretty-printed JSON
pub fn export_snapshot_json<N: Notifier, W: Write>(
    dashboard: &Dashboard<N>,
    writer: &mut W,
) -> FinTrackResult<()> {
    let snapshot = Snapshot::from_dashboard(dashboard);
    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| FinTrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinTrackError::Export(e.to_string()))?;
    Ok(())
}
