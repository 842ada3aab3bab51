//! CSV Export functionality
//!
//! Exports expenses and goals in a spreadsheet-compatible format.

use std::io::Write;

use crate::error::{FinTrackError, FinTrackResult};
use crate::ledger::{ExpenseLedger, GoalLedger};

fn export_err(err: csv::Error) -> FinTrackError {
    FinTrackError::Export(err.to_string())
}

/// Export all expenses to CSV, most recent first
pub fn export_expenses_csv<W: Write>(ledger: &ExpenseLedger, writer: W) -> FinTrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for expense in ledger.expenses() {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.to_string(),
                expense.description.clone(),
                expense.category.to_string(),
                expense.amount.to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinTrackError::Export(e.to_string()))?;
    Ok(())
}

/// Export all goals with their progress to CSV
pub fn export_goals_csv<W: Write>(ledger: &GoalLedger, writer: W) -> FinTrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Name",
            "Category",
            "Saved",
            "Target",
            "Percent Complete",
            "Deadline",
            "Completed",
        ])
        .map_err(export_err)?;

    for view in ledger.views() {
        let goal = &view.goal;
        csv_writer
            .write_record([
                goal.id.to_string(),
                goal.name.clone(),
                goal.category.to_string(),
                goal.current.to_string(),
                goal.target.to_string(),
                view.percent_complete.to_string(),
                goal.deadline.map(|d| d.to_string()).unwrap_or_default(),
                goal.is_completed().to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinTrackError::Export(e.to_string()))?;
    Ok(())
}
