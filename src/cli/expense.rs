//! Expense CLI commands

use clap::Subcommand;

use crate::dashboard::Dashboard;
use crate::display::{format_category_totals, format_expense_table};
use crate::error::FinTrackResult;
use crate::notify::Notifier;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses, most recent first
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show total spending per category
    Totals,
}

/// Handle an expense command
pub fn handle_expense_command<N: Notifier>(
    dashboard: &Dashboard<N>,
    cmd: ExpenseCommands,
) -> FinTrackResult<()> {
    let settings = dashboard.settings();

    match cmd {
        ExpenseCommands::List { limit } => {
            let ledger = dashboard.expenses();
            let expenses = match limit {
                Some(n) => ledger.recent(n),
                None => ledger.expenses(),
            };
            print!(
                "{}",
                format_expense_table(expenses, &settings.currency_symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Totals => {
            print!(
                "{}",
                format_category_totals(&dashboard.category_totals(), &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
