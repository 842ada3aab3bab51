//! CLI command handlers
//!
//! Bridges the clap argument parsing with the dashboard. Every command except
//! `audit` runs against a freshly seeded in-memory dashboard.

pub mod audit;
pub mod expense;
pub mod export;
pub mod goal;
pub mod overview;
pub mod report;
pub mod shell;

pub use audit::{handle_audit_command, AuditArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use overview::{handle_overview_command, OverviewArgs};
pub use report::{handle_report_command, ReportArgs};
pub use shell::run_shell;
