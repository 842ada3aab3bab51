//! Display formatting for terminal output
//!
//! Renders goals, expenses, habit scores, the dashboard summary and the
//! audit history as text for the CLI.

pub mod audit;
pub mod expense;
pub mod goal;
pub mod habit;
pub mod overview;
pub mod report;

pub use audit::format_audit_entries;
pub use expense::{format_category_totals, format_expense_table};
pub use goal::{format_goal_details, format_goal_list};
pub use habit::format_habit_board;
pub use overview::format_overview;
