//! Export module for FinTrack
//!
//! Writes what is currently on the dashboard in three formats:
//! - CSV: expenses or goals (spreadsheet-compatible)
//! - JSON: machine-readable snapshot of goals, expenses and habit scores
//! - YAML: the same snapshot in human-readable form
//!
//! Exports are views of in-memory state; there is no import.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_goals_csv};
pub use json::{export_snapshot_json, Snapshot, SnapshotMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
