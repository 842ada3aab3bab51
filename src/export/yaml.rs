//! YAML Export functionality
//!
//! The same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use crate::dashboard::Dashboard;
use crate::error::{FinTrackError, FinTrackResult};
use crate::export::json::Snapshot;
use crate::notify::Notifier;

/// Export a dashboard snapshot to YAML
pub fn export_snapshot_yaml<N: Notifier, W: Write>(
    dashboard: &Dashboard<N>,
    writer: &mut W,
) -> FinTrackResult<()> {
    let snapshot = Snapshot::from_dashboard(dashboard);

    writeln!(writer, "# FinTrack Dashboard Snapshot")
        .map_err(|e| FinTrackError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| FinTrackError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)
        .map_err(|e| FinTrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinTrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| FinTrackError::Export(e.to_string()))?;

    Ok(())
}
