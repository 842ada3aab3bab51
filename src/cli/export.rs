//! CLI command for exporting dashboard data

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::dashboard::Dashboard;
use crate::error::{FinTrackError, FinTrackResult};
use crate::export::{
    export_expenses_csv, export_goals_csv, export_snapshot_json, export_snapshot_yaml,
};
use crate::notify::Notifier;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Expenses (or goals with --goals) as CSV
    Csv,
    /// Full snapshot as JSON
    Json,
    /// Full snapshot as YAML
    Yaml,
}

/// Arguments for `fintrack export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Export goals instead of expenses (CSV only)
    #[arg(long)]
    pub goals: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn write_export<N: Notifier, W: Write>(
    dashboard: &Dashboard<N>,
    args: &ExportArgs,
    writer: &mut W,
) -> FinTrackResult<()> {
    match args.format {
        ExportFormat::Csv if args.goals => export_goals_csv(dashboard.goals(), &mut *writer),
        ExportFormat::Csv => export_expenses_csv(dashboard.expenses(), &mut *writer),
        ExportFormat::Json => export_snapshot_json(dashboard, writer),
        ExportFormat::Yaml => export_snapshot_yaml(dashboard, writer),
    }
}

/// Handle the export command
pub fn handle_export_command<N: Notifier>(
    dashboard: &Dashboard<N>,
    args: ExportArgs,
) -> FinTrackResult<()> {
    if args.goals && args.format != ExportFormat::Csv {
        return Err(FinTrackError::Validation(
            "--goals only applies to CSV export".into(),
        ));
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| FinTrackError::Export(format!("Failed to create file: {}", e)))?;
            let mut writer = BufWriter::new(file);
            write_export(dashboard, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinTrackError::Export(e.to_string()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(dashboard, &args, &mut handle)?;
        }
    }

    Ok(())
}
