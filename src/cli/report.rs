//! CLI command for the spending report

use chrono::{NaiveDate, Utc};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::dashboard::Dashboard;
use crate::error::{FinTrackError, FinTrackResult};
use crate::ledger::ExpenseLedger;
use crate::models::ReportPeriod;
use crate::notify::Notifier;
use crate::reports::SpendingReport;

/// Arguments for `fintrack report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report period (week, month, year)
    #[arg(short, long, default_value = "month")]
    pub period: ReportPeriod,

    /// Any date inside the period (YYYY-MM-DD); defaults to the latest
    /// expense date, or today when there are no expenses
    #[arg(short, long)]
    pub date: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn parse_date(input: &str) -> FinTrackResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinTrackError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input
        ))
    })
}

pub(crate) fn default_report_date(ledger: &ExpenseLedger) -> NaiveDate {
    ledger
        .expenses()
        .iter()
        .map(|e| e.date)
        .max()
        .unwrap_or_else(|| Utc::now().date_naive())
}

/// Handle the report command
pub fn handle_report_command<N: Notifier>(
    dashboard: &Dashboard<N>,
    args: ReportArgs,
) -> FinTrackResult<()> {
    let ledger = dashboard.expenses();
    let date = match args.date.as_deref() {
        Some(text) => parse_date(text)?,
        None => default_report_date(ledger),
    };

    let report = SpendingReport::for_period(ledger, args.period, date);

    println!("{} ({})", args.period.label(date), args.period);
    print!(
        "{}",
        report.format_terminal(&dashboard.settings().currency_symbol)
    );

    if let Some(output_path) = args.output {
        let file = File::create(&output_path)
            .map_err(|e| FinTrackError::Export(format!("Failed to create file: {}", e)))?;
        report.export_csv(BufWriter::new(file))?;
        println!("\nReport exported to: {}", output_path.display());
    }

    Ok(())
}
