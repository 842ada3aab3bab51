//! CLI command for the dashboard summary

use clap::Args;

use crate::dashboard::Dashboard;
use crate::display::format_overview;
use crate::error::FinTrackResult;
use crate::notify::Notifier;

use super::report::{default_report_date, parse_date};

/// Arguments for `fintrack overview`
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Any date in the month to total (YYYY-MM-DD); defaults to the latest
    /// expense date
    #[arg(short, long)]
    pub date: Option<String>,
}

pub fn handle_overview_command<N: Notifier>(
    dashboard: &Dashboard<N>,
    args: OverviewArgs,
) -> FinTrackResult<()> {
    let date = match args.date.as_deref() {
        Some(text) => parse_date(text)?,
        None => default_report_date(dashboard.expenses()),
    };

    print!(
        "{}",
        format_overview(
            &dashboard.overview(date),
            &dashboard.settings().currency_symbol
        )
    );
    Ok(())
}
