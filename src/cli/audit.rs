//! CLI command for reading the audit log

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::{FinTrackPaths, Settings};
use crate::display::format_audit_entries;
use crate::error::FinTrackResult;

/// Arguments for `fintrack audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Show only the most recent N entries
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

/// Print the tail of the audit log file
pub fn handle_audit_command(
    paths: &FinTrackPaths,
    settings: &Settings,
    args: AuditArgs,
) -> FinTrackResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_all()?;

    if entries.is_empty() && !settings.audit_log {
        println!(
            "Audit logging is off. Set \"audit_log\": true in {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    let start = entries.len().saturating_sub(args.limit);
    print!("{}", format_audit_entries(&entries[start..]));
    Ok(())
}
