//! Goal CLI commands

use clap::Subcommand;

use crate::dashboard::Dashboard;
use crate::display::{format_goal_details, format_goal_list};
use crate::error::{FinTrackError, FinTrackResult};
use crate::ledger::GoalView;
use crate::models::GoalId;
use crate::notify::Notifier;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List all goals with their progress
    List,
    /// Show one goal
    Show {
        /// Goal ID (e.g. "goal-2" or "2")
        goal: String,
    },
}

/// Parse a goal id as typed by the user
pub fn parse_goal_id(input: &str) -> FinTrackResult<GoalId> {
    input
        .trim()
        .parse::<GoalId>()
        .map_err(|_| FinTrackError::Validation(format!("Invalid goal ID: '{}'", input)))
}

/// Handle a goal command
pub fn handle_goal_command<N: Notifier>(
    dashboard: &Dashboard<N>,
    cmd: GoalCommands,
) -> FinTrackResult<()> {
    let settings = dashboard.settings();

    match cmd {
        GoalCommands::List => {
            print!(
                "{}",
                format_goal_list(
                    &dashboard.goal_views(),
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }

        GoalCommands::Show { goal } => {
            let goal_id = parse_goal_id(&goal)?;
            let found = dashboard
                .goals()
                .get(goal_id)
                .ok_or_else(|| FinTrackError::goal_not_found(&goal))?;
            print!(
                "{}",
                format_goal_details(
                    &GoalView::from(found),
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );
        }
    }

    Ok(())
}
