//! Interactive session over an in-memory dashboard
//!
//! The only place where completion timers run against the wall clock: the
//! dashboard is ticked before every prompt and after `wait`. Nothing typed
//! here outlives the session.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::dashboard::{Dashboard, DashboardEvent};
use crate::display::{
    format_audit_entries, format_category_totals, format_expense_table, format_goal_list,
    format_overview,
};
use crate::error::{FinTrackError, FinTrackResult};
use crate::ledger::{NewExpense, NewGoal};
use crate::models::Money;
use crate::notify::NotificationQueue;

use super::goal::parse_goal_id;
use super::report::default_report_date;

const DEFAULT_HISTORY: usize = 10;

const HELP: &str = "\
Commands:
  overview                                Savings, spending and goals at a glance
  goals                                   List goals
  expenses                                List expenses
  add-goal <target> <name...>             Create a goal
  save <goal-id> <amount>                 Add savings to a goal
  delete <goal-id>                        Delete a goal
  add-expense <amount> <category> <description...>
                                          Record an expense dated today
  totals                                  Spending per category
  history [n]                             Last n changes made this session
  wait <ms>                               Let timers run for a while
  help                                    Show this help
  quit                                    Leave the session
";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Overview,
    Goals,
    Expenses,
    AddGoal { target: String, name: String },
    Save { goal: String, amount: String },
    Delete { goal: String },
    AddExpense {
        amount: String,
        category: String,
        description: String,
    },
    Totals,
    History(usize),
    Wait(u64),
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match (keyword.to_lowercase().as_str(), rest.as_slice()) {
        ("overview", []) => ShellCommand::Overview,
        ("goals", []) => ShellCommand::Goals,
        ("expenses", []) => ShellCommand::Expenses,
        ("totals", []) => ShellCommand::Totals,
        ("help" | "?", _) => ShellCommand::Help,
        ("quit" | "exit", _) => ShellCommand::Quit,
        ("add-goal", [target, name @ ..]) if !name.is_empty() => ShellCommand::AddGoal {
            target: target.to_string(),
            name: name.join(" "),
        },
        ("save", [goal, amount]) => ShellCommand::Save {
            goal: goal.to_string(),
            amount: amount.to_string(),
        },
        ("delete", [goal]) => ShellCommand::Delete {
            goal: goal.to_string(),
        },
        ("add-expense", [amount, category, description @ ..]) if !description.is_empty() => {
            ShellCommand::AddExpense {
                amount: amount.to_string(),
                category: category.to_string(),
                description: description.join(" "),
            }
        }
        ("history", []) => ShellCommand::History(DEFAULT_HISTORY),
        ("history", [count]) => ShellCommand::History(
            count
                .parse()
                .map_err(|_| format!("Invalid count: '{}'", count))?,
        ),
        ("wait", [ms]) => ShellCommand::Wait(
            ms.parse()
                .map_err(|_| format!("Invalid duration: '{}'", ms))?,
        ),
        (other, _) => {
            return Err(format!(
                "Unknown or incomplete command '{}'. Type 'help' for usage.",
                other
            ))
        }
    };

    Ok(Some(command))
}

fn parse_amount(input: &str) -> FinTrackResult<Money> {
    Money::parse(input)
        .map_err(|e| FinTrackError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

/// Whether the session should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command against the dashboard at `now`
pub fn execute<W: Write>(
    dashboard: &mut Dashboard<NotificationQueue>,
    command: ShellCommand,
    now: Instant,
    out: &mut W,
) -> FinTrackResult<Flow> {
    let symbol = dashboard.settings().currency_symbol.clone();
    let date_format = dashboard.settings().date_format.clone();

    match command {
        ShellCommand::Overview => {
            let today = default_report_date(dashboard.expenses());
            write!(out, "{}", format_overview(&dashboard.overview(today), &symbol))?;
        }
        ShellCommand::Goals => {
            write!(
                out,
                "{}",
                format_goal_list(&dashboard.goal_views(), &symbol, &date_format)
            )?;
        }
        ShellCommand::Expenses => {
            write!(
                out,
                "{}",
                format_expense_table(dashboard.expenses().expenses(), &symbol, &date_format)
            )?;
        }
        ShellCommand::Totals => {
            write!(
                out,
                "{}",
                format_category_totals(&dashboard.category_totals(), &symbol)
            )?;
        }
        ShellCommand::AddGoal { target, name } => {
            let goal = dashboard.create_goal(NewGoal::parse(&name, &target, None)?)?;
            writeln!(out, "Created goal {}: {}", goal.id, goal.name)?;
        }
        ShellCommand::Save { goal, amount } => {
            let goal_id = parse_goal_id(&goal)?;
            let contribution = dashboard.contribute(goal_id, parse_amount(&amount)?, now)?;
            let saved = &contribution.goal;
            writeln!(
                out,
                "{}: {} of {} ({}%)",
                saved.name,
                saved.current.format_with_symbol(&symbol),
                saved.target.format_with_symbol(&symbol),
                saved.percent_complete()
            )?;
            if contribution.completed.is_some() {
                writeln!(out, "Target reached!")?;
            }
        }
        ShellCommand::Delete { goal } => {
            let removed = dashboard.delete_goal(parse_goal_id(&goal)?)?;
            writeln!(out, "Deleted goal {}: {}", removed.id, removed.name)?;
        }
        ShellCommand::AddExpense {
            amount,
            category,
            description,
        } => {
            let expense = dashboard.create_expense(NewExpense::new(
                description,
                parse_amount(&amount)?,
                category,
            ))?;
            writeln!(
                out,
                "Recorded {} {} ({})",
                expense.id,
                expense.amount.format_with_symbol(&symbol),
                expense.category
            )?;
        }
        ShellCommand::History(count) => {
            write!(out, "{}", format_audit_entries(dashboard.audit().recent(count)))?;
        }
        ShellCommand::Wait(ms) => {
            std::thread::sleep(Duration::from_millis(ms));
        }
        ShellCommand::Help => write!(out, "{}", HELP)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Tick the dashboard and print whatever fired
pub fn report_events<W: Write>(
    dashboard: &mut Dashboard<NotificationQueue>,
    now: Instant,
    out: &mut W,
) -> FinTrackResult<()> {
    for event in dashboard.tick(now) {
        if let DashboardEvent::GoalRemoved(goal) = event {
            writeln!(out, "Removed completed goal: {}", goal.name)?;
        }
    }
    for notification in dashboard.notifier_mut().drain() {
        writeln!(out, "{}", notification.to_line())?;
    }
    Ok(())
}

/// Read commands from `input` until `quit` or end of input
pub fn run_shell<R: BufRead, W: Write>(
    dashboard: &mut Dashboard<NotificationQueue>,
    input: R,
    out: &mut W,
) -> FinTrackResult<()> {
    writeln!(out, "FinTrack shell. Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        report_events(dashboard, Instant::now(), out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        let is_wait = matches!(command, ShellCommand::Wait(_));
        match execute(dashboard, command, Instant::now(), out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
        if is_wait {
            report_events(dashboard, Instant::now(), out)?;
        }
    }

    // Timers still pending at exit are dropped with the session
    if let Some(due) = dashboard.next_due() {
        tracing::debug!(in_ms = ?due.saturating_duration_since(Instant::now()), "leaving with timers pending");
    }

    Ok(())
}
