use std::io;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use fintrack::audit::{AuditLogger, AuditTrail};
use fintrack::cli::{
    handle_audit_command, handle_expense_command, handle_export_command, handle_goal_command,
    handle_overview_command, handle_report_command, run_shell, AuditArgs, ExpenseCommands,
    ExportArgs, GoalCommands, OverviewArgs, ReportArgs,
};
use fintrack::config::{FinTrackPaths, Settings};
use fintrack::dashboard::Dashboard;
use fintrack::display::format_habit_board;
use fintrack::logging::init_tracing;
use fintrack::notify::{NotificationQueue, Notifier};

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance goals and expense tracking",
    long_about = "FinTrack tracks savings goals and day-to-day expenses. Goals that \
                  reach their target are announced and then cleared from the board."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Savings, monthly spending, active goals and habit score at a glance
    Overview(OverviewArgs),

    /// Goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Spending report for a week, month or year
    Report(ReportArgs),

    /// Financial habit score and breakdown
    Habits,

    /// Export goals and expenses
    Export(ExportArgs),

    /// Show when the next expense reminder is due
    Reminder,

    /// Show the most recent entries of the audit log
    Audit(AuditArgs),

    /// Show current configuration and paths
    Config,

    /// Interactive session where goals can be saved towards and completed
    #[command(alias = "repl")]
    Shell,
}

fn build_dashboard<N: Notifier>(
    paths: &FinTrackPaths,
    settings: &Settings,
    notifier: N,
) -> Result<Dashboard<N>> {
    let mut dashboard = Dashboard::with_notifier(settings.clone(), notifier).seeded()?;
    if settings.audit_log {
        paths.ensure_directories()?;
        dashboard = dashboard.with_audit(AuditTrail::with_logger(AuditLogger::new(
            paths.audit_log(),
        )));
    }
    Ok(dashboard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinTrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Overview(args)) => {
            let dashboard = Dashboard::with_sample_data(settings)?;
            handle_overview_command(&dashboard, args)?;
        }
        Some(Commands::Goal(cmd)) => {
            let dashboard = Dashboard::with_sample_data(settings)?;
            handle_goal_command(&dashboard, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let dashboard = Dashboard::with_sample_data(settings)?;
            handle_expense_command(&dashboard, cmd)?;
        }
        Some(Commands::Report(args)) => {
            let dashboard = Dashboard::with_sample_data(settings)?;
            handle_report_command(&dashboard, args)?;
        }
        Some(Commands::Habits) => {
            let dashboard = Dashboard::with_sample_data(settings)?;
            print!("{}", format_habit_board(dashboard.habit_board()));
        }
        Some(Commands::Export(args)) => {
            let dashboard = Dashboard::with_sample_data(settings)?;
            handle_export_command(&dashboard, args)?;
        }
        Some(Commands::Reminder) => {
            let reminders = &settings.reminders;
            println!("Expense reminder: {}", reminders.describe());
            match reminders.next_after(Local::now().naive_local()) {
                Some(next) => {
                    println!("Next reminder:    {}", next.format("%a %b %-d, %Y %H:%M"));
                    println!("{}", reminders.notification().to_line());
                }
                None => {
                    println!("Enable reminders in {}", paths.settings_file().display());
                }
            }
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&paths, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("FinTrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!(
                "  Notify delay:      {} ms",
                settings.scheduler.notify_delay_ms
            );
            println!(
                "  Auto-delete delay: {} ms",
                settings.scheduler.auto_delete_delay_ms
            );
            println!("  Reminders:         {}", settings.reminders.describe());
            println!("  Log filter:        {}", settings.log_filter);
            println!("  Audit log enabled: {}", settings.audit_log);
        }
        Some(Commands::Shell) => {
            let mut dashboard = build_dashboard(&paths, &settings, NotificationQueue::new())?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_shell(&mut dashboard, stdin.lock(), &mut stdout)?;
        }
        None => {
            println!("FinTrack - personal finance goals and expenses");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack shell' to start an interactive session.");
        }
    }

    Ok(())
}
