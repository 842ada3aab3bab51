//! Goal display formatting
//!
//! Formats goals with their progress for terminal output.

use crate::ledger::GoalView;
use crate::models::Money;

use super::report::{format_bar, truncate};

const BAR_WIDTH: usize = 20;

/// Format goals as a progress table
pub fn format_goal_list(views: &[GoalView], currency_symbol: &str, date_format: &str) -> String {
    if views.is_empty() {
        return "No goals found.\n".to_string();
    }

    let name_width = views
        .iter()
        .map(|v| v.goal.name.chars().count().min(24))
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<11}  {:>14}  {:>14}  {:<bar$}  {:>4}  {}\n",
        "ID",
        "Name",
        "Category",
        "Saved",
        "Target",
        "Progress",
        "%",
        "Deadline",
        name_width = name_width,
        bar = BAR_WIDTH,
    ));
    output.push_str(&"-".repeat(name_width + BAR_WIDTH + 76));
    output.push('\n');

    for view in views {
        let goal = &view.goal;
        let deadline = goal
            .deadline
            .map(|d| d.format(date_format).to_string())
            .unwrap_or_else(|| "-".to_string());
        let marker = if goal.is_completed() { " ✓" } else { "" };

        output.push_str(&format!(
            "{:<8}  {:<name_width$}  {:<11}  {:>14}  {:>14}  {}  {:>3}%  {}{}\n",
            goal.id.to_string(),
            truncate(&goal.name, 24),
            goal.category.name(),
            goal.current.format_with_symbol(currency_symbol),
            goal.target.format_with_symbol(currency_symbol),
            format_bar(view.percent_complete as f64, 100.0, BAR_WIDTH),
            view.percent_complete,
            deadline,
            marker,
            name_width = name_width,
        ));
    }

    let saved: Money = views.iter().map(|v| v.goal.current).sum();
    let target: Money = views.iter().map(|v| v.goal.target).sum();
    output.push_str(&"-".repeat(name_width + BAR_WIDTH + 76));
    output.push('\n');
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<11}  {:>14}  {:>14}\n",
        "TOTAL",
        "",
        "",
        saved.format_with_symbol(currency_symbol),
        target.format_with_symbol(currency_symbol),
        name_width = name_width,
    ));

    output
}

/// Format a single goal's details
pub fn format_goal_details(view: &GoalView, currency_symbol: &str, date_format: &str) -> String {
    let goal = &view.goal;
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&format!("  ID:         {}\n", goal.id));
    output.push_str(&format!("  Category:   {}\n", goal.category));
    output.push_str(&format!(
        "  Saved:      {} of {} ({}%)\n",
        goal.current.format_with_symbol(currency_symbol),
        goal.target.format_with_symbol(currency_symbol),
        view.percent_complete
    ));
    output.push_str(&format!(
        "  Remaining:  {}\n",
        view.remaining.format_with_symbol(currency_symbol)
    ));
    if let Some(deadline) = goal.deadline {
        output.push_str(&format!("  Deadline:   {}\n", deadline.format(date_format)));
    }
    if goal.is_completed() {
        output.push_str("  Status:     Completed\n");
    }

    output
}
