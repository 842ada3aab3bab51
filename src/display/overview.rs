//! Dashboard summary display

use crate::dashboard::Overview;

use super::report::{format_bar, separator};

/// Format the four summary figures shown at the top of the dashboard
pub fn format_overview(overview: &Overview, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("FinTrack Overview\n");
    output.push_str(&separator(50));
    output.push('\n');

    output.push_str(&format!(
        "{:<20} {} of {}\n",
        "Total Savings:",
        overview.total_saved.format_with_symbol(symbol),
        overview.total_target.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {} ({})\n",
        "Monthly Expenses:",
        overview.month_spending.format_with_symbol(symbol),
        overview.month
    ));

    let near = match overview.near_completion {
        0 => String::new(),
        1 => " (1 goal near completion)".to_string(),
        n => format!(" ({} goals near completion)", n),
    };
    output.push_str(&format!(
        "{:<20} {}{}\n",
        "Active Goals:", overview.active_goals, near
    ));

    match overview.habit_score {
        Some(score) => output.push_str(&format!(
            "{:<20} {}/100 {}\n",
            "Habit Score:",
            score,
            format_bar(f64::from(score), 100.0, 20)
        )),
        None => output.push_str(&format!("{:<20} -\n", "Habit Score:")),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn overview(near_completion: usize, habit_score: Option<u8>) -> Overview {
        Overview {
            total_saved: Money::from_minor(455_000),
            total_target: Money::from_minor(1_650_000),
            month: "March 2024".into(),
            month_spending: Money::from_minor(36_941),
            active_goals: 3,
            near_completion,
            habit_score,
        }
    }

    #[test]
    fn test_format_overview() {
        let output = format_overview(&overview(1, Some(74)), "₹");
        assert!(output.contains("Total Savings:       ₹4550.00 of ₹16500.00"));
        assert!(output.contains("Monthly Expenses:    ₹369.41 (March 2024)"));
        assert!(output.contains("Active Goals:        3 (1 goal near completion)"));
        assert!(output.contains("Habit Score:         74/100"));
    }

    #[test]
    fn test_format_overview_without_habits() {
        let output = format_overview(&overview(2, None), "$");
        assert!(output.contains("3 (2 goals near completion)"));
        assert!(output.contains("Habit Score:         -"));
    }
}
