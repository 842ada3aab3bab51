//! Habit board display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::habits::HabitBoard;

use super::report::format_bar;

#[derive(Tabled)]
struct HabitRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Trend")]
    trend: String,
}

pub fn format_habit_board(board: &HabitBoard) -> String {
    let Some(overall) = board.overall_score() else {
        return "No habit scores yet.\n".to_string();
    };

    let counts = board.trend_counts();
    let mut output = format!(
        "Financial Habit Score: {}/100\n{} improved, {} unchanged, {} worsened\n\n",
        overall, counts.improved, counts.neutral, counts.worsened
    );

    let rows = board.scores().iter().map(|habit| HabitRow {
        category: habit.category.to_string(),
        score: habit.score.to_string(),
        bar: format_bar(f64::from(habit.score), 100.0, 20),
        trend: format!("{} {}", habit.trend.icon(), habit.trend.summary()),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}
