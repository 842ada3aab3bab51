//! Demo data shown on first launch

use chrono::NaiveDate;

use crate::ledger::{NewExpense, NewGoal};
use crate::models::{ExpenseCategory, GoalCategory, HabitScore, HabitTrend, Money};

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn goal(
    name: &str,
    target: i64,
    current: i64,
    category: GoalCategory,
    deadline: Option<NaiveDate>,
) -> NewGoal {
    let new_goal = NewGoal::new(name, Money::from_minor(target))
        .with_current(Money::from_minor(current))
        .with_category(category);
    match deadline {
        Some(deadline) => new_goal.with_deadline(deadline),
        None => new_goal,
    }
}

/// Goals in display order
pub fn goals() -> Vec<NewGoal> {
    vec![
        goal(
            "Vacation Fund",
            500_000,
            250_000,
            GoalCategory::Travel,
            date(2024, 9, 15),
        ),
        goal(
            "New Laptop",
            150_000,
            120_000,
            GoalCategory::Electronics,
            date(2024, 6, 30),
        ),
        goal("Emergency Fund", 1_000_000, 85_000, GoalCategory::Savings, None),
    ]
}

fn expense(
    description: &str,
    amount: i64,
    category: ExpenseCategory,
    on: Option<NaiveDate>,
) -> NewExpense {
    let new_expense = NewExpense::new(description, Money::from_minor(amount), category);
    match on {
        Some(day) => new_expense.on(day),
        None => new_expense,
    }
}

/// Expenses oldest insertion first; the ledger prepends, so the last one
/// here ends up at the top of the list
pub fn expenses() -> Vec<NewExpense> {
    vec![
        expense("Chai and Snacks", 250, ExpenseCategory::Food, date(2024, 3, 28)),
        expense(
            "Netflix Subscription",
            649,
            ExpenseCategory::Entertainment,
            date(2024, 3, 26),
        ),
        expense(
            "Petrol",
            2_500,
            ExpenseCategory::Transportation,
            date(2024, 3, 27),
        ),
        expense(
            "Monthly Rent",
            25_000,
            ExpenseCategory::Housing,
            date(2024, 3, 25),
        ),
        expense(
            "Grocery Shopping",
            8_542,
            ExpenseCategory::Food,
            date(2024, 3, 28),
        ),
    ]
}

pub fn habits() -> Vec<HabitScore> {
    vec![
        HabitScore::new(ExpenseCategory::Food, 85, HabitTrend::Improved),
        HabitScore::new(ExpenseCategory::Housing, 95, HabitTrend::Improved),
        HabitScore::new(ExpenseCategory::Transportation, 60, HabitTrend::Neutral),
        HabitScore::new(ExpenseCategory::Entertainment, 40, HabitTrend::Worsened),
        HabitScore::new(ExpenseCategory::Shopping, 75, HabitTrend::Improved),
        HabitScore::new(ExpenseCategory::Utilities, 90, HabitTrend::Improved),
    ]
}
