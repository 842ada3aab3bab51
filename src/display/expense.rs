//! Expense display formatting
//!
//! Expense lists and category totals rendered as tables.

use std::collections::BTreeMap;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, ExpenseCategory, Money};

use super::report::{format_bar, format_percentage, truncate};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format expenses, most recent first, as a table
pub fn format_expense_table(
    expenses: &[Expense],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.to_string(),
        date: expense.date.format(date_format).to_string(),
        description: truncate(&expense.description, 32),
        category: expense.category.to_string(),
        amount: expense.amount.format_with_symbol(currency_symbol),
    });

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    format!(
        "{}\n{} expenses, {} total\n",
        table,
        expenses.len(),
        total.format_with_symbol(currency_symbol)
    )
}

/// Format per-category totals with their share of all spending
pub fn format_category_totals(
    totals: &BTreeMap<ExpenseCategory, Money>,
    currency_symbol: &str,
) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let grand_total: Money = totals.values().sum();
    let grand = grand_total.minor() as f64;

    let rows = totals.iter().map(|(category, amount)| {
        let share = if grand > 0.0 {
            amount.minor() as f64 / grand * 100.0
        } else {
            0.0
        };
        CategoryRow {
            category: category.to_string(),
            total: amount.format_with_symbol(currency_symbol),
            share: format_percentage(share),
            bar: format_bar(share, 100.0, 20),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!(
        "{}\nTotal: {}\n",
        table,
        grand_total.format_with_symbol(currency_symbol)
    )
}
