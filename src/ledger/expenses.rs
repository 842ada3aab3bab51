//! Expense ledger
//!
//! Owns the list of expenses, most recent insertion first. Expenses are
//! validated in full before they are added; a rejected expense leaves the
//! list untouched.

use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};

/// Input for recording an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    /// Category name as entered; must match one of `ExpenseCategory::all()`
    pub category: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.name().to_string()
    }
}

/// Owned collection of expenses, newest first
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: ExpenseId::new(1),
        }
    }

    /// Record an expense dated today unless a date is given
    pub fn create_expense(&mut self, new_expense: NewExpense) -> FinTrackResult<Expense> {
        let today = Utc::now().date_naive();
        self.create_expense_as_of(new_expense, today)
    }

    /// Record an expense, using `today` when no date is given
    pub fn create_expense_as_of(
        &mut self,
        new_expense: NewExpense,
        today: NaiveDate,
    ) -> FinTrackResult<Expense> {
        let category = new_expense
            .category
            .parse::<ExpenseCategory>()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let expense = Expense::new(
            self.next_id,
            new_expense.description.trim(),
            new_expense.amount,
            category,
            new_expense.date.unwrap_or(today),
        );

        expense
            .validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        self.next_id = self.next_id.next();
        self.expenses.insert(0, expense.clone());

        tracing::debug!(
            expense_id = %expense.id,
            category = %expense.category,
            amount = %expense.amount,
            "expense recorded"
        );

        Ok(expense)
    }

    /// Total spent per category; only categories with expenses appear
    pub fn category_totals(&self) -> BTreeMap<ExpenseCategory, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    /// Total spent with a date in `[start, end]`
    pub fn total_for_period(&self, start: NaiveDate, end: NaiveDate) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.is_within(start, end))
            .map(|e| e.amount)
            .sum()
    }

    /// Expenses dated within `[start, end]`, newest insertion first
    pub fn in_period(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.is_within(start, end))
            .collect()
    }

    pub fn get(&self, expense_id: ExpenseId) -> FinTrackResult<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| FinTrackError::expense_not_found(expense_id.to_string()))
    }

    /// All expenses, most recent insertion first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The `count` most recently added expenses
    pub fn recent(&self, count: usize) -> &[Expense] {
        &self.expenses[..count.min(self.expenses.len())]
    }

    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
