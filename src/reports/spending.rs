//! Spending Report
//!
//! Spending by category for a date range, largest category first.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{FinTrackError, FinTrackResult};
use crate::ledger::ExpenseLedger;
use crate::models::{ExpenseCategory, Money, ReportPeriod};

/// Spending breakdown for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingByCategory {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of the report total, 0 to 100
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Sorted by total, most spending first
    pub categories: Vec<SpendingByCategory>,
    pub total: Money,
    pub expense_count: usize,
}

impl SpendingReport {
    /// Generate a spending report for an inclusive date range
    ///
    /// An inverted range produces an empty report.
    pub fn generate(ledger: &ExpenseLedger, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let mut by_category: BTreeMap<ExpenseCategory, (Money, usize)> = BTreeMap::new();
        let mut total = Money::zero();
        let mut expense_count = 0;

        for expense in ledger.in_period(start_date, end_date) {
            let entry = by_category
                .entry(expense.category)
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
            expense_count += 1;
        }

        let mut categories: Vec<_> = by_category
            .into_iter()
            .map(|(category, (amount, count))| SpendingByCategory {
                category,
                total: amount,
                count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    (amount.minor() as f64 / total.minor() as f64) * 100.0
                },
            })
            .collect();

        // Ties keep category order
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            start_date,
            end_date,
            categories,
            total,
            expense_count,
        }
    }

    /// Report for the week, month or year containing `date`
    pub fn for_period(ledger: &ExpenseLedger, period: ReportPeriod, date: NaiveDate) -> Self {
        let (start, end) = period.range_containing(date);
        Self::generate(ledger, start, end)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Spending Report: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Total Expenses: {}\n\n", self.expense_count));

        if self.categories.is_empty() {
            output.push_str("No expenses in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>14} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>14} {:>8} {:>7.1}%\n",
                row.category.name(),
                row.total.format_with_symbol(currency_symbol),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14} {:>8}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol),
            self.expense_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinTrackResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Start Date", "End Date", "Category", "Amount", "Count", "Percentage"])
            .map_err(|e| FinTrackError::Export(e.to_string()))?;

        for row in &self.categories {
            csv_writer
                .write_record([
                    self.start_date.to_string(),
                    self.end_date.to_string(),
                    row.category.name().to_string(),
                    row.total.to_string(),
                    row.count.to_string(),
                    format!("{:.2}", row.percentage),
                ])
                .map_err(|e| FinTrackError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinTrackError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::NewExpense;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_ledger() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        let entries = [
            ("Grocery Shopping", 8_542, "Food", date(2024, 3, 28)),
            ("Monthly Rent", 25_000, "Housing", date(2024, 3, 25)),
            ("Petrol", 2_500, "Transportation", date(2024, 3, 27)),
            ("Chai and Snacks", 250, "Food", date(2024, 3, 28)),
            ("Old Rent", 24_000, "Housing", date(2024, 2, 25)),
        ];
        for (description, amount, category, on) in entries {
            ledger
                .create_expense(
                    NewExpense::new(description, Money::from_minor(amount), category).on(on),
                )
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_generate_spending_report() {
        let ledger = create_test_ledger();
        let report = SpendingReport::generate(&ledger, date(2024, 3, 1), date(2024, 3, 31));

        assert_eq!(report.total, Money::from_minor(36_292));
        assert_eq!(report.expense_count, 4);

        let order: Vec<_> = report.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                ExpenseCategory::Housing,
                ExpenseCategory::Food,
                ExpenseCategory::Transportation
            ]
        );
        assert_eq!(report.categories[1].count, 2);
        assert_eq!(report.categories[1].total, Money::from_minor(8_792));

        let share: f64 = report.categories.iter().map(|c| c.percentage).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let ledger = create_test_ledger();
        let report = SpendingReport::generate(&ledger, date(2024, 3, 31), date(2024, 3, 1));
        assert!(report.categories.is_empty());
        assert!(report.total.is_zero());
        assert!(report.format_terminal("₹").contains("No expenses"));
    }

    #[test]
    fn test_for_week() {
        let ledger = create_test_ledger();
        // Week of Monday 2024-03-25 to Sunday 2024-03-31
        let report = SpendingReport::for_period(&ledger, ReportPeriod::Week, date(2024, 3, 27));
        assert_eq!(report.start_date, date(2024, 3, 25));
        assert_eq!(report.expense_count, 4);
    }

    #[test]
    fn test_export_csv() {
        let ledger = create_test_ledger();
        let report = SpendingReport::generate(&ledger, date(2024, 3, 1), date(2024, 3, 31));

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Start Date,End Date,Category,Amount,Count,Percentage")
        );
        assert_eq!(
            lines.next(),
            Some("2024-03-01,2024-03-31,Housing,250.00,1,68.89")
        );
    }
}
