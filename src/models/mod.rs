//! Core data models for FinTrack
//!
//! This module contains the data structures of the finance tracker: savings
//! goals, expenses, habit scores, money and reporting periods.

pub mod expense;
pub mod goal;
pub mod habit;
pub mod ids;
pub mod money;
pub mod period;

pub use expense::{Expense, ExpenseCategory, ExpenseValidationError};
pub use goal::{Goal, GoalCategory, GoalValidationError};
pub use habit::{HabitScore, HabitTrend};
pub use ids::{ExpenseId, GoalId};
pub use money::{Money, MoneyParseError};
pub use period::ReportPeriod;
