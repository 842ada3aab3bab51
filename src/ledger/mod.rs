//! Ledgers for FinTrack
//!
//! Each ledger exclusively owns one collection of entities and is the only
//! way to change it. The two ledgers are siblings and never reference each
//! other.

pub mod expenses;
pub mod goals;

pub use expenses::{ExpenseLedger, NewExpense};
pub use goals::{Contribution, GoalCompleted, GoalLedger, GoalView, NewGoal};
