//! Reports module for FinTrack
//!
//! Spending analysis over a week, month or year of recorded expenses.

pub mod spending;

pub use spending::{SpendingByCategory, SpendingReport};
