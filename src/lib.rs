//! FinTrack - personal finance goals and expense tracking
//!
//! This library provides the core of the FinTrack dashboard: savings goals
//! that are announced and cleared once reached, an expense log with category
//! and period totals, financial habit scores and weekly expense reminders.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (goals, expenses, money, ids)
//! - `ledger`: Goal and expense ledgers that validate and apply changes
//! - `scheduler`: Delayed completion notice and removal of finished goals
//! - `dashboard`: Wires the ledgers, scheduler, audit trail and notifications
//! - `habits`, `reminders`, `reports`: Derived views
//! - `audit`: Audit trail of every change
//! - `export`: CSV, JSON and YAML snapshots
//! - `config`, `logging`, `error`: Ambient plumbing
//! - `cli`, `display`: Command-line front end
//!
//! Ledger state lives in memory only; the settings file is the only thing
//! read from disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::Settings;
//! use fintrack::dashboard::Dashboard;
//!
//! let mut dashboard = Dashboard::with_sample_data(Settings::default())?;
//! let events = dashboard.tick(std::time::Instant::now());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod export;
pub mod habits;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod notify;
pub mod reminders;
pub mod reports;
pub mod sample;
pub mod scheduler;

pub use error::{FinTrackError, FinTrackResult};
