//! Configuration module for FinTrack
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Scheduler and reminder preferences

pub mod paths;
pub mod settings;

pub use paths::FinTrackPaths;
pub use settings::{SchedulerSettings, Settings};
