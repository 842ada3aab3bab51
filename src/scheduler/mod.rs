//! Timed side effects
//!
//! The completion scheduler and the keyed timer queue it runs on. Time is
//! always passed in by the caller, so nothing here sleeps or spawns.

pub mod completion;
pub mod timer;

pub use completion::{CompletionScheduler, CompletionStage, SchedulerEvent};
pub use timer::{Fired, TimerQueue};
