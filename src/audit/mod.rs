//! Audit logging for FinTrack
//!
//! Records every create, update and delete on goals and expenses with
//! before/after snapshots.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and optional before/after values.
//! - `AuditTrail`: the session's entries, kept in memory.
//! - `AuditLogger`: optional JSONL file the trail mirrors entries to.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::audit::{AuditEntry, AuditTrail};
//!
//! let mut trail = AuditTrail::new();
//! trail.record(AuditEntry::goal_created(&goal));
//! for entry in trail.recent(10) {
//!     println!("{}", entry.format_human_readable());
//! }
//! ```

mod entry;
mod logger;
mod trail;

pub use entry::{AuditEntry, EntityType, Operation, Origin};
pub use logger::AuditLogger;
pub use trail::AuditTrail;
