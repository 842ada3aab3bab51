//! Strongly-typed ID wrappers for ledger entities
//!
//! Ids are sequential integers handed out by the owning ledger. The newtypes
//! keep goal ids and expense ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the raw id value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// The id that follows this one
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Accepts both the bare number and the display form
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(GoalId, "goal-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GoalId::new(3).to_string(), "goal-3");
        assert_eq!(ExpenseId::new(12).to_string(), "exp-12");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!("goal-4".parse::<GoalId>().unwrap(), GoalId::new(4));
        assert_eq!("4".parse::<GoalId>().unwrap(), GoalId::new(4));
        assert!("goal-x".parse::<GoalId>().is_err());
    }

    #[test]
    fn test_next_is_sequential() {
        assert_eq!(GoalId::new(1).next(), GoalId::new(2));
    }

    #[test]
    fn test_serialization() {
        let id = ExpenseId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
    }
}
