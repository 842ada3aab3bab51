//! Financial habit scores
//!
//! A per-category score (0-100) describing how efficiently money is being
//! spent, with the direction it moved since the previous month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::ExpenseCategory;

/// Direction a habit moved compared to the previous month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitTrend {
    Improved,
    Neutral,
    Worsened,
}

impl HabitTrend {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Improved => "↑",
            Self::Neutral => "→",
            Self::Worsened => "↓",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Improved => "Spending more efficiently",
            Self::Neutral => "Similar to last month",
            Self::Worsened => "Spending less efficiently",
        }
    }
}

impl fmt::Display for HabitTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improved => write!(f, "Improved"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Worsened => write!(f, "Worsened"),
        }
    }
}

/// Score for one spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitScore {
    pub category: ExpenseCategory,
    /// 0 to 100
    pub score: u8,
    pub trend: HabitTrend,
}

impl HabitScore {
    pub fn new(category: ExpenseCategory, score: u8, trend: HabitTrend) -> Self {
        Self {
            category,
            score,
            trend,
        }
    }
}
