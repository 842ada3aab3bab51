//! Savings goal model
//!
//! A goal tracks progress toward a target amount. `current` is clamped so it
//! never exceeds `target`, and a goal is complete exactly when the two meet.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GoalId;
use super::money::Money;

/// What a goal is saving for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum GoalCategory {
    Travel,
    Electronics,
    Savings,
    Education,
    Home,
    Vehicle,
    #[default]
    Other,
}

impl GoalCategory {
    /// All goal categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Travel,
            Self::Electronics,
            Self::Savings,
            Self::Education,
            Self::Home,
            Self::Vehicle,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Electronics => "Electronics",
            Self::Savings => "Savings",
            Self::Education => "Education",
            Self::Home => "Home",
            Self::Vehicle => "Vehicle",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GoalCategory {
    type Err = GoalValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GoalValidationError::UnknownCategory(s.to_string()))
    }
}

/// A financial goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Sequential identifier assigned by the ledger
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Amount to reach
    pub target: Money,

    /// Amount saved so far, never above `target`
    pub current: Money,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    pub category: GoalCategory,

    /// Mirrors `current >= target`; recomputed on every mutation
    pub completed: bool,

    /// When the goal was created
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(id: GoalId, name: impl Into<String>, target: Money) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            current: Money::zero(),
            deadline: None,
            category: GoalCategory::default(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Set the initial savings, clamped to the target
    pub fn with_current(mut self, current: Money) -> Self {
        self.current = current.min(self.target);
        self.completed = self.is_completed();
        self
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Whether the goal has reached its target
    pub fn is_completed(&self) -> bool {
        self.current >= self.target
    }

    /// Progress as a whole percentage, rounded half up
    ///
    /// A non-positive target cannot be created through the ledger; it reads
    /// as 100%.
    pub fn percent_complete(&self) -> u32 {
        let target = i128::from(self.target.minor());
        if target <= 0 {
            return 100;
        }
        let current = i128::from(self.current.minor()).clamp(0, target);
        ((200 * current + target) / (2 * target)) as u32
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        let remaining = self.target - self.current;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Add savings, clamping at the target
    ///
    /// Returns `true` when this contribution moved the goal from incomplete to
    /// complete.
    pub(crate) fn apply_contribution(&mut self, amount: Money) -> bool {
        let was_completed = self.completed;
        self.current = self.current.saturating_add(amount).min(self.target);
        self.completed = self.is_completed();
        !was_completed && self.completed
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }

        if self.current.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current));
        }

        if self.current > self.target {
            return Err(GoalValidationError::CurrentAboveTarget);
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
    CurrentAboveTarget,
    NonPositiveContribution(Money),
    UnknownCategory(String),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive (got {})", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Initial savings cannot be negative (got {})", amount)
            }
            Self::CurrentAboveTarget => write!(f, "Saved amount exceeds the target"),
            Self::NonPositiveContribution(amount) => {
                write!(f, "Contribution must be positive (got {})", amount)
            }
            Self::UnknownCategory(name) => write!(f, "Unknown goal category: '{}'", name),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: i64, current: i64) -> Goal {
        Goal::new(GoalId::new(1), "Emergency Fund", Money::from_minor(target))
            .with_current(Money::from_minor(current))
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(goal(1_000_000, 85_000).percent_complete(), 9);
        assert_eq!(goal(500_000, 250_000).percent_complete(), 50);
        assert_eq!(goal(150_000, 120_000).percent_complete(), 80);
        assert_eq!(goal(3, 1).percent_complete(), 33);
        assert_eq!(goal(100, 0).percent_complete(), 0);
    }

    #[test]
    fn test_percent_with_zero_target_reads_full() {
        let mut g = goal(100, 0);
        g.target = Money::zero();
        assert_eq!(g.percent_complete(), 100);
    }

    #[test]
    fn test_with_current_clamps() {
        let g = goal(1000, 5000);
        assert_eq!(g.current.minor(), 1000);
        assert!(g.completed);
        assert!(g.remaining().is_zero());
    }

    #[test]
    fn test_apply_contribution_reports_crossing_once() {
        let mut g = goal(150_000, 120_000);
        assert!(g.apply_contribution(Money::from_minor(40_000)));
        assert_eq!(g.current.minor(), 150_000);
        assert!(!g.apply_contribution(Money::from_minor(1_000)));
        assert_eq!(g.current.minor(), 150_000);
    }

    #[test]
    fn test_validate() {
        assert!(goal(100, 0).validate().is_ok());

        let mut g = goal(100, 0);
        g.name = "   ".into();
        assert_eq!(g.validate(), Err(GoalValidationError::EmptyName));

        let g = Goal::new(GoalId::new(1), "Laptop", Money::zero());
        assert!(matches!(
            g.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("travel".parse::<GoalCategory>().unwrap(), GoalCategory::Travel);
        assert_eq!(" Home ".parse::<GoalCategory>().unwrap(), GoalCategory::Home);
        assert!("Crypto".parse::<GoalCategory>().is_err());
    }
}
