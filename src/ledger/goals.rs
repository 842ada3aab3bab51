//! Goal ledger
//!
//! Owns the list of savings goals. Goals are kept in insertion order, ids are
//! handed out from a monotonic counter and never reused, and every operation
//! validates its input before touching the list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Goal, GoalCategory, GoalId, GoalValidationError, Money};

/// Input for creating a goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub name: String,
    pub target: Money,
    /// Initial savings, defaults to zero
    pub current: Option<Money>,
    /// Defaults to `GoalCategory::Other`
    pub category: Option<GoalCategory>,
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        Self {
            name: name.into(),
            target,
            current: None,
            category: None,
            deadline: None,
        }
    }

    pub fn with_current(mut self, current: Money) -> Self {
        self.current = Some(current);
        self
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Build from user-entered text; amounts go through `Money::parse`
    pub fn parse(name: &str, target: &str, current: Option<&str>) -> FinTrackResult<Self> {
        let target = Money::parse(target)
            .map_err(|e| FinTrackError::Validation(format!("target: {}", e)))?;
        let mut new_goal = Self::new(name, target);
        if let Some(text) = current.filter(|t| !t.trim().is_empty()) {
            let current = Money::parse(text)
                .map_err(|e| FinTrackError::Validation(format!("current: {}", e)))?;
            new_goal = new_goal.with_current(current);
        }
        Ok(new_goal)
    }

    fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }

        if let Some(current) = self.current {
            if current.is_negative() {
                return Err(GoalValidationError::NegativeCurrent(current));
            }
        }

        Ok(())
    }
}

/// Emitted when a contribution carries a goal across its target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCompleted {
    pub goal_id: GoalId,
    pub goal_name: String,
}

/// Result of adding savings to a goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// The goal after the contribution
    pub goal: Goal,
    /// Present only when this contribution completed the goal
    pub completed: Option<GoalCompleted>,
}

/// A goal together with its derived progress figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub percent_complete: u32,
    pub remaining: Money,
}

impl From<&Goal> for GoalView {
    fn from(goal: &Goal) -> Self {
        Self {
            goal: goal.clone(),
            percent_complete: goal.percent_complete(),
            remaining: goal.remaining(),
        }
    }
}

/// Owned, ordered collection of goals
#[derive(Debug, Clone)]
pub struct GoalLedger {
    goals: Vec<Goal>,
    next_id: GoalId,
}

impl Default for GoalLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalLedger {
    /// Create an empty ledger; the first goal gets id 1
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            next_id: GoalId::new(1),
        }
    }

    /// Create a goal and append it to the end of the list
    pub fn create_goal(&mut self, new_goal: NewGoal) -> FinTrackResult<Goal> {
        new_goal
            .validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let goal = Goal::new(self.next_id, new_goal.name.trim(), new_goal.target)
            .with_current(new_goal.current.unwrap_or_default())
            .with_category(new_goal.category.unwrap_or_default())
            .with_deadline(new_goal.deadline);

        goal.validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        self.next_id = self.next_id.next();
        self.goals.push(goal.clone());

        tracing::debug!(goal_id = %goal.id, name = %goal.name, target = %goal.target, "goal created");

        Ok(goal)
    }

    /// Add savings to a goal
    ///
    /// The saved amount is clamped to the target. A `GoalCompleted` event is
    /// returned only for the contribution that crosses the target; topping up
    /// an already complete goal changes nothing and emits nothing.
    pub fn contribute(&mut self, goal_id: GoalId, amount: Money) -> FinTrackResult<Contribution> {
        if !amount.is_positive() {
            return Err(FinTrackError::Validation(
                GoalValidationError::NonPositiveContribution(amount).to_string(),
            ));
        }

        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| FinTrackError::goal_not_found(goal_id.to_string()))?;

        let crossed = goal.apply_contribution(amount);

        tracing::debug!(
            goal_id = %goal.id,
            amount = %amount,
            current = %goal.current,
            crossed,
            "contribution applied"
        );

        let completed = crossed.then(|| GoalCompleted {
            goal_id: goal.id,
            goal_name: goal.name.clone(),
        });

        Ok(Contribution {
            goal: goal.clone(),
            completed,
        })
    }

    /// Remove a goal, returning it
    ///
    /// Deleting an id that is not in the ledger is a `NotFound` error.
    pub fn delete_goal(&mut self, goal_id: GoalId) -> FinTrackResult<Goal> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| FinTrackError::goal_not_found(goal_id.to_string()))?;

        let goal = self.goals.remove(index);
        tracing::debug!(goal_id = %goal.id, "goal deleted");
        Ok(goal)
    }

    /// Progress of a goal as a whole percentage
    pub fn percent_complete(goal: &Goal) -> u32 {
        goal.percent_complete()
    }

    /// Amount a goal still needs
    pub fn remaining(goal: &Goal) -> Money {
        goal.remaining()
    }

    pub fn get(&self, goal_id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn contains(&self, goal_id: GoalId) -> bool {
        self.get(goal_id).is_some()
    }

    /// Goals in insertion order
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Goals with derived progress, in insertion order
    pub fn views(&self) -> Vec<GoalView> {
        self.goals.iter().map(GoalView::from).collect()
    }

    /// Sum of all targets and of all saved amounts
    pub fn totals(&self) -> (Money, Money) {
        let target = self.goals.iter().map(|g| g.target).sum();
        let saved = self.goals.iter().map(|g| g.current).sum();
        (target, saved)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
