//! Delayed goal completion
//!
//! When a contribution completes a goal, two things happen later: a
//! notification after a short settle delay, then removal of the goal once it
//! has been on screen for a while. Each goal moves through
//! `Active -> PendingNotify -> PendingDelete -> Removed`, and holds at most one
//! timer of each kind. Only pending goals are tracked: once the removal fires
//! or the timers are cancelled the goal is forgotten and reads as `Active`
//! again, so the owner of the ledger decides whether it is `Removed`.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::settings::SchedulerSettings;
use crate::ledger::GoalCompleted;
use crate::models::GoalId;

use super::timer::TimerQueue;

/// Where a goal is in the completion sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStage {
    /// No completion pending
    Active,
    /// Completed; waiting to announce it
    PendingNotify,
    /// Announced; waiting to remove it
    PendingDelete,
    /// The goal is no longer in its ledger
    Removed,
}

/// Something the scheduler wants done
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Tell the user the goal is complete
    Notify(GoalCompleted),
    /// Remove the goal from its ledger
    Remove(GoalId),
}

#[derive(Debug)]
enum PendingAction {
    Notify(GoalCompleted),
    Remove,
}

/// Timers driving the notify-then-remove sequence, keyed by goal id
#[derive(Debug)]
pub struct CompletionScheduler {
    timers: TimerQueue<GoalId, PendingAction>,
    stages: HashMap<GoalId, CompletionStage>,
    notify_delay: Duration,
    auto_delete_delay: Duration,
}

impl Default for CompletionScheduler {
    fn default() -> Self {
        Self::from_settings(&SchedulerSettings::default())
    }
}

impl CompletionScheduler {
    pub fn new(notify_delay: Duration, auto_delete_delay: Duration) -> Self {
        Self {
            timers: TimerQueue::new(),
            stages: HashMap::new(),
            notify_delay,
            auto_delete_delay,
        }
    }

    pub fn from_settings(settings: &SchedulerSettings) -> Self {
        Self::new(settings.notify_delay(), settings.auto_delete_delay())
    }

    /// Start the completion sequence for a goal
    ///
    /// Returns `false` and arms nothing if the goal is already pending.
    pub fn schedule(&mut self, completed: GoalCompleted, now: Instant) -> bool {
        let goal_id = completed.goal_id;
        if matches!(
            self.stage(goal_id),
            CompletionStage::PendingNotify | CompletionStage::PendingDelete
        ) {
            tracing::debug!(goal_id = %goal_id, "completion already pending, not rescheduling");
            return false;
        }

        self.timers.arm(
            goal_id,
            now + self.notify_delay,
            PendingAction::Notify(completed),
        );
        self.stages.insert(goal_id, CompletionStage::PendingNotify);

        tracing::debug!(goal_id = %goal_id, delay = ?self.notify_delay, "completion notice armed");
        true
    }

    /// Fire every timer due at or before `now`, in deadline order
    ///
    /// The removal timer is armed relative to the notification's deadline, so
    /// a single late poll can yield both events for one goal, notify first.
    pub fn poll(&mut self, now: Instant) -> Vec<SchedulerEvent> {
        let mut events = Vec::new();

        while let Some(fired) = self.timers.pop_due(now) {
            match fired.payload {
                PendingAction::Notify(completed) => {
                    let goal_id = completed.goal_id;
                    self.timers.arm(
                        goal_id,
                        fired.due + self.auto_delete_delay,
                        PendingAction::Remove,
                    );
                    self.stages.insert(goal_id, CompletionStage::PendingDelete);
                    tracing::info!(goal_id = %goal_id, name = %completed.goal_name, "goal completion notice due");
                    events.push(SchedulerEvent::Notify(completed));
                }
                PendingAction::Remove => {
                    self.stages.remove(&fired.key);
                    tracing::info!(goal_id = %fired.key, "completed goal removal due");
                    events.push(SchedulerEvent::Remove(fired.key));
                }
            }
        }

        events
    }

    /// Cancel any pending timers for a goal
    ///
    /// Returns the number of timers cancelled.
    pub fn cancel(&mut self, goal_id: GoalId) -> usize {
        let cancelled = self.timers.cancel_key(goal_id);
        if self.stages.remove(&goal_id).is_some() {
            tracing::debug!(goal_id = %goal_id, cancelled, "completion timers cancelled");
        }
        cancelled
    }

    pub fn stage(&self, goal_id: GoalId) -> CompletionStage {
        self.stages
            .get(&goal_id)
            .copied()
            .unwrap_or(CompletionStage::Active)
    }

    /// Earliest time `poll` has something to do
    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    /// Number of armed timers
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    pub fn notify_delay(&self) -> Duration {
        self.notify_delay
    }

    pub fn auto_delete_delay(&self) -> Duration {
        self.auto_delete_delay
    }
}
