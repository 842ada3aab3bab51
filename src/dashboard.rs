//! The dashboard
//!
//! Ties the goal and expense ledgers to the completion scheduler, the audit
//! trail and a notification sink. Every ledger change made through the
//! dashboard is audited, and every scheduler transition is applied here.
//!
//! Time is passed in by the caller, so the whole state machine can be driven
//! deterministically:
//!
//! ```rust,ignore
//! let mut dashboard = Dashboard::with_sample_data(Settings::default())?;
//! let start = Instant::now();
//! dashboard.contribute(GoalId::new(2), Money::from_minor(40_000), start)?;
//! dashboard.tick(start + Duration::from_millis(500)); // GoalCompleted
//! dashboard.tick(start + Duration::from_millis(5500)); // GoalRemoved
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditTrail};
use crate::config::Settings;
use crate::error::{FinTrackError, FinTrackResult};
use crate::habits::HabitBoard;
use crate::ledger::{
    Contribution, ExpenseLedger, GoalCompleted, GoalLedger, GoalView, NewExpense, NewGoal,
};
use crate::models::{Expense, ExpenseCategory, Goal, GoalId, Money, ReportPeriod};
use crate::notify::{LogNotifier, Notification, Notifier};
use crate::sample;
use crate::scheduler::{CompletionScheduler, CompletionStage, SchedulerEvent};

/// What happened during a `tick`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The completion notice was sent
    GoalCompleted(GoalCompleted),
    /// A completed goal was removed from the ledger
    GoalRemoved(Goal),
}

/// Goals at or above this percentage count as nearly done
pub const NEAR_COMPLETION_PERCENT: u32 = 80;

/// Headline figures for the dashboard's summary cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total_saved: Money,
    pub total_target: Money,
    /// Label of the month the spending figure covers
    pub month: String,
    pub month_spending: Money,
    /// Goals still short of their target
    pub active_goals: usize,
    pub near_completion: usize,
    pub habit_score: Option<u8>,
}

pub struct Dashboard<N: Notifier = LogNotifier> {
    settings: Settings,
    goals: GoalLedger,
    expenses: ExpenseLedger,
    scheduler: CompletionScheduler,
    habits: HabitBoard,
    audit: AuditTrail,
    notifier: N,
}

impl Dashboard<LogNotifier> {
    /// An empty dashboard that sends notifications to the log
    pub fn new(settings: Settings) -> Self {
        Self::with_notifier(settings, LogNotifier)
    }

    /// A dashboard seeded with the demo goals, expenses and habit scores
    pub fn with_sample_data(settings: Settings) -> FinTrackResult<Self> {
        Self::new(settings).seeded()
    }
}

impl<N: Notifier> Dashboard<N> {
    pub fn with_notifier(settings: Settings, notifier: N) -> Self {
        let scheduler = CompletionScheduler::from_settings(&settings.scheduler);
        Self {
            settings,
            goals: GoalLedger::new(),
            expenses: ExpenseLedger::new(),
            scheduler,
            habits: HabitBoard::default(),
            audit: AuditTrail::new(),
            notifier,
        }
    }

    /// Replace the audit trail, e.g. with one that mirrors to a file
    pub fn with_audit(mut self, audit: AuditTrail) -> Self {
        self.audit = audit;
        self
    }

    /// Load the demo data. Seeding goes straight to the ledgers and is not
    /// audited.
    pub fn seeded(mut self) -> FinTrackResult<Self> {
        for new_goal in sample::goals() {
            self.goals.create_goal(new_goal)?;
        }
        for new_expense in sample::expenses() {
            self.expenses.create_expense(new_expense)?;
        }
        self.habits = HabitBoard::new(sample::habits())?;
        Ok(self)
    }

    pub fn create_goal(&mut self, new_goal: NewGoal) -> FinTrackResult<Goal> {
        let goal = self.goals.create_goal(new_goal)?;
        self.audit.record(AuditEntry::goal_created(&goal));
        Ok(goal)
    }

    /// Add savings to a goal; a contribution that completes it starts the
    /// notify-then-remove sequence at `now`
    pub fn contribute(
        &mut self,
        goal_id: GoalId,
        amount: Money,
        now: Instant,
    ) -> FinTrackResult<Contribution> {
        let before = self
            .goals
            .get(goal_id)
            .cloned()
            .ok_or_else(|| FinTrackError::goal_not_found(goal_id.to_string()))?;

        let contribution = self.goals.contribute(goal_id, amount)?;
        let after = &contribution.goal;

        // A goal already at its target absorbs the contribution unchanged
        if before.current != after.current {
            self.audit.record(AuditEntry::goal_saved(&before, after));
        }

        if let Some(completed) = &contribution.completed {
            self.scheduler.schedule(completed.clone(), now);
        }

        Ok(contribution)
    }

    /// Delete a goal, cancelling its completion timers first
    pub fn delete_goal(&mut self, goal_id: GoalId) -> FinTrackResult<Goal> {
        if !self.goals.contains(goal_id) {
            return Err(FinTrackError::goal_not_found(goal_id.to_string()));
        }

        self.scheduler.cancel(goal_id);
        let goal = self.goals.delete_goal(goal_id)?;
        self.audit.record(AuditEntry::goal_deleted(&goal));
        Ok(goal)
    }

    pub fn create_expense(&mut self, new_expense: NewExpense) -> FinTrackResult<Expense> {
        let expense = self.expenses.create_expense(new_expense)?;
        self.audit.record(AuditEntry::expense_recorded(&expense));
        Ok(expense)
    }

    /// Run every completion timer due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<DashboardEvent> {
        let mut events = Vec::new();

        for event in self.scheduler.poll(now) {
            match event {
                SchedulerEvent::Notify(completed) => {
                    self.notifier
                        .notify(&Notification::goal_completed(&completed));
                    events.push(DashboardEvent::GoalCompleted(completed));
                }
                SchedulerEvent::Remove(goal_id) => match self.goals.delete_goal(goal_id) {
                    Ok(goal) => {
                        self.audit.record(AuditEntry::goal_cleared(&goal));
                        events.push(DashboardEvent::GoalRemoved(goal));
                    }
                    Err(err) if err.is_not_found() => {
                        tracing::debug!(goal_id = %goal_id, "completed goal already gone");
                    }
                    Err(err) => {
                        tracing::warn!(goal_id = %goal_id, error = %err, "failed to remove completed goal");
                    }
                },
            }
        }

        events
    }

    /// When the next completion timer is due
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Completion stage of a goal; anything not in the ledger is `Removed`
    pub fn completion_stage(&self, goal_id: GoalId) -> CompletionStage {
        if self.goals.contains(goal_id) {
            self.scheduler.stage(goal_id)
        } else {
            CompletionStage::Removed
        }
    }

    /// Summary figures, with spending taken from the month containing `today`
    pub fn overview(&self, today: NaiveDate) -> Overview {
        let (total_target, total_saved) = self.goals.totals();
        let (start, end) = ReportPeriod::Month.range_containing(today);

        let open: Vec<&Goal> = self
            .goals
            .goals()
            .iter()
            .filter(|g| !g.is_completed())
            .collect();
        let near_completion = open
            .iter()
            .filter(|g| g.percent_complete() >= NEAR_COMPLETION_PERCENT)
            .count();

        Overview {
            total_saved,
            total_target,
            month: ReportPeriod::Month.label(today),
            month_spending: self.expenses.total_for_period(start, end),
            active_goals: open.len(),
            near_completion,
            habit_score: self.habits.overall_score(),
        }
    }

    pub fn goal_views(&self) -> Vec<GoalView> {
        self.goals.views()
    }

    pub fn goals(&self) -> &GoalLedger {
        &self.goals
    }

    pub fn expenses(&self) -> &ExpenseLedger {
        &self.expenses
    }

    pub fn category_totals(&self) -> BTreeMap<ExpenseCategory, Money> {
        self.expenses.category_totals()
    }

    pub fn habit_board(&self) -> &HabitBoard {
        &self.habits
    }

    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation, Origin};
    use crate::notify::NotificationQueue;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn money(minor: i64) -> Money {
        Money::from_minor(minor)
    }

    fn dashboard() -> Dashboard<NotificationQueue> {
        Dashboard::with_notifier(Settings::default(), NotificationQueue::new())
    }

    fn dashboard_with_laptop() -> (Dashboard<NotificationQueue>, GoalId) {
        let mut dash = dashboard();
        let goal = dash
            .create_goal(NewGoal::new("New Laptop", money(150_000)).with_current(money(120_000)))
            .unwrap();
        (dash, goal.id)
    }

    #[test]
    fn test_sample_dashboard() {
        let dash = Dashboard::with_sample_data(Settings::default()).unwrap();
        assert_eq!(dash.goals().len(), 3);
        assert_eq!(dash.expenses().len(), 5);
        assert_eq!(dash.habit_board().overall_score(), Some(74));
        assert!(dash.audit().is_empty());
    }

    #[test]
    fn test_completion_notifies_then_removes() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();

        let contribution = dash.contribute(id, money(40_000), start).unwrap();
        assert!(contribution.completed.is_some());
        assert_eq!(contribution.goal.current, money(150_000));
        assert_eq!(dash.completion_stage(id), CompletionStage::PendingNotify);

        assert!(dash.tick(start + ms(499)).is_empty());

        let events = dash.tick(start + ms(500));
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], DashboardEvent::GoalCompleted(c) if c.goal_id == id));
        let notes = dash.notifier_mut().drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(
            notes[0].message,
            "Congratulations! You've reached your goal: New Laptop"
        );
        assert!(dash.goals().contains(id));

        assert!(dash.tick(start + ms(5_499)).is_empty());
        let events = dash.tick(start + ms(5_500));
        assert!(matches!(&events[0], DashboardEvent::GoalRemoved(g) if g.id == id));
        assert!(!dash.goals().contains(id));
        assert_eq!(dash.completion_stage(id), CompletionStage::Removed);

        let last = &dash.audit().entries()[2];
        assert_eq!(last.operation, Operation::Delete);
        assert_eq!(last.origin, Origin::Scheduler);
    }

    #[test]
    fn test_late_tick_yields_notify_before_remove() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();
        dash.contribute(id, money(40_000), start).unwrap();

        let events = dash.tick(start + ms(10_000));
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DashboardEvent::GoalCompleted(_)));
        assert!(matches!(events[1], DashboardEvent::GoalRemoved(_)));
    }

    #[test]
    fn test_further_contribution_does_not_reschedule() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();
        dash.contribute(id, money(40_000), start).unwrap();

        let again = dash.contribute(id, money(1_000), start + ms(100)).unwrap();
        assert!(again.completed.is_none());
        assert_eq!(again.goal.current, money(150_000));

        let events = dash.tick(start + ms(600));
        assert_eq!(events.len(), 1);
        assert_eq!(dash.notifier().len(), 1);
    }

    #[test]
    fn test_delete_during_notify_wait_cancels_everything() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();
        dash.contribute(id, money(40_000), start).unwrap();

        dash.delete_goal(id).unwrap();
        assert_eq!(dash.next_due(), None);
        assert!(dash.tick(start + ms(10_000)).is_empty());
        assert!(dash.notifier().is_empty());
    }

    #[test]
    fn test_delete_during_delete_wait_makes_removal_noop() {
        let (mut dash, id) = dashboard_with_laptop();
        let other = dash
            .create_goal(NewGoal::new("Bike", money(50_000)))
            .unwrap();
        let start = Instant::now();
        dash.contribute(id, money(40_000), start).unwrap();
        dash.tick(start + ms(500));

        dash.delete_goal(id).unwrap();
        assert!(dash.tick(start + ms(6_000)).is_empty());
        assert_eq!(dash.goals().len(), 1);
        assert!(dash.goals().contains(other.id));
    }

    #[test]
    fn test_delete_missing_goal() {
        let mut dash = dashboard();
        let err = dash.delete_goal(GoalId::new(42)).unwrap_err();
        assert!(err.is_not_found());
        assert!(dash.audit().is_empty());
    }

    #[test]
    fn test_failed_contribution_changes_nothing() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();

        assert!(dash.contribute(id, money(0), start).unwrap_err().is_validation());
        assert!(dash
            .contribute(GoalId::new(99), money(10), start)
            .unwrap_err()
            .is_not_found());

        assert_eq!(dash.goals().get(id).unwrap().current, money(120_000));
        assert_eq!(dash.next_due(), None);
        assert_eq!(dash.audit().len(), 1);
    }

    #[test]
    fn test_mutations_are_audited() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();
        dash.contribute(id, money(10_000), start).unwrap();
        dash.create_expense(NewExpense::new("Petrol", money(2_500), "transportation"))
            .unwrap();
        dash.delete_goal(id).unwrap();

        let ops: Vec<_> = dash
            .audit()
            .entries()
            .iter()
            .map(|e| (e.operation, e.entity_type))
            .collect();
        assert_eq!(
            ops,
            vec![
                (Operation::Create, EntityType::Goal),
                (Operation::Update, EntityType::Goal),
                (Operation::Create, EntityType::Expense),
                (Operation::Delete, EntityType::Goal),
            ]
        );
        assert_eq!(
            dash.audit().entries()[1].summary.as_deref(),
            Some("current: 1200.00 -> 1300.00")
        );
    }

    #[test]
    fn test_goal_created_complete_schedules_nothing() {
        let mut dash = dashboard();
        let goal = dash
            .create_goal(NewGoal::new("Done", money(1_000)).with_current(money(5_000)))
            .unwrap();
        assert!(goal.is_completed());
        assert_eq!(dash.next_due(), None);
        assert_eq!(dash.completion_stage(goal.id), CompletionStage::Active);
    }

    #[test]
    fn test_category_totals() {
        let mut dash = dashboard();
        dash.create_expense(NewExpense::new("Grocery", money(8_542), "Food"))
            .unwrap();
        dash.create_expense(NewExpense::new("Rent", money(25_000), "Housing"))
            .unwrap();
        dash.create_expense(NewExpense::new("Chai", money(250), "Food"))
            .unwrap();

        let totals = dash.category_totals();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&ExpenseCategory::Food], money(8_792));
        assert_eq!(totals[&ExpenseCategory::Housing], money(25_000));
    }

    #[test]
    fn test_contribution_to_completed_goal_is_not_audited() {
        let (mut dash, id) = dashboard_with_laptop();
        let start = Instant::now();
        dash.contribute(id, money(40_000), start).unwrap();
        assert_eq!(dash.audit().len(), 2);

        dash.contribute(id, money(5_000), start + ms(100)).unwrap();
        assert_eq!(dash.audit().len(), 2);
        assert_eq!(
            dash.audit().entries()[1].summary.as_deref(),
            Some("current: 1200.00 -> 1500.00")
        );
    }

    #[test]
    fn test_overview_of_sample_data() {
        let dash = Dashboard::with_sample_data(Settings::default()).unwrap();
        let overview = dash.overview(NaiveDate::from_ymd_opt(2024, 3, 28).unwrap());

        assert_eq!(overview.total_saved, money(455_000));
        assert_eq!(overview.total_target, money(1_650_000));
        assert_eq!(overview.month, "March 2024");
        assert_eq!(overview.month_spending, money(36_941));
        assert_eq!(overview.active_goals, 3);
        assert_eq!(overview.near_completion, 1);
        assert_eq!(overview.habit_score, Some(74));
    }

    #[test]
    fn test_overview_tracks_completion_and_month() {
        let (mut dash, id) = dashboard_with_laptop();
        dash.create_goal(NewGoal::new("Bike", money(50_000)).with_current(money(45_000)))
            .unwrap();
        let april = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        dash.create_expense(NewExpense::new("Petrol", money(2_500), "transportation").on(april))
            .unwrap();

        let overview = dash.overview(april);
        assert_eq!(overview.active_goals, 2);
        assert_eq!(overview.near_completion, 2);
        assert_eq!(overview.month_spending, money(2_500));
        assert_eq!(overview.habit_score, None);

        dash.contribute(id, money(30_000), Instant::now()).unwrap();
        let overview = dash.overview(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(overview.active_goals, 1);
        assert_eq!(overview.near_completion, 1);
        assert_eq!(overview.total_saved, money(195_000));
        assert_eq!(overview.month_spending, Money::zero());
    }

    #[test]
    fn test_stage_of_unknown_goal_is_removed() {
        let dash = dashboard();
        assert_eq!(dash.completion_stage(GoalId::new(9)), CompletionStage::Removed);
    }
}
