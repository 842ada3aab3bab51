//! Habit board
//!
//! The set of per-category habit scores shown on the dashboard, with the
//! overall score and trend counts derived from them.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{HabitScore, HabitTrend};

/// How many categories moved in each direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrendCounts {
    pub improved: usize,
    pub neutral: usize,
    pub worsened: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HabitBoard {
    scores: Vec<HabitScore>,
}

impl HabitBoard {
    /// Build a board; every score must be at most 100 and each category may
    /// appear only once
    pub fn new(scores: Vec<HabitScore>) -> FinTrackResult<Self> {
        let mut seen = HashSet::new();
        for habit in &scores {
            if habit.score > 100 {
                return Err(FinTrackError::Validation(format!(
                    "habit score for {} must be between 0 and 100, got {}",
                    habit.category, habit.score
                )));
            }
            if !seen.insert(habit.category) {
                return Err(FinTrackError::Validation(format!(
                    "duplicate habit score for {}",
                    habit.category
                )));
            }
        }
        Ok(Self { scores })
    }

    pub fn scores(&self) -> &[HabitScore] {
        &self.scores
    }

    /// Rounded mean of all scores, `None` for an empty board
    pub fn overall_score(&self) -> Option<u8> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: u32 = self.scores.iter().map(|h| u32::from(h.score)).sum();
        let count = self.scores.len() as u32;
        // Half-up; the mean of values <= 100 is <= 100
        let rounded = (2 * sum + count) / (2 * count);
        u8::try_from(rounded).ok()
    }

    pub fn trend_counts(&self) -> TrendCounts {
        self.scores
            .iter()
            .fold(TrendCounts::default(), |mut counts, habit| {
                match habit.trend {
                    HabitTrend::Improved => counts.improved += 1,
                    HabitTrend::Neutral => counts.neutral += 1,
                    HabitTrend::Worsened => counts.worsened += 1,
                }
                counts
            })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
