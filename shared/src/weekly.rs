//! Weekly aggregation
//!
//! Rolls up to seven consecutive [`DailySummary`] values into
//! [`WeeklyStats`]: totals, average, best day and the current streak.

use crate::daily::DailySummary;
use crate::errors::{HydrationError, HydrationResult};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Longest window the weekly view covers
pub const DAYS_PER_WEEK: usize = 7;

/// Rollup of one week window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    week_start: NaiveDate,
    daily_summaries: Vec<DailySummary>,
    average_daily_ml: i64,
    goal_reached_days: usize,
    total_ml: i64,
    best_day: Option<DailySummary>,
    streak_days: usize,
}

/// Summarize consecutive days, oldest first
///
/// Requires one summary per calendar day starting at the first summary's
/// date. Callers synthesize empty days with [`fill_week`].
pub fn summarize_week(daily_summaries: Vec<DailySummary>) -> HydrationResult<WeeklyStats> {
    let first = daily_summaries.first().ok_or_else(|| {
        HydrationError::InsufficientData("weekly stats need at least one day".to_string())
    })?;
    let week_start = first.date();

    if daily_summaries.len() > DAYS_PER_WEEK {
        return Err(HydrationError::InvalidWeek(format!(
            "expected at most {} days, got {}",
            DAYS_PER_WEEK,
            daily_summaries.len()
        )));
    }

    for (offset, summary) in daily_summaries.iter().enumerate() {
        let expected = week_start + Duration::days(offset as i64);
        if summary.date() != expected {
            return Err(HydrationError::InvalidWeek(format!(
                "expected {} at position {}, got {}",
                expected,
                offset,
                summary.date()
            )));
        }
    }

    let total_ml: i64 = daily_summaries.iter().map(DailySummary::total_ml).sum();
    let days = daily_summaries.len() as i64;
    let average_daily_ml = (total_ml + days / 2) / days;

    let goal_reached_days = daily_summaries
        .iter()
        .filter(|s| s.is_goal_reached())
        .count();

    // Strictly greater keeps the earliest date on ties
    let best_day = daily_summaries
        .iter()
        .fold(None::<&DailySummary>, |best, summary| match best {
            Some(b) if b.total_ml() >= summary.total_ml() => Some(b),
            _ => Some(summary),
        })
        .cloned();

    let streak_days = daily_summaries
        .iter()
        .rev()
        .take_while(|s| s.is_goal_reached())
        .count();

    Ok(WeeklyStats {
        week_start,
        daily_summaries,
        average_daily_ml,
        goal_reached_days,
        total_ml,
        best_day,
        streak_days,
    })
}

/// Build one summary per day from `week_start`, filling gaps with empty days
pub fn fill_week(
    week_start: NaiveDate,
    days: usize,
    goal_ml: u32,
    mut known: HashMap<NaiveDate, DailySummary>,
) -> Vec<DailySummary> {
    (0..days)
        .map(|offset| {
            let date = week_start + Duration::days(offset as i64);
            known
                .remove(&date)
                .unwrap_or_else(|| DailySummary::empty(date, goal_ml))
        })
        .collect()
}

impl WeeklyStats {
    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Daily summaries, oldest first
    pub fn daily_summaries(&self) -> &[DailySummary] {
        &self.daily_summaries
    }

    pub fn average_daily_ml(&self) -> i64 {
        self.average_daily_ml
    }

    pub fn goal_reached_days(&self) -> usize {
        self.goal_reached_days
    }

    pub fn total_ml(&self) -> i64 {
        self.total_ml
    }

    pub fn best_day(&self) -> Option<&DailySummary> {
        self.best_day.as_ref()
    }

    /// Consecutive goal-reached days ending at the most recent day
    pub fn streak_days(&self) -> usize {
        self.streak_days
    }

    /// Days in the window with at least one entry
    pub fn days_with_entries(&self) -> usize {
        self.daily_summaries
            .iter()
            .filter(|s| s.glasses_logged() > 0)
            .count()
    }
}
