//! Daily aggregation
//!
//! Reduces one calendar day's entries into a [`DailySummary`]. The caller
//! pre-filters entries by date; the aggregator never inspects timestamps for
//! date membership and never reorders or drops entries.

use crate::models::Entry;
use crate::status::{classify_status, HydrationStatus};
use crate::types::DailySummaryView;
use chrono::NaiveDate;
use serde::Serialize;

/// Upper bound for displayed goal progress
pub const MAX_PROGRESS_PERCENT: f64 = 150.0;

/// One day's intake, with stored totals and derived progress accessors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "DailySummaryView")]
pub struct DailySummary {
    date: NaiveDate,
    entries: Vec<Entry>,
    goal_ml: u32,
    total_ml: i64,
    effective_hydration_ml: i64,
}

/// Summarize a day's entries against a goal
///
/// Totals are accumulated in a single pass. The weighted sum is rounded once
/// at the end so per-entry rounding error cannot compound.
pub fn summarize_day(date: NaiveDate, entries: Vec<Entry>, goal_ml: u32) -> DailySummary {
    let (total_ml, weighted_ml) = entries
        .iter()
        .fold((0i64, 0f64), |(total, weighted), entry| {
            (total + entry.amount_ml() as i64, weighted + entry.effective_ml())
        });

    DailySummary {
        date,
        entries,
        goal_ml,
        total_ml,
        effective_hydration_ml: weighted_ml.round() as i64,
    }
}

impl DailySummary {
    /// An empty day, used to fill gaps in weekly windows
    pub fn empty(date: NaiveDate, goal_ml: u32) -> Self {
        summarize_day(date, Vec::new(), goal_ml)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn goal_ml(&self) -> u32 {
        self.goal_ml
    }

    pub fn total_ml(&self) -> i64 {
        self.total_ml
    }

    pub fn effective_hydration_ml(&self) -> i64 {
        self.effective_hydration_ml
    }

    /// Progress towards the goal, clamped to `[0, 150]`; 0 when the goal is 0
    pub fn progress_percent(&self) -> f64 {
        if self.goal_ml == 0 {
            return 0.0;
        }
        let raw = self.total_ml as f64 * 100.0 / self.goal_ml as f64;
        raw.clamp(0.0, MAX_PROGRESS_PERCENT)
    }

    pub fn is_goal_reached(&self) -> bool {
        self.total_ml >= self.goal_ml as i64
    }

    pub fn remaining_ml(&self) -> i64 {
        (self.goal_ml as i64 - self.total_ml).max(0)
    }

    pub fn glasses_logged(&self) -> usize {
        self.entries.len()
    }

    pub fn hydration_status(&self) -> HydrationStatus {
        classify_status(self.progress_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SourceKind;
    use proptest::prelude::*;

    const TS: i64 = 1_710_000_000_000;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn entry(id: &str, amount_ml: i32, source: SourceKind) -> Entry {
        Entry::with_id(id, amount_ml, source, TS).unwrap()
    }

    #[test]
    fn test_empty_day() {
        let summary = summarize_day(date(), vec![], 2500);
        assert_eq!(summary.total_ml(), 0);
        assert_eq!(summary.effective_hydration_ml(), 0);
        assert_eq!(summary.progress_percent(), 0.0);
        assert_eq!(summary.hydration_status(), HydrationStatus::Dehydrated);
        assert_eq!(summary.glasses_logged(), 0);
        assert_eq!(summary.remaining_ml(), 2500);
        assert!(!summary.is_goal_reached());
    }

    #[test]
    fn test_mixed_sources_scenario() {
        let entries = vec![
            entry("a", 500, SourceKind::Water),
            entry("b", 300, SourceKind::Coffee),
            entry("c", 700, SourceKind::Water),
        ];
        let summary = summarize_day(date(), entries, 2500);

        assert_eq!(summary.total_ml(), 1500);
        assert_eq!(summary.effective_hydration_ml(), 1455);
        assert!((summary.progress_percent() - 60.0).abs() < 1e-9);
        assert_eq!(summary.hydration_status(), HydrationStatus::Moderate);
        assert_eq!(summary.remaining_ml(), 1000);
        assert_eq!(summary.glasses_logged(), 3);
    }

    #[test]
    fn test_progress_clamped_above_goal() {
        let entries = vec![
            entry("a", 1000, SourceKind::Water),
            entry("b", 1000, SourceKind::Water),
            entry("c", 1000, SourceKind::Water),
        ];
        let summary = summarize_day(date(), entries, 2000);

        assert_eq!(summary.total_ml(), 3000);
        assert_eq!(summary.progress_percent(), 150.0);
        assert_eq!(summary.remaining_ml(), 0);
        assert!(summary.is_goal_reached());
        assert_eq!(summary.hydration_status(), HydrationStatus::Excellent);
    }

    #[test]
    fn test_zero_goal_progress_is_zero() {
        let summary = summarize_day(date(), vec![entry("a", 500, SourceKind::Water)], 0);
        assert_eq!(summary.progress_percent(), 0.0);
        assert_eq!(summary.remaining_ml(), 0);
    }

    #[test]
    fn test_entry_order_preserved() {
        let entries = vec![
            entry("late", 200, SourceKind::Tea),
            entry("early", 300, SourceKind::Water),
            entry("middle", 250, SourceKind::Juice),
        ];
        let summary = summarize_day(date(), entries, 2500);
        let ids: Vec<&str> = summary.entries().iter().map(Entry::id).collect();
        assert_eq!(ids, vec!["late", "early", "middle"]);
    }

    #[test]
    fn test_rounding_happens_once() {
        // 5 x 5.25 ml: per-entry rounding would give 25, rounding the sum gives 26
        let entries: Vec<Entry> = (0..5)
            .map(|i| entry(&format!("m{}", i), 5, SourceKind::Milk))
            .collect();
        let summary = summarize_day(date(), entries, 2500);
        assert_eq!(summary.effective_hydration_ml(), 26);
    }

    #[test]
    fn test_serialized_summary_includes_derived_fields() {
        let summary = summarize_day(date(), vec![entry("a", 2000, SourceKind::Water)], 2500);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["total_ml"], 2000);
        assert_eq!(json["progress_percent"], 80.0);
        assert_eq!(json["hydration_status"], "GOOD");
        assert_eq!(json["is_goal_reached"], false);
        assert_eq!(json["remaining_ml"], 500);
        assert_eq!(json["glasses_logged"], 1);
    }

    fn arb_entries() -> impl Strategy<Value = Vec<Entry>> {
        prop::collection::vec(
            (1i32..=2000, prop::sample::select(SourceKind::ALL.to_vec())),
            0..40,
        )
        .prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (amount, source))| {
                    Entry::with_id(format!("e{}", i), amount, source, TS).unwrap()
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: total equals the exact sum of amounts
        #[test]
        fn prop_total_is_exact_sum(entries in arb_entries(), goal in 0u32..10000) {
            let expected: i64 = entries.iter().map(|e| e.amount_ml() as i64).sum();
            let summary = summarize_day(date(), entries, goal);
            prop_assert_eq!(summary.total_ml(), expected);
        }

        /// Property: effective hydration is within one unit of the unrounded weighted sum
        #[test]
        fn prop_effective_within_rounding_bound(entries in arb_entries()) {
            let weighted: f64 = entries.iter().map(Entry::effective_ml).sum();
            let summary = summarize_day(date(), entries, 2500);
            prop_assert!((summary.effective_hydration_ml() as f64 - weighted).abs() <= 1.0,
                "effective {} vs weighted {}", summary.effective_hydration_ml(), weighted);
        }

        /// Property: progress stays within [0, 150]
        #[test]
        fn prop_progress_clamped(entries in arb_entries(), goal in 0u32..5000) {
            let summary = summarize_day(date(), entries, goal);
            let progress = summary.progress_percent();
            prop_assert!((0.0..=150.0).contains(&progress), "progress {}", progress);
        }

        /// Property: remaining is never negative and closes the gap to the goal
        #[test]
        fn prop_remaining_non_negative(entries in arb_entries(), goal in 0u32..5000) {
            let summary = summarize_day(date(), entries, goal);
            prop_assert!(summary.remaining_ml() >= 0);
            if !summary.is_goal_reached() {
                prop_assert_eq!(summary.remaining_ml() + summary.total_ml(), goal as i64);
            }
        }
    }
}
