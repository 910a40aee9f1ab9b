//! Insight generation
//!
//! Inspects today's summary and the weekly rollup and emits a short, ranked
//! list of insights. Every rule is evaluated, results are ordered by
//! [`InsightType`] rank and truncated to the configured cap.
//!
//! # Rules
//!
//! - **Celebration**: today's goal is reached and the caller has not yet
//!   celebrated today.
//! - **Streak**: the current streak is at least `streak_threshold_days`.
//! - **Improvement**: this week's average beats the prior week's by at least
//!   `improvement_margin_percent`.
//! - **Pattern**: with caffeine tracking on, most caffeinated drinks land at
//!   or after the reminder end hour (local time).
//! - **Tip**: always eligible, keyed on today's hydration status.

use crate::daily::DailySummary;
use crate::models::{Entry, Settings};
use crate::weekly::WeeklyStats;
use chrono::{FixedOffset, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Insight category, declared in ranking order (most relevant first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightType {
    Celebration,
    Streak,
    Improvement,
    Pattern,
    Tip,
}

/// A short generated message for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub message: String,
    pub icon: String,
}

/// Thresholds for insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub max_insights: usize,
    pub streak_threshold_days: usize,
    pub improvement_margin_percent: f64,
    pub min_caffeine_entries: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_insights: 3,
            streak_threshold_days: 3,
            improvement_margin_percent: 10.0,
            min_caffeine_entries: 2,
        }
    }
}

/// Everything the generator looks at
///
/// `already_celebrated` and `prior_week_average_ml` are external state owned
/// by the caller; the generator never tracks them itself.
#[derive(Debug, Clone)]
pub struct InsightInput<'a> {
    pub today: &'a DailySummary,
    pub weekly: Option<&'a WeeklyStats>,
    pub settings: &'a Settings,
    pub already_celebrated: bool,
    pub prior_week_average_ml: Option<i64>,
    pub utc_offset: FixedOffset,
}

/// Generate ranked insights, at most `config.max_insights`, one per type
pub fn generate_insights(input: &InsightInput<'_>, config: &InsightConfig) -> Vec<Insight> {
    let mut insights: Vec<Insight> = [
        celebration_insight(input),
        streak_insight(input, config),
        improvement_insight(input, config),
        caffeine_pattern_insight(input, config),
        Some(status_tip(input.today)),
    ]
    .into_iter()
    .flatten()
    .collect();

    insights.sort_by_key(|insight| insight.kind);
    insights.dedup_by_key(|insight| insight.kind);
    insights.truncate(config.max_insights);
    insights
}

fn celebration_insight(input: &InsightInput<'_>) -> Option<Insight> {
    if !input.today.is_goal_reached() || input.already_celebrated {
        return None;
    }
    Some(Insight {
        kind: InsightType::Celebration,
        title: "Goal reached!".to_string(),
        message: format!(
            "You drank {} ml today and hit your {} ml goal. Well done!",
            input.today.total_ml(),
            input.today.goal_ml()
        ),
        icon: "🎉".to_string(),
    })
}

fn streak_insight(input: &InsightInput<'_>, config: &InsightConfig) -> Option<Insight> {
    let streak = input.weekly?.streak_days();
    if streak < config.streak_threshold_days {
        return None;
    }
    Some(Insight {
        kind: InsightType::Streak,
        title: format!("{}-day streak", streak),
        message: format!(
            "You've reached your goal {} days in a row. Keep the streak alive!",
            streak
        ),
        icon: "🔥".to_string(),
    })
}

fn improvement_insight(input: &InsightInput<'_>, config: &InsightConfig) -> Option<Insight> {
    let current = input.weekly?.average_daily_ml();
    let prior = input.prior_week_average_ml.filter(|prior| *prior > 0)?;

    let change_percent = (current - prior) as f64 * 100.0 / prior as f64;
    if change_percent < config.improvement_margin_percent {
        return None;
    }
    Some(Insight {
        kind: InsightType::Improvement,
        title: "Trending up".to_string(),
        message: format!(
            "Your daily average rose {:.0}% to {} ml compared with last week.",
            change_percent, current
        ),
        icon: "📈".to_string(),
    })
}

fn caffeine_pattern_insight(input: &InsightInput<'_>, config: &InsightConfig) -> Option<Insight> {
    if !input.settings.track_caffeine {
        return None;
    }

    let caffeinated: Vec<&Entry> = match input.weekly {
        Some(weekly) => weekly
            .daily_summaries()
            .iter()
            .flat_map(|day| day.entries())
            .filter(|entry| entry.source().is_caffeinated())
            .collect(),
        None => input
            .today
            .entries()
            .iter()
            .filter(|entry| entry.source().is_caffeinated())
            .collect(),
    };
    if caffeinated.len() < config.min_caffeine_entries {
        return None;
    }

    let cutoff = u32::from(input.settings.reminder_end_hour);
    let late = caffeinated
        .iter()
        .filter(|entry| {
            local_hour(entry.timestamp_ms(), input.utc_offset).is_some_and(|hour| hour >= cutoff)
        })
        .count();

    if late * 2 <= caffeinated.len() {
        return None;
    }
    Some(Insight {
        kind: InsightType::Pattern,
        title: "Late caffeine".to_string(),
        message: format!(
            "{} of your last {} caffeinated drinks came at or after {}:00. Caffeine late in the day can disturb sleep; try water or herbal tea instead.",
            late,
            caffeinated.len(),
            cutoff
        ),
        icon: "☕".to_string(),
    })
}

fn status_tip(today: &DailySummary) -> Insight {
    let status = today.hydration_status();
    Insight {
        kind: InsightType::Tip,
        title: "Hydration tip".to_string(),
        message: status.tip().to_string(),
        icon: status.icon().to_string(),
    }
}

fn local_hour(timestamp_ms: i64, offset: FixedOffset) -> Option<u32> {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|utc| utc.with_timezone(&offset).hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::summarize_day;
    use crate::sources::SourceKind;
    use crate::status::HydrationStatus;
    use crate::weekly::summarize_week;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    const GOAL: u32 = 2000;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn ts(date: NaiveDate, hour: u32) -> i64 {
        Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
            .timestamp_millis()
    }

    fn entry(date: NaiveDate, amount: i32, source: SourceKind, hour: u32) -> Entry {
        Entry::new(amount, source, ts(date, hour)).unwrap()
    }

    fn day(offset: i64, amounts: &[(i32, SourceKind, u32)]) -> DailySummary {
        let date = start() + Duration::days(offset);
        let entries = amounts
            .iter()
            .map(|(amount, source, hour)| entry(date, *amount, *source, *hour))
            .collect();
        summarize_day(date, entries, GOAL)
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn kinds(insights: &[Insight]) -> Vec<InsightType> {
        insights.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_tip_always_present_for_quiet_day() {
        let today = day(0, &[]);
        let settings = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: None,
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };

        let insights = generate_insights(&input, &InsightConfig::default());
        assert_eq!(kinds(&insights), vec![InsightType::Tip]);
        assert_eq!(insights[0].message, HydrationStatus::Dehydrated.tip());
    }

    #[test]
    fn test_celebration_only_once() {
        let today = day(0, &[(2000, SourceKind::Water, 9)]);
        let settings = Settings::default();
        let mut input = InsightInput {
            today: &today,
            weekly: None,
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };

        let first = generate_insights(&input, &InsightConfig::default());
        assert_eq!(kinds(&first), vec![InsightType::Celebration, InsightType::Tip]);

        input.already_celebrated = true;
        let again = generate_insights(&input, &InsightConfig::default());
        assert_eq!(kinds(&again), vec![InsightType::Tip]);
    }

    #[test]
    fn test_full_ranking_and_cap() {
        let days: Vec<DailySummary> = (0..4)
            .map(|i| {
                day(
                    i,
                    &[
                        (1500, SourceKind::Water, 10),
                        (300, SourceKind::Coffee, 22),
                        (300, SourceKind::Tea, 23),
                    ],
                )
            })
            .collect();
        let today = days[3].clone();
        let weekly = summarize_week(days).unwrap();
        let settings = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: Some(&weekly),
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: Some(1500),
            utc_offset: utc(),
        };

        let all = generate_insights(
            &input,
            &InsightConfig {
                max_insights: 10,
                ..InsightConfig::default()
            },
        );
        assert_eq!(
            kinds(&all),
            vec![
                InsightType::Celebration,
                InsightType::Streak,
                InsightType::Improvement,
                InsightType::Pattern,
                InsightType::Tip,
            ]
        );
        assert_eq!(all[1].title, "4-day streak");

        let capped = generate_insights(&input, &InsightConfig::default());
        assert_eq!(
            kinds(&capped),
            vec![InsightType::Celebration, InsightType::Streak, InsightType::Improvement]
        );
    }

    #[test]
    fn test_streak_below_threshold_is_silent() {
        let days = vec![
            day(0, &[(2000, SourceKind::Water, 9)]),
            day(1, &[(2000, SourceKind::Water, 9)]),
        ];
        let today = days[1].clone();
        let weekly = summarize_week(days).unwrap();
        let settings = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: Some(&weekly),
            settings: &settings,
            already_celebrated: true,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };

        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(!kinds(&insights).contains(&InsightType::Streak));
    }

    #[test]
    fn test_improvement_needs_meaningful_margin() {
        let days = vec![day(0, &[(1050, SourceKind::Water, 9)]), day(1, &[(1050, SourceKind::Water, 9)])];
        let today = days[1].clone();
        let weekly = summarize_week(days).unwrap();
        let settings = Settings::default();
        let mut input = InsightInput {
            today: &today,
            weekly: Some(&weekly),
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: Some(1000),
            utc_offset: utc(),
        };

        // +5% is below the default 10% margin
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(!kinds(&insights).contains(&InsightType::Improvement));

        input.prior_week_average_ml = Some(900);
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(kinds(&insights).contains(&InsightType::Improvement));

        input.prior_week_average_ml = Some(0);
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(!kinds(&insights).contains(&InsightType::Improvement));
    }

    #[test]
    fn test_caffeine_pattern_respects_tracking_flag() {
        let today = day(
            0,
            &[
                (250, SourceKind::Coffee, 22),
                (250, SourceKind::Coffee, 23),
                (250, SourceKind::Tea, 8),
            ],
        );
        let tracking = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: None,
            settings: &tracking,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(kinds(&insights).contains(&InsightType::Pattern));

        let not_tracking = Settings {
            track_caffeine: false,
            ..Settings::default()
        };
        let input = InsightInput {
            settings: &not_tracking,
            ..input
        };
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(!kinds(&insights).contains(&InsightType::Pattern));
    }

    #[test]
    fn test_caffeine_pattern_needs_majority() {
        let today = day(
            0,
            &[
                (250, SourceKind::Coffee, 22),
                (250, SourceKind::Coffee, 9),
                (250, SourceKind::Water, 23),
            ],
        );
        let settings = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: None,
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(!kinds(&insights).contains(&InsightType::Pattern));
    }

    #[test]
    fn test_caffeine_pattern_silent_without_caffeine_when_minimum_is_zero() {
        let today = day(0, &[(500, SourceKind::Water, 23)]);
        let settings = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: None,
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };
        let config = InsightConfig {
            min_caffeine_entries: 0,
            ..InsightConfig::default()
        };

        assert_eq!(kinds(&generate_insights(&input, &config)), vec![InsightType::Tip]);
    }

    #[test]
    fn test_caffeine_pattern_uses_local_hour() {
        // 20:00 UTC is 22:00 at UTC+2, which reaches the default 22:00 cutoff
        let today = day(
            0,
            &[(250, SourceKind::Coffee, 20), (250, SourceKind::Coffee, 20)],
        );
        let settings = Settings::default();
        let mut input = InsightInput {
            today: &today,
            weekly: None,
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(!kinds(&insights).contains(&InsightType::Pattern));

        input.utc_offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let insights = generate_insights(&input, &InsightConfig::default());
        assert!(kinds(&insights).contains(&InsightType::Pattern));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let today = day(0, &[(2100, SourceKind::Water, 9)]);
        let settings = Settings::default();
        let input = InsightInput {
            today: &today,
            weekly: None,
            settings: &settings,
            already_celebrated: false,
            prior_week_average_ml: None,
            utc_offset: utc(),
        };
        let config = InsightConfig::default();
        assert_eq!(generate_insights(&input, &config), generate_insights(&input, &config));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: output respects the cap and never repeats a type
        #[test]
        fn prop_capped_and_unique(
            totals in prop::collection::vec(0i32..4000, 1..=7),
            late_coffees in 0usize..4,
            prior in prop::option::of(0i64..4000),
            celebrated in any::<bool>(),
            cap in 0usize..6,
        ) {
            let days: Vec<DailySummary> = totals
                .iter()
                .enumerate()
                .map(|(i, total)| {
                    let mut items = Vec::new();
                    if *total > 0 {
                        items.push((*total, SourceKind::Water, 12));
                    }
                    for _ in 0..late_coffees {
                        items.push((200, SourceKind::Coffee, 23));
                    }
                    day(i as i64, &items)
                })
                .collect();
            let today = days[days.len() - 1].clone();
            let weekly = summarize_week(days).unwrap();
            let settings = Settings::default();
            let input = InsightInput {
                today: &today,
                weekly: Some(&weekly),
                settings: &settings,
                already_celebrated: celebrated,
                prior_week_average_ml: prior,
                utc_offset: utc(),
            };
            let config = InsightConfig { max_insights: cap, ..InsightConfig::default() };

            let insights = generate_insights(&input, &config);
            prop_assert!(insights.len() <= cap);

            let mut seen = kinds(&insights);
            let before = seen.len();
            seen.dedup();
            prop_assert_eq!(seen.len(), before);
            prop_assert!(insights.windows(2).all(|w| w[0].kind < w[1].kind));
        }
    }
}
