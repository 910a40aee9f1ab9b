//! Hydration tracking service
//!
//! Provides the feature-level operations:
//! - Logging entries against the user's local day
//! - Daily and weekly aggregation over stored entries
//! - Insight generation with once-per-day celebration
//! - Settings updates and goal recommendation
//! - Feature state composition and intent handling

use crate::clock::{self, Clock, SystemClock};
use crate::config::AppConfig;
use crate::error::ServiceResult;
use crate::repositories::HydrationRepository;
use chrono::{Duration, FixedOffset, NaiveDate};
use hydration_tracker_shared::weekly::DAYS_PER_WEEK;
use hydration_tracker_shared::{
    fill_week, generate_insights, recommended_goal_ml, summarize_day, summarize_week,
    validation::FieldError, ActivityLevel, DailySummary, Entry, FeatureParts, FeatureState,
    HydrationError, Insight, InsightInput, InsightType, Settings, SourceKind, UiEvent, UiFlags,
    WeeklyStats,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// User intents handled by the tracker
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AddEntry { amount_ml: i32, source: SourceKind },
    UpdateSettings(Settings),
    ApplyRecommendedGoal { weight_kg: f64, activity: ActivityLevel },
    Ui(UiEvent),
}

/// Hydration tracker over a repository and a clock
pub struct HydrationTracker<R, C = SystemClock> {
    repository: R,
    clock: C,
    config: AppConfig,
}

impl<R: HydrationRepository> HydrationTracker<R, SystemClock> {
    pub fn new(repository: R, config: AppConfig) -> Self {
        Self::with_clock(repository, SystemClock, config)
    }
}

impl<R: HydrationRepository, C: Clock> HydrationTracker<R, C> {
    pub fn with_clock(repository: R, clock: C, config: AppConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn offset(&self) -> FixedOffset {
        self.config.tracker.utc_offset()
    }

    /// Today's local date
    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.offset())
    }

    /// Saved settings, or defaults when none were saved
    pub async fn settings(&self) -> ServiceResult<Settings> {
        Ok(self.repository.load_settings().await?.unwrap_or_default())
    }

    /// Validate and persist settings
    pub async fn update_settings(&self, settings: Settings) -> ServiceResult<Settings> {
        let settings = settings.validated()?;
        self.repository.save_settings(&settings).await?;
        info!(
            daily_goal_ml = settings.daily_goal_ml,
            track_caffeine = settings.track_caffeine,
            "Settings updated"
        );
        Ok(settings)
    }

    /// Replace the daily goal with one computed from body weight and activity
    pub async fn apply_recommended_goal(
        &self,
        weight_kg: f64,
        activity: ActivityLevel,
    ) -> ServiceResult<Settings> {
        let goal = recommended_goal_ml(weight_kg, activity)?;
        let settings = Settings {
            daily_goal_ml: goal,
            ..self.settings().await?
        };
        debug!(weight_kg, ?activity, goal, "Applying recommended goal");
        self.update_settings(settings).await
    }

    /// Log a drink, at the current instant unless `timestamp_ms` is given
    pub async fn log_entry(
        &self,
        amount_ml: i32,
        source: SourceKind,
        timestamp_ms: Option<i64>,
    ) -> ServiceResult<Entry> {
        let timestamp_ms = timestamp_ms.unwrap_or_else(|| self.clock.now_ms());
        let entry = Entry::new(amount_ml, source, timestamp_ms)?;
        let date = clock::local_date(entry.timestamp_ms(), self.offset()).ok_or_else(|| {
            HydrationError::InvalidEntry(
                FieldError::new("timestamp_ms", "has no local date at the configured offset")
                    .user_message(),
            )
        })?;

        self.repository.append_entry(date, entry.clone()).await?;

        info!(
            entry_id = %entry.id(),
            amount_ml,
            source = %source,
            %date,
            "Logged hydration entry"
        );
        Ok(entry)
    }

    /// Summary for one local day
    pub async fn day_summary(&self, date: NaiveDate, goal_ml: u32) -> ServiceResult<DailySummary> {
        let entries = self.repository.entries_for_date(date).await?;
        Ok(summarize_day(date, entries, goal_ml))
    }

    /// Summary for today under the saved goal
    pub async fn today_summary(&self) -> ServiceResult<DailySummary> {
        let settings = self.settings().await?;
        self.day_summary(self.today(), settings.daily_goal_ml).await
    }

    /// Stats for the seven days ending on `end_date`
    ///
    /// Returns `None` while fewer than `min_history_days` of those days have
    /// entries. Every day is judged against the current goal.
    pub async fn weekly_stats(
        &self,
        end_date: NaiveDate,
        goal_ml: u32,
    ) -> ServiceResult<Option<WeeklyStats>> {
        let week_start = end_date - Duration::days(DAYS_PER_WEEK as i64 - 1);
        let known = self.load_window(week_start, end_date, goal_ml).await?;

        if known.len() < self.config.tracker.min_history_days {
            debug!(
                days_with_entries = known.len(),
                min_history_days = self.config.tracker.min_history_days,
                "Not enough history for weekly stats"
            );
            return Ok(None);
        }

        let days = fill_week(week_start, DAYS_PER_WEEK, goal_ml, known);
        Ok(Some(summarize_week(days)?))
    }

    /// Average daily intake over the seven days before the current window
    ///
    /// `None` when nothing was logged in that week.
    pub async fn prior_week_average(
        &self,
        end_date: NaiveDate,
        goal_ml: u32,
    ) -> ServiceResult<Option<i64>> {
        let prior_end = end_date - Duration::days(DAYS_PER_WEEK as i64);
        let prior_start = prior_end - Duration::days(DAYS_PER_WEEK as i64 - 1);
        let known = self.load_window(prior_start, prior_end, goal_ml).await?;

        if known.is_empty() {
            return Ok(None);
        }

        let days = fill_week(prior_start, DAYS_PER_WEEK, goal_ml, known);
        Ok(Some(summarize_week(days)?.average_daily_ml()))
    }

    async fn load_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        goal_ml: u32,
    ) -> ServiceResult<HashMap<NaiveDate, DailySummary>> {
        Ok(self
            .repository
            .entries_between(start, end)
            .await?
            .into_iter()
            .map(|(date, entries)| (date, summarize_day(date, entries, goal_ml)))
            .collect())
    }

    /// Recompute everything and compose a fresh snapshot
    ///
    /// Emitting a celebration claims today's flag in one repository call.
    /// If another refresh claimed it first, insights are regenerated without
    /// the celebration so it is shown once per day.
    pub async fn feature_state(&self, ui: UiFlags) -> ServiceResult<FeatureState> {
        let settings = self.settings().await?;
        let today = self.today();
        let goal_ml = settings.daily_goal_ml;

        let today_summary = self.day_summary(today, goal_ml).await?;
        let weekly_stats = self.weekly_stats(today, goal_ml).await?;
        let prior_week_average_ml = self.prior_week_average(today, goal_ml).await?;
        let already_celebrated = self.repository.was_celebrated(today).await?;

        let insights_for = |already_celebrated: bool| -> Vec<Insight> {
            generate_insights(
                &InsightInput {
                    today: &today_summary,
                    weekly: weekly_stats.as_ref(),
                    settings: &settings,
                    already_celebrated,
                    prior_week_average_ml,
                    utc_offset: self.offset(),
                },
                &self.config.insights,
            )
        };

        let mut insights = insights_for(already_celebrated);
        if insights.iter().any(|i| i.kind == InsightType::Celebration) {
            if self.repository.mark_celebrated_if_unset(today).await? {
                info!(%today, "Daily goal celebrated");
            } else {
                debug!(%today, "Celebration already claimed");
                insights = insights_for(true);
            }
        }

        let mut recent_entries = today_summary.entries().to_vec();
        recent_entries.sort_by_key(|e| std::cmp::Reverse(e.timestamp_ms()));
        recent_entries.truncate(self.config.tracker.recent_entries_limit);

        debug!(
            %today,
            total_ml = today_summary.total_ml(),
            insights = insights.len(),
            has_weekly = weekly_stats.is_some(),
            "Composed feature state"
        );

        Ok(FeatureState::compose(
            FeatureParts {
                today_summary,
                settings,
                weekly_stats,
                recent_entries,
                insights,
            },
            ui,
        ))
    }

    /// `(state, intent) -> state`
    ///
    /// Data intents persist and recompose; UI intents only touch flags. On
    /// error the caller keeps its previous state.
    pub async fn handle_intent(
        &self,
        state: FeatureState,
        intent: Intent,
    ) -> ServiceResult<FeatureState> {
        let ui = state.ui_flags();
        match intent {
            Intent::Ui(event) => Ok(state.apply(event)),
            Intent::AddEntry { amount_ml, source } => {
                if let Err(e) = self.log_entry(amount_ml, source, None).await {
                    warn!(error = %e, amount_ml, "Rejected entry");
                    return Err(e);
                }
                Ok(self
                    .feature_state(ui)
                    .await?
                    .apply(UiEvent::DismissAddDialog))
            }
            Intent::UpdateSettings(settings) => {
                self.update_settings(settings).await?;
                Ok(self
                    .feature_state(ui)
                    .await?
                    .apply(UiEvent::DismissSettingsSheet))
            }
            Intent::ApplyRecommendedGoal {
                weight_kg,
                activity,
            } => {
                self.apply_recommended_goal(weight_kg, activity).await?;
                self.feature_state(ui).await
            }
        }
    }
}
