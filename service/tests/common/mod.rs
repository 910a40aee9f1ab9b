//! Common test utilities for integration tests
//!
//! Builds a tracker over an in-memory repository with the clock pinned to
//! 2024-03-09T16:00:00Z, and seeds history at chosen local hours.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use hydration_tracker_service::{
    AppConfig, FixedClock, HydrationRepository, HydrationTracker, InMemoryRepository,
};
use hydration_tracker_shared::{Entry, SourceKind};

pub const NOW_MS: i64 = 1_710_000_000_000;

/// Test application wrapper
pub struct TestApp {
    pub tracker: HydrationTracker<InMemoryRepository, FixedClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let tracker =
            HydrationTracker::with_clock(InMemoryRepository::new(), FixedClock::at_millis(NOW_MS).unwrap(), config);
        Self { tracker }
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    /// Store an entry `days_ago` days before today at a UTC hour
    pub async fn seed(&self, days_ago: i64, hour: u32, amount_ml: i32, source: SourceKind) {
        let date = Self::today() - Duration::days(days_ago);
        let timestamp = Utc
            .from_utc_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
            .timestamp_millis();
        let entry = Entry::new(amount_ml, source, timestamp).unwrap();
        self.tracker
            .repository()
            .append_entry(date, entry)
            .await
            .unwrap();
    }

    /// One water entry per day over `days_ago` values
    pub async fn seed_days(&self, days_ago: impl IntoIterator<Item = i64>, amount_ml: i32) {
        for days in days_ago {
            self.seed(days, 9, amount_ml, SourceKind::Water).await;
        }
    }
}
