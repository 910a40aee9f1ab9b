//! Persistence ports
//!
//! Durable storage lives outside this crate. The service talks to it through
//! [`HydrationRepository`]; [`InMemoryRepository`] is the reference adapter
//! used by tests and by hosts that keep state in memory.

pub mod memory;

pub use memory::InMemoryRepository;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use hydration_tracker_shared::{Entry, Settings};
use std::collections::HashMap;

/// Storage contract for entries, settings and celebration flags
///
/// Entries are append-only: the service never updates or deletes them.
#[async_trait]
pub trait HydrationRepository: Send + Sync {
    /// Entries logged on `date`, in insertion order
    async fn entries_for_date(&self, date: NaiveDate) -> Result<Vec<Entry>>;

    /// Append an entry to `date`
    async fn append_entry(&self, date: NaiveDate, entry: Entry) -> Result<()>;

    /// Stored settings, if the user has saved any
    async fn load_settings(&self) -> Result<Option<Settings>>;

    async fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Whether the goal celebration was already shown on `date`
    async fn was_celebrated(&self, date: NaiveDate) -> Result<bool>;

    /// Set the celebration flag for `date` in one step
    ///
    /// Returns `true` only for the caller that changed it from unset to set.
    async fn mark_celebrated_if_unset(&self, date: NaiveDate) -> Result<bool>;

    /// Entries for every day in `start..=end`; days without entries are omitted
    async fn entries_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<NaiveDate, Vec<Entry>>> {
        let mut by_date = HashMap::new();
        let mut date = start;
        while date <= end {
            let entries = self.entries_for_date(date).await?;
            if !entries.is_empty() {
                by_date.insert(date, entries);
            }
            date += Duration::days(1);
        }
        Ok(by_date)
    }
}
