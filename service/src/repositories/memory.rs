//! In-memory repository

use super::HydrationRepository;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use hydration_tracker_shared::{Entry, Settings};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Repository backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: RwLock<HashMap<NaiveDate, Vec<Entry>>>,
    settings: RwLock<Option<Settings>>,
    celebrated: RwLock<HashSet<NaiveDate>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with saved settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
            ..Self::default()
        }
    }

    /// Total entries across all dates
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl HydrationRepository for InMemoryRepository {
    async fn entries_for_date(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        Ok(self
            .entries
            .read()
            .await
            .get(&date)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_entry(&self, date: NaiveDate, entry: Entry) -> Result<()> {
        let mut entries = self.entries.write().await;
        let day = entries.entry(date).or_default();
        if day.iter().any(|existing| existing.id() == entry.id()) {
            anyhow::bail!("entry {} already exists", entry.id());
        }
        day.push(entry);
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<Settings>> {
        Ok(self.settings.read().await.clone())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        *self.settings.write().await = Some(settings.clone());
        Ok(())
    }

    async fn was_celebrated(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.celebrated.read().await.contains(&date))
    }

    async fn mark_celebrated_if_unset(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.celebrated.write().await.insert(date))
    }
}
