//! Hydration status classification
//!
//! Maps goal progress onto five ordered levels. Thresholds are inclusive on
//! the lower bound and evaluated top-down.

use serde::{Deserialize, Serialize};

/// Hydration level for a day, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HydrationStatus {
    Dehydrated,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl HydrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HydrationStatus::Dehydrated => "Dehydrated",
            HydrationStatus::Low => "Low",
            HydrationStatus::Moderate => "Moderate",
            HydrationStatus::Good => "Good",
            HydrationStatus::Excellent => "Excellent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HydrationStatus::Dehydrated => "🏜️",
            HydrationStatus::Low => "😐",
            HydrationStatus::Moderate => "🙂",
            HydrationStatus::Good => "😊",
            HydrationStatus::Excellent => "🌊",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HydrationStatus::Dehydrated => "You're running on empty. Time for a drink!",
            HydrationStatus::Low => "You're behind on hydration today.",
            HydrationStatus::Moderate => "Halfway there, keep sipping.",
            HydrationStatus::Good => "Nicely hydrated, almost at your goal.",
            HydrationStatus::Excellent => "Goal reached. You're fully hydrated!",
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            HydrationStatus::Dehydrated => {
                "Start with a full glass of water now and keep a bottle within reach."
            }
            HydrationStatus::Low => "Pair a glass of water with every meal to catch up steadily.",
            HydrationStatus::Moderate => "Set a reminder for the next hour to keep your pace.",
            HydrationStatus::Good => "One or two more glasses will get you over the line.",
            HydrationStatus::Excellent => {
                "Spread the rest of your intake evenly instead of drinking a lot at once."
            }
        }
    }
}

/// Classify goal progress (already clamped to `[0, 150]`)
pub fn classify_status(progress_percent: f64) -> HydrationStatus {
    if progress_percent >= 100.0 {
        HydrationStatus::Excellent
    } else if progress_percent >= 75.0 {
        HydrationStatus::Good
    } else if progress_percent >= 50.0 {
        HydrationStatus::Moderate
    } else if progress_percent >= 25.0 {
        HydrationStatus::Low
    } else {
        HydrationStatus::Dehydrated
    }
}
