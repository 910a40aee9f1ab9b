//! Presentation-facing request and response types
//!
//! These are the JSON shapes handed to and received from the presentation
//! layer. Derived values are computed at conversion time, never stored.

use crate::daily::DailySummary;
use crate::errors::HydrationError;
use crate::models::{Entry, Settings};
use crate::status::HydrationStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily summary with its derived progress fields flattened in
#[derive(Debug, Clone, Serialize)]
pub struct DailySummaryView {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
    pub goal_ml: u32,
    pub total_ml: i64,
    pub effective_hydration_ml: i64,
    pub progress_percent: f64,
    pub is_goal_reached: bool,
    pub remaining_ml: i64,
    pub glasses_logged: usize,
    pub hydration_status: HydrationStatus,
    pub status_label: String,
    pub status_icon: String,
    pub status_message: String,
}

impl From<DailySummary> for DailySummaryView {
    fn from(summary: DailySummary) -> Self {
        let status = summary.hydration_status();
        Self {
            date: summary.date(),
            goal_ml: summary.goal_ml(),
            total_ml: summary.total_ml(),
            effective_hydration_ml: summary.effective_hydration_ml(),
            progress_percent: summary.progress_percent(),
            is_goal_reached: summary.is_goal_reached(),
            remaining_ml: summary.remaining_ml(),
            glasses_logged: summary.glasses_logged(),
            hydration_status: status,
            status_label: status.label().to_string(),
            status_icon: status.icon().to_string(),
            status_message: status.message().to_string(),
            entries: summary.entries().to_vec(),
        }
    }
}

/// One day of raw input for client-side aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayInput {
    pub date: NaiveDate,
    pub goal_ml: u32,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Insight generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRequest {
    pub today: DayInput,
    /// Consecutive days ending with today; weekly stats are skipped when empty
    #[serde(default)]
    pub week: Vec<DayInput>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub already_celebrated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_week_average_ml: Option<i64>,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl From<&HydrationError> for ErrorResponse {
    fn from(err: &HydrationError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}
