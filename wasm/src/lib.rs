//! Hydration Tracker WASM Module
//!
//! WebAssembly bindings so a browser client can run the same aggregation,
//! classification and insight logic as the service. Values cross the
//! boundary as JSON strings; failures are thrown as an `ErrorResponse` JSON
//! string.

use chrono::{FixedOffset, Offset, Utc};
use hydration_tracker_shared::types::{DayInput, ErrorResponse, InsightRequest};
use hydration_tracker_shared::{
    classify_status, generate_insights, recommended_goal_ml, summarize_day, summarize_week,
    ActivityLevel, DailySummary, HydrationError, HydrationStatus, InsightConfig, InsightInput,
    SourceKind,
};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Binding failures
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] HydrationError),
}

impl BindingError {
    fn to_response(&self) -> ErrorResponse {
        match self {
            BindingError::Json(e) => ErrorResponse::new("MALFORMED_JSON", e.to_string()),
            BindingError::Domain(e) => ErrorResponse::from(e),
        }
    }
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        let body = serde_json::to_string(&err.to_response()).unwrap_or_else(|_| err.to_string());
        JsValue::from_str(&body)
    }
}

/// Catalog row for one drink source
#[derive(Debug, Serialize)]
struct SourceRow {
    kind: SourceKind,
    label: &'static str,
    icon: &'static str,
    hydration_factor: f64,
    caffeinated: bool,
}

/// Status classification result
#[derive(Debug, Serialize)]
struct StatusRow {
    status: HydrationStatus,
    label: &'static str,
    icon: &'static str,
    message: &'static str,
    tip: &'static str,
}

fn to_summary(day: DayInput) -> DailySummary {
    summarize_day(day.date, day.entries, day.goal_ml)
}

pub fn summarize_day_json(day_json: &str) -> Result<String, BindingError> {
    let day: DayInput = serde_json::from_str(day_json)?;
    Ok(serde_json::to_string(&to_summary(day))?)
}

pub fn summarize_week_json(days_json: &str) -> Result<String, BindingError> {
    let days: Vec<DayInput> = serde_json::from_str(days_json)?;
    let stats = summarize_week(days.into_iter().map(to_summary).collect())?;
    Ok(serde_json::to_string(&stats)?)
}

pub fn classify_progress_json(progress_percent: f64) -> Result<String, BindingError> {
    let status = classify_status(progress_percent);
    Ok(serde_json::to_string(&StatusRow {
        status,
        label: status.label(),
        icon: status.icon(),
        message: status.message(),
        tip: status.tip(),
    })?)
}

pub fn source_catalog_json() -> Result<String, BindingError> {
    let rows: Vec<SourceRow> = SourceKind::ALL
        .iter()
        .map(|kind| SourceRow {
            kind: *kind,
            label: kind.label(),
            icon: kind.icon(),
            hydration_factor: kind.hydration_factor(),
            caffeinated: kind.is_caffeinated(),
        })
        .collect();
    Ok(serde_json::to_string(&rows)?)
}

pub fn generate_insights_json(request_json: &str) -> Result<String, BindingError> {
    let request: InsightRequest = serde_json::from_str(request_json)?;
    let utc_offset = request
        .utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    let today = to_summary(request.today);
    let weekly = if request.week.is_empty() {
        None
    } else {
        Some(summarize_week(
            request.week.into_iter().map(to_summary).collect(),
        )?)
    };

    let insights = generate_insights(
        &InsightInput {
            today: &today,
            weekly: weekly.as_ref(),
            settings: &request.settings,
            already_celebrated: request.already_celebrated,
            prior_week_average_ml: request.prior_week_average_ml,
            utc_offset,
        },
        &InsightConfig::default(),
    );
    Ok(serde_json::to_string(&insights)?)
}

/// Aggregate one day: `{date, goal_ml, entries}` to a daily summary
#[wasm_bindgen(js_name = summarizeDay)]
pub fn summarize_day_js(day_json: &str) -> Result<String, JsValue> {
    Ok(summarize_day_json(day_json)?)
}

/// Aggregate up to seven consecutive days, oldest first
#[wasm_bindgen(js_name = summarizeWeek)]
pub fn summarize_week_js(days_json: &str) -> Result<String, JsValue> {
    Ok(summarize_week_json(days_json)?)
}

#[wasm_bindgen(js_name = classifyProgress)]
pub fn classify_progress_js(progress_percent: f64) -> Result<String, JsValue> {
    Ok(classify_progress_json(progress_percent)?)
}

#[wasm_bindgen(js_name = sourceCatalog)]
pub fn source_catalog_js() -> Result<String, JsValue> {
    Ok(source_catalog_json()?)
}

#[wasm_bindgen(js_name = generateInsights)]
pub fn generate_insights_js(request_json: &str) -> Result<String, JsValue> {
    Ok(generate_insights_json(request_json)?)
}

/// Recommended daily goal in ml from weight and an activity level name
#[wasm_bindgen(js_name = recommendedGoalMl)]
pub fn recommended_goal_ml_js(weight_kg: f64, activity: &str) -> Result<u32, JsValue> {
    let activity: ActivityLevel = activity.parse().map_err(BindingError::from)?;
    Ok(recommended_goal_ml(weight_kg, activity).map_err(BindingError::from)?)
}
