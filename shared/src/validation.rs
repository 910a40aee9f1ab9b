//! Input validation functions
//!
//! Field-level checks used by the entry constructor, the settings model and
//! the goal recommendation. Struct-level settings rules use the `validator`
//! crate's derive macros (see [`crate::models::Settings`]).

use chrono::NaiveDate;

/// Largest single intake accepted, in ml
pub const MAX_ENTRY_AMOUNT_ML: i32 = 10_000;

/// Earliest plausible entry timestamp (2000-01-01T00:00:00Z)
pub const MIN_TIMESTAMP_MS: i64 = 946_684_800_000;

/// Latest plausible entry timestamp (2100-01-01T00:00:00Z)
pub const MAX_TIMESTAMP_MS: i64 = 4_102_444_800_000;

/// Largest daily goal accepted in settings, in ml
pub const MAX_DAILY_GOAL_ML: u32 = 20_000;

/// Longest accepted entry id
pub const MAX_ENTRY_ID_LEN: usize = 64;

/// Validate a single intake amount
pub fn validate_amount_ml(amount_ml: i32) -> Result<(), FieldError> {
    if amount_ml <= 0 {
        return Err(FieldError::new("amount_ml", "must be greater than 0"));
    }
    if amount_ml > MAX_ENTRY_AMOUNT_ML {
        return Err(FieldError::new("amount_ml", "cannot exceed 10000 ml"));
    }
    Ok(())
}

/// Validate an epoch-millisecond timestamp
pub fn validate_timestamp_ms(timestamp_ms: i64) -> Result<(), FieldError> {
    if !(MIN_TIMESTAMP_MS..=MAX_TIMESTAMP_MS).contains(&timestamp_ms) {
        return Err(FieldError::new(
            "timestamp_ms",
            "must fall between the years 2000 and 2100",
        ));
    }
    Ok(())
}

/// Validate a caller-assigned entry id
pub fn validate_entry_id(id: &str) -> Result<(), FieldError> {
    if id.trim().is_empty() {
        return Err(FieldError::new("id", "cannot be empty"));
    }
    if id.len() > MAX_ENTRY_ID_LEN {
        return Err(FieldError::new("id", "cannot exceed 64 characters"));
    }
    Ok(())
}

/// Validate body weight (in kg) used for goal recommendations
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), FieldError> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(FieldError::new("weight_kg", "must be a valid number"));
    }
    if weight_kg < 20.0 {
        return Err(FieldError::new("weight_kg", "must be at least 20 kg"));
    }
    if weight_kg > 500.0 {
        return Err(FieldError::new("weight_kg", "must be at most 500 kg"));
    }
    Ok(())
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| FieldError::new("date", "must use the YYYY-MM-DD format"))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "id" => "Entry ID",
        "amount_ml" => "Amount",
        "timestamp_ms" => "Time",
        "source" => "Drink",
        "date" => "Date",
        "weight_kg" => "Body Weight",
        "daily_goal_ml" => "Daily Goal",
        "reminder_interval_minutes" => "Reminder Interval",
        "reminder_start_hour" => "Reminder Start",
        "reminder_end_hour" => "Reminder End",
        "reminder_window" => "Reminder Window",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
