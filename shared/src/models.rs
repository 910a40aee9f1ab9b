//! Data models for the Hydration Tracker

use crate::errors::{HydrationError, HydrationResult};
use crate::sources::SourceKind;
use crate::validation::{
    validate_amount_ml, validate_entry_id, validate_timestamp_ms, FieldError, MAX_DAILY_GOAL_ML,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Default daily goal in ml (2500ml = ~10 glasses)
pub const DEFAULT_DAILY_GOAL_ML: u32 = 2500;

// ============================================================================
// Entries
// ============================================================================

/// One recorded hydration event
///
/// Immutable once created. The only ways to obtain an `Entry` are the
/// validating constructors and deserialization, which runs the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    id: String,
    amount_ml: i32,
    timestamp_ms: i64,
    source: SourceKind,
}

/// Unvalidated entry shape, as stored or sent over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    pub amount_ml: i32,
    pub timestamp_ms: i64,
    pub source: SourceKind,
}

impl Entry {
    /// Create an entry with a freshly generated id
    pub fn new(amount_ml: i32, source: SourceKind, timestamp_ms: i64) -> HydrationResult<Self> {
        Self::with_id(Uuid::new_v4().to_string(), amount_ml, source, timestamp_ms)
    }

    /// Create an entry with a caller-assigned id
    pub fn with_id(
        id: impl Into<String>,
        amount_ml: i32,
        source: SourceKind,
        timestamp_ms: i64,
    ) -> HydrationResult<Self> {
        let id = id.into();
        validate_entry_id(&id)
            .and_then(|_| validate_amount_ml(amount_ml))
            .and_then(|_| validate_timestamp_ms(timestamp_ms))
            .map_err(|e| HydrationError::InvalidEntry(e.user_message()))?;

        Ok(Self {
            id,
            amount_ml,
            timestamp_ms,
            source,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount_ml(&self) -> i32 {
        self.amount_ml
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    /// Amount weighted by the source's hydration factor (unrounded)
    pub fn effective_ml(&self) -> f64 {
        self.amount_ml as f64 * self.source.hydration_factor()
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = HydrationError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Entry::with_id(record.id, record.amount_ml, record.source, record.timestamp_ms)
    }
}

impl From<Entry> for EntryRecord {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            amount_ml: entry.amount_ml,
            timestamp_ms: entry.timestamp_ms,
            source: entry.source,
        }
    }
}

// ============================================================================
// Glass Sizes
// ============================================================================

/// Preset serving sizes offered by the quick-add picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlassSize {
    Small,
    #[default]
    Medium,
    Large,
    Bottle,
    SportsBottle,
    Liter,
}

impl GlassSize {
    pub const ALL: [GlassSize; 6] = [
        GlassSize::Small,
        GlassSize::Medium,
        GlassSize::Large,
        GlassSize::Bottle,
        GlassSize::SportsBottle,
        GlassSize::Liter,
    ];

    /// Serving volume in ml
    pub fn ml(&self) -> i32 {
        match self {
            GlassSize::Small => 150,
            GlassSize::Medium => 250,
            GlassSize::Large => 350,
            GlassSize::Bottle => 500,
            GlassSize::SportsBottle => 750,
            GlassSize::Liter => 1000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GlassSize::Small => "Small Glass",
            GlassSize::Medium => "Glass",
            GlassSize::Large => "Large Glass",
            GlassSize::Bottle => "Bottle",
            GlassSize::SportsBottle => "Sports Bottle",
            GlassSize::Liter => "Liter",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GlassSize::Small => "🥃",
            GlassSize::Medium => "🥛",
            GlassSize::Large => "🫗",
            GlassSize::Bottle => "🍶",
            GlassSize::SportsBottle => "🧴",
            GlassSize::Liter => "🫙",
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// User hydration preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_reminder_window"))]
pub struct Settings {
    #[validate(range(min = 1, max = MAX_DAILY_GOAL_ML, message = "must be between 1 and 20000 ml"))]
    pub daily_goal_ml: u32,
    pub reminder_enabled: bool,
    #[validate(range(min = 1, max = 1440, message = "must be between 1 and 1440 minutes"))]
    pub reminder_interval_minutes: u32,
    #[validate(range(max = 23, message = "must be an hour between 0 and 23"))]
    pub reminder_start_hour: u8,
    #[validate(range(max = 23, message = "must be an hour between 0 and 23"))]
    pub reminder_end_hour: u8,
    pub preferred_glass_size: GlassSize,
    pub show_notifications: bool,
    pub track_caffeine: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal_ml: DEFAULT_DAILY_GOAL_ML,
            reminder_enabled: true,
            reminder_interval_minutes: 60,
            reminder_start_hour: 8,
            reminder_end_hour: 22,
            preferred_glass_size: GlassSize::default(),
            show_notifications: true,
            track_caffeine: true,
        }
    }
}

impl Settings {
    /// Run field and window validation, returning the settings unchanged on success
    pub fn validated(self) -> HydrationResult<Self> {
        self.validate().map_err(settings_error)?;
        Ok(self)
    }
}

/// Fold validator output into labelled messages, sorted for a stable order
fn settings_error(errors: ValidationErrors) -> HydrationError {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field: &str = &field;
        for err in field_errors.iter() {
            // Struct-level errors are keyed "__all__"; their code names the rule
            let name: &str = if field == "__all__" { &err.code } else { field };
            let message = err.message.as_deref().unwrap_or("is invalid");
            messages.push(FieldError::new(name, message).user_message());
        }
    }
    messages.sort();
    HydrationError::InvalidSettings(messages.join("; "))
}

fn validate_reminder_window(settings: &Settings) -> Result<(), ValidationError> {
    if settings.reminder_start_hour > settings.reminder_end_hour {
        let mut err = ValidationError::new("reminder_window");
        err.message = Some(Cow::from("start hour must not be after the end hour"));
        return Err(err);
    }
    Ok(())
}
