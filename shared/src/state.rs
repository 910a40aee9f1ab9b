//! Feature state composition
//!
//! [`FeatureState`] is the single snapshot the presentation layer renders.
//! It is rebuilt wholesale from freshly computed parts on every data change;
//! pure UI intents go through [`FeatureState::apply`], which returns a new
//! value instead of patching in place.

use crate::daily::DailySummary;
use crate::insights::Insight;
use crate::models::{Entry, Settings};
use crate::sources::SourceKind;
use crate::weekly::WeeklyStats;
use serde::{Deserialize, Serialize};

/// Derived data produced by the aggregators and the insight generator
#[derive(Debug, Clone)]
pub struct FeatureParts {
    pub today_summary: DailySummary,
    pub settings: Settings,
    pub weekly_stats: Option<WeeklyStats>,
    pub recent_entries: Vec<Entry>,
    pub insights: Vec<Insight>,
}

/// Pass-through UI flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiFlags {
    pub is_loading: bool,
    pub show_add_dialog: bool,
    pub show_settings_sheet: bool,
    pub selected_source: SourceKind,
    pub custom_amount_ml: Option<i32>,
}

/// Pure UI intents that never touch entries or settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    SetLoading(bool),
    OpenAddDialog,
    DismissAddDialog,
    OpenSettingsSheet,
    DismissSettingsSheet,
    SelectSource(SourceKind),
    SetCustomAmount(Option<i32>),
}

/// Composed view-model for one render
#[derive(Debug, Clone, Serialize)]
pub struct FeatureState {
    pub today_summary: DailySummary,
    pub settings: Settings,
    pub weekly_stats: Option<WeeklyStats>,
    pub recent_entries: Vec<Entry>,
    pub insights: Vec<Insight>,
    pub is_loading: bool,
    pub show_add_dialog: bool,
    pub show_settings_sheet: bool,
    pub selected_source: SourceKind,
    pub custom_amount_ml: Option<i32>,
}

impl FeatureState {
    /// Assemble a snapshot; no derivation beyond copying fields
    pub fn compose(parts: FeatureParts, ui: UiFlags) -> Self {
        Self {
            today_summary: parts.today_summary,
            settings: parts.settings,
            weekly_stats: parts.weekly_stats,
            recent_entries: parts.recent_entries,
            insights: parts.insights,
            is_loading: ui.is_loading,
            show_add_dialog: ui.show_add_dialog,
            show_settings_sheet: ui.show_settings_sheet,
            selected_source: ui.selected_source,
            custom_amount_ml: ui.custom_amount_ml,
        }
    }

    /// Current UI flags, for carrying across a recomposition
    pub fn ui_flags(&self) -> UiFlags {
        UiFlags {
            is_loading: self.is_loading,
            show_add_dialog: self.show_add_dialog,
            show_settings_sheet: self.show_settings_sheet,
            selected_source: self.selected_source,
            custom_amount_ml: self.custom_amount_ml,
        }
    }

    /// `(state, event) -> state` for UI-only intents
    pub fn apply(self, event: UiEvent) -> Self {
        match event {
            UiEvent::SetLoading(is_loading) => Self { is_loading, ..self },
            UiEvent::OpenAddDialog => Self {
                show_add_dialog: true,
                ..self
            },
            UiEvent::DismissAddDialog => Self {
                show_add_dialog: false,
                custom_amount_ml: None,
                ..self
            },
            UiEvent::OpenSettingsSheet => Self {
                show_settings_sheet: true,
                ..self
            },
            UiEvent::DismissSettingsSheet => Self {
                show_settings_sheet: false,
                ..self
            },
            UiEvent::SelectSource(selected_source) => Self {
                selected_source,
                ..self
            },
            UiEvent::SetCustomAmount(custom_amount_ml) => Self {
                custom_amount_ml,
                ..self
            },
        }
    }
}
