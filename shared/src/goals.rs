//! Personalized daily goal recommendation
//!
//! goal = weight_kg * 33 ml * activity multiplier, rounded to the nearest
//! 100 ml and capped at the largest goal settings accept.

use crate::errors::{HydrationError, HydrationResult};
use crate::validation::{validate_weight_kg, MAX_DAILY_GOAL_ML};
use serde::{Deserialize, Serialize};

/// Hydration multiplier: ml per kg of body weight
pub const HYDRATION_ML_PER_KG: f64 = 33.0;

/// Activity level used to scale the recommended goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::LightlyActive => 1.1,
            ActivityLevel::ModeratelyActive => 1.2,
            ActivityLevel::VeryActive => 1.3,
            ActivityLevel::ExtraActive => 1.4,
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = HydrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(HydrationError::InvalidProfile(format!(
                "Unknown activity level: {}",
                s
            ))),
        }
    }
}

/// Recommend a daily goal from body weight and activity level
pub fn recommended_goal_ml(weight_kg: f64, activity: ActivityLevel) -> HydrationResult<u32> {
    validate_weight_kg(weight_kg).map_err(|e| HydrationError::InvalidProfile(e.user_message()))?;

    let goal = weight_kg * HYDRATION_ML_PER_KG * activity.multiplier();
    let rounded = ((goal / 100.0).round() * 100.0) as u32;
    Ok(rounded.min(MAX_DAILY_GOAL_ML))
}
