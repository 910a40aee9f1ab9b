//! Drink source catalog
//!
//! A closed set of drink types, each with display metadata and a hydration
//! factor expressing net hydration efficiency relative to plain water.

use crate::errors::HydrationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drink type of an intake entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum SourceKind {
    #[default]
    Water,
    Tea,
    Coffee,
    Juice,
    Sparkling,
    Milk,
    Smoothie,
    SportsDrink,
    CoconutWater,
}

/// Catalog row for a source kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub hydration_factor: f64,
}

impl SourceKind {
    /// Every variant, in catalog order
    pub const ALL: [SourceKind; 9] = [
        SourceKind::Water,
        SourceKind::Tea,
        SourceKind::Coffee,
        SourceKind::Juice,
        SourceKind::Sparkling,
        SourceKind::Milk,
        SourceKind::Smoothie,
        SourceKind::SportsDrink,
        SourceKind::CoconutWater,
    ];

    /// Look up the catalog row for this source
    pub fn info(&self) -> SourceInfo {
        let (label, icon, hydration_factor) = match self {
            SourceKind::Water => ("Water", "💧", 1.0),
            SourceKind::Tea => ("Tea", "🍵", 0.9),
            SourceKind::Coffee => ("Coffee", "☕", 0.85),
            SourceKind::Juice => ("Juice", "🧃", 0.95),
            SourceKind::Sparkling => ("Sparkling Water", "🫧", 1.0),
            SourceKind::Milk => ("Milk", "🥛", 1.05),
            SourceKind::Smoothie => ("Smoothie", "🥤", 0.9),
            SourceKind::SportsDrink => ("Sports Drink", "⚡", 1.0),
            SourceKind::CoconutWater => ("Coconut Water", "🥥", 1.0),
        };
        SourceInfo {
            label,
            icon,
            hydration_factor,
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }

    pub fn hydration_factor(&self) -> f64 {
        self.info().hydration_factor
    }

    /// Whether this drink usually carries caffeine
    pub fn is_caffeinated(&self) -> bool {
        matches!(self, SourceKind::Tea | SourceKind::Coffee)
    }

    /// Wire name, as used in JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Water => "WATER",
            SourceKind::Tea => "TEA",
            SourceKind::Coffee => "COFFEE",
            SourceKind::Juice => "JUICE",
            SourceKind::Sparkling => "SPARKLING",
            SourceKind::Milk => "MILK",
            SourceKind::Smoothie => "SMOOTHIE",
            SourceKind::SportsDrink => "SPORTS_DRINK",
            SourceKind::CoconutWater => "COCONUT_WATER",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = HydrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| HydrationError::UnknownSourceKind(s.to_string()))
    }
}

impl TryFrom<String> for SourceKind {
    type Error = HydrationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("WATER", SourceKind::Water)]
    #[case("coffee", SourceKind::Coffee)]
    #[case("Sports Drink", SourceKind::SportsDrink)]
    #[case("coconut-water", SourceKind::CoconutWater)]
    #[case(" sparkling ", SourceKind::Sparkling)]
    fn test_parse_source(#[case] input: &str, #[case] expected: SourceKind) {
        assert_eq!(input.parse::<SourceKind>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_source_rejected() {
        let err = "LEMONADE".parse::<SourceKind>().unwrap_err();
        assert_eq!(err, HydrationError::UnknownSourceKind("LEMONADE".to_string()));
    }

    #[test]
    fn test_wire_name_round_trips() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.as_str().parse::<SourceKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_deserialize_unknown_source_fails() {
        let result: Result<SourceKind, _> = serde_json::from_str("\"ENERGY_DRINK\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unknown source kind"), "unexpected error: {}", err);
    }

    #[test]
    fn test_factors_within_expected_band() {
        for kind in SourceKind::ALL {
            let factor = kind.hydration_factor();
            assert!((0.85..=1.05).contains(&factor), "{} factor {}", kind, factor);
        }
        assert_eq!(SourceKind::Water.hydration_factor(), 1.0);
        assert_eq!(SourceKind::Coffee.hydration_factor(), 0.85);
    }

    #[test]
    fn test_caffeinated_sources() {
        let caffeinated: Vec<_> = SourceKind::ALL
            .into_iter()
            .filter(SourceKind::is_caffeinated)
            .collect();
        assert_eq!(caffeinated, vec![SourceKind::Tea, SourceKind::Coffee]);
    }
}
