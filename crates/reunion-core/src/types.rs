//! Core types for Reunion Planner

use serde::{Deserialize, Serialize};

/// Identifier of one traveler in a session, numbered from 1.
///
/// The number is what travelers see ("Traveler 2") and what the payload
/// records as `travelerNumber`, so ordering by id is ordering by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelerId(u32);

impl TravelerId {
    /// The first traveler of every session
    pub const FIRST: TravelerId = TravelerId(1);

    /// Create a TravelerId; zero is not a valid traveler number
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Get the traveler number
    pub fn get(&self) -> u32 {
        self.0
    }

    /// All ids `1..=count` in ascending order
    pub fn all(count: u32) -> impl Iterator<Item = TravelerId> {
        (1..=count).map(TravelerId)
    }
}

impl std::fmt::Display for TravelerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (min, max) budget pair in slider units.
///
/// The type itself does not enforce ordering; the slider keeps the gap
/// invariant and form validation rejects `min >= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Distance between the two ends (zero when inverted)
    pub fn span(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    /// The combined `"min-max"` field value
    pub fn to_field_string(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }

    /// Rescale both ends for display or export
    pub fn scaled(&self, scale: u32) -> Self {
        Self {
            min: self.min.saturating_mul(scale),
            max: self.max.saturating_mul(scale),
        }
    }
}

/// One selectable travel-style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibeOption {
    /// Identifier stored in selections and the payload
    pub tag: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// The fixed vibe vocabulary, in dropdown order.
pub const VIBES: &[VibeOption] = &[
    VibeOption {
        tag: "nightlife_and_entertainment",
        label: "Nightlife and entertainment",
    },
    VibeOption {
        tag: "underrated_destinations",
        label: "Underrated destinations",
    },
    VibeOption {
        tag: "beach",
        label: "Beach",
    },
    VibeOption {
        tag: "art_and_culture",
        label: "Art and culture",
    },
    VibeOption {
        tag: "great_food",
        label: "Great food",
    },
    VibeOption {
        tag: "outdoor_adventures",
        label: "Outdoor adventures",
    },
];

impl VibeOption {
    /// Display label for a tag, falling back to the tag itself
    pub fn label_for(tag: &str) -> &str {
        VIBES
            .iter()
            .find(|v| v.tag == tag)
            .map(|v| v.label)
            .unwrap_or(tag)
    }
}

/// A selectable city for destination and starting-point dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityEntry {
    pub id: String,
    pub text: String,
}

impl CityEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            text: name,
        }
    }

    /// Placeholder used when the city list cannot be loaded
    pub fn sentinel() -> Self {
        Self {
            id: "null".to_string(),
            text: "NULL".to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traveler_id_rejects_zero() {
        assert!(TravelerId::new(0).is_none());
        assert_eq!(TravelerId::new(4).map(|t| t.get()), Some(4));
    }

    #[test]
    fn test_traveler_id_all_is_ascending() {
        let ids: Vec<u32> = TravelerId::all(3).map(|t| t.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(TravelerId::all(0).count(), 0);
    }

    #[test]
    fn test_budget_field_string() {
        let range = BudgetRange::new(120, 900);
        assert_eq!(range.to_field_string(), "120-900");
        assert_eq!(range.span(), 780);
        assert_eq!(BudgetRange::new(10, 5).span(), 0);
    }

    #[test]
    fn test_budget_scaled() {
        assert_eq!(BudgetRange::new(50, 1000).scaled(5), BudgetRange::new(250, 5000));
    }

    #[test]
    fn test_vibe_label_lookup() {
        assert_eq!(VibeOption::label_for("great_food"), "Great food");
        assert_eq!(VibeOption::label_for("karaoke"), "karaoke");
    }

    #[test]
    fn test_city_sentinel() {
        let sentinel = CityEntry::sentinel();
        assert!(sentinel.is_sentinel());
        assert!(!CityEntry::new("Madrid").is_sentinel());
        assert_eq!(CityEntry::new("Madrid").id, "Madrid");
    }
}
