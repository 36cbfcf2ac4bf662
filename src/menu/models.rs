//! Menu Domain Models
//!
//! Data structures describing the items a guest can order.

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu Domain Models
// =============================================================================

/// A single entry of the restaurant menu, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique identifier (e.g. `main-001`)
    pub id: String,

    /// Display name, matched case-insensitively by lookups
    pub name: String,

    /// Menu section the item belongs to
    pub category: String,

    /// Unit price
    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_vegetarian: bool,

    #[serde(default)]
    pub is_vegan: bool,

    #[serde(default)]
    pub is_gluten_free: bool,

    /// Allergen names as written on the menu
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl MenuItem {
    /// Case-insensitive check against the item's allergen list.
    pub fn contains_allergen(&self, allergen: &str) -> bool {
        let needle = allergen.to_lowercase();
        self.allergens.iter().any(|a| a.to_lowercase() == needle)
    }
}

/// Recognised dietary preferences for [`SearchCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl DietaryPreference {
    /// Parses a preference case-insensitively; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "gluten_free" => Some(Self::GlutenFree),
            _ => None,
        }
    }

    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            Self::Vegetarian => item.is_vegetarian,
            Self::Vegan => item.is_vegan,
            Self::GlutenFree => item.is_gluten_free,
        }
    }
}

/// Filters accepted by `find_items_by_criteria`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub dietary_preference: Option<String>,
    pub max_price: Option<f64>,
    pub exclude_allergens: Option<Vec<String>>,
    pub category: Option<String>,
}
