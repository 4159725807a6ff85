//! Recipe and pantry data shapes
//!
//! These mirror what the recipe and pantry stores hand the engine: plain
//! records with quantities already numeric. Free-text drafts coming from the
//! extraction step live in [`crate::draft`] until they are resolved into
//! these shapes.

use serde::{Deserialize, Serialize};

use crate::category::{categorize, Category};

/// An ingredient as it appears in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Display name, original casing
    pub name: String,
    /// Amount required. `0` means "to taste" / unspecified.
    #[serde(default)]
    pub quantity: f64,
    /// Canonical unit token, or empty for unitless items like "2 eggs"
    #[serde(default)]
    pub unit: String,
    /// Caller-supplied aisle category
    ///
    /// When set (for example by an upstream extraction draft) it takes
    /// precedence over the keyword categorizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Ingredient {
    /// Creates an ingredient without an explicit category
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: None,
        }
    }

    /// The explicit category if present, otherwise the keyword categorizer
    /// fallback from [`categorize`]
    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or_else(|| categorize(&self.name))
    }
}

/// A recipe as supplied by the recipe store
///
/// Fields this engine does not use (instructions, timing, media) are not
/// modeled here; they pass through the surrounding application unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// A user-owned stock entry from the pantry store
///
/// Identity for matching purposes is the normalized title, not an ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub title: String,
    /// Stock on hand. Storage sometimes omits this field.
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl PantryItem {
    /// Stock on hand; a missing quantity counts as `1`, never negative
    pub fn effective_quantity(&self) -> f64 {
        self.quantity.unwrap_or(1.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pantry_quantity_defaults() {
        let item = PantryItem {
            title: "salt".into(),
            quantity: None,
        };
        assert_eq!(item.effective_quantity(), 1.0);

        let negative = PantryItem {
            title: "flour".into(),
            quantity: Some(-3.0),
        };
        assert_eq!(negative.effective_quantity(), 0.0);
    }

    #[test]
    fn explicit_category_wins() {
        let mut igr = Ingredient::new("milk", 1.0, "cup");
        assert_eq!(igr.category_or_default(), Category::DairyEggs);

        igr.category = Some(Category::Pantry);
        assert_eq!(igr.category_or_default(), Category::Pantry);
    }

    #[test]
    fn ingredient_deserializes_with_missing_fields() {
        let igr: Ingredient = serde_json::from_str(r#"{"name": "Egg"}"#).unwrap();
        assert_eq!(igr.quantity, 0.0);
        assert_eq!(igr.unit, "");
        assert_eq!(igr.category, None);

        let item: PantryItem = serde_json::from_str(r#"{"title": "Egg"}"#).unwrap();
        assert_eq!(item.effective_quantity(), 1.0);
    }
}
