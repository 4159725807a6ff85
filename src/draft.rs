//! Recipe drafts from the extraction step
//!
//! The LLM extraction upstream returns loosely structured text: quantities
//! like `"1 1/2"` or `"a"`, units in whatever spelling the source used, and
//! sometimes a category guess as a free string. [`RecipeDraft::resolve`]
//! turns that draft into the structured [`Recipe`] the rest of the engine
//! works with, running every field through the normalizers first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    category::Category,
    model::{Ingredient, Recipe},
    quantity::parse_quantity,
    unit::normalize_unit,
};

/// A first-draft recipe as returned by the extraction step.
///
/// Quantity and unit are strings here, not numbers; they must pass through
/// the normalizers before the engine can do quantity math on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<DraftIngredient>,
    /// Opaque to the engine, kept for the caller
    pub instructions: Vec<String>,
}

/// One loosely structured ingredient line of a draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    /// Category guess as text, e.g. `"dairy_eggs"`
    pub category: Option<String>,
}

/// Error resolving a draft into a [`Recipe`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("draft has no title")]
    MissingTitle,
    #[error("draft has no usable ingredients")]
    NoIngredients,
}

impl RecipeDraft {
    /// Resolves the draft into a structured [`Recipe`] under the given id.
    ///
    /// Quantities go through [`parse_quantity`], units through
    /// [`normalize_unit`]. A category guess that parses as a [`Category`]
    /// token becomes the ingredient's explicit category; anything else is
    /// dropped and the keyword categorizer decides later. Ingredient lines
    /// with an empty name are skipped.
    ///
    /// Errors only on form-level problems: an empty title, or no ingredient
    /// line surviving the cleanup.
    pub fn resolve(&self, id: impl Into<String>) -> Result<Recipe, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter_map(|draft| {
                let name = draft.name.trim();
                if name.is_empty() {
                    return None;
                }
                let category = draft
                    .category
                    .as_deref()
                    .and_then(|c| c.trim().parse::<Category>().ok());
                Some(Ingredient {
                    name: name.to_string(),
                    quantity: parse_quantity(&draft.quantity),
                    unit: normalize_unit(&draft.unit),
                    category,
                })
            })
            .collect();

        if ingredients.is_empty() {
            return Err(DraftError::NoIngredients);
        }

        Ok(Recipe {
            id: id.into(),
            title: title.to_string(),
            ingredients,
        })
    }
}
