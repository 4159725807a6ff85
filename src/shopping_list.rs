//! Consolidated grocery lists from multiple recipes
//!
//! Merges ingredient occurrences across recipes into one entry per distinct
//! normalized ingredient, reconciles the result against the pantry and sorts
//! it into store-walk order. Everything here recomputes from the input
//! snapshots on every call; no state is kept between invocations.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    model::{PantryItem, Recipe},
    name::normalize_name,
};

/// Provenance record: which recipe asked for how much of an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    pub recipe_id: String,
    pub recipe_title: String,
    pub quantity: f64,
}

/// An ingredient merged across recipes, with pantry reconciliation applied.
///
/// `total_quantity` always equals the sum of `from_recipes` quantities, and
/// `need_to_buy` is always `max(0, total_quantity - pantry_quantity)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedIngredient {
    /// Display name from the first recipe that mentioned the ingredient
    pub name: String,
    pub total_quantity: f64,
    pub unit: String,
    pub category: Category,
    pub from_recipes: Vec<RecipeRef>,
    pub in_pantry: bool,
    pub pantry_quantity: f64,
    pub need_to_buy: f64,
}

/// Merges the ingredients of all recipes into one entry per distinct
/// normalized name.
///
/// The first occurrence of an ingredient fixes its display name, unit and
/// category; later duplicates only grow the running total and the provenance
/// list. Output order is insertion order of first appearance.
///
/// Pantry fields start out as if the pantry were empty; apply [`reconcile`]
/// to fill them in.
#[tracing::instrument(level = "debug", skip_all, fields(recipes = recipes.len()))]
pub fn consolidate(recipes: &[Recipe]) -> Vec<ConsolidatedIngredient> {
    let mut entries: IndexMap<String, ConsolidatedIngredient> = IndexMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let key = normalize_name(&ingredient.name);
            let entry = entries
                .entry(key)
                .or_insert_with(|| ConsolidatedIngredient {
                    name: ingredient.name.clone(),
                    total_quantity: 0.0,
                    unit: ingredient.unit.clone(),
                    category: ingredient.category_or_default(),
                    from_recipes: Vec::new(),
                    in_pantry: false,
                    pantry_quantity: 0.0,
                    need_to_buy: 0.0,
                });
            entry.total_quantity += ingredient.quantity;
            entry.need_to_buy = entry.total_quantity;
            entry.from_recipes.push(RecipeRef {
                recipe_id: recipe.id.clone(),
                recipe_title: recipe.title.clone(),
                quantity: ingredient.quantity,
            });
        }
    }

    entries.into_values().collect()
}

/// Lookup from normalized pantry title to effective stock quantity.
///
/// The pantry is assumed de-duplicated by its storage layer, but duplicate
/// normalized names must not break anything: last one wins.
pub(crate) fn pantry_lookup(pantry: &[PantryItem]) -> HashMap<String, f64> {
    pantry
        .iter()
        .map(|item| (normalize_name(&item.title), item.effective_quantity()))
        .collect()
}

/// Fills in `in_pantry`, `pantry_quantity` and `need_to_buy` for each
/// consolidated ingredient from the pantry snapshot.
pub fn reconcile(
    mut consolidated: Vec<ConsolidatedIngredient>,
    pantry: &[PantryItem],
) -> Vec<ConsolidatedIngredient> {
    let stock = pantry_lookup(pantry);

    for item in &mut consolidated {
        match stock.get(normalize_name(&item.name).as_str()) {
            Some(&quantity) => {
                item.in_pantry = true;
                item.pantry_quantity = quantity;
            }
            None => {
                item.in_pantry = false;
                item.pantry_quantity = 0.0;
            }
        }
        item.need_to_buy = (item.total_quantity - item.pantry_quantity).max(0.0);
    }

    consolidated
}

/// Sorts a reconciled list into the consumer-facing order: store-walk
/// category order, then case-insensitive display name for determinism.
pub fn sort_for_shopping(list: &mut [ConsolidatedIngredient]) {
    list.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

/// The full pipeline: consolidate, reconcile against the pantry and sort
/// into store-walk order.
///
/// ```
/// # use larder::{shopping_list, Ingredient, PantryItem, Recipe};
/// let recipes = vec![Recipe {
///     id: "r1".into(),
///     title: "Tomato soup".into(),
///     ingredients: vec![Ingredient::new("Tomato", 2.0, "cup")],
/// }];
/// let pantry = vec![PantryItem { title: "tomato".into(), quantity: Some(1.0) }];
///
/// let list = shopping_list(&recipes, &pantry);
/// assert_eq!(list.len(), 1);
/// assert_eq!(list[0].need_to_buy, 1.0);
/// ```
pub fn shopping_list(recipes: &[Recipe], pantry: &[PantryItem]) -> Vec<ConsolidatedIngredient> {
    let mut list = reconcile(consolidate(recipes), pantry);
    sort_for_shopping(&mut list);
    list
}

/// Groups a list into aisle sections, preserving item order within each.
pub fn by_category(
    list: &[ConsolidatedIngredient],
) -> enum_map::EnumMap<Category, Vec<&ConsolidatedIngredient>> {
    let mut sections = enum_map::EnumMap::<Category, Vec<&ConsolidatedIngredient>>::default();
    for item in list {
        sections[item.category].push(item);
    }
    sections
}
