//! Pantry-driven recipe matching
//!
//! Answers "what can I make": for each recipe, how many of its ingredients
//! the pantry already covers.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    model::{Ingredient, PantryItem, Recipe},
    name::normalize_name,
    shopping_list::pantry_lookup,
};

/// A recipe scored against a pantry snapshot.
///
/// `have_ingredients` and `missing_ingredients` partition the recipe's
/// ingredient list, each preserving the recipe's original order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub have_ingredients: Vec<&'a Ingredient>,
    pub missing_ingredients: Vec<&'a Ingredient>,
    pub total_ingredients: usize,
    /// Share of ingredients covered, 0-100, round half up
    pub match_percentage: u8,
    pub is_complete_match: bool,
}

/// Scores one recipe against the pantry.
///
/// An ingredient counts as owned when a pantry entry exists under the same
/// normalized name with a non-zero effective quantity. A recipe with no
/// ingredients scores 0% and is never a complete match.
pub fn match_recipe<'a>(recipe: &'a Recipe, pantry: &[PantryItem]) -> RecipeMatch<'a> {
    match_with_stock(recipe, &pantry_lookup(pantry))
}

fn match_with_stock<'a>(recipe: &'a Recipe, stock: &HashMap<String, f64>) -> RecipeMatch<'a> {
    let mut have_ingredients = Vec::new();
    let mut missing_ingredients = Vec::new();

    for ingredient in &recipe.ingredients {
        let owned = stock
            .get(normalize_name(&ingredient.name).as_str())
            .copied()
            .unwrap_or(0.0);
        if owned > 0.0 {
            have_ingredients.push(ingredient);
        } else {
            missing_ingredients.push(ingredient);
        }
    }

    let total_ingredients = recipe.ingredients.len();
    let match_percentage = if total_ingredients == 0 {
        0
    } else {
        (100.0 * have_ingredients.len() as f64 / total_ingredients as f64).round() as u8
    };

    RecipeMatch {
        recipe,
        have_ingredients,
        missing_ingredients,
        total_ingredients,
        match_percentage,
        is_complete_match: match_percentage == 100,
    }
}

/// Scores every recipe and keeps the useful suggestions.
///
/// Recipes with zero matching ingredients are filtered out; the rest are
/// sorted by descending match percentage, input order breaking ties. The
/// filter is a presentation decision, [`match_recipe`] itself always returns
/// a full result.
#[tracing::instrument(level = "debug", skip_all, fields(recipes = recipes.len(), pantry = pantry.len()))]
pub fn find_recipe_matches<'a>(
    recipes: &'a [Recipe],
    pantry: &[PantryItem],
) -> Vec<RecipeMatch<'a>> {
    let stock = pantry_lookup(pantry);
    let mut matches: Vec<RecipeMatch> = recipes
        .iter()
        .map(|recipe| match_with_stock(recipe, &stock))
        .filter(|m| m.match_percentage > 0)
        .collect();
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, names: &[&str]) -> Recipe {
        Recipe {
            id: id.into(),
            title: format!("Recipe {id}"),
            ingredients: names
                .iter()
                .map(|n| Ingredient::new(*n, 1.0, ""))
                .collect(),
        }
    }

    fn pantry(titles: &[(&str, f64)]) -> Vec<PantryItem> {
        titles
            .iter()
            .map(|(title, quantity)| PantryItem {
                title: (*title).into(),
                quantity: Some(*quantity),
            })
            .collect()
    }

    #[test]
    fn partition_preserves_recipe_order() {
        let r = recipe("r1", &["Egg", "Flour", "Sugar", "Milk"]);
        let p = pantry(&[("flour", 1.0), ("egg", 2.0)]);
        let m = match_recipe(&r, &p);

        let have: Vec<&str> = m.have_ingredients.iter().map(|i| i.name.as_str()).collect();
        let missing: Vec<&str> = m
            .missing_ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(have, vec!["Egg", "Flour"]);
        assert_eq!(missing, vec!["Sugar", "Milk"]);
        assert_eq!(
            m.have_ingredients.len() + m.missing_ingredients.len(),
            m.total_ingredients
        );
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        let r = recipe("r1", &["Egg", "Flour", "Sugar"]);
        let p = pantry(&[("Egg", 2.0)]);
        let m = match_recipe(&r, &p);
        assert_eq!(m.match_percentage, 33);
        assert!(!m.is_complete_match);
    }

    #[test]
    fn two_of_three_rounds_half_up_to_67() {
        let r = recipe("r1", &["Egg", "Flour", "Sugar"]);
        let p = pantry(&[("egg", 1.0), ("flour", 1.0)]);
        let m = match_recipe(&r, &p);
        assert_eq!(m.match_percentage, 67);
    }

    #[test]
    fn complete_match() {
        let r = recipe("r1", &["Egg", "Flour"]);
        let p = pantry(&[("egg", 1.0), ("flour", 1.0)]);
        let m = match_recipe(&r, &p);
        assert_eq!(m.match_percentage, 100);
        assert!(m.is_complete_match);
        assert!(m.missing_ingredients.is_empty());
    }

    #[test]
    fn zero_stock_is_not_owned() {
        let r = recipe("r1", &["Egg"]);
        let p = pantry(&[("egg", 0.0)]);
        let m = match_recipe(&r, &p);
        assert_eq!(m.match_percentage, 0);
        assert_eq!(m.missing_ingredients.len(), 1);
    }

    #[test]
    fn recipe_without_ingredients_scores_zero() {
        let r = recipe("r1", &[]);
        let m = match_recipe(&r, &[]);
        assert_eq!(m.match_percentage, 0);
        assert!(!m.is_complete_match);
        assert_eq!(m.total_ingredients, 0);
    }

    #[test]
    fn batch_filters_zero_matches_and_sorts_descending() {
        let recipes = vec![
            recipe("r1", &["Egg", "Flour"]),
            recipe("r2", &["Caviar"]),
            recipe("r3", &["Egg"]),
        ];
        let p = pantry(&[("egg", 2.0)]);
        let matches = find_recipe_matches(&recipes, &p);

        let ids: Vec<&str> = matches.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let recipes = vec![recipe("r1", &["Egg"]), recipe("r2", &["egg"])];
        let p = pantry(&[("egg", 1.0)]);
        let matches = find_recipe_matches(&recipes, &p);
        let ids: Vec<&str> = matches.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }
}
