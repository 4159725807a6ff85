//! Ingredient normalization and grocery-consolidation engine.
//!
//! Takes recipes with structured ingredients, merges duplicate ingredients
//! across recipes, reconciles the merged list against a pantry snapshot,
//! orders it by grocery-store aisle and scores recipes against what the
//! pantry already holds ("what can I make").
//!
//! Also includes:
//! - Best-effort parsing of free-form quantity text (`"1 1/2"`, `"two"`).
//! - Unit synonym normalization (`"tablespoons"` → `"tbsp"`).
//! - Lenient resolution of LLM-extraction drafts into structured recipes.
//!
//! The engine is a pure library: every function is a deterministic,
//! side-effect-free transformation of in-memory snapshots supplied by the
//! surrounding application. Storage, networking and the extraction call
//! itself live elsewhere.
//!
//! # Basic usage
//!
//! ```rust
//! use larder::{find_recipe_matches, shopping_list, Ingredient, PantryItem, Recipe};
//!
//! let recipes = vec![
//!     Recipe {
//!         id: "r1".into(),
//!         title: "Shakshuka".into(),
//!         ingredients: vec![
//!             Ingredient::new("Tomato", 4.0, "piece"),
//!             Ingredient::new("Egg", 3.0, ""),
//!         ],
//!     },
//!     Recipe {
//!         id: "r2".into(),
//!         title: "Salad".into(),
//!         ingredients: vec![Ingredient::new("tomato", 2.0, "piece")],
//!     },
//! ];
//! let pantry = vec![PantryItem { title: "Egg".into(), quantity: Some(6.0) }];
//!
//! // One merged shopping list, sorted into store-walk order
//! let list = shopping_list(&recipes, &pantry);
//! let tomato = list.iter().find(|i| i.name == "Tomato").unwrap();
//! assert_eq!(tomato.total_quantity, 6.0);
//! assert_eq!(tomato.need_to_buy, 6.0);
//! assert_eq!(list.iter().find(|i| i.name == "Egg").unwrap().need_to_buy, 0.0);
//!
//! // What can I make right now?
//! let matches = find_recipe_matches(&recipes, &pantry);
//! assert_eq!(matches[0].recipe.id, "r1");
//! assert_eq!(matches[0].match_percentage, 50);
//! ```

#![warn(rustdoc::broken_intra_doc_links, clippy::doc_markdown)]

pub mod category;
pub mod draft;
pub mod matcher;
pub mod model;
pub mod name;
pub mod quantity;
pub mod shopping_list;
pub mod unit;

pub use category::{categorize, Category};
pub use draft::{DraftError, DraftIngredient, RecipeDraft};
pub use matcher::{find_recipe_matches, match_recipe, RecipeMatch};
pub use model::{Ingredient, PantryItem, Recipe};
pub use name::normalize_name;
pub use quantity::parse_quantity;
pub use shopping_list::{
    by_category, consolidate, reconcile, shopping_list, sort_for_shopping, ConsolidatedIngredient,
    RecipeRef,
};
pub use unit::normalize_unit;
