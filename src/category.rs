//! Grocery-aisle categories and keyword categorization
//!
//! Every ingredient gets exactly one [`Category`]. The variant order is the
//! store-walk order used to lay out shopping list sections, so the derived
//! `Ord` is the section sort.

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A grocery store aisle section.
///
/// Declared in the order a typical store is walked: produce first, shelf
/// staples and everything else last.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Enum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Produce,
    MeatSeafood,
    DairyEggs,
    Bakery,
    Frozen,
    Canned,
    Pantry,
    #[default]
    Other,
}

const PRODUCE_KEYWORDS: &[&str] = &[
    "apple", "banana", "orange", "lemon", "lime", "berr", "grape", "melon", "peach", "pear",
    "mango", "pineapple", "avocado", "coconut", "tomato", "potato", "onion", "garlic", "carrot",
    "celery", "lettuce", "spinach", "kale", "broccoli", "cauliflower", "cucumber", "zucchini",
    "squash", "mushroom", "ginger", "cilantro", "parsley", "basil", "mint", "scallion", "leek",
    "cabbage", "corn", "eggplant", "radish", "beet", "bell pepper", "jalapeno", "herb",
];

const MEAT_SEAFOOD_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "lamb", "bacon", "sausage", "ham", "steak", "fish",
    "salmon", "tuna", "shrimp", "crab", "lobster", "cod", "tilapia", "anchov", "ground meat",
];

const DAIRY_EGGS_KEYWORDS: &[&str] = &[
    "milk", "cheese", "butter", "yogurt", "cream", "egg", "mozzarella", "cheddar", "parmesan",
    "feta", "ricotta",
];

const BAKERY_KEYWORDS: &[&str] = &[
    "bread", "bagel", "bun", "tortilla", "pita", "croissant", "muffin", "baguette", "dough",
    "cake", "roll",
];

const PANTRY_KEYWORDS: &[&str] = &[
    "flour", "sugar", "rice", "pasta", "noodle", "oat", "cereal", "quinoa", "oil", "vinegar",
    "salt", "pepper", "spice", "cumin", "paprika", "oregano", "thyme", "rosemary", "cinnamon",
    "nutmeg", "turmeric", "curry", "vanilla", "baking powder", "baking soda", "yeast", "honey",
    "syrup", "sauce", "ketchup", "mustard", "mayonnaise", "soy", "stock", "broth", "almond",
    "peanut", "walnut", "cashew", "seed", "chocolate", "cocoa", "extract", "lentil", "bean",
];

const FROZEN_KEYWORDS: &[&str] = &["frozen", "ice cream", "popsicle", "sorbet"];

const CANNED_KEYWORDS: &[&str] = &["canned", "jarred", "preserved", "in brine", "in syrup"];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Assigns an ingredient name to a [`Category`] by keyword substring match.
///
/// Rules are tried in a fixed priority order and the first match wins.
/// Because matching is substring based, the order matters: "coconut milk"
/// must hit the produce rule before the dairy "milk" rule gets a chance.
/// Names that match nothing go to [`Category::Other`].
///
/// ```
/// # use larder::{categorize, Category};
/// assert_eq!(categorize("Cherry Tomatoes"), Category::Produce);
/// assert_eq!(categorize("coconut milk"), Category::Produce);
/// assert_eq!(categorize("mystery powder"), Category::Other);
/// ```
pub fn categorize(name: &str) -> Category {
    let name = name.to_lowercase();
    if contains_any(&name, PRODUCE_KEYWORDS) {
        Category::Produce
    } else if contains_any(&name, MEAT_SEAFOOD_KEYWORDS) {
        Category::MeatSeafood
    } else if contains_any(&name, DAIRY_EGGS_KEYWORDS) {
        Category::DairyEggs
    } else if contains_any(&name, BAKERY_KEYWORDS) {
        Category::Bakery
    } else if contains_any(&name, PANTRY_KEYWORDS) {
        Category::Pantry
    } else if contains_any(&name, FROZEN_KEYWORDS) {
        Category::Frozen
    } else if contains_any(&name, CANNED_KEYWORDS) {
        Category::Canned
    } else {
        Category::Other
    }
}
