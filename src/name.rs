//! Ingredient name comparison keys
//!
//! Two ingredient strings are "the same ingredient" for consolidation and
//! matching purposes iff their normalized keys are equal. The key is an
//! internal comparison value, never shown to users.

/// Preparation/size descriptors removed when they appear as whole words
const STOP_WORDS: &[&str] = &[
    "fresh", "dried", "chopped", "minced", "diced", "sliced", "whole", "large", "small", "medium",
    "optional",
];

/// Reduces an ingredient name to its comparison key.
///
/// Lowercases, strips everything outside `[a-z0-9 ]`, collapses whitespace
/// and removes descriptor stop-words. This is a conservative heuristic: it
/// does not canonicalize synonyms, so "scallion" and "green onion" remain
/// different ingredients.
///
/// ```
/// # use larder::normalize_name;
/// assert_eq!(normalize_name("Fresh Basil"), normalize_name("basil"));
/// assert_ne!(normalize_name("scallion"), normalize_name("green onion"));
/// ```
pub fn normalize_name(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c.is_whitespace() {
            cleaned.push(c);
        }
    }
    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect();
    words.join(" ")
}
