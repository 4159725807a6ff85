//! Unit synonym normalization
//!
//! Maps the many ways recipe text spells a unit onto one canonical token.
//! Unknown units pass through unchanged so novel units never get rejected.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical unit token and every synonym that maps to it.
///
/// Each canonical token must appear in its own synonym list so that
/// normalization is idempotent.
const UNIT_SYNONYMS: &[(&str, &[&str])] = &[
    ("tbsp", &["tbsp", "tbs", "tablespoon", "tablespoons"]),
    ("tsp", &["tsp", "teaspoon", "teaspoons"]),
    ("oz", &["oz", "ounce", "ounces"]),
    ("lb", &["lb", "lbs", "pound", "pounds"]),
    ("cup", &["cup", "cups", "c"]),
    ("pint", &["pint", "pints", "pt"]),
    ("qt", &["qt", "quart", "quarts"]),
    ("gal", &["gal", "gallon", "gallons"]),
    ("l", &["l", "liter", "liters", "litre", "litres"]),
    (
        "ml",
        &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
    ),
    ("g", &["g", "gram", "grams"]),
    ("kg", &["kg", "kilogram", "kilograms", "kilo", "kilos"]),
    ("clove", &["clove", "cloves"]),
    ("piece", &["piece", "pieces", "pc", "pcs"]),
    ("bunch", &["bunch", "bunches"]),
    ("can", &["can", "cans"]),
    ("pkg", &["pkg", "pkgs", "package", "packages"]),
    ("pinch", &["pinch", "pinches"]),
    ("dash", &["dash", "dashes"]),
    ("to taste", &["to taste"]),
    ("as needed", &["as needed"]),
];

static UNIT_LOOKUP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (canonical, synonyms) in UNIT_SYNONYMS {
        for synonym in *synonyms {
            map.insert(*synonym, *canonical);
        }
    }
    map
});

/// Normalizes a unit to its canonical token.
///
/// The lookup is case-insensitive and trimmed. Units not in the synonym
/// table are returned trimmed with their original casing.
///
/// ```
/// # use larder::normalize_unit;
/// assert_eq!(normalize_unit("Tablespoons"), "tbsp");
/// assert_eq!(normalize_unit(" handful "), "handful");
/// ```
pub fn normalize_unit(raw: &str) -> String {
    let trimmed = raw.trim();
    match UNIT_LOOKUP.get(trimmed.to_lowercase().as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("tablespoon" => "tbsp")]
    #[test_case("Tablespoons" => "tbsp")]
    #[test_case("TBS" => "tbsp")]
    #[test_case("teaspoons" => "tsp")]
    #[test_case("ounces" => "oz")]
    #[test_case("Pounds" => "lb")]
    #[test_case("cups" => "cup")]
    #[test_case("Litres" => "l")]
    #[test_case("milliliters" => "ml")]
    #[test_case("kilos" => "kg")]
    #[test_case("cloves" => "clove")]
    #[test_case("packages" => "pkg")]
    #[test_case("To Taste" => "to taste")]
    #[test_case("" => "")]
    fn normalizes(raw: &str) -> String {
        normalize_unit(raw)
    }

    #[test]
    fn unknown_units_pass_through() {
        assert_eq!(normalize_unit("handful"), "handful");
        assert_eq!(normalize_unit("  Glug  "), "Glug");
    }

    #[test]
    fn idempotent_over_whole_table() {
        for (_, synonyms) in UNIT_SYNONYMS {
            for synonym in *synonyms {
                let once = normalize_unit(synonym);
                assert_eq!(normalize_unit(&once), once, "not idempotent: {synonym}");
            }
        }
    }

    #[test]
    fn canonical_tokens_map_to_themselves() {
        for (canonical, synonyms) in UNIT_SYNONYMS {
            assert!(
                synonyms.contains(canonical),
                "canonical '{canonical}' missing from its own synonyms"
            );
            assert_eq!(normalize_unit(canonical), *canonical);
        }
    }

    #[test]
    fn synonym_table_is_lowercase() {
        for (canonical, synonyms) in UNIT_SYNONYMS {
            assert_eq!(*canonical, canonical.to_lowercase());
            for synonym in *synonyms {
                assert_eq!(*synonym, synonym.to_lowercase());
                assert_eq!(*synonym, synonym.trim());
            }
        }
    }
}
