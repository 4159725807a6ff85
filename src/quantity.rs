//! Best-effort parsing of free-form quantity text
//!
//! Upstream ingredient text is unstructured, so parsing never fails: input
//! that carries no recognizable amount degrades to `0`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Small-number words accepted when no digits are present
const WORD_NUMBERS: &[(&str, f64)] = &[
    ("a", 1.0),
    ("an", 1.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
];

static WORD_NUMBER_LOOKUP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| WORD_NUMBERS.iter().copied().collect());

/// Parses a free-form quantity token into a number.
///
/// Detection precedence:
/// 1. Fractions, including mixed numbers: `"1 1/2"` is `1.5`, not `1`.
/// 2. The first plain decimal/integer run, even inside noisy text.
/// 3. Number words: `"two"` is `2`, `"a"`/`"an"` are `1`.
///
/// Anything else, including empty input, is `0`.
///
/// ```
/// # use larder::parse_quantity;
/// assert_eq!(parse_quantity("1 1/2"), 1.5);
/// assert_eq!(parse_quantity("about 2.5 cups"), 2.5);
/// assert_eq!(parse_quantity("an"), 1.0);
/// assert_eq!(parse_quantity("to taste"), 0.0);
/// ```
pub fn parse_quantity(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    if let Some(value) = scan_fraction(raw) {
        return value;
    }
    if let Some(value) = scan_decimal(raw) {
        return value;
    }
    if let Some(value) = scan_word(raw) {
        return value;
    }
    0.0
}

/// Finds the first `a/b` token, attaching a whole part from the token right
/// before it when that token is a plain number.
fn scan_fraction(raw: &str) -> Option<f64> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.trim_matches(|c: char| !c.is_ascii_digit() && c != '/');
        let Some((num, den)) = token.split_once('/') else {
            continue;
        };
        let (Ok(num), Ok(den)) = (num.parse::<f64>(), den.parse::<f64>()) else {
            continue;
        };
        if den <= 0.0 {
            continue;
        }
        let whole = i
            .checked_sub(1)
            .and_then(|p| tokens[p].parse::<f64>().ok())
            .unwrap_or(0.0);
        return Some(whole + num / den);
    }
    None
}

/// Extracts the first run of digits (with an optional decimal point)
fn scan_decimal(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    run.parse().ok()
}

fn scan_word(raw: &str) -> Option<f64> {
    raw.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_alphabetic()))
        .find_map(|word| WORD_NUMBER_LOOKUP.get(word.to_lowercase().as_str()).copied())
}
