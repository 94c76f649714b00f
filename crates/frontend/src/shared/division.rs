//! Division text → canonical plan
//!
//! Program links, query strings and stored selections carry the division as
//! free text (`u5-u8`, `U5%E2%80%93U8`, `Under 13 - 14`). Every consumer goes
//! through [`normalize_division`], which never fails.

use contracts::enums::CanonicalPlan;

/// Plan returned when the input matches nothing
pub const FALLBACK_PLAN: CanonicalPlan = CanonicalPlan::U13U14;

const SEPARATOR: char = '_';

/// Map arbitrary division text to a plan, falling back to [`FALLBACK_PLAN`].
pub fn normalize_division(input: &str) -> CanonicalPlan {
    match try_normalize_division(input) {
        Some(plan) => plan,
        None => {
            log::warn!(
                "Unrecognized division {:?}, falling back to {}",
                input,
                FALLBACK_PLAN
            );
            FALLBACK_PLAN
        }
    }
}

/// Same as [`normalize_division`] without the fallback.
pub fn try_normalize_division(input: &str) -> Option<CanonicalPlan> {
    if let Some(plan) = CanonicalPlan::from_code(input) {
        return Some(plan);
    }

    let canonical = canonicalize(&decode(input));
    if let Some(plan) = CanonicalPlan::from_code(&canonical) {
        return Some(plan);
    }

    match_by_numbers(&canonical)
}

fn decode(input: &str) -> String {
    let spaced = input.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '_' | '-' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}'
        )
}

/// Collapse separator runs into one `_`, trim them at the ends, uppercase.
fn canonicalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_separator = false;
    for c in input.trim().chars() {
        if is_separator(c) {
            pending_separator = !out.is_empty();
            continue;
        }
        if pending_separator {
            out.push(SEPARATOR);
            pending_separator = false;
        }
        out.extend(c.to_uppercase());
    }
    out
}

fn numbers_in(input: &str) -> Vec<u32> {
    input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse().ok())
        .collect()
}

fn match_by_numbers(canonical: &str) -> Option<CanonicalPlan> {
    // Digit runs are split by separators and letters alike, so "5_8",
    // "U5U8" and "UNDER_5_TO_8" all yield [5, 8].
    let numbers = numbers_in(canonical);

    let by_bounds = CanonicalPlan::all().into_iter().find(|plan| {
        let (lo, hi) = plan.age_range();
        numbers.contains(&lo) && numbers.contains(&hi)
    });
    if by_bounds.is_some() {
        return by_bounds;
    }

    match numbers.as_slice() {
        [age] => CanonicalPlan::all().into_iter().find(|plan| {
            let (lo, hi) = plan.age_range();
            (lo..=hi).contains(age)
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keys_pass_through() {
        for plan in CanonicalPlan::all() {
            assert_eq!(normalize_division(plan.code()), plan);
        }
    }

    #[test]
    fn test_dash_variants_and_case() {
        for input in ["u5-u8", "U5–U8", "U5_U8", "u5 - u8", "U5—U8", " u5‑u8 "] {
            assert_eq!(normalize_division(input), CanonicalPlan::U5U8, "{input}");
        }
    }

    #[test]
    fn test_url_encoded_input() {
        assert_eq!(normalize_division("U5%E2%80%93U8"), CanonicalPlan::U5U8);
        assert_eq!(normalize_division("u11%20-%20u12"), CanonicalPlan::U11U12);
        assert_eq!(normalize_division("u9+u10"), CanonicalPlan::U9U10);
    }

    #[test]
    fn test_hyphenated_key_maps_to_underscored_plan() {
        assert_eq!(normalize_division("U13-U14"), CanonicalPlan::U13U14);
        assert_eq!(normalize_division("U13-U14").code(), "U13_U14");
    }

    #[test]
    fn test_number_matching() {
        assert_eq!(normalize_division("Under 5 to 8"), CanonicalPlan::U5U8);
        assert_eq!(normalize_division("ages 15-18"), CanonicalPlan::U15U18);
        assert_eq!(normalize_division("5-8"), CanonicalPlan::U5U8);
        assert_eq!(normalize_division("U10"), CanonicalPlan::U9U10);
    }

    #[test]
    fn test_number_matching_does_not_confuse_digits_inside_numbers() {
        // 15 and 18 contain the characters 5 and 8 but are different numbers
        assert_eq!(try_normalize_division("U15U18"), Some(CanonicalPlan::U15U18));
    }

    #[test]
    fn test_unknown_input_falls_back() {
        assert_eq!(normalize_division("banana"), FALLBACK_PLAN);
        assert_eq!(normalize_division(""), FALLBACK_PLAN);
        assert_eq!(normalize_division("%%%"), FALLBACK_PLAN);
        assert_eq!(normalize_division("U40"), FALLBACK_PLAN);
        assert_eq!(try_normalize_division("banana"), None);
    }
}
