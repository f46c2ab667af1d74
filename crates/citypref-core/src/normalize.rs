// crates/citypref-core/src/normalize.rs

//! # List Normalizer
//!
//! Turns a raw token collection plus an optional preferred token into the
//! canonical ordering every consumer sees:
//!
//! 1. Deduplicate on the case-folded form. The first occurrence wins and
//!    keeps its original casing.
//! 2. Sort ascending by the folded form.
//! 3. If a preferred token is given, fold it, drop its match from the sorted
//!    body and put the folded token at the head.

use std::collections::HashSet;

use crate::text::{cmp_folded, fold_case, non_empty};

/// Normalize `raw` into a deduplicated, alphabetically ordered list with an
/// optional pinned head.
///
/// # Examples
///
/// ```rust
/// use citypref_core::normalize::normalize_list;
///
/// let seed = ["toronto", "vancouver", "calgary", "montreal"];
/// assert_eq!(
///     normalize_list(seed, None),
///     ["calgary", "montreal", "toronto", "vancouver"]
/// );
/// assert_eq!(
///     normalize_list(seed, Some("Vancouver")),
///     ["vancouver", "calgary", "montreal", "toronto"]
/// );
/// ```
pub fn normalize_list<I, S>(raw: I, preferred: Option<&str>) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut items: Vec<String> = raw
        .into_iter()
        .filter_map(|s| {
            let s = s.as_ref();
            seen.insert(fold_case(s)).then(|| s.to_owned())
        })
        .collect();

    items.sort_by(|a, b| cmp_folded(a, b));

    if let Some(pin) = preferred.and_then(non_empty) {
        pin_front(&mut items, &fold_case(pin));
    }
    items
}

/// Moves `folded` to the head of an already sorted list, removing any
/// case-insensitive match from the body.
fn pin_front(items: &mut Vec<String>, folded: &str) {
    if let Some(pos) = items.iter().position(|s| fold_case(s) == folded) {
        items.remove(pos);
    }
    items.insert(0, folded.to_owned());
}

/// Checks invariants I1 and I3 (and I2 when `pinned` is given).
pub fn is_normalized(items: &[String], pinned: Option<&str>) -> bool {
    let mut seen = HashSet::new();
    if !items.iter().all(|s| seen.insert(fold_case(s))) {
        return false;
    }

    let body = match pinned.and_then(non_empty) {
        Some(pin) => match items.split_first() {
            Some((head, rest)) if *head == fold_case(pin) => rest,
            _ => return false,
        },
        None => items,
    };
    body.windows(2)
        .all(|w| fold_case(&w[0]) <= fold_case(&w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [&str; 4] = ["toronto", "vancouver", "calgary", "montreal"];

    #[test]
    fn sorts_seed_without_preference() {
        let out = normalize_list(SEED, None);
        assert_eq!(out, ["calgary", "montreal", "toronto", "vancouver"]);
        assert!(is_normalized(&out, None));
    }

    #[test]
    fn pins_preferred_token_folded() {
        let out = normalize_list(SEED, Some("Vancouver"));
        assert_eq!(out, ["vancouver", "calgary", "montreal", "toronto"]);
        assert!(is_normalized(&out, Some("Vancouver")));
    }

    #[test]
    fn case_variants_collapse_to_first_seen() {
        let out = normalize_list(["Toronto", "toronto", "TORONTO"], None);
        assert_eq!(out, ["Toronto"]);
    }

    #[test]
    fn pins_token_absent_from_input() {
        let out = normalize_list(SEED, Some("Ottawa"));
        assert_eq!(
            out,
            ["ottawa", "calgary", "montreal", "toronto", "vancouver"]
        );
    }

    #[test]
    fn blank_preference_leaves_list_unpinned() {
        assert_eq!(normalize_list(SEED, Some("")), normalize_list(SEED, None));
        assert_eq!(normalize_list(SEED, Some("   ")), normalize_list(SEED, None));
    }

    #[test]
    fn pin_replaces_mixed_case_entry() {
        let out = normalize_list(["Calgary", "Edmonton", "Banff"], Some("EDMONTON"));
        assert_eq!(out, ["edmonton", "Banff", "Calgary"]);
    }

    #[test]
    fn normalizing_twice_is_idempotent() {
        let inputs: [&[&str]; 4] = [
            &SEED,
            &["b", "A", "a", "C", "b"],
            &["Québec", "quebec", "Halifax", "halifax", "Regina"],
            &[],
        ];
        for raw in inputs {
            for pin in [None, Some("halifax"), Some("Zzz")] {
                let once = normalize_list(raw.iter(), pin);
                let twice = normalize_list(once.iter(), pin);
                assert_eq!(once, twice, "raw={raw:?} pin={pin:?}");
            }
        }
    }

    #[test]
    fn output_has_no_duplicates_and_sorted_tail() {
        let raw = ["delta", "Alpha", "charlie", "alpha", "Bravo", "delta", "bravo"];
        let out = normalize_list(raw, Some("charlie"));
        assert_eq!(out[0], "charlie");
        assert_eq!(out.len(), 4);
        assert!(is_normalized(&out, Some("charlie")));
    }

    #[test]
    fn is_normalized_detects_violations() {
        let unsorted = vec!["b".to_string(), "a".to_string()];
        assert!(!is_normalized(&unsorted, None));

        let dupes = vec!["a".to_string(), "A".to_string()];
        assert!(!is_normalized(&dupes, None));

        let wrong_head = vec!["a".to_string(), "b".to_string()];
        assert!(!is_normalized(&wrong_head, Some("b")));
    }

    #[test]
    fn empty_input_with_preference_yields_single_pin() {
        let out = normalize_list(Vec::<String>::new(), Some("Ottawa"));
        assert_eq!(out, ["ottawa"]);
    }
}
