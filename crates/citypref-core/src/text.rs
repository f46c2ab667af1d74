// crates/citypref-core/src/text.rs

//! Case-folding helpers shared by the normalizer and the list views.

use std::cmp::Ordering;

/// Case-fold a token for comparison.
///
/// This is plain Unicode lower-casing. Stored tokens keep their original
/// casing; only the pinned head of a city list is stored folded.
///
/// # Examples
///
/// ```rust
/// use citypref_core::text::fold_case;
///
/// assert_eq!(fold_case("Vancouver"), "vancouver");
/// assert_eq!(fold_case("MÜNCHEN"), "münchen");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality on the folded form.
///
/// ```rust
/// use citypref_core::text::equals_folded;
///
/// assert!(equals_folded("Toronto", "TORONTO"));
/// assert!(!equals_folded("Toronto", "Ottawa"));
/// ```
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// Orders two tokens by their folded form, falling back to the original
/// strings so the ordering stays total.
pub fn cmp_folded(a: &str, b: &str) -> Ordering {
    fold_case(a).cmp(&fold_case(b)).then_with(|| a.cmp(b))
}

/// Trims a token and returns it only if something is left.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}
