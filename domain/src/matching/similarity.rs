//! Normalised similarity score built on edit distance.

use super::distance::edit_distance;

/// Case-insensitive similarity of two strings in `[0, 1]`.
///
/// Returns exactly `1.0` when the lower-cased strings are equal, otherwise
/// `1 - distance / max(len1, len2)` with lengths counted in characters.
///
/// # Examples
///
/// ```
/// use quiz_domain::matching::similarity;
///
/// assert_eq!(similarity("Yes", "yes"), 1.0);
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// ```
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let s1 = s1.to_lowercase();
    let s2 = s2.to_lowercase();

    if s1 == s2 {
        return 1.0;
    }

    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(&s1, &s2);
    1.0 - distance as f64 / max_len as f64
}
