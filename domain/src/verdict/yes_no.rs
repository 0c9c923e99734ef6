//! Yes/no decision by similarity vote.

use crate::matching::similarity;

/// Decide whether a free-text reply means "yes".
///
/// The reply is compared against the literals `"no"` and `"yes"`; it counts
/// as a no only when it is strictly closer to `"no"`. Equal scores resolve to
/// yes.
///
/// # Examples
///
/// ```
/// use quiz_domain::verdict::decide_yes_no;
///
/// assert!(!decide_yes_no("no"));
/// assert!(decide_yes_no("Yes, that's correct"));
/// ```
pub fn decide_yes_no(response: &str) -> bool {
    let no_score = similarity(response, "no");
    let yes_score = similarity(response, "yes");

    no_score <= yes_score
}

/// Decide a verification reply that may be missing.
///
/// A failed oracle call (`None`) is never treated as a yes, and no
/// similarity is computed for it.
pub fn decide_yes_no_response(response: Option<&str>) -> bool {
    match response {
        Some(text) => decide_yes_no(text),
        None => false,
    }
}
