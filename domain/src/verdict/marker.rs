//! Affirmative-marker check for correctness classification replies.

/// Marker used when none is configured
pub const DEFAULT_AFFIRMATIVE_MARKER: &str = "yes";

/// Check whether a classification reply signals "correct".
///
/// Case-insensitive substring match. A blank marker never matches.
pub fn signals_affirmative(response: &str, marker: &str) -> bool {
    let marker = marker.trim();
    if marker.is_empty() {
        return false;
    }

    response.to_lowercase().contains(&marker.to_lowercase())
}
