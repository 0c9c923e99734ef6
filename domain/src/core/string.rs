//! String utilities for the domain layer.

/// Produce a single-line preview of model output for logs and reports.
///
/// Runs of whitespace (including newlines) collapse to one space, and the
/// result is cut to `max_chars` characters with a trailing ellipsis.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
