//! Best-match selection over a question's options.

use super::similarity::similarity;
use serde::{Deserialize, Serialize};

/// The option that best matches a free-text answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Index into the question's options (display order)
    pub option_index: usize,
    /// Similarity between that option and the answer text, in `[0, 1]`
    pub score: f64,
}

impl MatchResult {
    /// Whether the answer matched the option exactly (ignoring case)
    pub fn is_exact(&self) -> bool {
        self.score >= 1.0
    }
}

/// Pick the option most similar to `candidate`.
///
/// Options are scored in order and the best is only replaced by a strictly
/// greater score, so ties go to the lowest index. No minimum score is
/// applied; callers decide whether a weak match is acceptable.
///
/// Returns `None` only when `options` is empty.
///
/// # Examples
///
/// ```
/// use quiz_domain::matching::select_best;
///
/// let options = ["Paris", "London", "Berlin"];
/// let best = select_best(&options, "paris").unwrap();
/// assert_eq!(best.option_index, 0);
/// assert!(best.is_exact());
/// ```
pub fn select_best<S: AsRef<str>>(options: &[S], candidate: &str) -> Option<MatchResult> {
    let mut best: Option<MatchResult> = None;

    for (index, option) in options.iter().enumerate() {
        let score = similarity(option.as_ref(), candidate);
        match best {
            Some(current) if score <= current.score => {}
            _ => {
                best = Some(MatchResult {
                    option_index: index,
                    score,
                })
            }
        }
    }

    best
}
