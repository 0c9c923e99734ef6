//! Attempt counter and state machine for a single question.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a question being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionState {
    /// No attempt has started yet
    Pending,
    /// An attempt is in progress or another one may follow
    Attempting,
    /// An option was accepted
    Resolved,
    /// Every attempt was used without acceptance
    Exhausted,
}

impl ResolutionState {
    pub fn as_str(&self) -> &str {
        match self {
            ResolutionState::Pending => "pending",
            ResolutionState::Attempting => "attempting",
            ResolutionState::Resolved => "resolved",
            ResolutionState::Exhausted => "exhausted",
        }
    }

    /// Check if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolutionState::Resolved | ResolutionState::Exhausted)
    }
}

impl std::fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable attempt bookkeeping for one question
///
/// Created when a question starts processing and dropped once it reaches a
/// terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptState {
    attempts_used: usize,
    max_attempts: usize,
    state: ResolutionState,
}

impl AttemptState {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            attempts_used: 0,
            max_attempts,
            state: ResolutionState::Pending,
        }
    }

    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn state(&self) -> ResolutionState {
        self.state
    }

    /// Check whether another attempt may start
    pub fn can_attempt(&self) -> bool {
        !self.state.is_terminal() && self.attempts_used < self.max_attempts
    }

    /// Enter `Attempting` and return the 1-based number of the new attempt.
    ///
    /// Returns `None` when no attempt may start; if attempts are used up the
    /// state moves to `Exhausted`.
    pub fn begin_attempt(&mut self) -> Option<usize> {
        if !self.can_attempt() {
            if !self.state.is_terminal() {
                self.state = ResolutionState::Exhausted;
            }
            return None;
        }
        self.state = ResolutionState::Attempting;
        Some(self.attempts_used + 1)
    }

    /// Consume the current attempt without acceptance.
    ///
    /// Moves to `Exhausted` when this was the last allowed attempt.
    pub fn record_failure(&mut self) -> ResolutionState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.attempts_used += 1;
        self.state = if self.attempts_used >= self.max_attempts {
            ResolutionState::Exhausted
        } else {
            ResolutionState::Attempting
        };
        self.state
    }

    /// Consume the current attempt with acceptance
    pub fn resolve(&mut self) -> ResolutionState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.attempts_used += 1;
        self.state = ResolutionState::Resolved;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AttemptState::new(2);
        assert_eq!(state.state(), ResolutionState::Pending);
        assert_eq!(state.attempts_used(), 0);
        assert!(state.can_attempt());
    }

    #[test]
    fn test_exhausts_after_max_failures() {
        let mut state = AttemptState::new(2);

        assert_eq!(state.begin_attempt(), Some(1));
        assert_eq!(state.record_failure(), ResolutionState::Attempting);

        assert_eq!(state.begin_attempt(), Some(2));
        assert_eq!(state.record_failure(), ResolutionState::Exhausted);

        assert_eq!(state.begin_attempt(), None);
        assert_eq!(state.attempts_used(), 2);
    }

    #[test]
    fn test_resolve_stops_retrying() {
        let mut state = AttemptState::new(3);
        state.begin_attempt();
        state.record_failure();
        state.begin_attempt();
        assert_eq!(state.resolve(), ResolutionState::Resolved);
        assert_eq!(state.attempts_used(), 2);
        assert!(!state.can_attempt());

        // Terminal states are sticky
        assert_eq!(state.record_failure(), ResolutionState::Resolved);
        assert_eq!(state.attempts_used(), 2);
    }

    #[test]
    fn test_zero_attempts_is_exhausted_immediately() {
        let mut state = AttemptState::new(0);
        assert!(!state.can_attempt());
        assert_eq!(state.begin_attempt(), None);
        assert_eq!(state.state(), ResolutionState::Exhausted);
    }
}
