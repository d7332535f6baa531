//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on lifecycle enums such as `TokenState`.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for TokenState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (NoToken, TokenIssued) | (TokenIssued, Consumed))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             NoToken => vec![TokenIssued],
///             // ... etc
///         }
///     }
/// }
///
/// let next = current.transition_to(TokenState::Consumed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Latch {
        Open,
        Closed,
        Jammed,
    }

    impl StateMachine for Latch {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Latch::*;
            matches!((self, target), (Open, Closed) | (Closed, Open) | (Closed, Jammed))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Latch::*;
            match self {
                Open => vec![Closed],
                Closed => vec![Open, Jammed],
                Jammed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Latch::Open.transition_to(Latch::Closed), Ok(Latch::Closed));
    }

    #[test]
    fn transition_to_reports_both_states_on_failure() {
        let err = Latch::Open.transition_to(Latch::Jammed).unwrap_err();
        assert_eq!(err, ValidationError::invalid_transition("Open", "Jammed"));
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Latch::Jammed.is_terminal());
        assert!(!Latch::Open.is_terminal());
    }
}
