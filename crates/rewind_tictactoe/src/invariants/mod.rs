//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every mutation of
//! a [`GameState`]. They are checked in debug builds and can be tested
//! independently.

mod alternating_marks;
mod cursor_in_range;
mod single_step;

pub use alternating_marks::AlternatingMarks;
pub use cursor_in_range::CursorInRange;
pub use single_step::SingleStepHistory;

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// All invariants a [`GameState`] must satisfy.
pub type GameInvariants = (SingleStepHistory, AlternatingMarks, CursorInRange);

/// Panics if any game invariant is violated.
///
/// A violation is a bug in this crate, never a user error.
pub fn assert_invariants(game: &GameState) {
    if let Err(violations) = <GameInvariants as InvariantSet<GameState>>::check_all(game) {
        let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
        panic!("{}", messages.join("; "));
    }
}
