//! State machine trait for status enums.

/// Trait for status enums that represent state machines.
///
/// Callers that must tolerate out-of-order writes consult
/// `can_transition_to` without enforcing it.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;
}
