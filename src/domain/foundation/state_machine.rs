//! State machine trait for status enums.
//!
//! Guards every subscription status change: a move is applied only if the
//! status enum allows it.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define which moves are legal and get a validated
/// `transition_to`.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SubscriptionStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Trialing, Active) |
///             (Active, PastDue) |
///             // ... etc
///         )
///     }
/// }
///
/// // Usage:
/// let next = current.transition_to(SubscriptionStatus::Active)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::illegal_transition(self, target))
        }
    }
}
