//! Core State trait for hierarchical state machine leaf states.
//!
//! Leaf states of a machine implement this trait. The implicit top state
//! that supplies shared default handling is not a value of this type; it is
//! modelled by the dispatcher that owns the states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position of a machine.
///
/// # Example
///
/// ```rust
/// use snake_act::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Opening,
///     Open,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///         }
///     }
///
///     fn is_transient(&self) -> bool {
///         matches!(self, Self::Opening)
///     }
/// }
///
/// assert!(DoorState::Opening.is_transient());
/// assert!(DoorState::Open.is_settled());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state always moves on without outside input.
    ///
    /// Transient states (a bounded start-up, a shutdown in progress) are
    /// left by completion signals, timer expiry or self-posted requests.
    ///
    /// Default implementation returns `false`.
    fn is_transient(&self) -> bool {
        false
    }

    /// Check if the machine rests in this state until the next request.
    fn is_settled(&self) -> bool {
        !self.is_transient()
    }
}
