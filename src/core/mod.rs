//! Core state machine types.
//!
//! - State definitions via the `State` trait and the `state_enum!` macro
//! - Transition history tracking
//!
//! Nothing in this module performs I/O.

mod history;
mod macros;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
