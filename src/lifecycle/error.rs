//! Lifecycle error types.

use crate::sim::SimError;
use thiserror::Error;

/// Failure reported to the caller of a start or stop request.
///
/// A confirmation carries `Result<(), RequestError>`; `Ok(())` is success.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// A bounded state's timer elapsed before its completion signal.
    #[error("Timed out before completion")]
    Timeout,

    /// A sub-operation reported failure.
    #[error("{origin} failed: {reason}")]
    Propagated { origin: String, reason: String },

    /// The request arrived in a state that cannot service it.
    #[error("Request not valid in current state")]
    WrongState,
}

/// Result code carried by a confirmation.
pub type CfmResult = Result<(), RequestError>;

/// Contract violations. None of these has a well-defined next state; the
/// active object halts when one is raised.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    #[error("Shutdown timed out; stopping must always complete")]
    ShutdownTimedOut,

    #[error("Shutdown failed: {0}")]
    ShutdownFailed(RequestError),

    #[error("Simulation contract violated: {0}")]
    Simulation(#[from] SimError),

    #[error("Active object halted after a contract violation")]
    Halted,
}
