//! Events delivered to the lifecycle controller.

use super::error::{CfmResult, RequestError};
use crate::sim::Direction;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Which bounded or periodic timer an expiry belongs to.
///
/// Each tag is owned by exactly one state, so cancelling on exit can never
/// disturb a timer of another state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerTag {
    /// Bounds `Starting`.
    Startup,
    /// Bounds `Stopping`.
    Shutdown,
    /// Periodic simulation tick while `Started`.
    Tick,
}

impl TimerTag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Startup => "STARTUP_TIMER",
            Self::Shutdown => "SHUTDOWN_TIMER",
            Self::Tick => "TICK_TIMER",
        }
    }
}

/// Kind of a confirmed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Start,
    Stop,
}

/// Identity of a request awaiting exactly one confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Who asked; the confirmation is addressed here.
    pub requester: String,
    /// Echoed back in the confirmation.
    pub correlation: Uuid,
}

impl Request {
    pub fn new(requester: impl Into<String>) -> Self {
        Self {
            requester: requester.into(),
            correlation: Uuid::new_v4(),
        }
    }
}

/// Reply to a start or stop request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub kind: RequestKind,
    pub to: Request,
    pub result: CfmResult,
}

impl Confirmation {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything the controller reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Start request; answered within the start-up timeout.
    StartReq(Request),
    /// Stop request; answered within the shutdown timeout.
    StopReq(Request),
    /// Fire-and-forget heading change.
    Turn(Direction),
    /// Expiry of a timer.
    Timer(TimerTag),
    /// All sub-operations of the current bounded state completed.
    Done,
    /// A sub-operation of the current bounded state failed.
    Failed(RequestError),
    /// Confirmation of a sub-request sent to a collaborator.
    SubCfm {
        from: String,
        kind: RequestKind,
        /// Echo of the sub-request's correlation id.
        correlation: Uuid,
        result: CfmResult,
    },
}

impl Event {
    pub fn start(requester: impl Into<String>) -> Self {
        Self::StartReq(Request::new(requester))
    }

    pub fn stop(requester: impl Into<String>) -> Self {
        Self::StopReq(Request::new(requester))
    }

    /// Reply from collaborator `from` to the sub-request `request`.
    pub fn sub_cfm(
        from: impl Into<String>,
        kind: RequestKind,
        request: &Request,
        result: CfmResult,
    ) -> Self {
        Self::SubCfm {
            from: from.into(),
            kind,
            correlation: request.correlation,
            result,
        }
    }

    pub fn signal(&self) -> Signal {
        match self {
            Self::StartReq(_) => Signal::StartReq,
            Self::StopReq(_) => Signal::StopReq,
            Self::Turn(Direction::North) => Signal::TurnNorth,
            Self::Turn(Direction::South) => Signal::TurnSouth,
            Self::Turn(Direction::East) => Signal::TurnEast,
            Self::Turn(Direction::West) => Signal::TurnWest,
            Self::Timer(TimerTag::Startup) => Signal::StartupTimer,
            Self::Timer(TimerTag::Shutdown) => Signal::ShutdownTimer,
            Self::Timer(TimerTag::Tick) => Signal::TickTimer,
            Self::Done => Signal::Done,
            Self::Failed(_) => Signal::Failed,
            Self::SubCfm { .. } => Signal::SubCfm,
        }
    }
}

/// Payload-free tag of an [`Event`], used for logging and history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    StartReq,
    StopReq,
    TurnNorth,
    TurnSouth,
    TurnEast,
    TurnWest,
    StartupTimer,
    ShutdownTimer,
    TickTimer,
    Done,
    Failed,
    SubCfm,
}

impl Signal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartReq => "START_REQ",
            Self::StopReq => "STOP_REQ",
            Self::TurnNorth => "TURN_N",
            Self::TurnSouth => "TURN_S",
            Self::TurnEast => "TURN_E",
            Self::TurnWest => "TURN_W",
            Self::StartupTimer => TimerTag::Startup.name(),
            Self::ShutdownTimer => TimerTag::Shutdown.name(),
            Self::TickTimer => TimerTag::Tick.name(),
            Self::Done => "DONE",
            Self::Failed => "FAILED",
            Self::SubCfm => "SUB_CFM",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timer arming parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSpec {
    pub tag: TimerTag,
    pub duration: Duration,
    pub periodic: bool,
}
