//! Side effects requested by the controller.
//!
//! The controller never talks to collaborators directly. Each dispatch
//! returns an ordered list of actions that the active object executes after
//! the handler has run to completion.

use super::event::{Confirmation, Event, Request, RequestKind, TimerSpec, TimerTag};
use crate::sim::Frame;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Answer a start or stop request.
    Confirm(Confirmation),
    /// Arm a timer.
    StartTimer(TimerSpec),
    /// Cancel a timer. A queued expiry for the tag must not be delivered.
    StopTimer(TimerTag),
    /// Queue an event to self behind everything already waiting.
    Post(Event),
    /// Queue an event to self ahead of everything already waiting.
    Raise(Event),
    /// Ask a collaborator to start or stop.
    SubRequest {
        to: String,
        kind: RequestKind,
        request: Request,
    },
    /// Render one frame.
    Draw(Frame),
}
