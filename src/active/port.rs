//! Collaborator contracts.
//!
//! Implement these on whatever hosts the active object: a real timer
//! service and display driver in production, a recording double in tests.

use crate::lifecycle::{Confirmation, Request, RequestKind, TimerSpec, TimerTag};
use crate::sim::Frame;

/// Delivers confirmations back to requesters.
pub trait Confirmer {
    fn confirm(&mut self, cfm: Confirmation);
}

/// Arms and cancels timers. An armed timer eventually posts
/// `Event::Timer(tag)` to the active object unless stopped first.
pub trait TimerService {
    fn start_timer(&mut self, spec: TimerSpec);
    fn stop_timer(&mut self, tag: TimerTag);
}

/// Receives whole frames. No acknowledgement is expected.
pub trait DisplaySink {
    fn draw(&mut self, frame: &Frame);
}

/// Forwards start/stop sub-requests to collaborators.
pub trait SubRequestSink {
    fn send_request(&mut self, to: &str, kind: RequestKind, request: Request);
}

/// Everything the active object needs from its host.
pub trait Port: Confirmer + TimerService + DisplaySink + SubRequestSink {}

impl<T> Port for T where T: Confirmer + TimerService + DisplaySink + SubRequestSink {}
