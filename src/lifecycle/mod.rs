//! Start/stop lifecycle of the snake active object.
//!
//! # States
//!
//! ```text
//! Root ── Stopped ──START_REQ──▶ Starting ──DONE──▶ Started ──collision──▶ Dead
//!            ▲                      │                                      │
//!            │            FAILED / STARTUP_TIMER                        STOP_REQ
//!            │                      ▼                                      │
//!            └──────DONE─────── Stopping ◀─────────────────────────────────┘
//! ```
//!
//! Every leaf falls back to `Root`, which refuses stray start requests with
//! `WrongState` and turns any stray stop request into a deferred request
//! plus a move to `Stopping`. Stop requests that arrive during `Stopping`
//! are deferred too and replayed in arrival order once it exits.
//!
//! The controller is a pure core: [`Controller::dispatch`] returns the
//! [`Action`]s to perform instead of performing them.

mod action;
mod controller;
mod error;
mod event;
mod state;
mod tracker;

pub use action::Action;
pub use controller::Controller;
pub use error::{CfmResult, LifecycleError, RequestError};
pub use event::{Confirmation, Event, Request, RequestKind, Signal, TimerSpec, TimerTag};
pub use state::{LifecycleState, Node};
pub use tracker::CfmTracker;
