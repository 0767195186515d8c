//! Snake-Act: a snake game driven by a hierarchical lifecycle state machine
//!
//! The crate follows a "pure core, imperative shell" split. The lifecycle
//! [`Controller`] and the [`sim`] engine are pure: they return the side
//! effects they want performed as [`Action`] values. The [`Active`] shell
//! owns the serial event queue and hands those actions to a host [`Port`].
//!
//! # Core Concepts
//!
//! - **Lifecycle**: `Stopped`, `Starting`, `Started`, `Stopping` and `Dead`
//!   under an implicit root that supplies shared defaults
//! - **Requests**: every start or stop request is answered by exactly one
//!   confirmation
//! - **Simulation**: a snake on a wraparound grid that grows when it eats
//!   and dies when it runs into itself
//!
//! # Example
//!
//! ```rust
//! use snake_act::active::{Confirmer, DisplaySink, SubRequestSink, TimerService};
//! use snake_act::lifecycle::{Confirmation, Request, RequestKind, TimerSpec, TimerTag};
//! use snake_act::sim::Frame;
//! use snake_act::{Active, Event, LifecycleState};
//!
//! #[derive(Default)]
//! struct Host {
//!     confirmations: Vec<Confirmation>,
//! }
//!
//! impl Confirmer for Host {
//!     fn confirm(&mut self, cfm: Confirmation) {
//!         self.confirmations.push(cfm);
//!     }
//! }
//!
//! impl TimerService for Host {
//!     fn start_timer(&mut self, _spec: TimerSpec) {}
//!     fn stop_timer(&mut self, _tag: TimerTag) {}
//! }
//!
//! impl DisplaySink for Host {
//!     fn draw(&mut self, _frame: &Frame) {}
//! }
//!
//! impl SubRequestSink for Host {
//!     fn send_request(&mut self, _to: &str, _kind: RequestKind, _request: Request) {}
//! }
//!
//! let mut snake = Active::builder().seed(3).port(Host::default()).build().unwrap();
//! snake.post(Event::start("UI"));
//! snake.run_until_idle().unwrap();
//!
//! assert_eq!(snake.state(), LifecycleState::Started);
//! assert!(snake.port().confirmations[0].is_success());
//! ```

pub mod active;
pub mod config;
pub mod core;
pub mod lifecycle;
pub mod sim;

// Re-export commonly used types
pub use active::{Active, ActiveBuilder, Port};
pub use config::SnakeConfig;
pub use core::{State, StateHistory, StateTransition};
pub use lifecycle::{Action, Controller, Event, LifecycleError, LifecycleState, RequestError};
