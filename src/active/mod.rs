//! Run-to-completion shell around the lifecycle controller.
//!
//! [`Active`] owns a single serial event queue. Each [`Active::step`] takes
//! one event, lets the controller handle it completely, then executes the
//! returned actions against the host [`Port`]. Self-posted events are only
//! delivered after the current handler has returned; cancelling a timer
//! also purges any of its expiries still waiting in the queue.

mod builder;
mod error;
mod port;

pub use builder::ActiveBuilder;
pub use error::BuildError;
pub use port::{Confirmer, DisplaySink, Port, SubRequestSink, TimerService};

use crate::config::{ConfigError, SnakeConfig};
use crate::lifecycle::{Action, Controller, Event, LifecycleError, LifecycleState};
use std::collections::VecDeque;
use tracing::error;

/// The snake active object.
pub struct Active<P: Port> {
    controller: Controller,
    queue: VecDeque<Event>,
    port: P,
    halted: bool,
}

impl<P: Port> Active<P> {
    /// Validate `config` and create an active object resting in `Stopped`.
    pub fn new(config: SnakeConfig, port: P) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self {
            controller: Controller::new(config),
            queue: VecDeque::new(),
            port,
            halted: false,
        })
    }

    pub fn builder() -> ActiveBuilder<P> {
        ActiveBuilder::new()
    }

    /// Queue an event from outside: a request, a command or a timer expiry.
    pub fn post(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Process one queued event. Returns `Ok(false)` when the queue is empty.
    ///
    /// A contract violation halts the object; every later call returns
    /// [`LifecycleError::Halted`].
    pub fn step(&mut self) -> Result<bool, LifecycleError> {
        if self.halted {
            return Err(LifecycleError::Halted);
        }
        let Some(event) = self.queue.pop_front() else {
            return Ok(false);
        };
        match self.controller.dispatch(event) {
            Ok(actions) => {
                self.execute(actions);
                Ok(true)
            }
            Err(err) => {
                error!(%err, state = %self.controller.state(), "contract violation, halting");
                self.halted = true;
                Err(err)
            }
        }
    }

    /// Process events until the queue is empty. Returns how many ran.
    pub fn run_until_idle(&mut self) -> Result<usize, LifecycleError> {
        let mut processed = 0;
        while self.step()? {
            processed += 1;
        }
        Ok(processed)
    }

    pub fn state(&self) -> LifecycleState {
        self.controller.state()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Events waiting to be processed.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn execute(&mut self, actions: Vec<Action>) {
        let mut raised = Vec::new();
        for action in actions {
            match action {
                Action::Confirm(cfm) => self.port.confirm(cfm),
                Action::StartTimer(spec) => self.port.start_timer(spec),
                Action::StopTimer(tag) => {
                    self.port.stop_timer(tag);
                    self.queue
                        .retain(|event| !matches!(event, Event::Timer(t) if *t == tag));
                }
                Action::Post(event) => self.queue.push_back(event),
                Action::Raise(event) => raised.push(event),
                Action::SubRequest { to, kind, request } => {
                    self.port.send_request(&to, kind, request)
                }
                Action::Draw(frame) => self.port.draw(&frame),
            }
        }
        // raised events go first, in the order they were raised
        for event in raised.into_iter().rev() {
            self.queue.push_front(event);
        }
    }
}
