//! Hierarchical lifecycle state machine.
//!
//! Dispatch is a flat table keyed by (node, signal). A leaf that does not
//! handle a signal reports [`Reaction::Unhandled`] and the event is offered
//! to its parent, the implicit root, which supplies the shared defaults:
//! a stray start request is refused with `WrongState` and a stray stop
//! request is deferred while the controller moves to `Stopping`.

use super::action::Action;
use super::error::{CfmResult, LifecycleError, RequestError};
use super::event::{Confirmation, Event, Request, RequestKind, Signal, TimerSpec, TimerTag};
use super::state::{LifecycleState, Node};
use super::tracker::CfmTracker;
use crate::config::SnakeConfig;
use crate::core::{StateHistory, StateTransition};
use crate::sim::{Engine, Outcome, Renderer};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

/// What a handler did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reaction {
    Handled,
    Transition(LifecycleState),
    Unhandled,
}

/// Start/stop lifecycle of the snake plus the simulation it drives.
#[derive(Debug)]
pub struct Controller {
    config: SnakeConfig,
    state: LifecycleState,
    pending: Option<Request>,
    deferred: VecDeque<Event>,
    tracker: CfmTracker,
    engine: Option<Engine>,
    renderer: Renderer,
    history: StateHistory<LifecycleState>,
    outbox: Vec<Action>,
}

impl Controller {
    /// Create a controller resting in `Stopped`.
    ///
    /// `config` is expected to have passed [`SnakeConfig::validate`].
    pub fn new(config: SnakeConfig) -> Self {
        let renderer = Renderer::new(config.cell_px, config.glyph_scale);
        Self {
            config,
            state: LifecycleState::Stopped,
            pending: None,
            deferred: VecDeque::new(),
            tracker: CfmTracker::default(),
            engine: None,
            renderer,
            history: StateHistory::new(),
            outbox: Vec::new(),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory<LifecycleState> {
        &self.history
    }

    /// The simulation of the current or most recent run.
    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    /// Request awaiting its start confirmation.
    pub fn pending(&self) -> Option<&Request> {
        self.pending.as_ref()
    }

    /// Number of stop requests waiting for shutdown to finish.
    pub fn deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Handle one event to completion and return the resulting side effects
    /// in execution order.
    pub fn dispatch(&mut self, event: Event) -> Result<Vec<Action>, LifecycleError> {
        let result = self.run(&event);
        let actions = std::mem::take(&mut self.outbox);
        result.map(|()| actions)
    }

    fn run(&mut self, event: &Event) -> Result<(), LifecycleError> {
        let signal = event.signal();
        debug!(state = %self.state, %signal, "event");

        let mut node = Node::Leaf(self.state);
        loop {
            match self.react(node, event)? {
                Reaction::Handled => return Ok(()),
                Reaction::Transition(target) => return self.transition(target, signal),
                Reaction::Unhandled => match node.parent() {
                    Some(parent) => {
                        debug!(from = %node, to = %parent, %signal, "fall back");
                        node = parent;
                    }
                    None => {
                        debug!(%node, state = %self.state, %signal, "unhandled");
                        return Ok(());
                    }
                },
            }
        }
    }

    fn react(&mut self, node: Node, event: &Event) -> Result<Reaction, LifecycleError> {
        match node {
            Node::Root => self.root(event),
            Node::Leaf(LifecycleState::Stopped) => Ok(self.stopped(event)),
            Node::Leaf(LifecycleState::Starting) => Ok(self.starting(event)),
            Node::Leaf(LifecycleState::Started) => self.started(event),
            Node::Leaf(LifecycleState::Stopping) => self.stopping(event),
            Node::Leaf(LifecycleState::Dead) => Ok(Reaction::Unhandled),
        }
    }

    fn root(&mut self, event: &Event) -> Result<Reaction, LifecycleError> {
        match event {
            Event::StartReq(req) => {
                self.confirm(RequestKind::Start, req.clone(), Err(RequestError::WrongState));
                Ok(Reaction::Handled)
            }
            Event::StopReq(_) => {
                self.defer(event.clone());
                Ok(Reaction::Transition(LifecycleState::Stopping))
            }
            _ => Ok(Reaction::Unhandled),
        }
    }

    fn stopped(&mut self, event: &Event) -> Reaction {
        match event {
            Event::StopReq(req) => {
                self.confirm(RequestKind::Stop, req.clone(), Ok(()));
                Reaction::Handled
            }
            Event::StartReq(req) => {
                self.pending = Some(req.clone());
                Reaction::Transition(LifecycleState::Starting)
            }
            _ => Reaction::Unhandled,
        }
    }

    fn starting(&mut self, event: &Event) -> Reaction {
        match event {
            Event::Done => {
                self.confirm_pending(Ok(()));
                Reaction::Transition(LifecycleState::Started)
            }
            Event::Failed(err) => {
                self.confirm_pending(Err(err.clone()));
                Reaction::Transition(LifecycleState::Stopping)
            }
            Event::Timer(TimerTag::Startup) => {
                self.confirm_pending(Err(RequestError::Timeout));
                Reaction::Transition(LifecycleState::Stopping)
            }
            Event::SubCfm {
                from,
                kind,
                correlation,
                result,
            } => {
                self.check_sub_cfm(from, *correlation, *kind, result);
                Reaction::Handled
            }
            _ => Reaction::Unhandled,
        }
    }

    fn started(&mut self, event: &Event) -> Result<Reaction, LifecycleError> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(Reaction::Unhandled);
        };
        match event {
            Event::Timer(TimerTag::Tick) => {
                let tick = engine.advance()?;
                if tick.outcome == Outcome::Collided {
                    info!(head = %engine.body().head(), len = engine.body().len(), "snake collided");
                    return Ok(Reaction::Transition(LifecycleState::Dead));
                }
                let frame = self.renderer.tick_frame(engine, &tick);
                self.outbox.push(Action::Draw(frame));
                Ok(Reaction::Handled)
            }
            Event::Turn(direction) => {
                debug!(%direction, "turn");
                engine.turn(*direction);
                Ok(Reaction::Handled)
            }
            _ => Ok(Reaction::Unhandled),
        }
    }

    fn stopping(&mut self, event: &Event) -> Result<Reaction, LifecycleError> {
        match event {
            Event::StopReq(_) => {
                self.defer(event.clone());
                Ok(Reaction::Handled)
            }
            Event::Done => Ok(Reaction::Transition(LifecycleState::Stopped)),
            Event::Timer(TimerTag::Shutdown) => {
                error!("shutdown timed out");
                Err(LifecycleError::ShutdownTimedOut)
            }
            Event::Failed(err) => {
                error!(%err, "shutdown failed");
                Err(LifecycleError::ShutdownFailed(err.clone()))
            }
            Event::SubCfm {
                from,
                kind,
                correlation,
                result,
            } => {
                self.check_sub_cfm(from, *correlation, *kind, result);
                Ok(Reaction::Handled)
            }
            _ => Ok(Reaction::Unhandled),
        }
    }

    fn transition(&mut self, target: LifecycleState, signal: Signal) -> Result<(), LifecycleError> {
        let from = self.state;
        self.exit(from);
        self.state = target;
        info!(%from, to = %target, %signal, "transition");
        self.history
            .record(StateTransition::now(from, target, signal.name()));
        self.enter(target)
    }

    fn enter(&mut self, state: LifecycleState) -> Result<(), LifecycleError> {
        match state {
            LifecycleState::Stopped => {}
            LifecycleState::Starting => {
                let timeout = self.config.start_timeout();
                self.begin_bounded(TimerTag::Startup, timeout, RequestKind::Start);
            }
            LifecycleState::Stopping => {
                let timeout = self.config.stop_timeout();
                self.begin_bounded(TimerTag::Shutdown, timeout, RequestKind::Stop);
            }
            LifecycleState::Started => {
                self.engine = Some(Engine::from_config(&self.config)?);
                self.start_timer(TimerTag::Tick, self.config.tick_period(), true);
            }
            LifecycleState::Dead => {
                if let Some(engine) = &self.engine {
                    let frame = self.renderer.death_frame(engine.body());
                    self.outbox.push(Action::Draw(frame));
                }
                let request = Request::new(self.config.name.clone());
                self.outbox.push(Action::Post(Event::StopReq(request)));
            }
        }
        Ok(())
    }

    fn exit(&mut self, state: LifecycleState) {
        match state {
            LifecycleState::Stopped | LifecycleState::Dead => {}
            LifecycleState::Starting => {
                self.outbox.push(Action::StopTimer(TimerTag::Startup));
                self.tracker.clear();
                if self.pending.is_some() {
                    let origin = self.config.name.clone();
                    self.confirm_pending(Err(RequestError::Propagated {
                        origin,
                        reason: "start interrupted by stop request".to_string(),
                    }));
                }
            }
            LifecycleState::Stopping => {
                self.outbox.push(Action::StopTimer(TimerTag::Shutdown));
                self.tracker.clear();
                self.recall();
            }
            LifecycleState::Started => {
                self.outbox.push(Action::StopTimer(TimerTag::Tick));
            }
        }
    }

    /// Arm the state's timer and fan out sub-requests. With no
    /// collaborators the state completes immediately.
    fn begin_bounded(&mut self, tag: TimerTag, timeout: Duration, kind: RequestKind) {
        self.start_timer(tag, timeout, false);

        let sent: Vec<(String, Request)> = self
            .config
            .dependencies
            .iter()
            .map(|to| (to.clone(), Request::new(self.config.name.clone())))
            .collect();
        self.tracker
            .expect(kind, sent.iter().map(|(to, request)| (to.as_str(), request)));
        if sent.is_empty() {
            self.outbox.push(Action::Post(Event::Done));
            return;
        }
        for (to, request) in sent {
            debug!(%to, ?kind, correlation = %request.correlation, "sub-request");
            self.outbox.push(Action::SubRequest { to, kind, request });
        }
    }

    fn check_sub_cfm(
        &mut self,
        from: &str,
        correlation: Uuid,
        kind: RequestKind,
        result: &CfmResult,
    ) {
        match self.tracker.check(from, correlation, kind, result) {
            Ok(true) => self.outbox.push(Action::Raise(Event::Done)),
            Ok(false) => {}
            Err(err) => self.outbox.push(Action::Raise(Event::Failed(err))),
        }
    }

    fn start_timer(&mut self, tag: TimerTag, duration: Duration, periodic: bool) {
        self.outbox.push(Action::StartTimer(TimerSpec {
            tag,
            duration,
            periodic,
        }));
    }

    fn defer(&mut self, event: Event) {
        debug!(signal = %event.signal(), queued = self.deferred.len() + 1, "deferred");
        self.deferred.push_back(event);
    }

    fn recall(&mut self) {
        if !self.deferred.is_empty() {
            debug!(count = self.deferred.len(), "recall");
        }
        self.outbox
            .extend(self.deferred.drain(..).map(Action::Raise));
    }

    fn confirm_pending(&mut self, result: CfmResult) {
        if let Some(request) = self.pending.take() {
            self.confirm(RequestKind::Start, request, result);
        }
    }

    fn confirm(&mut self, kind: RequestKind, to: Request, result: CfmResult) {
        match &result {
            Ok(()) => info!(?kind, requester = %to.requester, "confirm success"),
            Err(err) => info!(?kind, requester = %to.requester, %err, "confirm failure"),
        }
        self.outbox
            .push(Action::Confirm(Confirmation { kind, to, result }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, Position};

    fn config() -> SnakeConfig {
        SnakeConfig {
            rng_seed: Some(11),
            ..SnakeConfig::default()
        }
    }

    fn confirmations(actions: &[Action]) -> Vec<&Confirmation> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Confirm(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    fn start_to_started(controller: &mut Controller) {
        let actions = controller.dispatch(Event::start("UI")).unwrap();
        assert!(actions.contains(&Action::Post(Event::Done)));
        controller.dispatch(Event::Done).unwrap();
        assert_eq!(controller.state(), LifecycleState::Started);
    }

    #[test]
    fn starts_in_stopped_with_empty_history() {
        let controller = Controller::new(config());
        assert_eq!(controller.state(), LifecycleState::Stopped);
        assert!(controller.history().transitions().is_empty());
        assert!(controller.engine().is_none());
    }

    #[test]
    fn start_request_arms_startup_timer_and_posts_done() {
        let mut controller = Controller::new(config());
        let request = Request::new("UI");

        let actions = controller.dispatch(Event::StartReq(request.clone())).unwrap();

        assert_eq!(controller.state(), LifecycleState::Starting);
        assert_eq!(controller.pending(), Some(&request));
        assert_eq!(
            actions,
            vec![
                Action::StartTimer(TimerSpec {
                    tag: TimerTag::Startup,
                    duration: Duration::from_millis(200),
                    periodic: false,
                }),
                Action::Post(Event::Done),
            ]
        );
    }

    #[test]
    fn done_confirms_success_and_starts_ticking() {
        let mut controller = Controller::new(config());
        controller.dispatch(Event::start("UI")).unwrap();

        let actions = controller.dispatch(Event::Done).unwrap();

        assert_eq!(controller.state(), LifecycleState::Started);
        assert_eq!(actions[0], Action::StopTimer(TimerTag::Startup));
        let cfms = confirmations(&actions);
        assert_eq!(cfms.len(), 1);
        assert!(cfms[0].is_success());
        assert_eq!(cfms[0].kind, RequestKind::Start);
        assert!(actions.contains(&Action::StartTimer(TimerSpec {
            tag: TimerTag::Tick,
            duration: Duration::from_secs(1),
            periodic: true,
        })));
        assert!(controller.pending().is_none());
    }

    #[test]
    fn startup_timeout_confirms_timeout_and_stops() {
        let mut controller = Controller::new(config());
        controller.dispatch(Event::start("UI")).unwrap();

        let actions = controller.dispatch(Event::Timer(TimerTag::Startup)).unwrap();

        assert_eq!(controller.state(), LifecycleState::Stopping);
        let cfms = confirmations(&actions);
        assert_eq!(cfms.len(), 1);
        assert_eq!(cfms[0].result, Err(RequestError::Timeout));

        controller.dispatch(Event::Done).unwrap();
        assert_eq!(controller.state(), LifecycleState::Stopped);
    }

    #[test]
    fn failure_while_starting_propagates_to_caller() {
        let mut controller = Controller::new(config());
        controller.dispatch(Event::start("UI")).unwrap();
        let err = RequestError::Propagated {
            origin: "DISPLAY".to_string(),
            reason: "no panel".to_string(),
        };

        let actions = controller.dispatch(Event::Failed(err.clone())).unwrap();

        assert_eq!(controller.state(), LifecycleState::Stopping);
        assert_eq!(confirmations(&actions)[0].result, Err(err));
    }

    #[test]
    fn start_outside_stopped_is_wrong_state() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);

        let actions = controller.dispatch(Event::start("OTHER")).unwrap();

        assert_eq!(controller.state(), LifecycleState::Started);
        let cfms = confirmations(&actions);
        assert_eq!(cfms.len(), 1);
        assert_eq!(cfms[0].result, Err(RequestError::WrongState));
        assert_eq!(cfms[0].to.requester, "OTHER");
    }

    #[test]
    fn stop_in_stopped_confirms_immediately() {
        let mut controller = Controller::new(config());
        let actions = controller.dispatch(Event::stop("UI")).unwrap();
        assert_eq!(controller.state(), LifecycleState::Stopped);
        assert!(confirmations(&actions)[0].is_success());
    }

    #[test]
    fn stop_while_started_is_deferred_then_recalled() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);
        let request = Request::new("UI");

        let actions = controller.dispatch(Event::StopReq(request.clone())).unwrap();
        assert_eq!(controller.state(), LifecycleState::Stopping);
        assert!(confirmations(&actions).is_empty());
        assert_eq!(actions[0], Action::StopTimer(TimerTag::Tick));
        assert_eq!(controller.deferred(), 1);

        let actions = controller.dispatch(Event::Done).unwrap();
        assert_eq!(controller.state(), LifecycleState::Stopped);
        assert_eq!(
            actions,
            vec![
                Action::StopTimer(TimerTag::Shutdown),
                Action::Raise(Event::StopReq(request.clone())),
            ]
        );

        let actions = controller.dispatch(Event::StopReq(request.clone())).unwrap();
        let cfms = confirmations(&actions);
        assert_eq!(cfms[0].to, request);
        assert!(cfms[0].is_success());
    }

    #[test]
    fn stop_while_stopping_waits_in_arrival_order() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);
        let first = Request::new("A");
        let second = Request::new("B");

        controller.dispatch(Event::StopReq(first.clone())).unwrap();
        let actions = controller.dispatch(Event::StopReq(second.clone())).unwrap();
        assert!(actions.is_empty());
        assert_eq!(controller.deferred(), 2);

        let actions = controller.dispatch(Event::Done).unwrap();
        let recalled: Vec<_> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Raise(Event::StopReq(r)) => Some(r.requester.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(recalled, vec!["A", "B"]);
        assert_eq!(controller.deferred(), 0);
    }

    #[test]
    fn stop_while_starting_answers_pending_start() {
        let mut controller = Controller::new(config());
        controller.dispatch(Event::start("UI")).unwrap();

        let actions = controller.dispatch(Event::stop("UI")).unwrap();

        assert_eq!(controller.state(), LifecycleState::Stopping);
        let cfms = confirmations(&actions);
        assert_eq!(cfms.len(), 1);
        assert_eq!(cfms[0].kind, RequestKind::Start);
        assert!(matches!(
            cfms[0].result,
            Err(RequestError::Propagated { .. })
        ));
        assert!(controller.pending().is_none());
    }

    #[test]
    fn shutdown_timeout_is_a_contract_violation() {
        let mut controller = Controller::new(config());
        controller.dispatch(Event::stop("UI")).unwrap();
        controller.dispatch(Event::start("UI")).unwrap();
        controller.dispatch(Event::Timer(TimerTag::Startup)).unwrap();
        assert_eq!(controller.state(), LifecycleState::Stopping);

        assert_eq!(
            controller.dispatch(Event::Timer(TimerTag::Shutdown)),
            Err(LifecycleError::ShutdownTimedOut)
        );
    }

    #[test]
    fn failure_while_stopping_is_a_contract_violation() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);
        controller.dispatch(Event::stop("UI")).unwrap();

        assert_eq!(
            controller.dispatch(Event::Failed(RequestError::Timeout)),
            Err(LifecycleError::ShutdownFailed(RequestError::Timeout))
        );
    }

    #[test]
    fn burst_of_stops_is_deferred_without_limit() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);

        for i in 0..10 {
            controller.dispatch(Event::stop(format!("C{i}"))).unwrap();
        }
        assert_eq!(controller.state(), LifecycleState::Stopping);
        assert_eq!(controller.deferred(), 10);

        let actions = controller.dispatch(Event::Done).unwrap();
        let recalled = actions
            .iter()
            .filter(|a| matches!(a, Action::Raise(Event::StopReq(_))))
            .count();
        assert_eq!(recalled, 10);
    }

    #[test]
    fn ticks_draw_frames_and_turns_steer() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);

        controller.dispatch(Event::Turn(Direction::South)).unwrap();
        let actions = controller.dispatch(Event::Timer(TimerTag::Tick)).unwrap();

        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Draw(_)));
        let engine = controller.engine().unwrap();
        assert_eq!(engine.direction(), Direction::South);
        assert_eq!(engine.body().head(), Position::new(1, 5));
    }

    #[test]
    fn collision_goes_dead_and_requests_its_own_stop() {
        let mut controller = Controller::new(SnakeConfig {
            initial_body: vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            initial_direction: Direction::East,
            ..config()
        });
        start_to_started(&mut controller);

        let actions = controller.dispatch(Event::Timer(TimerTag::Tick)).unwrap();

        assert_eq!(controller.state(), LifecycleState::Dead);
        assert_eq!(actions[0], Action::StopTimer(TimerTag::Tick));
        assert!(matches!(actions[1], Action::Draw(_)));
        match &actions[2] {
            Action::Post(Event::StopReq(request)) => assert_eq!(request.requester, "SNAKE_ACT"),
            other => panic!("expected self-posted stop, got {other:?}"),
        }
    }

    #[test]
    fn turns_outside_started_are_ignored() {
        let mut controller = Controller::new(config());
        let actions = controller.dispatch(Event::Turn(Direction::North)).unwrap();
        assert!(actions.is_empty());
        assert_eq!(controller.state(), LifecycleState::Stopped);
    }

    #[test]
    fn stale_timer_expiry_falls_through_unhandled() {
        let mut controller = Controller::new(config());
        let actions = controller.dispatch(Event::Timer(TimerTag::Tick)).unwrap();
        assert!(actions.is_empty());
        let actions = controller.dispatch(Event::Timer(TimerTag::Startup)).unwrap();
        assert!(actions.is_empty());
        assert_eq!(controller.state(), LifecycleState::Stopped);
    }

    fn sub_requests(actions: &[Action]) -> Vec<(&str, RequestKind, &Request)> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::SubRequest { to, kind, request } => Some((to.as_str(), *kind, request)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn dependencies_gate_completion() {
        let mut controller = Controller::new(SnakeConfig {
            dependencies: vec!["DISPLAY".to_string(), "INPUT".to_string()],
            ..config()
        });

        let actions = controller.dispatch(Event::start("UI")).unwrap();
        let sent = sub_requests(&actions);
        let targets: Vec<_> = sent.iter().map(|(to, kind, _)| (*to, *kind)).collect();
        assert_eq!(
            targets,
            vec![("DISPLAY", RequestKind::Start), ("INPUT", RequestKind::Start)]
        );
        assert!(sent.iter().all(|(_, _, r)| r.requester == "SNAKE_ACT"));
        assert!(!actions.contains(&Action::Post(Event::Done)));

        let display = Event::sub_cfm("DISPLAY", RequestKind::Start, sent[0].2, Ok(()));
        let input = Event::sub_cfm("INPUT", RequestKind::Start, sent[1].2, Ok(()));
        assert!(controller.dispatch(input).unwrap().is_empty());
        assert_eq!(
            controller.dispatch(display).unwrap(),
            vec![Action::Raise(Event::Done)]
        );
    }

    #[test]
    fn sub_confirmation_for_another_request_is_ignored() {
        let mut controller = Controller::new(SnakeConfig {
            dependencies: vec!["DISPLAY".to_string()],
            ..config()
        });
        controller.dispatch(Event::start("UI")).unwrap();

        let foreign = Request::new("SNAKE_ACT");
        let actions = controller
            .dispatch(Event::sub_cfm("DISPLAY", RequestKind::Start, &foreign, Ok(())))
            .unwrap();

        assert!(actions.is_empty());
        assert_eq!(controller.state(), LifecycleState::Starting);
    }

    #[test]
    fn failed_dependency_raises_failure() {
        let mut controller = Controller::new(SnakeConfig {
            dependencies: vec!["DISPLAY".to_string()],
            ..config()
        });
        let actions = controller.dispatch(Event::start("UI")).unwrap();
        let request = sub_requests(&actions)[0].2.clone();

        let actions = controller
            .dispatch(Event::sub_cfm(
                "DISPLAY",
                RequestKind::Start,
                &request,
                Err(RequestError::Timeout),
            ))
            .unwrap();

        assert_eq!(
            actions,
            vec![Action::Raise(Event::Failed(RequestError::Propagated {
                origin: "DISPLAY".to_string(),
                reason: "Timed out before completion".to_string(),
            }))]
        );
    }

    #[test]
    fn history_records_lifecycle_path() {
        let mut controller = Controller::new(config());
        start_to_started(&mut controller);
        controller.dispatch(Event::stop("UI")).unwrap();
        controller.dispatch(Event::Done).unwrap();

        let path: Vec<_> = controller.history().get_path().into_iter().copied().collect();
        assert_eq!(
            path,
            vec![
                LifecycleState::Stopped,
                LifecycleState::Starting,
                LifecycleState::Started,
                LifecycleState::Stopping,
                LifecycleState::Stopped,
            ]
        );
        assert_eq!(controller.history().transitions()[0].trigger, "START_REQ");
    }
}
