//! Shared host double for integration tests.

#![allow(dead_code)]

use snake_act::active::{Confirmer, DisplaySink, SubRequestSink, TimerService};
use snake_act::lifecycle::{Confirmation, Request, RequestKind, TimerSpec, TimerTag};
use snake_act::sim::Frame;
use snake_act::{Active, SnakeConfig};
use tracing_subscriber::EnvFilter;

/// Records everything the active object asks its host to do.
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub confirmations: Vec<Confirmation>,
    pub armed: Vec<TimerSpec>,
    pub cancelled: Vec<TimerTag>,
    pub frames: Vec<Frame>,
    pub sub_requests: Vec<(String, RequestKind, Request)>,
}

impl RecordingPort {
    /// Confirmations addressed to `requester`.
    pub fn confirmations_for(&self, requester: &str) -> Vec<&Confirmation> {
        self.confirmations
            .iter()
            .filter(|c| c.to.requester == requester)
            .collect()
    }

    /// True when `tag` was started more recently than it was stopped.
    pub fn is_armed(&self, tag: TimerTag) -> bool {
        let started = self.armed.iter().filter(|s| s.tag == tag).count();
        let stopped = self.cancelled.iter().filter(|t| **t == tag).count();
        started > stopped
    }
}

impl Confirmer for RecordingPort {
    fn confirm(&mut self, cfm: Confirmation) {
        self.confirmations.push(cfm);
    }
}

impl TimerService for RecordingPort {
    fn start_timer(&mut self, spec: TimerSpec) {
        self.armed.push(spec);
    }

    fn stop_timer(&mut self, tag: TimerTag) {
        self.cancelled.push(tag);
    }
}

impl DisplaySink for RecordingPort {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

impl SubRequestSink for RecordingPort {
    fn send_request(&mut self, to: &str, kind: RequestKind, request: Request) {
        self.sub_requests.push((to.to_string(), kind, request));
    }
}

/// Route `tracing` output through the test harness. Set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn seeded(config: SnakeConfig) -> Active<RecordingPort> {
    init_tracing();
    Active::builder()
        .config(config)
        .seed(42)
        .port(RecordingPort::default())
        .build()
        .unwrap()
}
