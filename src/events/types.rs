//! Event types and the sender half of the event channel

use crate::runner::Outcome;
use std::sync::mpsc::{self, Receiver, SyncSender};

/// Lifecycle tag attached to each event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    TaskSuccess,
    TaskFailure,
    EnteringNode,
    TestsPassed,
}

/// One emission to the event sink
///
/// Purely observational: the engine never reads events back.
#[derive(Debug, Clone)]
pub struct Event {
    /// Lifecycle tag
    pub kind: EventKind,

    /// What was attempted, when the event carries a task outcome
    pub summary: Option<String>,

    /// Outcome message or lifecycle detail
    pub message: String,
}

/// Create the event channel
///
/// The channel is bounded to a single in-flight event: a send blocks until
/// the consumer is ready, which is the engine's only backpressure.
pub fn channel() -> (EventSender, Receiver<Event>) {
    let (tx, rx) = mpsc::sync_channel(1);
    (EventSender { tx }, rx)
}

/// Sender half of the event channel
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: SyncSender<Event>,
}

impl EventSender {
    /// Send an event, ignoring a consumer that has already gone away
    pub fn send(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Emit the entering-node lifecycle marker
    pub fn entering_node(&self, name: &str) {
        self.send(Event {
            kind: EventKind::EnteringNode,
            summary: None,
            message: name.to_string(),
        });
    }

    /// Emit the tests-passed short-circuit marker
    pub fn tests_passed(&self, message: &str) {
        self.send(Event {
            kind: EventKind::TestsPassed,
            summary: None,
            message: message.to_string(),
        });
    }

    /// Emit a task outcome as a success or failure event
    pub fn task_finished(&self, outcome: &Outcome) {
        let kind = if outcome.success {
            EventKind::TaskSuccess
        } else {
            EventKind::TaskFailure
        };

        self.send(Event {
            kind,
            summary: Some(outcome.summary.clone()),
            message: outcome.message.clone(),
        });
    }
}
