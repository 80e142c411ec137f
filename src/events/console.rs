//! Console event sink
//!
//! A single long-lived consumer that drains the event channel and renders one
//! line per event. It owns the last-rendered status line itself; no shared
//! state with the engine.

use crate::events::types::{channel, Event, EventKind, EventSender};
use colored::Colorize;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

/// Console renderer for the event stream
pub struct ConsoleSink {
    /// Last-rendered status label
    status: String,

    /// Suppress event lines while still draining the channel
    quiet: bool,
}

impl ConsoleSink {
    fn new(quiet: bool) -> Self {
        ConsoleSink {
            status: String::new(),
            quiet,
        }
    }

    /// Spawn the sink on its own thread and hand back the sender half
    ///
    /// The thread exits once every sender is dropped; join the handle to make
    /// sure all events have been rendered.
    pub fn spawn(quiet: bool) -> (EventSender, JoinHandle<()>) {
        let (sender, rx) = channel();
        let handle = thread::spawn(move || ConsoleSink::new(quiet).drain(rx));
        (sender, handle)
    }

    fn drain(mut self, rx: Receiver<Event>) {
        while let Ok(event) = rx.recv() {
            self.render(&event);
        }
    }

    fn render(&mut self, event: &Event) {
        self.status = status_label(event.kind).to_string();

        if self.quiet {
            return;
        }

        let status = match event.kind {
            EventKind::TaskSuccess => self.status.green(),
            EventKind::TaskFailure => self.status.red(),
            EventKind::EnteringNode => self.status.cyan(),
            EventKind::TestsPassed => self.status.blue(),
        };

        let message = event.message.trim_end();
        match &event.summary {
            Some(summary) => println!("{}: ({}) {}", status, summary, message),
            None => println!("{}: {}", status, message),
        }
    }
}

/// Status label rendered for an event kind
pub fn status_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::TaskSuccess => "SUCCESS",
        EventKind::TaskFailure => "FAILURE",
        EventKind::EnteringNode => "In Node",
        EventKind::TestsPassed => "Tests Passed",
    }
}
