//! Common test utilities

use boxkite::events::{channel, Event, EventSender};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Write a node definition file into a node storage directory
pub fn write_node(dir: &Path, name: &str, yaml: &str) -> PathBuf {
    let path = dir.join(format!("{}.yaml", name));
    fs::write(&path, yaml).unwrap();
    path
}

/// Event sender backed by a thread that collects everything sent
///
/// Drop every sender clone before joining the handle.
pub fn collecting_events() -> (EventSender, JoinHandle<Vec<Event>>) {
    let (sender, rx) = channel();
    let collector = thread::spawn(move || rx.iter().collect());
    (sender, collector)
}
