//! Core node definition types
//!
//! This module defines the data structures that represent a node definition
//! file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved task name for the built-in external process invocation
pub const EXEC_TASK: &str = "core.Exec";

/// A named unit of work, loaded from a single YAML file
///
/// Tests gate steps: when every test passes the node is already satisfied and
/// no step runs. Otherwise the steps run in declared order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    /// Node name
    pub name: String,

    /// Precondition tests (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<Task>,

    /// Fallback steps (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Task>,
}

/// A single invocation within a node
///
/// The name is either the reserved [`EXEC_TASK`] identifier or the name of
/// another node to resolve through the loader.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    /// Task name
    pub name: String,

    /// Parameters passed to a referenced node as its scope
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,

    /// Command line for the built-in; unused by node references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Task {
    /// Whether this task is the built-in process invocation
    pub fn is_exec(&self) -> bool {
        self.name == EXEC_TASK
    }
}
