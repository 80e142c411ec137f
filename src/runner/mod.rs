//! Node evaluation engine
//!
//! This module holds the engine core: template rendering, task execution and
//! the tests-gate-steps node policy.

pub mod engine;
pub mod outcome;
pub mod task;
pub mod template;

// Re-export main types
pub use engine::*;
pub use outcome::*;
pub use task::*;
pub use template::*;

use std::collections::HashMap;

/// The string-keyed parameter mapping visible to a task or node at
/// evaluation time
pub type Scope = HashMap<String, String>;
