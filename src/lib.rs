//! Boxkite - a declarative task-tree runner
//!
//! Boxkite evaluates named nodes loaded from YAML files. A node declares
//! precondition tests and fallback steps; when every test passes the node is
//! already satisfied, otherwise its steps run in order until the first
//! failure. Each test or step is either a `core.Exec` process invocation or a
//! reference to another node.

// Public modules
pub mod cli;
pub mod error;
pub mod events;
pub mod node;
pub mod runner;

// Re-export commonly used types
pub use error::{BoxkiteError, Result};

/// Current version of Boxkite
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
