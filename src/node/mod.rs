//! Node definitions and loading
//!
//! This module defines the YAML data model for nodes and the loader that
//! resolves node names to definition files on disk.

pub mod loader;
pub mod types;

// Re-export main types
pub use loader::*;
pub use types::*;
