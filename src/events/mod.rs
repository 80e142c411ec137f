//! Result and lifecycle event stream
//!
//! The engine pushes one event per task outcome plus node lifecycle markers
//! over a bounded channel; a single long-lived consumer renders them.

pub mod console;
pub mod types;

// Re-export main types
pub use console::*;
pub use types::*;
