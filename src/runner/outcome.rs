//! Evaluation outcomes
//!
//! Task and node results travel as plain values so the node policy (test
//! aggregation, step short-circuiting) is ordinary control flow. Only
//! configuration errors escape this channel.

/// The result of one task or node evaluation
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Whether the task or node succeeded
    pub success: bool,

    /// Captured process output, or a propagated child message
    pub message: String,

    /// Human-readable description of what was attempted
    pub summary: String,
}

impl Outcome {
    /// A successful outcome
    pub fn success(summary: impl Into<String>, message: impl Into<String>) -> Self {
        Outcome {
            success: true,
            message: message.into(),
            summary: summary.into(),
        }
    }

    /// A failed outcome
    pub fn failure(summary: impl Into<String>, message: impl Into<String>) -> Self {
        Outcome {
            success: false,
            message: message.into(),
            summary: summary.into(),
        }
    }
}
