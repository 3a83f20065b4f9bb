//! Per-invocation run context
//!
//! One immutable value carries what rendering and logging need to know
//! about the current invocation. It is built once in `main` and passed by
//! reference from there on.

/// Immutable context for one listing run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Human-readable label of what was listed (directory, file, or glob).
    pub target_label: String,
    /// 0 = report only, 1 = add summary chrome, 2 = also list members.
    pub verbosity: u8,
}

impl RunContext {
    pub fn new(target_label: String, verbosity: u8) -> Self {
        Self {
            target_label,
            verbosity,
        }
    }
}
