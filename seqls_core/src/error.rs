//! Error types for the sequence engine
//!
//! Data-shape degradations (no digit runs, unresolved ambiguity) are not
//! errors here; they flow through the pipeline as `None` classifications.
//! The only fallible surface is the formatter's position contract.

use thiserror::Error;

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A digit-run position that does not exist in the named file.
    #[error("no digit run at position {position} in '{name}'")]
    InvalidRunPosition { name: String, position: usize },
}

impl Error {
    pub fn invalid_run_position(name: &str, position: usize) -> Self {
        Self::InvalidRunPosition {
            name: name.to_string(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_run_position_display() {
        let error = Error::invalid_run_position("d.0001.png", 3);
        assert!(error.to_string().contains("position 3"));
        assert!(error.to_string().contains("d.0001.png"));
    }
}
