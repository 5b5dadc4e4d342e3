//! Common error types for Vitrine components.

use thiserror::Error;

/// Common errors across Vitrine components
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input/command
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The intake request never completed
    #[error("Transport error: {0}")]
    Transport(String),
}

impl VitrineError {
    /// Returns true if repeating the same action may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(VitrineError::Transport("connection refused".into()).is_retryable());
        assert!(!VitrineError::Config("bad count".into()).is_retryable());
        assert!(!VitrineError::InvalidInput("bad width".into()).is_retryable());
    }
}
