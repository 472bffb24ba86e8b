//! Error types for inflow-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for inflow-core operations
#[derive(Debug, Error)]
pub enum InflowError {
    /// IO error (report stream writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Front-end failure (unparsable program); fatal for that input
    #[error("front-end error: {0}")]
    FrontEnd(String),

    /// Analysis error
    #[error("analysis error: {0}")]
    Analysis(String),
}

impl InflowError {
    /// Create a front-end error
    pub fn front_end(msg: impl Into<String>) -> Self {
        InflowError::FrontEnd(msg.into())
    }

    /// Create an internal analysis error
    pub fn internal(msg: impl Into<String>) -> Self {
        InflowError::Analysis(msg.into())
    }
}

/// Result type alias for inflow operations
pub type Result<T> = std::result::Result<T, InflowError>;
