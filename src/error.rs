//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain core
//! @acp:layer utility

use thiserror::Error;

/// Errors produced by the numtrio library
#[derive(Debug, Error)]
pub enum NumtrioError {
    #[error("invalid bound {bound}: must not be negative")]
    NegativeBound { bound: i64 },

    #[error("invalid bound {bound}: exceeds the configured maximum of {max}")]
    BoundTooLarge { bound: i64, max: u64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("oracle has no answer left for: {0}")]
    OracleExhausted(String),

    #[error("invalid answer '{0}': expected y or n")]
    InvalidAnswer(String),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NumtrioError {
    /// True for either flavour of rejected bound
    pub fn is_invalid_bound(&self) -> bool {
        matches!(
            self,
            NumtrioError::NegativeBound { .. } | NumtrioError::BoundTooLarge { .. }
        )
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, NumtrioError>;
