//! Engine Error Types
//!
//! Everything here is a recoverable result. A failing rule never aborts the
//! process; the caller decides whether a rejection is a user error or a
//! programming defect.

use thiserror::Error;
use uuid::Uuid;

/// Result type for service operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the attribute service.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A validation chain rejected the candidate. The message is the
    /// client-facing text and is surfaced verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("Attribute definition {0} not found")]
    DefinitionNotFound(Uuid),
}

impl EngineError {
    /// Whether this error came from a validation rejection.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
