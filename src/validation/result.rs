//! Validation Outcome
//!
//! A pass/fail-with-message value, combinable in sequence. Chains fold
//! results with [`ValidationResult::next`], so the first failing rule wins
//! and its message is the one surfaced to the caller.

use serde::{Deserialize, Serialize};

/// Outcome of a single rule or of a whole validation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    /// The canonical passing result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failure carrying a client-facing message naming the offending
    /// attribute.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Combine two results in sequence: `self` if it already failed,
    /// otherwise `other`. Pure composition, no side effects.
    pub fn next(self, other: ValidationResult) -> ValidationResult {
        if self.valid {
            other
        } else {
            self
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
