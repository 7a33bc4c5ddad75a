//! Value Rules
//!
//! Policies applied to an `AttributeValue` immediately before persistence,
//! judged against its resolved definition.

use super::composite::SaveValidator;
use super::result::ValidationResult;
use crate::model::{AttributeDefinition, AttributeValue};

/// A value candidate together with its resolved definition.
#[derive(Debug, Clone, Copy)]
pub struct ValueCandidate<'a> {
    pub value: &'a AttributeValue,
    pub definition: &'a AttributeDefinition,
}

/// A value bound to a required definition must carry content in at least
/// one of its three carriers.
pub struct RequiredValuePresentRule;

impl<'a> SaveValidator<ValueCandidate<'a>> for RequiredValuePresentRule {
    fn validate(&self, candidate: &ValueCandidate<'a>) -> ValidationResult {
        if candidate.definition.required && !candidate.value.has_content() {
            return ValidationResult::fail(format!(
                "{} needs a required value",
                candidate.definition.name
            ));
        }
        ValidationResult::ok()
    }
}
