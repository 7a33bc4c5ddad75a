//! Definition Rules
//!
//! The domain policies applied when an `AttributeDefinition` is created or
//! when an existing definition is replaced by a proposed one. Creation rules
//! judge a single candidate; update rules additionally see the live count of
//! value rows referencing the existing definition, which gates how far a
//! retype is allowed to go.

use super::composite::{SaveValidator, UpdateValidator};
use super::result::ValidationResult;
use crate::model::{AttributeDefinition, AttributeFieldType};

/// A definition must declare a value type before anything else is judged.
pub struct FieldTypeRequiredRule;

impl SaveValidator<AttributeDefinition> for FieldTypeRequiredRule {
    fn validate(&self, candidate: &AttributeDefinition) -> ValidationResult {
        if candidate.value_type.is_none() {
            return ValidationResult::fail(format!(
                "{} Field value type is required",
                candidate.name
            ));
        }
        ValidationResult::ok()
    }
}

/// A declared default must be lexically consistent with the value type.
///
/// This is a conservative heuristic: only TEXT and NUMBER defaults can be
/// proven consistent. A non-blank default on any other type is rejected
/// rather than guessed at.
pub struct DefaultValueMatchesTypeRule;

impl SaveValidator<AttributeDefinition> for DefaultValueMatchesTypeRule {
    fn validate(&self, candidate: &AttributeDefinition) -> ValidationResult {
        let default_value = match candidate.default_value.as_deref() {
            Some(v) if !v.trim().is_empty() => v,
            _ => return ValidationResult::ok(),
        };

        let consistent = match candidate.value_type {
            Some(AttributeFieldType::Number) => {
                default_value.chars().all(|c| c.is_ascii_digit())
            }
            Some(AttributeFieldType::Text) => default_value.chars().all(char::is_alphabetic),
            _ => false,
        };

        if consistent {
            ValidationResult::ok()
        } else {
            ValidationResult::fail(format!(
                "{} Default value should match the field value type",
                candidate.name
            ))
        }
    }
}

/// A required definition must carry a default so that instances created
/// without explicit input still satisfy the mandatory-value rule.
/// SELECTABLE definitions satisfy this with their vocabulary reference.
pub struct RequiredNeedsDefaultRule;

impl SaveValidator<AttributeDefinition> for RequiredNeedsDefaultRule {
    fn validate(&self, candidate: &AttributeDefinition) -> ValidationResult {
        if candidate.required && !satisfies_required_default(candidate) {
            return ValidationResult::fail(format!(
                "{} Default value is required for a required field",
                candidate.name
            ));
        }
        ValidationResult::ok()
    }
}

/// Flipping `required` from false to true must come with a default, since
/// existing instances were allowed to omit their value. Relaxing
/// true -> false never needs a default.
pub struct RequiredTransitionRule;

impl UpdateValidator<AttributeDefinition> for RequiredTransitionRule {
    fn validate(
        &self,
        existing: &AttributeDefinition,
        proposed: &AttributeDefinition,
        _usage_count: u64,
    ) -> ValidationResult {
        if !existing.required && proposed.required && !satisfies_required_default(proposed) {
            return ValidationResult::fail("Default value is required for required field");
        }
        ValidationResult::ok()
    }
}

fn satisfies_required_default(definition: &AttributeDefinition) -> bool {
    definition.has_default()
        || (definition.value_type == Some(AttributeFieldType::Selectable)
            && definition.selectable_reference.is_some())
}

/// A retype is only constrained once values exist. With a zero usage count
/// any transition is safe; otherwise the deny table below applies.
pub struct TypeCompatibilityRule;

impl UpdateValidator<AttributeDefinition> for TypeCompatibilityRule {
    fn validate(
        &self,
        existing: &AttributeDefinition,
        proposed: &AttributeDefinition,
        usage_count: u64,
    ) -> ValidationResult {
        if usage_count == 0 {
            return ValidationResult::ok();
        }

        // A stored definition always carries a type once it has passed
        // creation validation. Seeing none here is a configuration fault,
        // not a user error; refuse rather than guess.
        let from = match existing.value_type {
            Some(value_type) => value_type,
            None => {
                return ValidationResult::fail(format!(
                    "{} Stored definition has no field value type; cannot evaluate type change",
                    existing.name
                ))
            }
        };

        let to = match proposed.value_type {
            Some(value_type) => value_type,
            None => {
                return ValidationResult::fail(format!(
                    "{} Field value type is required",
                    proposed.name
                ))
            }
        };

        if transition_denied(from, to) {
            return ValidationResult::fail(format!(
                "{} Field value type cannot be changed while the field is in use",
                existing.name
            ));
        }
        ValidationResult::ok()
    }
}

/// Deny table for retypes while values exist; anything not listed is
/// permitted. Free text cannot be reinterpreted as numbers or booleans, and
/// file-backed values cannot become any other representation.
// TODO: handle more cases (DATE, BOOLEAN and SELECTABLE sources are unguarded)
fn transition_denied(from: AttributeFieldType, to: AttributeFieldType) -> bool {
    use AttributeFieldType::*;
    match (from, to) {
        (Text, Number) | (Text, Boolean) => true,
        (File, to) => to != File,
        _ => false,
    }
}
