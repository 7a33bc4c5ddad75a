//! Validation Engine Entry Points
//!
//! Thin orchestration gluing the composite chain runners to the concrete
//! rule sets. Chains are explicit ordered vectors built once at
//! construction; the first failing rule's message is the one surfaced, so
//! the order below is part of the engine's contract.

use crate::model::{AttributeDefinition, AttributeValue};
use crate::validation::{
    CompositeSaveValidator, CompositeUpdateValidator, DefaultValueMatchesTypeRule,
    FieldTypeRequiredRule, RequiredNeedsDefaultRule, RequiredTransitionRule,
    RequiredValuePresentRule, SaveValidator, TypeCompatibilityRule, UpdateValidator,
    ValidationResult, ValueCandidate,
};

/// Validates attribute definitions at creation and update time.
pub struct DefinitionValidationEngine {
    create_chain: CompositeSaveValidator<AttributeDefinition>,
    update_chain: CompositeUpdateValidator<AttributeDefinition>,
}

impl DefinitionValidationEngine {
    pub fn new() -> Self {
        Self {
            create_chain: CompositeSaveValidator::new(vec![
                Box::new(FieldTypeRequiredRule),
                Box::new(DefaultValueMatchesTypeRule),
                Box::new(RequiredNeedsDefaultRule),
            ]),
            update_chain: CompositeUpdateValidator::new(vec![
                Box::new(RequiredTransitionRule),
                Box::new(TypeCompatibilityRule),
            ]),
        }
    }

    /// Validate a brand-new definition candidate.
    pub fn validate_for_create(&self, candidate: &AttributeDefinition) -> ValidationResult {
        self.create_chain.validate(candidate)
    }

    /// Validate the replacement of `existing` by `proposed`.
    ///
    /// `usage_count` is the number of value rows referencing `existing` and
    /// must be read inside the same lock scope as the update decision;
    /// otherwise a retype can be approved against a stale snapshot while a
    /// concurrent writer inserts values under the old type.
    pub fn validate_for_update(
        &self,
        existing: &AttributeDefinition,
        proposed: &AttributeDefinition,
        usage_count: u64,
    ) -> ValidationResult {
        self.update_chain.validate(existing, proposed, usage_count)
    }
}

impl Default for DefinitionValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates attribute values immediately before persistence.
pub struct ValueValidationEngine;

impl ValueValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate a value against its resolved definition.
    pub fn validate_for_value_save(
        &self,
        value: &AttributeValue,
        definition: &AttributeDefinition,
    ) -> ValidationResult {
        let chain: CompositeSaveValidator<ValueCandidate<'_>> =
            CompositeSaveValidator::new(vec![Box::new(RequiredValuePresentRule)]);
        chain.validate(&ValueCandidate { value, definition })
    }
}

impl Default for ValueValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
