//! Validation Engine Core
//!
//! Pass/fail outcomes, the two rule capability shapes, composite chain
//! runners, and the concrete definition/value rule sets. Everything here is
//! pure: rules never touch shared state, so a chain's outcome is a
//! deterministic function of its inputs and its rule order.

pub mod composite;
pub mod definition_rules;
pub mod result;
pub mod value_rules;

pub use composite::{
    CompositeSaveValidator, CompositeUpdateValidator, SaveValidator, UpdateValidator,
};
pub use definition_rules::{
    DefaultValueMatchesTypeRule, FieldTypeRequiredRule, RequiredNeedsDefaultRule,
    RequiredTransitionRule, TypeCompatibilityRule,
};
pub use result::ValidationResult;
pub use value_rules::{RequiredValuePresentRule, ValueCandidate};
