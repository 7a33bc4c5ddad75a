//! Composite Validators
//!
//! The two capability shapes rules come in, plus their ordered chain
//! runners. A chain is an explicit vector built once at engine
//! construction; evaluation is a sequential fold that stops at the first
//! failure, so rule order is part of the observable contract.

use super::result::ValidationResult;

/// A rule that judges a single candidate (a definition being created, or a
/// value being saved).
pub trait SaveValidator<T> {
    fn validate(&self, candidate: &T) -> ValidationResult;
}

/// A rule that judges the replacement of an existing record by a proposed
/// one, given the live count of value rows referencing the existing record.
pub trait UpdateValidator<T> {
    fn validate(&self, existing: &T, proposed: &T, usage_count: u64) -> ValidationResult;
}

/// Ordered chain of save rules, short-circuiting on the first failure.
pub struct CompositeSaveValidator<T> {
    validators: Vec<Box<dyn SaveValidator<T> + Send + Sync>>,
}

impl<T> CompositeSaveValidator<T> {
    pub fn new(validators: Vec<Box<dyn SaveValidator<T> + Send + Sync>>) -> Self {
        Self { validators }
    }
}

impl<T> SaveValidator<T> for CompositeSaveValidator<T> {
    fn validate(&self, candidate: &T) -> ValidationResult {
        let mut outcome = ValidationResult::ok();
        for validator in &self.validators {
            if !outcome.is_valid() {
                break;
            }
            outcome = outcome.next(validator.validate(candidate));
        }
        outcome
    }
}

/// Ordered chain of update rules, short-circuiting on the first failure.
pub struct CompositeUpdateValidator<T> {
    validators: Vec<Box<dyn UpdateValidator<T> + Send + Sync>>,
}

impl<T> CompositeUpdateValidator<T> {
    pub fn new(validators: Vec<Box<dyn UpdateValidator<T> + Send + Sync>>) -> Self {
        Self { validators }
    }
}

impl<T> UpdateValidator<T> for CompositeUpdateValidator<T> {
    fn validate(&self, existing: &T, proposed: &T, usage_count: u64) -> ValidationResult {
        let mut outcome = ValidationResult::ok();
        for validator in &self.validators {
            if !outcome.is_valid() {
                break;
            }
            outcome = outcome.next(validator.validate(existing, proposed, usage_count));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct RecordingRule {
        calls: AtomicUsize,
        outcome: ValidationResult,
    }

    impl RecordingRule {
        fn passing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: ValidationResult::ok(),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: ValidationResult::fail(message),
            })
        }
    }

    impl SaveValidator<()> for Arc<RecordingRule> {
        fn validate(&self, _candidate: &()) -> ValidationResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    impl UpdateValidator<()> for Arc<RecordingRule> {
        fn validate(&self, _existing: &(), _proposed: &(), _usage_count: u64) -> ValidationResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    #[test]
    fn test_save_chain_surfaces_first_failure() {
        let first = RecordingRule::failing("first");
        let second = RecordingRule::failing("second");

        let chain =
            CompositeSaveValidator::new(vec![Box::new(first.clone()), Box::new(second.clone())]);
        let result = chain.validate(&());

        assert_eq!(result.message(), Some("first"));
    }

    #[test]
    fn test_save_chain_short_circuits() {
        let first = RecordingRule::failing("first");
        let second = RecordingRule::passing();

        let chain =
            CompositeSaveValidator::new(vec![Box::new(first.clone()), Box::new(second.clone())]);
        chain.validate(&());

        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_save_chain_runs_all_rules_on_pass() {
        let first = RecordingRule::passing();
        let second = RecordingRule::passing();

        let chain =
            CompositeSaveValidator::new(vec![Box::new(first.clone()), Box::new(second.clone())]);
        let result = chain.validate(&());

        assert!(result.is_valid());
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_chain_passes() {
        let chain: CompositeSaveValidator<()> = CompositeSaveValidator::new(Vec::new());
        assert!(chain.validate(&()).is_valid());
    }

    #[test]
    fn test_update_chain_short_circuits() {
        let first = RecordingRule::failing("blocked");
        let second = RecordingRule::passing();

        let chain =
            CompositeUpdateValidator::new(vec![Box::new(first.clone()), Box::new(second.clone())]);
        let result = chain.validate(&(), &(), 3);

        assert_eq!(result.message(), Some("blocked"));
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }
}
