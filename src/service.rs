//! Attribute Service
//!
//! The definition/value service wrapped around the validation engines: it
//! builds candidates from inbound data, validates them, and persists only on
//! a pass, surfacing the rule message verbatim otherwise.
//!
//! The store is in-memory and guarded by a single mutex. That one lock is
//! the concurrency discipline the update path needs: the live usage count is
//! read, the update chain runs, and the write lands all under the same
//! guard, so a retype can never be approved against a stale count while a
//! concurrent value insert is in flight.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{DefinitionValidationEngine, ValueValidationEngine};
use crate::error::{EngineError, EngineResult};
use crate::model::{AttributeDefinition, AttributeValue};
use crate::validation::ValidationResult;

#[derive(Default)]
struct AttributeStore {
    definitions: HashMap<Uuid, AttributeDefinition>,
    values: HashMap<Uuid, AttributeValue>,
}

impl AttributeStore {
    fn usage_count(&self, definition_id: Uuid) -> u64 {
        self.values
            .values()
            .filter(|value| value.definition_id == definition_id)
            .count() as u64
    }
}

/// In-memory attribute definition and value service.
pub struct AttributeService {
    definition_engine: DefinitionValidationEngine,
    value_engine: ValueValidationEngine,
    store: Mutex<AttributeStore>,
}

impl AttributeService {
    pub fn new() -> Self {
        Self {
            definition_engine: DefinitionValidationEngine::new(),
            value_engine: ValueValidationEngine::new(),
            store: Mutex::new(AttributeStore::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AttributeStore> {
        // Mutations are single inserts performed after validation, so a
        // poisoned lock cannot leave the store half-written. Recover the
        // guard instead of propagating the poison.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and persist a new definition, returning its assigned id.
    pub fn create_definition(&self, mut definition: AttributeDefinition) -> EngineResult<Uuid> {
        let result = self.definition_engine.validate_for_create(&definition);
        if let Err(error) = reject_invalid(result) {
            warn!(name = %definition.name, %error, "attribute definition rejected");
            return Err(error);
        }

        let id = definition.id.unwrap_or_else(Uuid::new_v4);
        definition.id = Some(id);
        info!(definition_id = %id, name = %definition.name, "attribute definition created");
        self.lock().definitions.insert(id, definition);
        Ok(id)
    }

    /// Validate and apply the replacement of a stored definition.
    ///
    /// The usage count is derived and the decision applied under one lock;
    /// see the module docs.
    pub fn update_definition(
        &self,
        id: Uuid,
        mut proposed: AttributeDefinition,
    ) -> EngineResult<()> {
        let mut store = self.lock();
        let existing = store
            .definitions
            .get(&id)
            .ok_or(EngineError::DefinitionNotFound(id))?;
        let usage_count = store.usage_count(id);

        let result = self
            .definition_engine
            .validate_for_update(existing, &proposed, usage_count);
        if let Err(error) = reject_invalid(result) {
            warn!(definition_id = %id, usage_count, %error, "attribute definition update rejected");
            return Err(error);
        }

        proposed.id = Some(id);
        info!(definition_id = %id, usage_count, name = %proposed.name, "attribute definition updated");
        store.definitions.insert(id, proposed);
        Ok(())
    }

    /// Validate and persist a value against its resolved definition.
    pub fn save_value(&self, mut value: AttributeValue) -> EngineResult<Uuid> {
        let mut store = self.lock();
        let definition = store
            .definitions
            .get(&value.definition_id)
            .ok_or(EngineError::DefinitionNotFound(value.definition_id))?;

        let result = self.value_engine.validate_for_value_save(&value, definition);
        if let Err(error) = reject_invalid(result) {
            warn!(definition_id = %value.definition_id, %error, "attribute value rejected");
            return Err(error);
        }

        let id = value.id.unwrap_or_else(Uuid::new_v4);
        value.id = Some(id);
        debug!(value_id = %id, definition_id = %value.definition_id, "attribute value saved");
        store.values.insert(id, value);
        Ok(id)
    }

    /// Fetch a stored definition.
    pub fn definition(&self, id: Uuid) -> Option<AttributeDefinition> {
        self.lock().definitions.get(&id).cloned()
    }

    /// Number of stored values currently referencing a definition.
    pub fn usage_count(&self, definition_id: Uuid) -> u64 {
        self.lock().usage_count(definition_id)
    }
}

impl Default for AttributeService {
    fn default() -> Self {
        Self::new()
    }
}

fn reject_invalid(result: ValidationResult) -> EngineResult<()> {
    if result.is_valid() {
        Ok(())
    } else {
        let message = result.message.unwrap_or_default();
        Err(EngineError::Validation(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeFieldType;

    fn color_definition() -> AttributeDefinition {
        AttributeDefinition::new("color", AttributeFieldType::Text)
            .with_required(true)
            .with_default_value("Red")
    }

    #[test]
    fn test_create_assigns_id_and_stores() {
        let service = AttributeService::new();
        let id = service.create_definition(color_definition()).unwrap();

        let stored = service.definition(id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.name, "color");
    }

    #[test]
    fn test_create_rejection_surfaces_rule_message() {
        let service = AttributeService::new();
        let candidate = AttributeDefinition::new("color-X", AttributeFieldType::Number)
            .with_default_value("Red");

        let error = service.create_definition(candidate).unwrap_err();
        assert!(error.is_validation());
        assert_eq!(
            error.to_string(),
            "color-X Default value should match the field value type"
        );
    }

    #[test]
    fn test_update_unknown_definition() {
        let service = AttributeService::new();
        let error = service
            .update_definition(Uuid::new_v4(), color_definition())
            .unwrap_err();
        assert!(matches!(error, EngineError::DefinitionNotFound(_)));
    }

    #[test]
    fn test_update_uses_live_usage_count() {
        let service = AttributeService::new();
        let id = service
            .create_definition(AttributeDefinition::new("notes", AttributeFieldType::Text))
            .unwrap();

        // No values yet: the retype is safe.
        let retyped = AttributeDefinition::new("notes", AttributeFieldType::Number);
        service.update_definition(id, retyped).unwrap();

        // Back to TEXT, then add a value; now the same retype must fail.
        service
            .update_definition(id, AttributeDefinition::new("notes", AttributeFieldType::Text))
            .unwrap();
        service
            .save_value(AttributeValue::new(id).with_raw_value("free text"))
            .unwrap();

        let retyped = AttributeDefinition::new("notes", AttributeFieldType::Number);
        let error = service.update_definition(id, retyped).unwrap_err();
        assert!(error.is_validation());
        assert_eq!(service.usage_count(id), 1);
    }

    #[test]
    fn test_save_value_enforces_requiredness() {
        let service = AttributeService::new();
        let id = service.create_definition(color_definition()).unwrap();

        let error = service.save_value(AttributeValue::new(id)).unwrap_err();
        assert_eq!(error.to_string(), "color needs a required value");

        let value_id = service
            .save_value(AttributeValue::new(id).with_raw_value("Blue"))
            .unwrap();
        assert!(service.usage_count(id) == 1);
        assert_ne!(value_id, id);
    }

    #[test]
    fn test_rename_keeps_id_stable() {
        let service = AttributeService::new();
        let id = service.create_definition(color_definition()).unwrap();

        let renamed = color_definition();
        let renamed = AttributeDefinition {
            name: "shade".to_string(),
            ..renamed
        };
        service.update_definition(id, renamed).unwrap();

        let stored = service.definition(id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.name, "shade");
    }
}
