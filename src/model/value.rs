//! Attribute Values
//!
//! One concrete value bound to one domain instance, referencing exactly one
//! `AttributeDefinition`. Value rows are replaced, never edited in place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A concrete attribute value instance.
///
/// The value lives in one of three carriers: `raw_value` for TEXT, NUMBER,
/// DATE and BOOLEAN attributes, and the two item references for
/// SELECTABLE-typed or unit-bearing attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: Option<Uuid>,
    pub definition_id: Uuid,
    pub raw_value: Option<String>,
    pub selected_value_item: Option<Uuid>,
    pub selected_unit_item: Option<Uuid>,
}

impl AttributeValue {
    /// Create an empty value bound to a definition.
    pub fn new(definition_id: Uuid) -> Self {
        Self {
            id: None,
            definition_id,
            raw_value: None,
            selected_value_item: None,
            selected_unit_item: None,
        }
    }

    /// Set the string-form value.
    pub fn with_raw_value(mut self, raw_value: impl Into<String>) -> Self {
        self.raw_value = Some(raw_value.into());
        self
    }

    /// Select an item from the definition's selectable vocabulary.
    pub fn with_selected_value_item(mut self, item: Uuid) -> Self {
        self.selected_value_item = Some(item);
        self
    }

    /// Select a unit from the definition's unit vocabulary.
    pub fn with_selected_unit_item(mut self, item: Uuid) -> Self {
        self.selected_unit_item = Some(item);
        self
    }

    /// Whether any of the three carriers holds content.
    /// Blank raw values count as absent.
    pub fn has_content(&self) -> bool {
        self.raw_value
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
            || self.selected_value_item.is_some()
            || self.selected_unit_item.is_some()
    }
}
