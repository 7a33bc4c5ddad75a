//! Attribute Definitions
//!
//! An `AttributeDefinition` is the typed schema for one named attribute:
//! its value representation, whether a value is mandatory, and an optional
//! default that must stay lexically consistent with the declared type.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Value representation declared by an attribute definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeFieldType {
    File,
    Text,
    Number,
    Date,
    Boolean,
    Selectable,
}

impl fmt::Display for AttributeFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeFieldType::File => "FILE",
            AttributeFieldType::Text => "TEXT",
            AttributeFieldType::Number => "NUMBER",
            AttributeFieldType::Date => "DATE",
            AttributeFieldType::Boolean => "BOOLEAN",
            AttributeFieldType::Selectable => "SELECTABLE",
        };
        write!(f, "{}", name)
    }
}

/// A named, typed attribute slot that end users attach to domain objects.
///
/// Definitions are created once, may be renamed freely, and may be retyped
/// only when the change is safe against the values already referencing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Assigned on first persistence, immutable thereafter.
    pub id: Option<Uuid>,
    pub name: String,
    /// Never `None` once a definition has passed creation validation.
    pub value_type: Option<AttributeFieldType>,
    /// When true, every value instance must supply a value.
    pub required: bool,
    pub default_value: Option<String>,
    /// Closed vocabulary backing a SELECTABLE-typed attribute.
    pub selectable_reference: Option<Uuid>,
    /// Closed vocabulary of units carried alongside the value.
    pub unit_reference: Option<Uuid>,
}

impl AttributeDefinition {
    /// Create a definition candidate with a declared value type.
    pub fn new(name: impl Into<String>, value_type: AttributeFieldType) -> Self {
        Self {
            id: None,
            name: name.into(),
            value_type: Some(value_type),
            required: false,
            default_value: None,
            selectable_reference: None,
            unit_reference: None,
        }
    }

    /// A candidate with no declared value type. Represents inbound data
    /// as-is; it can never pass creation validation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            value_type: None,
            required: false,
            default_value: None,
            selectable_reference: None,
            unit_reference: None,
        }
    }

    /// Mark the definition as requiring a value on every instance.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the default value.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Point the definition at a `Selectable` vocabulary.
    pub fn with_selectable_reference(mut self, selectable: Uuid) -> Self {
        self.selectable_reference = Some(selectable);
        self
    }

    /// Point the definition at a unit vocabulary.
    pub fn with_unit_reference(mut self, unit: Uuid) -> Self {
        self.unit_reference = Some(unit);
        self
    }

    /// Whether a usable default is declared. Blank strings count as absent.
    pub fn has_default(&self) -> bool {
        self.default_value
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }
}
