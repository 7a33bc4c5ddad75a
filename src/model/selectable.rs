//! Selectable Vocabularies
//!
//! A `Selectable` is a closed, enumerated list of named items. Definitions
//! reference one as the value domain of a SELECTABLE-typed attribute or as
//! the unit list carried alongside a value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    pub id: Option<Uuid>,
    pub value: String,
}

impl SelectableItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4()),
            value: value.into(),
        }
    }
}

/// A closed vocabulary of selectable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectable {
    pub id: Option<Uuid>,
    pub name: String,
    pub items: Vec<SelectableItem>,
}

impl Selectable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4()),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append an item to the vocabulary.
    pub fn with_item(mut self, value: impl Into<String>) -> Self {
        self.items.push(SelectableItem::new(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_construction() {
        let colors = Selectable::new("colors")
            .with_item("Red")
            .with_item("Green")
            .with_item("Blue");

        assert_eq!(colors.items.len(), 3);
        assert_eq!(colors.items[0].value, "Red");
        assert!(colors.id.is_some());
        assert!(colors.items.iter().all(|item| item.id.is_some()));
    }
}
