//! EAV Data Model
//!
//! Definitions, values, and the closed vocabularies they reference.
//! End users extend domain objects (assets, service items) with arbitrary
//! typed attributes; these types describe that schema and its instances.

pub mod definition;
pub mod selectable;
pub mod value;

pub use definition::{AttributeDefinition, AttributeFieldType};
pub use selectable::{Selectable, SelectableItem};
pub use value::AttributeValue;
