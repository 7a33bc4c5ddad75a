//! EAV Engine - Attribute Definition & Value Validation
//!
//! End users extend domain objects (assets, service items) with arbitrary
//! typed attributes. This crate keeps those attribute definitions and their
//! values internally consistent: creation rules judge new definitions,
//! migration rules judge retypes against the live count of values already
//! referencing a definition, and a mandatory-value rule guards value saves.
//!
//! ## Quick Start
//!
//! ```rust
//! use eav_engine::{AttributeDefinition, AttributeFieldType, DefinitionValidationEngine};
//!
//! let engine = DefinitionValidationEngine::new();
//! let candidate = AttributeDefinition::new("color", AttributeFieldType::Text)
//!     .with_required(true)
//!     .with_default_value("Red");
//! assert!(engine.validate_for_create(&candidate).is_valid());
//! ```

// Core error handling
pub mod error;

// Definitions, values, and selectable vocabularies
pub mod model;

// Outcome type, rule shapes, chain runners, and the concrete rule sets
pub mod validation;

// Engine entry points
pub mod engine;

// In-memory definition/value service wired around the engines
pub mod service;

pub use engine::{DefinitionValidationEngine, ValueValidationEngine};
pub use error::{EngineError, EngineResult};
pub use model::{
    AttributeDefinition, AttributeFieldType, AttributeValue, Selectable, SelectableItem,
};
pub use service::AttributeService;
pub use validation::{
    CompositeSaveValidator, CompositeUpdateValidator, SaveValidator, UpdateValidator,
    ValidationResult,
};
