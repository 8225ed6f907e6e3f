//! Constraint-driven synthetic generation of crew records.
//!
//! A record blueprint declares one [`FieldConstraint`] per field; the
//! interpreter turns each constraint into a value, the uniqueness tracker
//! enforces distinctness scopes, and the engine walks whole blueprints to
//! produce fully populated records.
//!
//! [`FieldConstraint`]: crewseed_core::FieldConstraint

pub mod blueprints;
pub mod engine;
pub mod errors;
pub mod interpreter;
pub mod tracker;

pub use engine::{GenerateOptions, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use interpreter::{FieldValue, GenContext};
pub use tracker::UniquenessTracker;
