//! Domain model for Crewseed: synthetic crew records and the declarative
//! field-constraint vocabulary that drives their generation.

pub mod constraints;
pub mod records;

pub use constraints::{FieldConstraint, SemanticKind, ValueRule};
pub use records::{
    CAPACITIES, ROUTE_AREAS, SKILL_CODES, SKILLS_PER_SHIFT, Shift, Skill, Superior, Technician,
};
