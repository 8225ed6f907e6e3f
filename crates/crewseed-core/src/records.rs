use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shift capacity classes.
pub const CAPACITIES: [&str; 4] = ["AB", "BB", "CB", "AD"];

/// Route area codes a shift can be assigned to.
pub const ROUTE_AREAS: [&str; 4] = ["123der", "873mlh", "545kje", "990res"];

/// Skill codes a technician can hold. Nine codes for three slots per
/// shift, so per-shift uniqueness always has headroom.
pub const SKILL_CODES: [&str; 9] = [
    "bec", "EIF", "LDr", "Ndr", "Adg", "AFb", "yJg", "DBa", "MxG",
];

/// Number of skill slots in one shift.
pub const SKILLS_PER_SHIFT: usize = 3;

/// One skill held during a shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "Code")]
    pub code: String,
}

/// A technician's assigned shift, embedded in the technician record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "Capacity")]
    pub capacity: String,
    #[serde(rename = "Skill")]
    pub skills: [Skill; SKILLS_PER_SHIFT],
    #[serde(rename = "RouteArea")]
    pub route_area: String,
}

/// A supervisor record. Technicians reference it by id as a soft
/// foreign key; nothing is enforced at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superior {
    #[serde(rename = "SuperiorID")]
    pub superior_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

/// A technician record with exactly one embedded shift.
///
/// The id keeps the `TechnicID` wire name of the original service so
/// persisted data stays readable by existing consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    #[serde(rename = "TechnicID")]
    pub technician_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SuperiorID")]
    pub superior_id: i64,
    #[serde(rename = "Shift")]
    pub shift: Shift,
}
