//! Field blueprints for the crew record types, plus the typed assembly
//! that turns interpreter output back into records. Field order here
//! must match the assembly index order below.

use chrono::DateTime;

use crewseed_core::{
    CAPACITIES, FieldConstraint, ROUTE_AREAS, SKILL_CODES, SKILLS_PER_SHIFT, SemanticKind, Shift,
    Skill, Superior, Technician,
};

use crate::errors::GenerationError;
use crate::interpreter::FieldValue;

pub const SUPERIOR_ID_MIN: i64 = 10;
pub const SUPERIOR_ID_MAX: i64 = 100;
pub const TECHNICIAN_ID_MIN: i64 = 100;
pub const TECHNICIAN_ID_MAX: i64 = 1000;

pub fn superior_fields() -> Vec<FieldConstraint> {
    vec![
        FieldConstraint::range("superior_id", SUPERIOR_ID_MIN, SUPERIOR_ID_MAX).unique(),
        FieldConstraint::semantic("name", SemanticKind::PersonName).unique(),
        FieldConstraint::semantic("phone", SemanticKind::PhoneNumber).unique(),
    ]
}

pub fn technician_fields() -> Vec<FieldConstraint> {
    vec![
        FieldConstraint::range("technician_id", TECHNICIAN_ID_MIN, TECHNICIAN_ID_MAX).unique(),
        FieldConstraint::semantic("name", SemanticKind::PersonName).unique(),
        FieldConstraint::skip("superior_id"),
        FieldConstraint::composite("shift", shift_fields()),
    ]
}

fn shift_fields() -> Vec<FieldConstraint> {
    vec![
        FieldConstraint::skip("date"),
        FieldConstraint::choice("capacity", &CAPACITIES),
        FieldConstraint::array(
            "skills",
            SKILLS_PER_SHIFT,
            FieldConstraint::composite("skill", vec![FieldConstraint::choice("code", &SKILL_CODES)])
                .unique(),
        ),
        FieldConstraint::choice("route_area", &ROUTE_AREAS),
    ]
}

pub fn superior_from_values(values: &[FieldValue]) -> Result<Superior, GenerationError> {
    Ok(Superior {
        superior_id: int_at(values, 0, "superior.superior_id")?,
        name: text_at(values, 1, "superior.name")?,
        phone: text_at(values, 2, "superior.phone")?,
    })
}

/// Assembles a technician. `superior_id` and `shift.date` stay at
/// placeholder values until the engine's derivation step overwrites them.
pub fn technician_from_values(values: &[FieldValue]) -> Result<Technician, GenerationError> {
    let shift_parts = values
        .get(3)
        .and_then(FieldValue::as_tuple)
        .ok_or_else(|| shape_error("technician.shift"))?;
    Ok(Technician {
        technician_id: int_at(values, 0, "technician.technician_id")?,
        name: text_at(values, 1, "technician.name")?,
        superior_id: 0,
        shift: shift_from_values(shift_parts)?,
    })
}

fn shift_from_values(parts: &[FieldValue]) -> Result<Shift, GenerationError> {
    let items = parts
        .get(2)
        .and_then(FieldValue::as_list)
        .ok_or_else(|| shape_error("shift.skills"))?;
    let mut skills = Vec::with_capacity(SKILLS_PER_SHIFT);
    for item in items {
        let code = item
            .as_tuple()
            .and_then(|tuple| tuple.first())
            .and_then(FieldValue::as_text)
            .ok_or_else(|| shape_error("shift.skills.code"))?;
        skills.push(Skill {
            code: code.to_string(),
        });
    }
    let skills: [Skill; SKILLS_PER_SHIFT] = skills
        .try_into()
        .map_err(|_| shape_error("shift.skills length"))?;
    Ok(Shift {
        date: DateTime::UNIX_EPOCH,
        capacity: text_at(parts, 1, "shift.capacity")?,
        skills,
        route_area: text_at(parts, 3, "shift.route_area")?,
    })
}

fn int_at(values: &[FieldValue], index: usize, path: &str) -> Result<i64, GenerationError> {
    values
        .get(index)
        .and_then(FieldValue::as_int)
        .ok_or_else(|| shape_error(path))
}

fn text_at(values: &[FieldValue], index: usize, path: &str) -> Result<String, GenerationError> {
    values
        .get(index)
        .and_then(FieldValue::as_text)
        .map(str::to_string)
        .ok_or_else(|| shape_error(path))
}

fn shape_error(path: &str) -> GenerationError {
    GenerationError::Blueprint(format!("unexpected value shape at {path}"))
}
