use fake::Fake;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crewseed_core::{FieldConstraint, SemanticKind, ValueRule};

use crate::errors::GenerationError;
use crate::tracker::UniquenessTracker;

/// Value produced for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    /// Sub-values of a composite field, in declaration order.
    Tuple(Vec<FieldValue>),
    /// Elements of a fixed-size array field.
    List(Vec<FieldValue>),
    /// Skipped field; filled in by a later derivation step.
    Absent,
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Tuple(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Canonical encoding used for uniqueness bookkeeping. Nested values
    /// join their parts with a separator that cannot appear in any of the
    /// fixed option sets.
    fn canonical(&self) -> String {
        match self {
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Text(value) => value.clone(),
            FieldValue::Tuple(values) | FieldValue::List(values) => values
                .iter()
                .map(FieldValue::canonical)
                .collect::<Vec<_>>()
                .join("\u{1f}"),
            FieldValue::Absent => String::new(),
        }
    }
}

/// Mutable state for one generation run: the RNG and the uniqueness
/// tracker. Created at run start, dropped at run end, never shared
/// between concurrent runs.
#[derive(Debug)]
pub struct GenContext {
    pub rng: ChaCha8Rng,
    pub tracker: UniquenessTracker,
    pub max_attempts: u32,
}

impl GenContext {
    pub fn new(rng: ChaCha8Rng, max_attempts: u32) -> Self {
        Self {
            rng,
            tracker: UniquenessTracker::new(),
            max_attempts,
        }
    }
}

/// Produces one value for `constraint`, honoring its uniqueness scope.
/// `prefix` is the field path of the enclosing record or composite.
pub fn generate_field(
    constraint: &FieldConstraint,
    prefix: &str,
    ctx: &mut GenContext,
) -> Result<FieldValue, GenerationError> {
    let path = join_path(prefix, constraint.field);
    match &constraint.rule {
        ValueRule::Skip => Ok(FieldValue::Absent),
        ValueRule::Composite(fields) => {
            let mut parts = Vec::with_capacity(fields.len());
            for sub in fields {
                parts.push(generate_field(sub, &path, ctx)?);
            }
            Ok(FieldValue::Tuple(parts))
        }
        ValueRule::Array { len, element } => {
            // Uniqueness inside an array is scoped to this one instance,
            // so later arrays at the same path start from a clean slate.
            let scope = ctx.tracker.instance_scope(&path);
            let mut items = Vec::with_capacity(*len);
            for _ in 0..*len {
                items.push(generate_constrained(element, &path, &scope, ctx)?);
            }
            Ok(FieldValue::List(items))
        }
        _ => generate_constrained(constraint, prefix, &path, ctx),
    }
}

/// Generates a scalar or composite value, enforcing uniqueness against
/// `scope` when the constraint asks for it.
fn generate_constrained(
    constraint: &FieldConstraint,
    prefix: &str,
    scope: &str,
    ctx: &mut GenContext,
) -> Result<FieldValue, GenerationError> {
    let path = join_path(prefix, constraint.field);
    if !constraint.unique {
        return generate_raw(&constraint.rule, &path, ctx);
    }

    // Picking among the not-yet-claimed options is both uniform and
    // exhaustion-exact for a fixed set, so no rejection loop is needed.
    if let ValueRule::FixedChoice(options) = &constraint.rule {
        let available: Vec<&str> = options
            .iter()
            .copied()
            .filter(|option| !ctx.tracker.contains(scope, option))
            .collect();
        let Some(pick) = available.choose(&mut ctx.rng).copied() else {
            return Err(GenerationError::ExhaustedDomain { field: path });
        };
        ctx.tracker.claim(scope, pick);
        return Ok(FieldValue::Text(pick.to_string()));
    }

    // Finite domains fail fast once fully claimed instead of spinning.
    if let Some(domain) = domain_size(&constraint.rule) {
        if ctx.tracker.claimed(scope) >= domain {
            return Err(GenerationError::ExhaustedDomain { field: path });
        }
    }

    for _ in 0..ctx.max_attempts {
        let value = generate_raw(&constraint.rule, &path, ctx)?;
        if ctx.tracker.claim(scope, &value.canonical()) {
            return Ok(value);
        }
    }
    Err(GenerationError::ExhaustedDomain { field: path })
}

fn generate_raw(
    rule: &ValueRule,
    path: &str,
    ctx: &mut GenContext,
) -> Result<FieldValue, GenerationError> {
    match rule {
        ValueRule::FixedChoice(options) => options
            .choose(&mut ctx.rng)
            .map(|option| FieldValue::Text(option.to_string()))
            .ok_or_else(|| GenerationError::InvalidConstraint(format!("{path}: empty option set"))),
        ValueRule::NumericRange { min, max } => {
            if min > max {
                return Err(GenerationError::InvalidConstraint(format!(
                    "{path}: range min {min} exceeds max {max}"
                )));
            }
            Ok(FieldValue::Int(ctx.rng.random_range(*min..=*max)))
        }
        ValueRule::Semantic(kind) => {
            let value: String = match kind {
                SemanticKind::PersonName => Name().fake_with_rng(&mut ctx.rng),
                SemanticKind::PhoneNumber => PhoneNumber().fake_with_rng(&mut ctx.rng),
            };
            Ok(FieldValue::Text(value))
        }
        ValueRule::Skip => Ok(FieldValue::Absent),
        ValueRule::Composite(fields) => {
            let mut parts = Vec::with_capacity(fields.len());
            for sub in fields {
                parts.push(generate_field(sub, path, ctx)?);
            }
            Ok(FieldValue::Tuple(parts))
        }
        ValueRule::Array { .. } => Err(GenerationError::InvalidConstraint(format!(
            "{path}: arrays cannot nest inside a unique element"
        ))),
    }
}

/// Size of the value domain, when finite and known.
fn domain_size(rule: &ValueRule) -> Option<usize> {
    match rule {
        ValueRule::FixedChoice(options) => Some(options.len()),
        ValueRule::NumericRange { min, max } => {
            usize::try_from(max.checked_sub(*min)?.checked_add(1)?).ok()
        }
        ValueRule::Composite(fields) => fields
            .iter()
            .map(|field| domain_size(&field.rule))
            .try_fold(1usize, |product, size| product.checked_mul(size?)),
        ValueRule::Skip => Some(1),
        ValueRule::Semantic(_) | ValueRule::Array { .. } => None,
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn test_ctx(seed: u64) -> GenContext {
        GenContext::new(ChaCha8Rng::seed_from_u64(seed), 1_000)
    }

    #[test]
    fn skip_yields_absent() {
        let mut ctx = test_ctx(1);
        let value = generate_field(&FieldConstraint::skip("date"), "shift", &mut ctx).unwrap();
        assert_eq!(value, FieldValue::Absent);
    }

    #[test]
    fn fixed_choice_unique_fails_fast_on_exhaustion() {
        static OPTIONS: [&str; 2] = ["left", "right"];
        let constraint = FieldConstraint::choice("side", &OPTIONS).unique();
        let mut ctx = test_ctx(2);
        let first = generate_field(&constraint, "", &mut ctx).unwrap();
        let second = generate_field(&constraint, "", &mut ctx).unwrap();
        assert_ne!(first, second);
        let third = generate_field(&constraint, "", &mut ctx);
        assert!(matches!(
            third,
            Err(GenerationError::ExhaustedDomain { .. })
        ));
    }

    #[test]
    fn numeric_range_unique_exhausts_after_domain_size() {
        let constraint = FieldConstraint::range("id", 1, 3).unique();
        let mut ctx = test_ctx(3);
        let mut values = Vec::new();
        for _ in 0..3 {
            let value = generate_field(&constraint, "", &mut ctx).unwrap();
            values.push(value.as_int().unwrap());
        }
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
        let fourth = generate_field(&constraint, "", &mut ctx);
        assert!(matches!(
            fourth,
            Err(GenerationError::ExhaustedDomain { .. })
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let constraint = FieldConstraint::range("id", 10, 1);
        let mut ctx = test_ctx(4);
        let result = generate_field(&constraint, "", &mut ctx);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidConstraint(_))
        ));
    }

    #[test]
    fn semantic_unique_values_are_distinct() {
        let constraint = FieldConstraint::semantic("name", SemanticKind::PersonName).unique();
        let mut ctx = test_ctx(5);
        let mut names = std::collections::HashSet::new();
        for _ in 0..50 {
            let value = generate_field(&constraint, "superior", &mut ctx).unwrap();
            assert!(names.insert(value.as_text().unwrap().to_string()));
        }
    }

    #[test]
    fn array_uniqueness_is_scoped_per_instance() {
        static CODES: [&str; 9] = ["bec", "EIF", "LDr", "Ndr", "Adg", "AFb", "yJg", "DBa", "MxG"];
        let element =
            FieldConstraint::composite("skill", vec![FieldConstraint::choice("code", &CODES)])
                .unique();
        let constraint = FieldConstraint::array("skills", 3, element);
        let mut ctx = test_ctx(6);

        // Far more arrays than the 9-code domain could satisfy run-wide.
        for _ in 0..40 {
            let value = generate_field(&constraint, "shift", &mut ctx).unwrap();
            let items = value.as_list().unwrap();
            assert_eq!(items.len(), 3);
            let codes: std::collections::HashSet<&str> = items
                .iter()
                .map(|item| item.as_tuple().unwrap()[0].as_text().unwrap())
                .collect();
            assert_eq!(codes.len(), 3);
        }
    }

    #[test]
    fn array_larger_than_element_domain_exhausts() {
        static OPTIONS: [&str; 2] = ["a", "b"];
        let element = FieldConstraint::choice("code", &OPTIONS).unique();
        let constraint = FieldConstraint::array("slots", 3, element);
        let mut ctx = test_ctx(7);
        let result = generate_field(&constraint, "", &mut ctx);
        assert!(matches!(
            result,
            Err(GenerationError::ExhaustedDomain { .. })
        ));
    }
}
