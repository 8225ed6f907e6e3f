/// Semantic generator families for free-form string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticKind {
    PersonName,
    PhoneNumber,
}

/// How one field's synthetic value is produced.
#[derive(Debug, Clone)]
pub enum ValueRule {
    /// Uniform pick from a fixed set of string options.
    FixedChoice(&'static [&'static str]),
    /// Uniform integer in `[min, max]` inclusive.
    NumericRange { min: i64, max: i64 },
    /// Fabricated string of a semantic family (name, phone).
    Semantic(SemanticKind),
    /// Not generated here; assigned by a later explicit derivation step.
    Skip,
    /// Nested record, generated depth-first in declaration order.
    Composite(Vec<FieldConstraint>),
    /// Fixed-size array of identically constrained elements. A `unique`
    /// element means its full value tuple must not repeat within one
    /// array instance.
    Array {
        len: usize,
        element: Box<FieldConstraint>,
    },
}

/// Declarative rule governing one field of a record blueprint.
#[derive(Debug, Clone)]
pub struct FieldConstraint {
    pub field: &'static str,
    pub rule: ValueRule,
    pub unique: bool,
}

impl FieldConstraint {
    pub fn choice(field: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(field, ValueRule::FixedChoice(options))
    }

    pub fn range(field: &'static str, min: i64, max: i64) -> Self {
        Self::new(field, ValueRule::NumericRange { min, max })
    }

    pub fn semantic(field: &'static str, kind: SemanticKind) -> Self {
        Self::new(field, ValueRule::Semantic(kind))
    }

    pub fn skip(field: &'static str) -> Self {
        Self::new(field, ValueRule::Skip)
    }

    pub fn composite(field: &'static str, fields: Vec<FieldConstraint>) -> Self {
        Self::new(field, ValueRule::Composite(fields))
    }

    pub fn array(field: &'static str, len: usize, element: FieldConstraint) -> Self {
        Self::new(
            field,
            ValueRule::Array {
                len,
                element: Box::new(element),
            },
        )
    }

    /// Marks the generated value as unique. Scalar fields are unique across
    /// the whole run; array elements are unique within their array instance.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    fn new(field: &'static str, rule: ValueRule) -> Self {
        Self {
            field,
            rule,
            unique: false,
        }
    }
}
