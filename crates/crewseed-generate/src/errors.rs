use thiserror::Error;

/// Errors emitted by the generation engine. Any of them aborts the
/// whole run; partial output is never returned.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("could not produce a new distinct value for '{field}'")]
    ExhaustedDomain { field: String },
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),
    #[error("invalid blueprint: {0}")]
    Blueprint(String),
}
