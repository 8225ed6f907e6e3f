use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crewseed_core::{FieldConstraint, Superior, Technician};

use crate::blueprints::{
    superior_fields, superior_from_values, technician_fields, technician_from_values,
};
use crate::errors::GenerationError;
use crate::interpreter::{FieldValue, GenContext, generate_field};

/// Days a shift date may lie past generation time.
const SHIFT_WINDOW_DAYS: i64 = 7;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub superiors: u32,
    pub technicians: u32,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Attempt budget for unique values over unbounded domains.
    pub max_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            superiors: 15,
            technicians: 100,
            seed: None,
            max_attempts: 1_000,
        }
    }
}

/// Owned output of a run, handed explicitly to persistence and serving.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub superiors: Vec<Superior>,
    pub technicians: Vec<Technician>,
}

/// Walks record blueprints to produce one full batch of crew records.
/// All superiors are generated before any technician so the foreign-key
/// derivation always has a pool to draw from.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        if self.options.technicians > 0 && self.options.superiors == 0 {
            return Err(GenerationError::Blueprint(
                "technicians require at least one superior".to_string(),
            ));
        }

        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut ctx = GenContext::new(ChaCha8Rng::seed_from_u64(seed), self.options.max_attempts);
        info!(
            superiors = self.options.superiors,
            technicians = self.options.technicians,
            seed,
            "generation started"
        );

        let superior_blueprint = superior_fields();
        let mut superiors = Vec::with_capacity(self.options.superiors as usize);
        for _ in 0..self.options.superiors {
            let values = fabricate(&superior_blueprint, "superior", &mut ctx)?;
            superiors.push(superior_from_values(&values)?);
        }

        let window_start = Utc::now();
        let technician_blueprint = technician_fields();
        let mut technicians = Vec::with_capacity(self.options.technicians as usize);
        for _ in 0..self.options.technicians {
            let values = fabricate(&technician_blueprint, "technician", &mut ctx)?;
            let mut technician = technician_from_values(&values)?;
            let superior = superiors.choose(&mut ctx.rng).ok_or_else(|| {
                GenerationError::Blueprint("superior pool unexpectedly empty".to_string())
            })?;
            technician.superior_id = superior.superior_id;
            technician.shift.date =
                random_instant_within(&mut ctx.rng, window_start, Duration::days(SHIFT_WINDOW_DAYS));
            technicians.push(technician);
        }

        info!(
            superiors = superiors.len(),
            technicians = technicians.len(),
            "generation completed"
        );
        Ok(GenerationResult {
            superiors,
            technicians,
        })
    }
}

fn fabricate(
    fields: &[FieldConstraint],
    kind: &str,
    ctx: &mut GenContext,
) -> Result<Vec<FieldValue>, GenerationError> {
    fields
        .iter()
        .map(|constraint| generate_field(constraint, kind, ctx))
        .collect()
}

/// Uniform random instant in `[start, start + window)`.
fn random_instant_within(
    rng: &mut ChaCha8Rng,
    start: DateTime<Utc>,
    window: Duration,
) -> DateTime<Utc> {
    let offset = rng.random_range(0..window.num_seconds().max(1));
    start + Duration::seconds(offset)
}
