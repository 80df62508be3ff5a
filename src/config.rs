use crate::error::{Result, SortError};
use crate::patterns::ScoreDistribution;
use crate::record::{Direction, MissingKeyPolicy, SortKey};

pub const DEFAULT_LEN: usize = 10_000;
pub const DEFAULT_KEY: &str = "score";

/// Parameters of one benchmark run.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Number of generated records.
    pub len: usize,
    /// Field both sort implementations order by.
    pub key: SortKey,
    pub direction: Direction,
    /// Seed for dataset generation. `None` gives a different dataset every run.
    pub seed: Option<u64>,
    pub policy: MissingKeyPolicy,
    pub distribution: ScoreDistribution,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            key: SortKey(DEFAULT_KEY.to_owned()),
            direction: Direction::Ascending,
            seed: None,
            policy: MissingKeyPolicy::default(),
            distribution: ScoreDistribution::Uniform,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if let ScoreDistribution::Zipf { exponent } = self.distribution {
            if !(exponent.is_finite() && exponent > 0.0) {
                return Err(SortError::InvalidInput(format!(
                    "zipf exponent must be a positive number, got {exponent}"
                )));
            }
        }
        Ok(())
    }
}
