//! Synthetic datasets shaped like the ones the benchmark sorts.

use std::ops::RangeInclusive;

use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

use crate::error::{Result, SortError};
use crate::record::{Dataset, Record, Value};

pub const SCORE_RANGE: RangeInclusive<i64> = 1..=100;
pub const TIMESTAMP_RANGE: RangeInclusive<i64> = 1_000_000..=9_999_999;
pub const PRIORITIES: [&str; 3] = ["high", "medium", "low"];

/// How the `score` field is distributed over [`SCORE_RANGE`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ScoreDistribution {
    #[default]
    Uniform,
    /// Heavily skewed towards low scores, giving many long runs of equal keys.
    Zipf { exponent: f64 },
}

/// `Some` seed gives a reproducible stream, `None` seeds from OS entropy.
pub fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates `len` records of the form
/// `{name: "item_<i>", score: <int>, priority: <category>, timestamp: <int>}`.
pub fn random_records(
    len: usize,
    distribution: ScoreDistribution,
    rng: &mut impl Rng,
) -> Result<Dataset> {
    let zipf = match distribution {
        ScoreDistribution::Uniform => None,
        ScoreDistribution::Zipf { exponent } => {
            let num_scores = (SCORE_RANGE.end() - SCORE_RANGE.start() + 1) as usize;
            Some(ZipfDistribution::new(num_scores, exponent).map_err(|()| {
                SortError::InvalidInput(format!(
                    "zipf exponent must be a positive number, got {exponent}"
                ))
            })?)
        }
    };

    Ok((0..len)
        .map(|i| {
            let score = match &zipf {
                // Zipf samples are in 1..=num_scores.
                Some(zipf) => SCORE_RANGE.start() - 1 + rng.sample::<usize, _>(zipf) as i64,
                None => rng.gen_range(SCORE_RANGE),
            };
            let priority = PRIORITIES[rng.gen_range(0..PRIORITIES.len())];

            Record::new()
                .with("name", format!("item_{i}"))
                .with("score", score)
                .with("priority", Value::category(priority))
                .with("timestamp", rng.gen_range(TIMESTAMP_RANGE))
        })
        .collect())
}

/// The small hand written dataset used by the demo.
pub fn sample_people() -> Dataset {
    [
        ("Alice", 85, "Engineering"),
        ("Bob", 92, "Sales"),
        ("Charlie", 78, "Marketing"),
        ("Diana", 96, "Engineering"),
    ]
    .into_iter()
    .map(|(name, score, department)| {
        Record::new()
            .with("name", name)
            .with("score", score as i64)
            .with("department", department)
    })
    .collect()
}
