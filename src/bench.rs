//! Times both record sorts on independent copies of one dataset and checks that they agree.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::patterns::{new_rng, random_records};
use crate::record::{Record, SortKey};
use crate::report::TestReport;
use crate::stable::{rust_normalized, rust_std_keyed};
use crate::RecordSort;

#[derive(Clone, Debug)]
pub struct BenchReport {
    pub len: usize,
    pub key: SortKey,
    pub keyed: Duration,
    pub normalized: Duration,
    /// `false` means the two implementations disagree, which is a correctness regression.
    pub outputs_match: bool,
}

impl BenchReport {
    /// Adds this run's equality check to `report` as one test entry, timed by both sorts together.
    pub fn record_into(&self, report: &mut TestReport, run: usize) {
        let message = if self.outputs_match {
            format!("both sorts agree on {} records", self.len)
        } else {
            format!("sorts disagree on {} records keyed by '{}'", self.len, self.key)
        };
        report.record(
            format!("Sort equivalence run {run} ({} records)", self.len),
            self.outputs_match,
            message,
            self.keyed + self.normalized,
        );
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance Comparison Results:")?;
        writeln!(f, "Builtin keyed sort: {:.6} seconds", self.keyed.as_secs_f64())?;
        writeln!(f, "Normalized sort: {:.6} seconds", self.normalized.as_secs_f64())?;
        write!(f, "Results match: {}", self.outputs_match)
    }
}

/// Generates a dataset according to `config` and benchmarks it. Generation is not timed.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let mut rng = new_rng(config.seed);
    let dataset = random_records(config.len, config.distribution, &mut rng)?;
    info!(
        len = dataset.len(),
        seed = ?config.seed,
        distribution = ?config.distribution,
        "generated dataset"
    );

    run_with_dataset(&dataset, config)
}

/// Benchmarks both sorts on `dataset`. Only `key`, `direction` and `policy` of `config` are used.
pub fn run_with_dataset(dataset: &[Record], config: &BenchConfig) -> Result<BenchReport> {
    run_pair::<rust_std_keyed::SortImpl, rust_normalized::SortImpl>(dataset, config)
}

/// Times `K` against `N` on `dataset`. Their outputs must be equal element for element.
pub fn run_pair<K: RecordSort, N: RecordSort>(
    dataset: &[Record],
    config: &BenchConfig,
) -> Result<BenchReport> {
    // Each implementation gets its own copy, neither can observe what the other did.
    let keyed_input = dataset.to_vec();
    let normalized_input = dataset.to_vec();

    let (keyed_out, keyed) = measure::<K>(&keyed_input, config)?;
    let (normalized_out, normalized) = measure::<N>(&normalized_input, config)?;

    let outputs_match = keyed_out == normalized_out;
    if !outputs_match {
        warn!(
            keyed = %K::name(),
            normalized = %N::name(),
            key = %config.key,
            len = dataset.len(),
            "sort implementations disagree on the output"
        );
    }

    Ok(BenchReport {
        len: dataset.len(),
        key: config.key.clone(),
        keyed,
        normalized,
        outputs_match,
    })
}

fn measure<S: RecordSort>(
    input: &[Record],
    config: &BenchConfig,
) -> Result<(Vec<Record>, Duration)> {
    let start = Instant::now();
    let output = S::sort(input, &config.key, config.direction, &config.policy)?;
    let elapsed = start.elapsed();

    debug!(sort = %S::name(), len = input.len(), ?elapsed, "sorted");

    Ok((output, elapsed))
}
