use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use keyed_sort_research::bench;
use keyed_sort_research::config::{BenchConfig, DEFAULT_KEY, DEFAULT_LEN};
use keyed_sort_research::logging::init_logging;
use keyed_sort_research::patterns::{sample_people, ScoreDistribution};
use keyed_sort_research::record::{parse_dataset, Direction, MissingKeyPolicy, SortKey};
use keyed_sort_research::report::TestReport;
use keyed_sort_research::stable::{rust_normalized, rust_std_keyed};

#[derive(Parser)]
#[command(
    name = "keyed_sort_research",
    version,
    about = "Compare two stable ways of sorting records by a field"
)]
struct Cli {
    /// Number of generated records.
    #[arg(long, default_value_t = DEFAULT_LEN)]
    len: usize,

    /// Field to sort by.
    #[arg(long, default_value = DEFAULT_KEY)]
    key: SortKey,

    #[arg(long)]
    descending: bool,

    /// Seed for dataset generation, omit for a fresh dataset every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw scores from a zipf distribution with this exponent instead of uniformly.
    #[arg(long, value_name = "EXPONENT")]
    zipf: Option<f64>,

    /// Records lacking the key: `require` rejects them, an integer is used as their key.
    #[arg(long, value_name = "POLICY", default_value = "0")]
    missing: MissingKeyPolicy,

    /// Benchmark a JSON array of objects instead of a generated dataset.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// How many times to run the benchmark.
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Write a JSON pass/fail report of the equality checks to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print a small sample sorted by both implementations first.
    #[arg(long)]
    demo: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            len: self.len,
            key: self.key.clone(),
            direction: if self.descending {
                Direction::Descending
            } else {
                Direction::Ascending
            },
            seed: self.seed,
            policy: self.missing.clone(),
            distribution: match self.zipf {
                Some(exponent) => ScoreDistribution::Zipf { exponent },
                None => ScoreDistribution::Uniform,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.bench_config();
    config.validate().context("invalid benchmark configuration")?;

    if cli.demo {
        demo(&config)?;
    }

    let dataset = match &cli.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset {}", path.display()))?;
            let dataset = parse_dataset(&json)
                .with_context(|| format!("failed to parse dataset {}", path.display()))?;
            info!(path = %path.display(), len = dataset.len(), "loaded dataset");
            Some(dataset)
        }
        None => None,
    };

    let mut report = TestReport::new();
    for run in 0..cli.runs {
        let result = match &dataset {
            Some(dataset) => bench::run_with_dataset(dataset, &config),
            None => bench::run(&config),
        }
        .with_context(|| format!("benchmark run {run} failed"))?;

        println!("{result}");
        result.record_into(&mut report, run);
    }

    if let Some(path) = &cli.report {
        let summary = report.finalize();
        println!("\n{summary}");
        summary
            .write_json(path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        println!("\nDetailed results saved to '{}'", path.display());
    }

    Ok(())
}

fn demo(config: &BenchConfig) -> Result<()> {
    let people = sample_people();

    println!("Original data:");
    for person in &people {
        println!("{person}");
    }

    let keyed = rust_std_keyed::sort(&people, &config.key, Direction::Descending, &config.policy)?;
    println!("\nSorted by {} (builtin keyed):", config.key);
    for person in &keyed {
        println!("{person}");
    }

    let normalized =
        rust_normalized::sort(&people, &config.key, Direction::Descending, &config.policy)?;
    println!("\nSorted by {} (normalized):", config.key);
    for person in &normalized {
        println!("{person}");
    }

    println!("\n{}", "=".repeat(50));
    Ok(())
}
