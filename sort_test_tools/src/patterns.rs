//! Record datasets with known shapes. Every record carries a unique `seq` field holding its input
//! position, which is what the stability checks look at.

use rand::prelude::*;
use rand::rngs::StdRng;

use keyed_sort_research::record::{Record, Value};

use crate::get_or_init_rand_seed;

pub const KEY: &str = "score";
pub const SEQ: &str = "seq";

fn base(i: usize) -> Record {
    Record::new()
        .with(SEQ, i as i64)
        .with("name", format!("item_{i}"))
}

fn rng_for(len: usize) -> StdRng {
    StdRng::seed_from_u64(get_or_init_rand_seed() ^ len as u64)
}

/// Scores drawn uniformly from `0..unique`. A small `unique` gives many equal keys.
pub fn random_scores(len: usize, unique: i64) -> Vec<Record> {
    let mut rng = rng_for(len);
    (0..len)
        .map(|i| base(i).with(KEY, rng.gen_range(0..unique)))
        .collect()
}

pub fn random(len: usize) -> Vec<Record> {
    random_scores(len, i64::MAX)
}

pub fn all_equal(len: usize) -> Vec<Record> {
    (0..len).map(|i| base(i).with(KEY, 66)).collect()
}

pub fn ascending(len: usize) -> Vec<Record> {
    (0..len).map(|i| base(i).with(KEY, i as i64)).collect()
}

pub fn descending(len: usize) -> Vec<Record> {
    (0..len)
        .map(|i| base(i).with(KEY, (len - i) as i64))
        .collect()
}

/// Random scores in `-5..5` where every `every`-th record lacks the key entirely.
pub fn with_missing_keys(len: usize, every: usize) -> Vec<Record> {
    let mut rng = rng_for(len);
    (0..len)
        .map(|i| {
            if i % every == 0 {
                base(i)
            } else {
                base(i).with(KEY, rng.gen_range(-5..5))
            }
        })
        .collect()
}

pub fn without_key(len: usize) -> Vec<Record> {
    (0..len).map(base).collect()
}

/// Random `high`/`medium`/`low` labels under `KEY`.
pub fn categories(len: usize) -> Vec<Record> {
    const LABELS: [&str; 3] = ["high", "medium", "low"];
    let mut rng = rng_for(len);
    (0..len)
        .map(|i| {
            let label = LABELS[rng.gen_range(0..LABELS.len())];
            base(i).with(KEY, Value::category(label))
        })
        .collect()
}

pub fn seq_of(record: &Record) -> i64 {
    record
        .get(SEQ)
        .and_then(Value::as_int)
        .expect("pattern records always carry a seq field")
}
