use crate::error::Result;
use crate::record::{ensure_single_kind, Direction, MissingKeyPolicy, Record, SortKey, Value};

sort_impl!("rust_std_keyed_stable");

/// Returns clones of the records in `dataset`, ordered by the value each holds at `key`.
///
/// A record without `key` is ordered by whatever `policy` resolves it to, and its clone carries that
/// value at `key`. The caller's records are left untouched.
/// This sort is stable, records with equal keys keep their relative order in either direction.
pub fn sort(
    dataset: &[Record],
    key: &SortKey,
    direction: Direction,
    policy: &MissingKeyPolicy,
) -> Result<Vec<Record>> {
    let keys = dataset
        .iter()
        .enumerate()
        .map(|(index, record)| policy.resolve(record, key, index))
        .collect::<Result<Vec<&Value>>>()?;

    ensure_single_kind(key, keys.iter().copied().enumerate())?;

    // Sorting positions instead of the records keeps the moves cheap, the records are only
    // cloned once, into their final position.
    let mut order: Vec<usize> = (0..dataset.len()).collect();
    order.sort_by(|&a, &b| direction.orient(keys[a].cmp(keys[b])));

    Ok(order
        .into_iter()
        .map(|i| dataset[i].filled(key.as_str(), keys[i]))
        .collect())
}
