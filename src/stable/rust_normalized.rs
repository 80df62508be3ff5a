use crate::error::{Result, SortError};
use crate::record::{ensure_single_kind, Direction, MissingKeyPolicy, Record, SortKey, Value};

sort_impl!("rust_normalized_stable");

/// Returns copies of the records in `dataset`, ordered by the value each holds at `key`.
///
/// Every record is first copied, and a copy lacking `key` gets the `policy` default inserted.
/// The records in `dataset` are never touched. The returned records all carry `key`.
///
/// This sort is stable, records with equal keys keep their relative order in either direction.
pub fn sort(
    dataset: &[Record],
    key: &SortKey,
    direction: Direction,
    policy: &MissingKeyPolicy,
) -> Result<Vec<Record>> {
    let mut normalized = normalize(dataset, key, policy)?;

    ensure_single_kind(
        key,
        normalized
            .iter()
            .enumerate()
            .filter_map(|(index, record)| item(record, key).map(|value| (index, value))),
    )?;

    normalized.sort_by(|a, b| direction.orient(item(a, key).cmp(&item(b, key))));

    Ok(normalized)
}

fn normalize(dataset: &[Record], key: &SortKey, policy: &MissingKeyPolicy) -> Result<Vec<Record>> {
    let mut normalized = Vec::with_capacity(dataset.len());

    for (index, record) in dataset.iter().enumerate() {
        if record.contains(key.as_str()) {
            normalized.push(record.clone());
            continue;
        }

        match policy {
            MissingKeyPolicy::Default(default) => {
                normalized.push(record.filled(key.as_str(), default));
            }
            MissingKeyPolicy::Require => {
                return Err(SortError::MissingKey {
                    index,
                    key: key.as_str().to_owned(),
                });
            }
        }
    }

    Ok(normalized)
}

// After `normalize` every record carries `key`, `None` is unreachable in practice.
#[inline]
fn item<'a>(record: &'a Record, key: &SortKey) -> Option<&'a Value> {
    record.get(key.as_str())
}
