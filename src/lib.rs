//! Stable sorting of key-value records by a field, two ways, plus the harness that times and
//! cross-checks them.

use record::{Direction, MissingKeyPolicy, Record, SortKey};

/// Common interface of every record sort implementation, so tests and benchmarks can be
/// instantiated per implementation.
pub trait RecordSort {
    fn name() -> String;

    /// Returns the records of `dataset` stably ordered by `key`. `dataset` is never modified.
    fn sort(
        dataset: &[Record],
        key: &SortKey,
        direction: Direction,
        policy: &MissingKeyPolicy,
    ) -> error::Result<Vec<Record>>;
}

// Expects a free `sort` function with the `RecordSort::sort` signature in the invoking module.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::RecordSort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(
                dataset: &[$crate::record::Record],
                key: &$crate::record::SortKey,
                direction: $crate::record::Direction,
                policy: &$crate::record::MissingKeyPolicy,
            ) -> $crate::error::Result<Vec<$crate::record::Record>> {
                sort(dataset, key, direction, policy)
            }
        }
    };
}

pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod record;
pub mod report;
pub mod stable;

pub use error::{Result, SortError};
