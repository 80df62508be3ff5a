//! Shared test tooling for record sort implementations.
//!
//! `instantiate_sort_tests!(MySortImpl)` expands into one `#[test]` per property and direction.

use std::env;

use once_cell::sync::Lazy;

pub mod patterns;

pub use keyed_sort_research::record::Direction;
pub use paste;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 12] = [0, 1, 2, 3, 4, 5, 8, 16, 17, 20, 50, 100];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 15] = [
    0, 1, 2, 3, 4, 5, 8, 16, 17, 20, 50, 100, 1_000, 2_048, 10_000,
];

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    // Printed once per test binary so a failing run can be reproduced.
    eprintln!("Seed: {seed}");
    seed
});

/// Seed shared by every pattern generated in this process. Set `OVERRIDE_SEED` to reproduce a
/// failure.
pub fn get_or_init_rand_seed() -> u64 {
    *SEED
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!(
            $sort_impl,
            [
                basic,
                empty,
                single_missing_key,
                all_equal,
                key_absent_everywhere,
                missing_key_ordered_as_default,
                custom_default,
                text_keys,
                category_keys,
                stability_random,
                stability_few_unique,
                stability_with_missing_keys,
                totality,
                idempotence,
                pre_sorted,
                does_not_mutate_input,
                require_rejects_missing,
                mixed_kinds_rejected,
            ]
        );
    };
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, [$($test_fn:ident),* $(,)?]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$test_fn _ascending>]() {
                    $crate::tests::$test_fn::<$sort_impl>($crate::Direction::Ascending);
                }

                #[test]
                fn [<$test_fn _descending>]() {
                    $crate::tests::$test_fn::<$sort_impl>($crate::Direction::Descending);
                }
            )*
        }
    };
}
