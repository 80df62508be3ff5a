use sort_test_tools::instantiate_sort_tests;

mod rust_std_keyed {
    use super::*;

    type TestSort = keyed_sort_research::stable::rust_std_keyed::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod rust_normalized {
    use super::*;

    type TestSort = keyed_sort_research::stable::rust_normalized::SortImpl;

    instantiate_sort_tests!(TestSort);
}
