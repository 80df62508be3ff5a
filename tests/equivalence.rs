use keyed_sort_research::patterns::{new_rng, random_records, sample_people, ScoreDistribution};
use keyed_sort_research::record::{Direction, MissingKeyPolicy, Record, SortKey, Value};
use keyed_sort_research::stable::{rust_normalized, rust_std_keyed};
use keyed_sort_research::SortError;

use sort_test_tools::{get_or_init_rand_seed, patterns, TEST_SIZES};

const DIRECTIONS: [Direction; 2] = [Direction::Ascending, Direction::Descending];

fn key(name: &str) -> SortKey {
    SortKey::new(name).unwrap()
}

fn both(
    input: &[Record],
    key: &SortKey,
    direction: Direction,
    policy: &MissingKeyPolicy,
) -> (Vec<Record>, Vec<Record>) {
    (
        rust_std_keyed::sort(input, key, direction, policy).unwrap(),
        rust_normalized::sort(input, key, direction, policy).unwrap(),
    )
}

#[test]
fn identical_when_key_present_everywhere() {
    let policy = MissingKeyPolicy::default();
    for len in TEST_SIZES {
        for input in [
            patterns::random(len),
            patterns::random_scores(len, 3),
            patterns::all_equal(len),
            patterns::descending(len),
            patterns::categories(len),
        ] {
            for direction in DIRECTIONS {
                let (keyed, normalized) = both(&input, &key("score"), direction, &policy);
                assert_eq!(
                    keyed,
                    normalized,
                    "len {len}, {direction:?}, seed {}",
                    get_or_init_rand_seed()
                );
            }
        }
    }
}

#[test]
fn identical_with_missing_keys() {
    let policies = [
        MissingKeyPolicy::default(),
        MissingKeyPolicy::Default(Value::Int(-100)),
        MissingKeyPolicy::Default(Value::Int(100)),
    ];
    for len in TEST_SIZES {
        for every in [1, 2, 3] {
            let input = patterns::with_missing_keys(len, every);
            for policy in &policies {
                for direction in DIRECTIONS {
                    let (keyed, normalized) = both(&input, &key("score"), direction, policy);
                    assert_eq!(
                        keyed,
                        normalized,
                        "len {len}, every {every}, {direction:?}, {policy:?}, seed {}",
                        get_or_init_rand_seed()
                    );
                }
            }
        }
    }
}

#[test]
fn missing_key_filled_in_both_outputs() {
    let input = vec![Record::new().with("name", "X")];
    let expected = vec![Record::new().with("name", "X").with("score", 0)];

    for direction in DIRECTIONS {
        let (keyed, normalized) =
            both(&input, &key("score"), direction, &MissingKeyPolicy::default());
        assert_eq!(keyed, expected);
        assert_eq!(normalized, expected);
    }
    assert!(!input[0].contains("score"));

    let input = vec![
        Record::new().with("name", "X"),
        Record::new().with("name", "Y").with("score", 3),
    ];
    let (keyed, normalized) = both(
        &input,
        &key("score"),
        Direction::Ascending,
        &MissingKeyPolicy::default(),
    );
    assert_eq!(keyed, normalized);
    assert_eq!(
        keyed,
        [
            Record::new().with("name", "X").with("score", 0),
            Record::new().with("name", "Y").with("score", 3),
        ]
    );
}

#[test]
fn people_by_score_descending() {
    let people = sample_people();
    let (keyed, normalized) = both(
        &people,
        &key("score"),
        Direction::Descending,
        &MissingKeyPolicy::default(),
    );

    let names_and_scores = |records: &[Record]| -> Vec<(Value, Value)> {
        records
            .iter()
            .map(|r| (r.get("name").unwrap().clone(), r.get("score").unwrap().clone()))
            .collect()
    };
    let expected = vec![
        (Value::from("Diana"), Value::Int(96)),
        (Value::from("Bob"), Value::Int(92)),
        (Value::from("Alice"), Value::Int(85)),
        (Value::from("Charlie"), Value::Int(78)),
    ];

    assert_eq!(names_and_scores(&keyed), expected);
    assert_eq!(keyed, normalized);
}

#[test]
fn empty_input() {
    let policy = MissingKeyPolicy::default();
    let (keyed, normalized) = both(&[], &key("score"), Direction::Ascending, &policy);

    assert!(keyed.is_empty());
    assert_eq!(keyed, normalized);
}

#[test]
fn generated_datasets_agree_on_every_field() {
    let mut rng = new_rng(Some(get_or_init_rand_seed()));
    let input = random_records(2_000, ScoreDistribution::Zipf { exponent: 1.2 }, &mut rng).unwrap();

    for field in ["score", "priority", "timestamp", "name"] {
        for direction in DIRECTIONS {
            let (keyed, normalized) =
                both(&input, &key(field), direction, &MissingKeyPolicy::default());
            assert_eq!(keyed, normalized, "field {field}, {direction:?}");
        }
    }
}

#[test]
fn same_errors() {
    let missing = vec![Record::new().with("score", 1), Record::new()];
    let mixed = vec![Record::new().with("score", 1), Record::new().with("score", "x")];

    for direction in DIRECTIONS {
        let strict = MissingKeyPolicy::Require;
        let keyed = rust_std_keyed::sort(&missing, &key("score"), direction, &strict);
        let normalized = rust_normalized::sort(&missing, &key("score"), direction, &strict);
        assert_eq!(keyed.unwrap_err().to_string(), normalized.unwrap_err().to_string());

        let policy = MissingKeyPolicy::default();
        let keyed = rust_std_keyed::sort(&mixed, &key("score"), direction, &policy);
        let normalized = rust_normalized::sort(&mixed, &key("score"), direction, &policy);
        assert_eq!(keyed.unwrap_err().to_string(), normalized.unwrap_err().to_string());
    }
}

#[test]
fn empty_key_rejected() {
    assert!(matches!(SortKey::new(""), Err(SortError::EmptyKey)));
}
