use id3tree::prelude::*;
use id3tree::decision_tree::{entropy, information_gain};


fn dataset(rows: &[&[(&str, &str)]]) -> Dataset {
    rows.iter()
        .map(|row| row.iter().copied().collect::<Instance>())
        .collect()
}


fn all(sample: &Dataset) -> Vec<usize> {
    (0..sample.len()).collect()
}


// [{A:x, yes}, {A:x, yes}, {A:y, no}]
fn worked_example() -> Dataset {
    dataset(&[
        &[("A", "x"), ("Decision", "yes")],
        &[("A", "x"), ("Decision", "yes")],
        &[("A", "y"), ("Decision", "no")],
    ])
}


#[test]
fn pure_subset_has_zero_entropy() {
    let sample = dataset(&[
        &[("A", "x"), ("Decision", "yes")],
        &[("A", "y"), ("Decision", "yes")],
        &[("A", "z"), ("Decision", "yes")],
    ]);
    let e = entropy(&sample, &all(&sample), "Decision", &mut Silent);
    assert_eq!(e, 0.0);
}


#[test]
fn even_split_has_one_bit() {
    let sample = dataset(&[
        &[("Decision", "yes")],
        &[("Decision", "no")],
        &[("Decision", "no")],
        &[("Decision", "yes")],
    ]);
    let e = entropy(&sample, &all(&sample), "Decision", &mut Silent);
    assert_eq!(e, 1.0);
}


#[test]
fn worked_example_entropy_and_gain() {
    let sample = worked_example();
    let indices = all(&sample);

    let e = entropy(&sample, &indices, "Decision", &mut Silent);
    assert!((e - 0.918).abs() < 1e-3, "entropy is {e}");

    // `A` separates the labels completely.
    let gain = information_gain(&sample, &indices, "A", "Decision", &mut Silent);
    assert!((gain - e).abs() < 1e-12, "gain is {gain}");
}


#[test]
fn entropy_of_a_subset() {
    let sample = worked_example();
    let e = entropy(&sample, &[0, 1], "Decision", &mut Silent);
    assert_eq!(e, 0.0);

    let e = entropy(&sample, &[1, 2], "Decision", &mut Silent);
    assert_eq!(e, 1.0);
}


#[test]
fn unlabeled_rows_are_left_out_of_entropy() {
    let sample = dataset(&[
        &[("Decision", "yes")],
        &[("A", "x")],
        &[("Decision", "yes")],
    ]);
    let mut warnings = Vec::new();
    let e = entropy(&sample, &all(&sample), "Decision", &mut warnings);

    assert_eq!(e, 0.0);
    assert_eq!(warnings, vec![Warning::MissingLabel { row: 1 }]);
}


#[test]
fn constant_feature_has_zero_gain() {
    let sample = dataset(&[
        &[("A", "x"), ("B", "p"), ("Decision", "yes")],
        &[("A", "x"), ("B", "q"), ("Decision", "no")],
        &[("A", "x"), ("B", "q"), ("Decision", "yes")],
    ]);
    let gain = information_gain(
        &sample, &all(&sample), "A", "Decision", &mut Silent
    );
    assert_eq!(gain, 0.0);
}


#[test]
fn gain_is_never_negative() {
    let sample = dataset(&[
        &[("A", "x"), ("B", "p"), ("C", "1"), ("Decision", "yes")],
        &[("A", "x"), ("B", "q"), ("C", "2"), ("Decision", "no")],
        &[("A", "y"), ("B", "q"), ("C", "1"), ("Decision", "yes")],
        &[("A", "y"), ("B", "p"), ("C", "2"), ("Decision", "no")],
        &[("A", "z"), ("B", "p"), ("C", "1"), ("Decision", "maybe")],
        &[("A", "z"), ("B", "q"), ("C", "1"), ("Decision", "yes")],
    ]);
    let indices = all(&sample);
    for feature in ["A", "B", "C"] {
        let gain = information_gain(
            &sample, &indices, feature, "Decision", &mut Silent
        );
        assert!(gain >= 0.0, "gain of {feature} is {gain}");
    }
}


#[test]
fn rows_missing_the_feature_are_reported() {
    let sample = dataset(&[
        &[("A", "x"), ("Decision", "yes")],
        &[("Decision", "no")],
        &[("A", "y"), ("Decision", "no")],
    ]);
    let mut warnings = Vec::new();
    let gain = information_gain(
        &sample, &all(&sample), "A", "Decision", &mut warnings
    );

    assert!(gain > 0.0);
    assert_eq!(
        warnings,
        vec![Warning::MissingFeatureValue { row: 1, feature: "A".into() }]
    );
}


#[test]
fn restaurant_patrons_has_the_highest_gain() {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/restaurant.csv");
    let sample = Dataset::from_csv(path).unwrap();
    let indices = all(&sample);

    let pat = information_gain(&sample, &indices, "Pat", "Decision", &mut Silent);
    assert!((pat - 0.541).abs() < 1e-3, "gain of Pat is {pat}");

    let typ = information_gain(&sample, &indices, "Type", "Decision", &mut Silent);
    assert!(typ.abs() < 1e-12, "gain of Type is {typ}");
}
