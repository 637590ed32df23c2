use id3tree::prelude::*;
use polars::prelude::*;

use std::fs;


fn read(text: &str) -> Dataset {
    Dataset::from_reader(text.as_bytes(), ',').unwrap()
}


#[test]
fn header_names_the_attributes() {
    let sample = read("ID,A,Decision\n1,x,yes\n2,y,no\n");

    assert_eq!(sample.len(), 2);
    let keys = sample[0].keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["ID", "A", "Decision"]);
    assert_eq!(sample[1].get("A"), Some("y"));
    assert_eq!(sample[1].get("Decision"), Some("no"));
}


#[test]
fn byte_order_mark_is_stripped() {
    let sample = read("\u{feff}ID,A\n1,x\n");

    assert_eq!(sample[0].get("ID"), Some("1"));
    assert_eq!(sample[0].keys().next(), Some("ID"));
}


#[test]
fn short_rows_truncate() {
    let sample = read("A,B,Decision\nx,y\nx\n");

    assert_eq!(sample.len(), 2);
    assert_eq!(sample[0].len(), 2);
    assert_eq!(sample[0].get("Decision"), None);
    assert_eq!(sample[1].len(), 1);
    assert_eq!(sample[1].get("A"), Some("x"));
}


#[test]
fn long_rows_ignore_surplus_values() {
    let sample = read("A,B\n1,2,3\n");
    assert_eq!(sample[0].len(), 2);
    assert_eq!(sample[0].get("B"), Some("2"));
}


#[test]
fn carriage_returns_and_blank_lines() {
    let sample = read("A,B\r\n1,2\r\n\r\n3,4\r\n");

    assert_eq!(sample.len(), 2);
    assert_eq!(sample[0].get("B"), Some("2"));
    assert_eq!(sample[1].get("B"), Some("4"));
}


#[test]
fn empty_input_is_an_empty_dataset() {
    assert!(read("").is_empty());
    assert!(read("A,B\n").is_empty());
}


#[test]
fn other_delimiters() {
    let text = "A;B\nx;y\n";
    let sample = Dataset::from_reader(text.as_bytes(), ';').unwrap();
    assert_eq!(sample[0].get("B"), Some("y"));
}


#[test]
fn reader_builder_reads_a_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("id3tree-reader-{}.csv", std::process::id()));
    fs::write(&path, "A|Decision\nx|yes\n").unwrap();

    let sample = DatasetReader::default()
        .file(&path)
        .delimiter('|')
        .read()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(sample.len(), 1);
    assert_eq!(sample[0].get("Decision"), Some("yes"));
}


#[test]
fn missing_file_is_an_io_error() {
    let result = DatasetReader::default()
        .file("tests/dataset/does-not-exist.csv")
        .read();
    assert!(matches!(result, Err(id3tree::Error::Io(_))));
}


#[test]
fn from_dataframe_treats_null_as_missing() {
    let a = Series::new("A", &[Some("x"), None, Some("y")]);
    let d = Series::new("Decision", &["yes", "no", "no"]);
    let df = DataFrame::new(vec![a, d]).unwrap();

    let sample = Dataset::from_dataframe(&df).unwrap();
    assert_eq!(sample.len(), 3);
    assert_eq!(sample[0].get("A"), Some("x"));
    assert_eq!(sample[1].get("A"), None);
    assert_eq!(sample[1].get("Decision"), Some("no"));

    let keys = sample[2].keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["A", "Decision"]);
}


#[test]
fn from_dataframe_casts_numbers_to_strings() {
    let n = Series::new("n", &[1_i64, 2]);
    let d = Series::new("Decision", &["yes", "no"]);
    let df = DataFrame::new(vec![n, d]).unwrap();

    let sample = Dataset::from_dataframe(&df).unwrap();
    let tree = Id3Builder::new()
        .build()
        .train(&sample, &mut Silent)
        .unwrap();
    assert_eq!(tree.classify(&sample[0]), Prediction::Label("yes"));
}


#[test]
fn instance_insert_keeps_the_position() {
    let mut instance = [("A", "1"), ("B", "2")]
        .into_iter()
        .collect::<Instance>();
    instance.insert("A", "3");
    instance.insert("C", "4");

    let fields = instance.iter().collect::<Vec<_>>();
    assert_eq!(fields, vec![("A", "3"), ("B", "2"), ("C", "4")]);
}


#[test]
fn feature_set_follows_the_header_order() {
    let sample = read("ID,Pat,Hun,Decision\n1,Full,Yes,No\n");
    let features = FeatureSet::from_instance(&sample[0], &["ID", "Decision"]);

    let names = features.iter().collect::<Vec<_>>();
    assert_eq!(names, vec!["Pat", "Hun"]);

    let rest = features.without("Pat");
    assert_eq!(rest.iter().collect::<Vec<_>>(), vec!["Hun"]);
    assert!(features.contains("Pat"));
    assert!(!rest.contains("Pat"));
    assert_eq!(features.len(), 2);
}


#[test]
fn trailing_delimiter_does_not_add_a_field() {
    let sample = read("A,B,\nx,\ny,no\n");

    let keys = sample[0].keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["A"]);
    assert_eq!(sample[1].get("B"), Some("no"));

    let sample = read("A,Decision\nx,\ny,no\nz,yes,\n");
    assert_eq!(sample[0].get("A"), Some("x"));
    assert_eq!(sample[0].get("Decision"), None);
    assert_eq!(sample[2].get("Decision"), Some("yes"));

    let mut warnings = Vec::new();
    let tree = Id3Builder::new()
        .build()
        .train(&sample, &mut warnings)
        .unwrap();
    assert_eq!(warnings, vec![id3tree::Warning::SkippedUnlabeled { row: 0 }]);
    assert_eq!(tree.leaves(), 2);
}
