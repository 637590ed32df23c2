use clap::Parser;
use colored::Colorize;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use id3tree::prelude::*;
use id3tree::Result;


/// Grow an ID3 decision tree from a training CSV,
/// write its outline, and classify a test CSV with it.
#[derive(Parser, Debug)]
#[command(name = "id3tree", version, about)]
struct Opts {
    /// Training data with a header row.
    #[arg(long, default_value = "data/TrainingData.csv")]
    train: PathBuf,

    /// Test data to classify.
    #[arg(long, default_value = "data/TestingData-1.csv")]
    test: PathBuf,

    /// Where to write the indented tree outline.
    #[arg(long, default_value = "output/DecisionTreeStructure.txt")]
    tree_out: PathBuf,

    /// Where to write the test data with predictions appended.
    #[arg(long, default_value = "output/ClassifiedTestData.csv")]
    predictions_out: PathBuf,

    /// Also write the tree as a Graphviz dot file.
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Also write the tree as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Column that holds the class label.
    #[arg(long, default_value = id3tree::constants::DEFAULT_LABEL_COLUMN)]
    label: String,

    /// Identifier column, never used as a feature.
    #[arg(long, default_value = id3tree::constants::DEFAULT_ID_COLUMN)]
    id: String,

    /// Label exhausted leaves by majority instead of the first-seen label.
    #[arg(long)]
    majority: bool,

    /// Do not print data-quality warnings.
    #[arg(long)]
    quiet: bool,
}


fn main() {
    let opts = Opts::parse();

    let result = if opts.quiet {
        run(&opts, &mut Silent)
    } else {
        run(&opts, &mut Console)
    };

    match result {
        Ok(()) => {
            println!("Decision tree training and classification completed.");
        },
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            process::exit(1);
        },
    }
}


fn run<D>(opts: &Opts, diagnostics: &mut D) -> Result<()>
    where D: Diagnostics + ?Sized
{
    let fallback = if opts.majority {
        LeafFallback::Majority
    } else {
        LeafFallback::FirstSeen
    };
    let id3 = Id3Builder::new()
        .label_column(&opts.label)
        .id_column(&opts.id)
        .fallback(fallback)
        .build();

    let train = DatasetReader::default()
        .file(&opts.train)
        .read()?;
    let tree = id3.train(&train, diagnostics)?;

    create_parent(&opts.tree_out)?;
    tree.write_outline(&opts.tree_out)?;

    if let Some(path) = opts.dot.as_ref() {
        create_parent(path)?;
        tree.to_dot_file(path)?;
    }
    if let Some(path) = opts.json.as_ref() {
        create_parent(path)?;
        tree.to_json_file(path)?;
    }

    let test = DatasetReader::default()
        .file(&opts.test)
        .read()?;
    create_parent(&opts.predictions_out)?;
    PredictionWriter::new(&tree)
        .write_file(&test, &opts.predictions_out, diagnostics)?;

    Ok(())
}


/// Create the directory that will hold `path`.
fn create_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_writes_the_outline_and_the_predictions() {
        let data = std::env::current_dir().unwrap().join("tests/dataset");
        let mut out = std::env::temp_dir();
        out.push(format!("id3tree-cli-{}", process::id()));

        let opts = Opts::parse_from([
            "id3tree",
            "--train", data.join("restaurant.csv").to_str().unwrap(),
            "--test", data.join("restaurant_test.csv").to_str().unwrap(),
            "--tree-out", out.join("tree.txt").to_str().unwrap(),
            "--predictions-out", out.join("predictions.csv").to_str().unwrap(),
        ]);
        let mut warnings: Vec<Warning> = Vec::new();
        run(&opts, &mut warnings).unwrap();

        let outline = fs::read_to_string(&opts.tree_out).unwrap();
        let predictions = fs::read_to_string(&opts.predictions_out).unwrap();
        fs::remove_dir_all(&out).unwrap();

        assert!(outline.starts_with(" Pat\n"));
        assert_eq!(predictions.lines().count(), 4);
        assert!(predictions.lines().next().unwrap().ends_with(",PredictedWillWait"));
    }
}
