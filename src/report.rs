//! Text renderings of a trained tree and of its predictions.
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::classifier::{Classifier, Prediction};
use crate::constants::{
    DEFAULT_DELIMITER,
    DEFAULT_INDENT_MARKER,
    DEFAULT_PREDICTION_COLUMN,
};
use crate::decision_tree::Node;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::sample::Dataset;


/// The indented outline of a tree, one node per line.
///
/// A branch at depth `d` prints its feature after `d` markers,
/// then for each child the value after `d + 1` markers
/// followed by the child itself at depth `d + 2`.
/// A leaf prints its label after `d` markers.
///
/// ```text
///  Pat
/// - Full:
/// -- Hun
/// --- No:
/// ---- No
/// ...
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeOutline<'a> {
    root:   &'a Node,
    marker: char,
}


impl<'a> TreeOutline<'a> {
    /// Outline `root` with the default marker `'-'`.
    pub fn new(root: &'a Node) -> Self {
        Self { root, marker: DEFAULT_INDENT_MARKER }
    }


    /// Set the indentation marker.
    pub fn marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }


    fn render(&self, f: &mut fmt::Formatter<'_>, node: &Node, depth: usize)
        -> fmt::Result
    {
        match node {
            Node::Leaf { label } => {
                self.indent(f, depth)?;
                writeln!(f, " {label}")
            },
            Node::Branch { feature, children } => {
                self.indent(f, depth)?;
                writeln!(f, " {feature}")?;
                for (value, child) in children {
                    self.indent(f, depth + 1)?;
                    writeln!(f, " {value}:")?;
                    self.render(f, child, depth + 2)?;
                }
                Ok(())
            },
        }
    }


    #[inline]
    fn indent(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        (0..depth).try_for_each(|_| f.write_char(self.marker))
    }
}


impl fmt::Display for TreeOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, self.root, 0)
    }
}


/// Writes a dataset back out with one predicted column appended.
///
/// The header is the attribute names of the first instance,
/// in its order, followed by the prediction column.
/// Each row holds the instance's values for those names,
/// an empty cell where a value is absent,
/// and the prediction, `Unknown` if no leaf was reached.
///
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
///
/// # fn run(tree: &DecisionTreeClassifier, test: &Dataset) -> id3tree::Result<()> {
/// PredictionWriter::new(tree)
///     .column("PredictedWillWait")
///     .write_file(test, "output/ClassifiedTestData.csv", &mut Console)?;
/// # Ok(())
/// # }
/// ```
pub struct PredictionWriter<'a, C> {
    classifier: &'a C,
    column:     String,
    delimiter:  char,
}


impl<'a, C> PredictionWriter<'a, C>
    where C: Classifier + Sync
{
    /// Construct a new instance of [`PredictionWriter`].
    pub fn new(classifier: &'a C) -> Self {
        Self {
            classifier,
            column:    DEFAULT_PREDICTION_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }


    /// Set the name of the appended column.
    /// Default is `PredictedWillWait`.
    pub fn column<S: AsRef<str>>(mut self, name: S) -> Self {
        self.column = name.as_ref().to_string();
        self
    }


    /// Set the field separator.
    /// Default is `','`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Classify `sample` and write the augmented records to `path`.
    pub fn write_file<P, D>(
        &self,
        sample:      &Dataset,
        path:        P,
        diagnostics: &mut D,
    ) -> Result<()>
        where P: AsRef<Path>,
              D: Diagnostics + ?Sized,
    {
        let file = File::create(path)?;
        self.write(sample, BufWriter::new(file), diagnostics)
    }


    /// Classify `sample` and write the augmented records to `writer`.
    /// Nothing is written for an empty `sample`.
    pub fn write<W, D>(
        &self,
        sample:      &Dataset,
        mut writer:  W,
        diagnostics: &mut D,
    ) -> Result<()>
        where W: Write,
              D: Diagnostics + ?Sized,
    {
        if sample.is_empty() { return Ok(()); }

        let delimiter = self.delimiter;
        let header = sample[0].keys().collect::<Vec<_>>();

        for key in header.iter() {
            write!(writer, "{key}{delimiter}")?;
        }
        writeln!(writer, "{}", self.column)?;

        let predictions = self.classifier.classify_all(sample);
        for (row, (instance, prediction)) in sample.iter()
            .zip(predictions)
            .enumerate()
        {
            for key in header.iter() {
                let value = instance.get(key).unwrap_or("");
                write!(writer, "{value}{delimiter}")?;
            }
            writeln!(writer, "{prediction}")?;

            if let Prediction::Unknown(path) = prediction {
                diagnostics.warn(Warning::Unclassified { row, path });
            }
        }

        writer.flush()?;
        Ok(())
    }
}
