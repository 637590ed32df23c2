#![warn(missing_docs)]

//!
//! A crate that grows categorical decision trees by ID3
//! and classifies new instances with them.
//!
//! The pipeline is as follows:
//!
//! - Read labeled records with [`DatasetReader`].
//!     Every attribute is a string and the class label lives in
//!     the `Decision` column.
//!
//! - Grow a tree with [`Id3`], configured by [`Id3Builder`].
//!     At each node the attribute with the highest information gain
//!     is chosen, and each attribute is used at most once on a path.
//!     The tree is neither pruned nor split on numeric thresholds.
//!
//! - Classify instances through the [`Classifier`] trait.
//!     An instance whose path leaves the tree gets
//!     [`Prediction::Unknown`].
//!
//! - Write the tree as an indented outline ([`TreeOutline`])
//!     and the predictions as CSV ([`PredictionWriter`]).
//!
//! Data-quality problems never abort training.
//! They are handed to a [`Diagnostics`] sink instead.
//!
//! ```no_run
//! use id3tree::prelude::*;
//!
//! let train = DatasetReader::default()
//!     .file("data/TrainingData.csv")
//!     .read()
//!     .unwrap();
//! let tree = Id3Builder::new()
//!     .build()
//!     .train(&train, &mut Console)
//!     .unwrap();
//! println!("{}", tree.outline());
//! ```

pub mod constants;
pub mod error;
pub mod diagnostics;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod report;
pub mod prelude;


pub use error::{Error, Result};
pub use diagnostics::{Diagnostics, Warning, Console, Silent};
pub use sample::{Instance, Dataset, FeatureSet, DatasetReader};
pub use classifier::{Classifier, Prediction, UnknownPath};
pub use decision_tree::{
    Id3,
    Id3Builder,
    LeafFallback,
    DecisionTreeClassifier,
    Node,
};
pub use report::{TreeOutline, PredictionWriter};
