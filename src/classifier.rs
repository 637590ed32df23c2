//! The classification interface of trained trees.
use rayon::prelude::*;

use std::fmt;

use crate::constants::UNKNOWN_LABEL;
use crate::sample::{Dataset, Instance};


/// Where a traversal stopped before reaching a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownPath {
    /// The instance has no value for the split feature.
    MissingFeature {
        /// Feature of the branch node.
        feature: String,
    },

    /// The split feature has a value never seen during training.
    UnseenValue {
        /// Feature of the branch node.
        feature: String,
        /// Value carried by the instance.
        value: String,
    },
}


impl fmt::Display for UnknownPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFeature { feature } => {
                write!(f, "feature `{feature}` is missing")
            },
            Self::UnseenValue { feature, value } => {
                write!(f, "value `{value}` of `{feature}` is not in the tree")
            },
        }
    }
}


/// The outcome of classifying one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction<'a> {
    /// The label of the leaf the instance reached.
    Label(&'a str),
    /// No leaf was reached.
    Unknown(UnknownPath),
}


impl<'a> Prediction<'a> {
    /// Returns the predicted label, or `None` for [`Prediction::Unknown`].
    #[inline]
    pub fn label(&self) -> Option<&'a str> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Unknown(_) => None,
        }
    }


    /// Returns the label, or `"Unknown"` if no leaf was reached.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.label().unwrap_or(UNKNOWN_LABEL)
    }


    /// Returns `true` if no leaf was reached.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}


impl fmt::Display for Prediction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Classify a single instance.
    fn classify(&self, instance: &Instance) -> Prediction<'_>;


    /// Classify every instance of `dataset`, preserving order.
    /// The instances are classified in parallel
    /// since classification never mutates `self`.
    fn classify_all(&self, dataset: &Dataset) -> Vec<Prediction<'_>>
        where Self: Sync
    {
        dataset.instances()
            .par_iter()
            .map(|instance| self.classify(instance))
            .collect()
    }
}
