//! Non-fatal data-quality reports.
//!
//! Training and prediction never print on their own.
//! Instead, each function takes a [`Diagnostics`] sink
//! and hands every [`Warning`] to it.
//! Pick [`Console`] for a terminal, [`Silent`] to drop everything,
//! or a `Vec<Warning>` to inspect the warnings afterwards.
use colored::Colorize;

use std::fmt;

use crate::classifier::UnknownPath;


/// A non-fatal data-quality condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A training row without a label was dropped before growing the tree.
    SkippedUnlabeled {
        /// Row index in the training data.
        row: usize,
    },

    /// A row without a label was left out of an entropy count.
    MissingLabel {
        /// Row index in the training data.
        row: usize,
    },

    /// A row without a value for `feature` was left out of a partition.
    MissingFeatureValue {
        /// Row index in the training data.
        row: usize,
        /// The feature being evaluated or split on.
        feature: String,
    },

    /// No row of the subset carries `feature`,
    /// so it was not considered for the split.
    EmptySplit {
        /// The feature that produced no partition.
        feature: String,
    },

    /// A test row could not be routed to a leaf.
    Unclassified {
        /// Row index in the test data.
        row: usize,
        /// Where the traversal stopped.
        path: UnknownPath,
    },
}


impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedUnlabeled { row } => {
                write!(f, "skipping row {row} without a label")
            },
            Self::MissingLabel { row } => {
                write!(f, "row {row} has no label, left out of entropy")
            },
            Self::MissingFeatureValue { row, feature } => {
                write!(f, "row {row} has no value for `{feature}`")
            },
            Self::EmptySplit { feature } => {
                write!(
                    f,
                    "no row carries `{feature}`, it cannot split"
                )
            },
            Self::Unclassified { row, path } => {
                write!(f, "row {row} is unclassified: {path}")
            },
        }
    }
}


/// A sink for [`Warning`]s.
pub trait Diagnostics {
    /// Receives a single warning.
    fn warn(&mut self, warning: Warning);
}


impl Diagnostics for Vec<Warning> {
    #[inline]
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}


/// Prints each warning to the standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;


impl Diagnostics for Console {
    fn warn(&mut self, warning: Warning) {
        eprintln!("{} {warning}", "warning:".bold().yellow());
    }
}


/// Discards every warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;


impl Diagnostics for Silent {
    #[inline(always)]
    fn warn(&mut self, _warning: Warning) {}
}
