use std::fmt;

use crate::constants::{DEFAULT_ID_COLUMN, DEFAULT_LABEL_COLUMN};
use super::id3::Id3;


/// The label given to a leaf grown because no feature is left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeafFallback {
    /// The label of the first row of the subset.
    /// This is the compatible behavior, although a mixed subset
    /// then gets a label that need not be its most frequent one.
    #[default]
    FirstSeen,
    /// The most frequent label of the subset.
    /// Ties go to the label seen first.
    Majority,
}


impl fmt::Display for LeafFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstSeen => "First-seen label",
            Self::Majority => "Majority label",
        };

        write!(f, "{name}")
    }
}


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for growing a tree.
///
/// # Example
///
/// ```no_run
/// use id3tree::prelude::*;
///
/// let id3 = Id3Builder::new()
///     .label_column("Decision")
///     .id_column("ID")
///     .fallback(LeafFallback::FirstSeen)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Id3Builder {
    label:    String,
    id:       String,
    fallback: LeafFallback,
}


impl Default for Id3Builder {
    fn default() -> Self {
        Self::new()
    }
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// label_column: "Decision",
    /// id_column:    "ID",
    /// fallback:     LeafFallback::FirstSeen,
    /// ```
    pub fn new() -> Self {
        Self {
            label:    DEFAULT_LABEL_COLUMN.to_string(),
            id:       DEFAULT_ID_COLUMN.to_string(),
            fallback: LeafFallback::default(),
        }
    }


    /// Set the column that holds the class label.
    pub fn label_column<S: AsRef<str>>(mut self, name: S) -> Self {
        self.label = name.as_ref().to_string();
        self
    }


    /// Set the identifier column, which is never split on.
    pub fn id_column<S: AsRef<str>>(mut self, name: S) -> Self {
        self.id = name.as_ref().to_string();
        self
    }


    /// Set the label policy for leaves grown without features left.
    /// See [`LeafFallback`].
    #[inline]
    pub fn fallback(mut self, fallback: LeafFallback) -> Self {
        self.fallback = fallback;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3::new(self.label, self.id, self.fallback)
    }
}
