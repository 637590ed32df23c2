use std::fmt;
use std::collections::BTreeMap;

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::sample::{Dataset, FeatureSet};
use super::{
    builder::LeafFallback,
    criterion::*,
    node::Node,
    tree::DecisionTreeClassifier,
};


/// The ID3 algorithm.
/// Given a set of labeled instances with categorical attributes,
/// [`Id3`] grows a [`DecisionTreeClassifier`]
/// by splitting greedily on the attribute with the highest
/// information gain. A feature is used at most once on any path,
/// and the tree is never pruned.
///
/// The algorithm follows
/// J. R. Quinlan, *Induction of decision trees*,
/// Machine Learning 1, 81–106 (1986).
///
/// [`Id3`] is constructed
/// by [`Id3Builder`](crate::decision_tree::Id3Builder).
///
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
///
/// // Read the training data from the CSV file.
/// let sample = DatasetReader::default()
///     .file("/path/to/train.csv")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new().build();
/// let tree = id3.train(&sample, &mut Console).unwrap();
///
/// let correct = tree.classify_all(&sample)
///     .into_iter()
///     .zip(sample.iter())
///     .filter(|(p, x)| p.label() == x.get("Decision"))
///     .count();
/// println!("accuracy (train): {correct} / {}", sample.len());
/// ```
#[derive(Debug, Clone)]
pub struct Id3 {
    label:    String,
    id:       String,
    fallback: LeafFallback,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(label: String, id: String, fallback: LeafFallback)
        -> Self
    {
        Self { label, id, fallback, }
    }


    /// The column that holds the class label.
    pub fn label_column(&self) -> &str {
        &self.label
    }


    /// The identifier column.
    pub fn id_column(&self) -> &str {
        &self.id
    }


    /// Grow a tree from `sample`.
    ///
    /// 1. Rows without a label are reported and dropped.
    /// 2. The features are the keys of the first remaining row,
    ///    except the id and label columns, in that row's order.
    /// 3. The tree is grown over the remaining rows.
    pub fn train<D>(&self, sample: &Dataset, diagnostics: &mut D)
        -> Result<DecisionTreeClassifier>
        where D: Diagnostics + ?Sized
    {
        let indices = (0..sample.len())
            .filter(|&i| {
                let labeled = sample[i].contains(&self.label);
                if !labeled {
                    diagnostics.warn(Warning::SkippedUnlabeled { row: i });
                }
                labeled
            })
            .collect::<Vec<usize>>();

        let Some(&first) = indices.first() else {
            return Err(Error::EmptyDataset);
        };

        let excluded = [self.id.as_str(), self.label.as_str()];
        let features = FeatureSet::from_instance(&sample[first], &excluded);

        let root = self.grow(sample, indices, &features, diagnostics)?;
        Ok(DecisionTreeClassifier::from(root))
    }


    /// Grow the sub-tree for the rows in `indices`,
    /// splitting only on `features`.
    ///
    /// Returns [`Error::EmptyDataset`] if `indices` is empty
    /// and [`Error::RowOutOfRange`] if an index is not a row of `sample`.
    pub fn grow<D>(
        &self,
        sample:      &Dataset,
        indices:     Vec<usize>,
        features:    &FeatureSet,
        diagnostics: &mut D,
    ) -> Result<Node>
        where D: Diagnostics + ?Sized
    {
        if indices.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let len = sample.len();
        if let Some(&row) = indices.iter().find(|&&i| i >= len) {
            return Err(Error::RowOutOfRange { row, len });
        }

        self.grow_subset(sample, indices, features, diagnostics)
    }


    /// Recursive body of [`Id3::grow`].
    /// `indices` is non-empty and in range.
    fn grow_subset<D>(
        &self,
        sample:      &Dataset,
        indices:     Vec<usize>,
        features:    &FeatureSet,
        diagnostics: &mut D,
    ) -> Result<Node>
        where D: Diagnostics + ?Sized
    {
        let first = indices[0];
        let Some(first_label) = sample[first].get(&self.label) else {
            return Err(Error::MissingLabel { row: first });
        };

        let pure = indices.iter()
            .all(|&i| sample[i].get(&self.label) == Some(first_label));
        if pure {
            return Ok(Node::leaf(first_label));
        }

        if features.is_empty() {
            return Ok(self.fallback_leaf(sample, &indices[..], first_label));
        }

        // Pick the feature with the strictly greatest gain.
        // The earliest feature wins a tie.
        // A feature no row carries cannot split the subset.
        let mut best_gain = -1f64;
        let mut best_feature = None;
        for feature in features.iter() {
            if !indices.iter().any(|&i| sample[i].contains(feature)) {
                let feature = feature.to_string();
                diagnostics.warn(Warning::EmptySplit { feature });
                continue;
            }
            let gain = information_gain(
                sample, &indices[..], feature, &self.label, diagnostics
            );
            if gain > best_gain {
                best_gain = gain;
                best_feature = Some(feature);
            }
        }
        let Some(best_feature) = best_feature else {
            return Ok(self.fallback_leaf(sample, &indices[..], first_label));
        };

        let partitions = partition(
            sample, &indices[..], best_feature, diagnostics
        );
        let remaining = features.without(best_feature);
        let mut children = BTreeMap::new();
        for (value, part) in partitions {
            let child = self.grow_subset(
                sample, part, &remaining, diagnostics
            )?;
            children.insert(value.to_string(), child);
        }

        Ok(Node::branch(best_feature.to_string(), children))
    }


    /// The leaf grown when the subset cannot be split further.
    fn fallback_leaf(&self, sample: &Dataset, indices: &[usize], first: &str)
        -> Node
    {
        match self.fallback {
            LeafFallback::FirstSeen => Node::leaf(first),
            LeafFallback::Majority => {
                Node::leaf(majority_label(sample, indices, &self.label, first))
            },
        }
    }
}


/// Returns the most frequent label among `indices`.
/// Ties go to the label that appears first.
fn majority_label<'a>(
    sample:  &'a Dataset,
    indices: &[usize],
    label:   &str,
    first:   &'a str,
) -> &'a str
{
    // Labels in order of first appearance, with their counts.
    let mut counter: Vec<(&str, usize)> = Vec::new();
    for &i in indices {
        let Some(y) = sample[i].get(label) else { continue; };
        match counter.iter_mut().find(|(z, _)| *z == y) {
            Some((_, count)) => { *count += 1; },
            None => { counter.push((y, 1)); },
        }
    }

    let mut best = (first, 0);
    for (y, count) in counter {
        if count > best.1 {
            best = (y, count);
        }
    }
    best.0
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Label column: {}\n\
            - ID column: {}\n\
            - Leaf fallback: {}\n\
            ----------\
            ",
            self.label,
            self.id,
            self.fallback,
        )
    }
}
