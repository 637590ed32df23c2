//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;

use crate::classifier::{Classifier, Prediction, UnknownPath};
use crate::sample::Instance;


/// Enumeration of branch and leaf nodes.
/// Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that routes an instance by its value of `feature`.
    /// `children` is never empty.
    Branch {
        /// The feature this node splits on.
        feature:  String,
        /// One child per value observed during training.
        children: BTreeMap<String, Node>,
    },
    /// A node that have no child.
    Leaf {
        /// The predicted label.
        label: String,
    },
}


impl Node {
    /// Construct a branch node.
    pub fn branch(feature: String, children: BTreeMap<String, Node>) -> Self {
        debug_assert!(!children.is_empty());
        Self::Branch { feature, children, }
    }


    /// Construct a leaf node.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into(), }
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.values().map(Node::leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { feature, children } => {
                let feature = escape(feature);
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{feature}\" ];\n"),
                ];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, return_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);

                    let value = escape(value);
                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);
                    next_id = return_id;
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let label = escape(label);
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Escape `text` for a double-quoted dot string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
}


impl Classifier for Node {
    fn classify(&self, instance: &Instance) -> Prediction<'_> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => {
                    return Prediction::Label(label);
                },
                Self::Branch { feature, children } => {
                    let Some(value) = instance.get(feature) else {
                        let feature = feature.clone();
                        let path = UnknownPath::MissingFeature { feature };
                        return Prediction::Unknown(path);
                    };
                    match children.get(value) {
                        Some(child) => { node = child; },
                        None => {
                            let path = UnknownPath::UnseenValue {
                                feature: feature.clone(),
                                value: value.to_string(),
                            };
                            return Prediction::Unknown(path);
                        },
                    }
                },
            }
        }
    }
}
