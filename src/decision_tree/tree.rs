//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};

use crate::classifier::{Classifier, Prediction};
use crate::error::Result;
use crate::report::TreeOutline;
use crate::sample::Instance;
use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`,
/// and it is never mutated after training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn classify(&self, instance: &Instance) -> Prediction<'_> {
        self.root.classify(instance)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the number of branch nodes on the longest path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the indented text outline of this tree.
    pub fn outline(&self) -> TreeOutline<'_> {
        TreeOutline::new(&self.root)
    }


    /// Write the text outline of this tree to `path`.
    pub fn write_outline<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        write!(f, "{}", self.outline())?;
        f.flush()?;
        Ok(())
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()?;

        Ok(())
    }


    /// Serialize this tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut f, self)?;
        f.flush()?;
        Ok(())
    }


    /// Deserialize a tree written by
    /// [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let f = BufReader::new(File::open(path)?);
        let tree = serde_json::from_reader(f)?;
        Ok(tree)
    }
}
