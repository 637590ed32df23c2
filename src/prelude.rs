//! Exports the types needed to train a tree and classify with it.
//!

pub use crate::sample::{
    Instance,
    Dataset,
    FeatureSet,
    DatasetReader,
};


pub use crate::decision_tree::{
    // Algorithm
    Id3,
    Id3Builder,
    LeafFallback,


    // Trained tree
    DecisionTreeClassifier,
    Node,
};


pub use crate::classifier::{
    Classifier,
    Prediction,
    UnknownPath,
};


pub use crate::diagnostics::{
    Diagnostics,
    Warning,
    Console,
    Silent,
};


pub use crate::report::{
    TreeOutline,
    PredictionWriter,
};
