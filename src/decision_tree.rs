//! A categorical decision tree grown by ID3.

/// Defines the ID3 algorithm.
pub mod id3;
/// Defines the builder that configures `Id3`.
pub mod builder;
/// Defines the classifier produced by `Id3`.
pub mod tree;
/// Defines entropy and information gain.
pub mod criterion;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;


pub use id3::Id3;
pub use builder::{Id3Builder, LeafFallback};
pub use tree::DecisionTreeClassifier;
pub use node::Node;
pub use criterion::{entropy, information_gain};
