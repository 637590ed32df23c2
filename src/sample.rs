//! Instances, datasets, and the record reader.

// Provides a single record.
pub(crate) mod instance;
// Provides an ordered sequence of records.
pub(crate) mod dataset;
// Provides the set of attributes eligible for splitting.
pub(crate) mod feature_set;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use instance::Instance;
pub use dataset::Dataset;
pub use feature_set::FeatureSet;
pub use reader::DatasetReader;
