//! Errors that abort reading, training, or writing.
use polars::prelude::PolarsError;


/// The fatal error conditions of this crate.
/// Non-fatal conditions are reported as
/// [`Warning`](crate::diagnostics::Warning)s instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A subtree was requested from instances whose first member
    /// carries no label.
    /// Training filters unlabeled rows beforehand,
    /// so this indicates an upstream bug.
    #[error("row {row} has no label at the base of a subtree")]
    MissingLabel {
        /// Row index in the training [`Dataset`](crate::Dataset).
        row: usize,
    },

    /// No labeled instance survived the training filter,
    /// or a subtree was requested from no rows.
    #[error("no labeled instances to train on")]
    EmptyDataset,

    /// A row index does not name a row of the training data.
    #[error("row {row} is out of range for {len} instances")]
    RowOutOfRange {
        /// The offending row index.
        row: usize,
        /// Number of instances in the training data.
        len: usize,
    },

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Converting a `DataFrame` failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),

    /// (De)serializing a tree failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
