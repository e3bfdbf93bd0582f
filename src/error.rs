//! Error types for the kicau library.

use std::io;
use thiserror::Error;

/// Result type alias for kicau operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the kicau library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during resource loading.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error in a batch or dictionary resource.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The slang dictionary resource is missing or malformed.
    ///
    /// Non-fatal: callers can degrade to an empty dictionary via
    /// [`SlangDictionary::load_or_empty`](crate::SlangDictionary::load_or_empty),
    /// which turns slang substitution into a no-op.
    #[error("slang dictionary error ({path}): {message}")]
    Dictionary { path: String, message: String },

    /// A required column is absent from the input records.
    ///
    /// Fatal for the batch: no partial classification is returned.
    #[error("input records are missing required column '{0}'")]
    MissingColumn(String),

    /// The frozen classifier artifact could not be loaded.
    #[error("classifier artifact unavailable ({path}): {message}")]
    ClassifierUnavailable { path: String, message: String },

    /// The classifier returned a different number of labels than texts
    /// submitted, violating the positional-output contract.
    #[error("classifier returned {got} labels for {expected} texts")]
    PredictionMismatch { expected: usize, got: usize },

    /// A label string could not be parsed into a sentiment class.
    #[error("unknown sentiment label: {0}")]
    UnknownLabel(String),
}
