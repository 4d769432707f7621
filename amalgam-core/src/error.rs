//! Error taxonomy for the merge pipeline.

use std::io;

use thiserror::Error;

/// Fatal merge failures. Any of these aborts the whole merge before the
/// output artifact is written.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The root header or a declared include could not be read.
    #[error("cannot read source {path}: {source}")]
    MissingSource {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The unit never opens a namespace, so it has no body worth merging.
    #[error("no namespace marker in {path}")]
    MalformedUnit { path: String },
}
