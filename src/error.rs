use thiserror::Error;

/// Errors surfaced by a prefetch tick.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefetchError {
    /// The layout reported an index the data source cannot resolve.
    ///
    /// This indicates an inconsistency between the layout and the data
    /// source and is not recoverable inside the prefetch core.
    #[error("no data for index {index} reported by the layout")]
    MissingData { index: usize },
}
