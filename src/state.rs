use alloc::vec::Vec;

use crate::Rect;

/// A serializable snapshot of a coordinator's bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Useful for restoring prefetch state across sessions without re-issuing
/// requests for data the host already holds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefetchState {
    /// The viewport remembered from the last tick, if any.
    pub last_viewport: Option<Rect>,
    /// Indexes already dispatched to the fetch callback, sorted ascending.
    pub prefetched: Vec<usize>,
}
