#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type IndexSet = HashSet<usize>;
#[cfg(not(feature = "std"))]
pub(crate) type IndexSet = BTreeSet<usize>;
