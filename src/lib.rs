//! A headless prefetch-scheduling engine for scroll-driven virtualized views.
//!
//! In a virtualized collection only the visible window of items is realized
//! (data fetched, views created). This crate predicts which not-yet-visible
//! items are about to enter the viewport based on scroll direction, and asks
//! the host to load their data ahead of time so rendering does not stall:
//! directional frame projection, per-tick scroll-delta tracking, and
//! bookkeeping that guarantees each index is requested at most once.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the visible viewport rect on each scroll/layout event
//! - a layout query resolving a rect to the item indexes it covers
//! - a data source resolving an index to its item
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod context;
mod coordinator;
mod error;
mod projection;
mod set;
mod state;
mod strategy;
mod types;


pub use context::{PrefetchContext, TickContext};
pub use coordinator::PrefetchCoordinator;
pub use error::PrefetchError;
pub use projection::directional_regions;
pub use state::PrefetchState;
pub use strategy::{DirectionalStrategy, NullStrategy, PrefetchCallback, PrefetchStrategy};
pub use types::{Rect, Vec2};
