use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::context::PrefetchContext;
use crate::projection::directional_regions;
use crate::Rect;

/// The fetch action registered by the host at construction time.
///
/// Invoked with one batch per projected region: the not-yet-prefetched
/// indexes in layout order, and their data in the same order. The action may
/// kick off asynchronous loads; the core never awaits, tracks, or cancels
/// them, and an index is marked prefetched at dispatch regardless of the
/// action's outcome.
pub type PrefetchCallback<T> = Arc<dyn Fn(&[usize], &[T]) + Send + Sync>;

/// A prefetch policy: which off-screen regions are worth realizing, and what
/// to do with the items resolved from them.
///
/// This is a capability contract: implement both methods to substitute a
/// custom policy. The shared tick pipeline (projection, resolution, dedup,
/// dispatch) lives in [`crate::PrefetchCoordinator`].
pub trait PrefetchStrategy {
    type Item;

    /// Appends regions, outside the visible viewport, that should be
    /// proactively realized this tick. An empty output is valid and results
    /// in zero fetch calls.
    fn project_regions(&self, ctx: &dyn PrefetchContext<Self::Item>, out: &mut Vec<Rect>);

    /// Receives one resolved batch per projected region.
    fn on_resolved(&mut self, indexes: &[usize], data: &[Self::Item]);
}

impl<S: PrefetchStrategy + ?Sized> PrefetchStrategy for Box<S> {
    type Item = S::Item;

    fn project_regions(&self, ctx: &dyn PrefetchContext<Self::Item>, out: &mut Vec<Rect>) {
        (**self).project_regions(ctx, out);
    }

    fn on_resolved(&mut self, indexes: &[usize], data: &[Self::Item]) {
        (**self).on_resolved(indexes, data);
    }
}

/// Strategy used when prefetching is disabled: projects no regions and never
/// issues a request.
pub struct NullStrategy<T> {
    _items: PhantomData<fn() -> T>,
}

impl<T> NullStrategy<T> {
    pub fn new() -> Self {
        Self {
            _items: PhantomData,
        }
    }
}

impl<T> Default for NullStrategy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NullStrategy<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for NullStrategy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("NullStrategy")
    }
}

impl<T> PrefetchStrategy for NullStrategy<T> {
    type Item = T;

    fn project_regions(&self, _ctx: &dyn PrefetchContext<T>, _out: &mut Vec<Rect>) {}

    fn on_resolved(&mut self, _indexes: &[usize], _data: &[T]) {}
}

/// The default production strategy: prefetches thin strips in the direction
/// of travel, `lookahead` units deep.
///
/// See [`directional_regions`] for the projection itself.
pub struct DirectionalStrategy<T> {
    lookahead: f32,
    on_prefetch: PrefetchCallback<T>,
}

impl<T> DirectionalStrategy<T> {
    pub fn new(lookahead: f32, on_prefetch: impl Fn(&[usize], &[T]) + Send + Sync + 'static) -> Self {
        Self {
            lookahead,
            on_prefetch: Arc::new(on_prefetch),
        }
    }

    /// Depth, in content-space units, of a projected strip along the scroll
    /// direction.
    pub fn lookahead(&self) -> f32 {
        self.lookahead
    }

    pub fn set_lookahead(&mut self, lookahead: f32) {
        self.lookahead = lookahead;
    }
}

impl<T> Clone for DirectionalStrategy<T> {
    fn clone(&self) -> Self {
        Self {
            lookahead: self.lookahead,
            on_prefetch: Arc::clone(&self.on_prefetch),
        }
    }
}

impl<T> core::fmt::Debug for DirectionalStrategy<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DirectionalStrategy")
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

impl<T> PrefetchStrategy for DirectionalStrategy<T> {
    type Item = T;

    fn project_regions(&self, ctx: &dyn PrefetchContext<T>, out: &mut Vec<Rect>) {
        directional_regions(ctx.visible_viewport(), ctx.scroll_delta(), self.lookahead, out);
    }

    fn on_resolved(&mut self, indexes: &[usize], data: &[T]) {
        (self.on_prefetch)(indexes, data);
    }
}
