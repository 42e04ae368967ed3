use crate::{Rect, Vec2};

/// A read-only snapshot of one prefetch cycle.
///
/// A context is built once per tick, handed to the strategy, and discarded
/// when the tick ends. It bundles "what is visible now, what changed, and how
/// to resolve an index to data" so strategies never touch the concrete
/// layout or data source directly.
pub trait PrefetchContext<T> {
    /// The region currently on screen.
    fn visible_viewport(&self) -> Rect;

    /// Viewport displacement since the previous tick.
    ///
    /// Zero when there was no previous tick.
    fn scroll_delta(&self) -> Vec2;

    /// Emits the indexes of items whose layout frame intersects `region`.
    ///
    /// Delegates to the layout. Emission order is the layout's order and is
    /// preserved all the way to the fetch callback; this call alone makes no
    /// dedup guarantee.
    fn for_each_index_in(&self, region: Rect, emit: &mut dyn FnMut(usize));

    /// Resolves an index to its data item.
    ///
    /// Must return `Some` for every index emitted by [`Self::for_each_index_in`];
    /// `None` is a contract violation between layout and data source and
    /// fails the tick.
    fn data_at(&self, index: usize) -> Option<T>;
}

/// The concrete per-tick context built by [`crate::PrefetchCoordinator`].
///
/// Borrows the host's layout/data-source resolvers for the duration of one
/// tick. Hosts and tests can also construct one directly to drive a strategy
/// pass through [`crate::PrefetchCoordinator::run_with_context`].
pub struct TickContext<'a, T> {
    viewport: Rect,
    delta: Vec2,
    indexes_in: &'a dyn Fn(Rect, &mut dyn FnMut(usize)),
    data_at: &'a dyn Fn(usize) -> Option<T>,
}

impl<'a, T> TickContext<'a, T> {
    pub fn new(
        viewport: Rect,
        delta: Vec2,
        indexes_in: &'a dyn Fn(Rect, &mut dyn FnMut(usize)),
        data_at: &'a dyn Fn(usize) -> Option<T>,
    ) -> Self {
        Self {
            viewport,
            delta,
            indexes_in,
            data_at,
        }
    }
}

impl<T> PrefetchContext<T> for TickContext<'_, T> {
    fn visible_viewport(&self) -> Rect {
        self.viewport
    }

    fn scroll_delta(&self) -> Vec2 {
        self.delta
    }

    fn for_each_index_in(&self, region: Rect, emit: &mut dyn FnMut(usize)) {
        (self.indexes_in)(region, emit);
    }

    fn data_at(&self, index: usize) -> Option<T> {
        (self.data_at)(index)
    }
}

impl<T> core::fmt::Debug for TickContext<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickContext")
            .field("viewport", &self.viewport)
            .field("delta", &self.delta)
            .finish_non_exhaustive()
    }
}
