use alloc::vec::Vec;

use crate::context::{PrefetchContext, TickContext};
use crate::set::IndexSet;
use crate::strategy::PrefetchStrategy;
use crate::{PrefetchError, PrefetchState, Rect, Vec2};

/// Bridges a [`PrefetchStrategy`] to the stateful, tick-driven host.
///
/// The coordinator remembers the viewport from the previous tick, computes
/// the scroll delta between consecutive ticks, builds a fresh
/// [`TickContext`] per cycle, and runs the strategy pipeline against it. It
/// also owns the prefetched-index set, so an index that has once been handed
/// to the fetch callback is never handed over again.
///
/// Single-threaded by design: ticks are driven synchronously by scroll and
/// layout events on one logical thread, and there is no internal
/// synchronization.
#[derive(Clone, Debug)]
pub struct PrefetchCoordinator<S> {
    strategy: S,
    prefetched: IndexSet,
    last_viewport: Option<Rect>,
}

impl<S: PrefetchStrategy> PrefetchCoordinator<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            prefetched: IndexSet::new(),
            last_viewport: None,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    pub fn into_strategy(self) -> S {
        self.strategy
    }

    /// The viewport remembered from the previous tick, or `None` before the
    /// first tick (and after [`Self::reset`]).
    pub fn last_viewport(&self) -> Option<Rect> {
        self.last_viewport
    }

    pub fn prefetched_len(&self) -> usize {
        self.prefetched.len()
    }

    pub fn is_prefetched(&self, index: usize) -> bool {
        self.prefetched.contains(&index)
    }

    /// Clears the prefetched-index set and the viewport memory.
    ///
    /// The set otherwise grows for the coordinator's whole lifetime; call
    /// this when the host replaces its data source (or on whatever pruning
    /// policy the host chooses).
    pub fn reset(&mut self) {
        pdebug!(prefetched = self.prefetched.len(), "reset");
        self.prefetched.clear();
        self.last_viewport = None;
    }

    /// Iterates over the prefetched indexes (unordered).
    pub fn for_each_prefetched(&self, mut f: impl FnMut(usize)) {
        for &i in self.prefetched.iter() {
            f(i);
        }
    }

    /// Exports the prefetched indexes sorted ascending (useful for
    /// persistence).
    pub fn export_prefetched(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.prefetched.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Marks indexes as already prefetched (useful when restoring state).
    pub fn import_prefetched(&mut self, indexes: impl IntoIterator<Item = usize>) {
        let mut n = 0usize;
        for i in indexes {
            self.prefetched.insert(i);
            n = n.saturating_add(1);
        }
        pdebug!(entries = n, "import_prefetched");
    }

    /// Returns a snapshot of the coordinator's bookkeeping.
    pub fn state(&self) -> PrefetchState {
        PrefetchState {
            last_viewport: self.last_viewport,
            prefetched: self.export_prefetched(),
        }
    }

    /// Restores bookkeeping from a previously captured snapshot.
    pub fn restore_state(&mut self, state: PrefetchState) {
        pdebug!(entries = state.prefetched.len(), "restore_state");
        self.last_viewport = state.last_viewport;
        self.prefetched = state.prefetched.into_iter().collect();
    }

    /// Runs one prefetch tick against the current viewport.
    ///
    /// `indexes_in` resolves a rect to the item indexes whose layout frames
    /// intersect it, in layout order; `data_at` resolves an index to its
    /// item and must be total over every index `indexes_in` can emit.
    ///
    /// The current viewport is stored as the new "last viewport"
    /// unconditionally, even when the tick fails.
    pub fn run_tick(
        &mut self,
        viewport: Rect,
        indexes_in: impl Fn(Rect, &mut dyn FnMut(usize)),
        data_at: impl Fn(usize) -> Option<S::Item>,
    ) -> Result<(), PrefetchError> {
        let delta = viewport_delta(self.last_viewport, viewport);
        ptrace!(dx = delta.x, dy = delta.y, "run_tick");

        let ctx = TickContext::new(viewport, delta, &indexes_in, &data_at);
        let result = self.run_with_context(&ctx);
        self.last_viewport = Some(viewport);
        result
    }

    /// Runs the bare strategy pipeline against an arbitrary context.
    ///
    /// This is the per-tick contract shared by every strategy: project
    /// regions, resolve each region's indexes in order, drop indexes already
    /// prefetched (including ones dispatched for an earlier region of the
    /// same pass), resolve the survivors to data, and hand the strategy at
    /// most one batch per region. Empty batches are skipped.
    ///
    /// Unlike [`Self::run_tick`], this does not touch the viewport memory.
    pub fn run_with_context(
        &mut self,
        ctx: &dyn PrefetchContext<S::Item>,
    ) -> Result<(), PrefetchError> {
        let mut regions = Vec::new();
        self.strategy.project_regions(ctx, &mut regions);
        ptrace!(regions = regions.len(), "project_regions");

        let mut indexes = Vec::new();
        let mut data = Vec::new();
        for region in regions {
            indexes.clear();
            ctx.for_each_index_in(region, &mut |i| {
                // `insert` returning false covers both earlier ticks and
                // earlier regions of this pass.
                if self.prefetched.insert(i) {
                    indexes.push(i);
                }
            });
            if indexes.is_empty() {
                continue;
            }

            data.clear();
            data.reserve(indexes.len());
            for &i in indexes.iter() {
                let Some(item) = ctx.data_at(i) else {
                    pwarn!(index = i, "layout emitted an index with no data");
                    return Err(PrefetchError::MissingData { index: i });
                };
                data.push(item);
            }

            self.strategy.on_resolved(&indexes, &data);
        }
        Ok(())
    }
}

/// Component-wise scroll delta between consecutive viewports.
///
/// For an axis: if the size on that axis is unchanged, the delta is the
/// positional difference; if the position is unchanged, the delta is the size
/// difference; a simultaneous move+resize is ambiguous and treated as
/// no-scroll on that axis.
fn viewport_delta(last: Option<Rect>, current: Rect) -> Vec2 {
    let Some(last) = last else {
        return Vec2::ZERO;
    };

    let mut delta = Vec2::ZERO;
    if current.width == last.width {
        delta.x = current.x - last.x;
    } else if current.x == last.x {
        delta.x = current.width - last.width;
    }
    if current.height == last.height {
        delta.y = current.y - last.y;
    } else if current.y == last.y {
        delta.y = current.height - last.height;
    }
    delta
}
