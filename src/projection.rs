use alloc::vec::Vec;

use crate::{Rect, Vec2};

/// Projects the off-screen strips a scrolling viewport is heading into.
///
/// Given the visible viewport and the scroll delta since the previous tick,
/// appends up to two candidate regions to `out`:
///
/// - a horizontal strip of width `lookahead` immediately left or right of the
///   viewport, when `delta.x != 0`
/// - a vertical strip of height `lookahead` immediately above or below the
///   viewport, when `delta.y != 0`
///
/// Diagonal movement yields both strips (the corner between them is not
/// covered); zero delta yields none. Strips bounded by a fixed lookahead keep
/// prefetch volume proportional to travel direction rather than area, and
/// never cover content the user is moving away from.
pub fn directional_regions(viewport: Rect, delta: Vec2, lookahead: f32, out: &mut Vec<Rect>) {
    if delta.x > 0.0 {
        out.push(Rect::new(
            viewport.max_x(),
            viewport.min_y(),
            lookahead,
            viewport.height,
        ));
    } else if delta.x < 0.0 {
        out.push(Rect::new(
            viewport.min_x() - lookahead,
            viewport.min_y(),
            lookahead,
            viewport.height,
        ));
    }
    if delta.y > 0.0 {
        out.push(Rect::new(
            viewport.min_x(),
            viewport.max_y(),
            viewport.width,
            lookahead,
        ));
    } else if delta.y < 0.0 {
        out.push(Rect::new(
            viewport.min_x(),
            viewport.min_y() - lookahead,
            viewport.width,
            lookahead,
        ));
    }
}
