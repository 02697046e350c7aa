//! Grid overlay generation and grid snapping
//!
//! The overlay is a set of line segments regenerated from scratch on every
//! zoom or resize event; nothing here is incrementally mutated. Step size
//! comes from a zoom-level table so the rendered line count stays bounded:
//! coarse 10px steps at 1x, down to single-pixel steps at 8x and above.

use crate::model::RectF;

/// Zoom scale below which the overlay is suppressed entirely
pub const MIN_OVERLAY_SCALE: f64 = 0.5;

/// A single overlay line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Grid step in pixels for a given zoom scale
///
/// Finer steps only appear once zoomed in far enough to resolve them.
pub fn grid_step_for_zoom(scale: f64) -> i32 {
    if scale >= 8.0 {
        1
    } else if scale >= 4.0 {
        2
    } else if scale >= 2.0 {
        5
    } else {
        10
    }
}

/// Generates overlay lines for a canvas of the given size
///
/// Vertical lines at `x = 0, step_x, 2*step_x, ...` while `x <= width`, and
/// horizontal lines analogously. The iterator is finite and restartable;
/// callers regenerate it on every zoom or resize.
pub fn grid_lines(
    width: i32,
    height: i32,
    step_x: i32,
    step_y: i32,
) -> impl Iterator<Item = GridLine> {
    let verticals = (0..=width.max(0))
        .step_by(step_x.max(1) as usize)
        .map(move |x| GridLine {
            x1: x,
            y1: 0,
            x2: x,
            y2: height,
        });
    let horizontals = (0..=height.max(0))
        .step_by(step_y.max(1) as usize)
        .map(move |y| GridLine {
            x1: 0,
            y1: y,
            x2: width,
            y2: y,
        });
    verticals.chain(horizontals)
}

/// Snaps all four edges of a rectangle to the nearest grid step
///
/// Edges that invert after rounding are swapped back into order, so the
/// result is always a normalized rectangle.
pub fn snap_rect_to_grid(rect: RectF, step_x: f64, step_y: f64) -> RectF {
    if step_x <= 0.0 || step_y <= 0.0 {
        return rect;
    }
    let snapped = RectF {
        left:   (rect.left / step_x).round() * step_x,
        top:    (rect.top / step_y).round() * step_y,
        right:  (rect.right / step_x).round() * step_x,
        bottom: (rect.bottom / step_y).round() * step_y,
    };
    snapped.normalized()
}
