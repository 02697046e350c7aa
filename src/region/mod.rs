//! Interactive region selection tools
//!
//! Two tools share one contract: the free bounding box ([`bbox::BBoxTool`])
//! and the fixed-grid square ([`square::SquareTool`]). Both operate on a
//! rectangle in frame-local pixel coordinates and run the same gesture state
//! machine; they differ only in resize policy (free per-edge resize vs.
//! quantized size lattice) and snapping behavior.
//!
//! Hit-testing is shared here: corner handles use a scale-compensated
//! Manhattan-distance threshold and take priority over the edge bands, so
//! that handles stay grabbable when the view is zoomed out.

use tracing::trace;

use crate::model::{InteractionState, RectF, ResizeDirection};

pub mod bbox;
pub mod square;

pub use bbox::BBoxTool;
pub use square::SquareTool;

/// Minimum bounding-box size in frame-local pixels, both axes
pub const BBOX_MIN_SIZE: f64 = 10.0;

/// Scale-compensated corner handle threshold
///
/// Grows as the view zooms out so handles keep a usable on-screen size.
pub fn corner_threshold(scale: f64) -> f64 {
    (10.0 / scale.max(0.5)).max(6.0)
}

/// Scale-compensated edge grab margin
pub fn edge_margin(scale: f64) -> f64 {
    (8.0 / scale.max(0.5)).max(4.0)
}

/// Common contract implemented by both region tools
pub trait RegionTool {
    /// Spawns the default centered rectangle if none exists yet
    ///
    /// Returns the new rectangle when one was created (a committed change),
    /// `None` when a rectangle already existed.
    fn ensure_created(&mut self, container_width: f64, container_height: f64) -> Option<RectF>;

    /// Hit-tests a frame-local point against the tool's resize handles
    fn detect_resize_direction(&self, x: f64, y: f64, scale: f64) -> Option<ResizeDirection>;

    /// Enters the dragging state; no-op without a rectangle
    fn begin_drag(&mut self);

    /// Enters the resizing state for the given direction; no-op without a
    /// rectangle (the square tool ignores this entirely)
    fn begin_resize(&mut self, direction: ResizeDirection);

    /// Applies a pointer motion delta in frame-local pixels
    ///
    /// `snap` is consulted only by tools that snap during motion (the
    /// bounding box when a grid overlay is active).
    fn apply_motion(&mut self, dx: f64, dy: f64, scale: f64, snap: Option<&dyn Fn(RectF) -> RectF>);

    /// Leaves any active gesture and returns the committed rectangle
    ///
    /// Idempotent: calling while idle just reports the current rectangle.
    fn finish_interaction(&mut self) -> Option<RectF>;

    /// The current selection rectangle, if one exists
    fn current_rect(&self) -> Option<RectF>;

    /// Current gesture state
    fn state(&self) -> InteractionState;

    /// Removes the selection and resets gesture state
    fn clear(&mut self);
}

/// Shared gesture state machine
///
/// Only one of drag/resize may be active at a time; `finish` is the single
/// exit transition and is safe to call when already idle.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Gesture {
    state: InteractionState,
}

impl Gesture {
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.state == InteractionState::Dragging
    }

    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self.state {
            InteractionState::Resizing(direction) => Some(direction),
            _ => None,
        }
    }

    /// Enters the dragging state unless a gesture is already active
    pub fn begin_drag(&mut self) {
        if !self.is_active() {
            self.state = InteractionState::Dragging;
        }
    }

    /// Enters the resizing state unless a gesture is already active
    pub fn begin_resize(&mut self, direction: ResizeDirection) {
        if !self.is_active() {
            self.state = InteractionState::Resizing(direction);
        }
    }

    /// Returns to idle from any state
    pub fn finish(&mut self) {
        self.state = InteractionState::Idle;
    }
}

/// Hit-tests the four corners of a rectangle
///
/// Uses Manhattan distance against `corner_threshold(scale) * 2`, checked in
/// NW, NE, SW, SE order.
pub(crate) fn detect_corner(rect: RectF, x: f64, y: f64, scale: f64) -> Option<ResizeDirection> {
    let threshold = corner_threshold(scale) * 2.0;
    let corners = [
        (rect.left, rect.top, ResizeDirection::Nw),
        (rect.right, rect.top, ResizeDirection::Ne),
        (rect.left, rect.bottom, ResizeDirection::Sw),
        (rect.right, rect.bottom, ResizeDirection::Se),
    ];
    for (cx, cy, direction) in corners {
        if (x - cx).abs() + (y - cy).abs() <= threshold {
            trace!("corner hit {direction:?} at ({x}, {y})");
            return Some(direction);
        }
    }
    None
}

/// Hit-tests the four edge bands of a rectangle
///
/// Only points inside the rectangle's extended bounding band are candidates;
/// horizontal edges win over vertical ones when a point sits in a corner of
/// the band that `detect_corner` did not claim.
pub(crate) fn detect_edge(rect: RectF, x: f64, y: f64, scale: f64) -> Option<ResizeDirection> {
    let margin = edge_margin(scale);
    let in_band = x >= rect.left - margin
        && x <= rect.right + margin
        && y >= rect.top - margin
        && y <= rect.bottom + margin;
    if !in_band {
        return None;
    }
    if (rect.top - margin..=rect.top + margin).contains(&y) {
        return Some(ResizeDirection::N);
    }
    if (rect.bottom - margin..=rect.bottom + margin).contains(&y) {
        return Some(ResizeDirection::S);
    }
    if (rect.left - margin..=rect.left + margin).contains(&x) {
        return Some(ResizeDirection::W);
    }
    if (rect.right - margin..=rect.right + margin).contains(&x) {
        return Some(ResizeDirection::E);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_threshold_scales_inversely() {
        // At scale 1 the threshold is 10; zooming out to 0.5 doubles it;
        // zooming in clamps at the 6px floor.
        assert_eq!(corner_threshold(1.0), 10.0);
        assert_eq!(corner_threshold(0.5), 20.0);
        assert_eq!(corner_threshold(0.25), 20.0);
        assert_eq!(corner_threshold(2.0), 6.0);
    }

    #[test]
    fn test_edge_margin_scales_inversely() {
        assert_eq!(edge_margin(1.0), 8.0);
        assert_eq!(edge_margin(0.5), 16.0);
        assert_eq!(edge_margin(4.0), 4.0);
    }

    #[test]
    fn test_detect_corner_exact_points() {
        let rect = RectF::new(100.0, 100.0, 300.0, 200.0);
        assert_eq!(detect_corner(rect, 100.0, 100.0, 1.0), Some(ResizeDirection::Nw));
        assert_eq!(detect_corner(rect, 300.0, 100.0, 1.0), Some(ResizeDirection::Ne));
        assert_eq!(detect_corner(rect, 100.0, 200.0, 1.0), Some(ResizeDirection::Sw));
        assert_eq!(detect_corner(rect, 300.0, 200.0, 1.0), Some(ResizeDirection::Se));
    }

    #[test]
    fn test_detect_corner_at_low_zoom() {
        // The threshold must scale inversely with zoom so the handle is
        // still hit exactly on the corner at scale 0.5.
        let rect = RectF::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(detect_corner(rect, 50.0, 0.0, 0.5), Some(ResizeDirection::Ne));
        // 40 Manhattan units away is the limit at scale 0.5
        assert_eq!(detect_corner(rect, 70.0, 20.0, 0.5), Some(ResizeDirection::Ne));
        assert_eq!(detect_corner(rect, 95.0, 20.0, 0.5), None);
    }

    #[test]
    fn test_detect_corner_misses_center() {
        let rect = RectF::new(0.0, 0.0, 500.0, 400.0);
        assert_eq!(detect_corner(rect, 250.0, 200.0, 1.0), None);
    }

    #[test]
    fn test_detect_edge_bands() {
        let rect = RectF::new(100.0, 100.0, 300.0, 200.0);
        assert_eq!(detect_edge(rect, 200.0, 100.0, 1.0), Some(ResizeDirection::N));
        assert_eq!(detect_edge(rect, 200.0, 200.0, 1.0), Some(ResizeDirection::S));
        assert_eq!(detect_edge(rect, 100.0, 150.0, 1.0), Some(ResizeDirection::W));
        assert_eq!(detect_edge(rect, 300.0, 150.0, 1.0), Some(ResizeDirection::E));
    }

    #[test]
    fn test_detect_edge_outside_band() {
        let rect = RectF::new(100.0, 100.0, 300.0, 200.0);
        assert_eq!(detect_edge(rect, 200.0, 80.0, 1.0), None);
        assert_eq!(detect_edge(rect, 200.0, 150.0, 1.0), None);
    }

    #[test]
    fn test_gesture_transitions() {
        let mut gesture = Gesture::default();
        assert!(!gesture.is_active());

        gesture.begin_drag();
        assert!(gesture.is_dragging());

        // Second activation while busy is ignored
        gesture.begin_resize(ResizeDirection::N);
        assert!(gesture.is_dragging());

        gesture.finish();
        assert_eq!(gesture.state(), InteractionState::Idle);

        gesture.begin_resize(ResizeDirection::Se);
        assert_eq!(gesture.resize_direction(), Some(ResizeDirection::Se));
        gesture.begin_drag();
        assert_eq!(gesture.resize_direction(), Some(ResizeDirection::Se));

        gesture.finish();
        // finish is idempotent
        gesture.finish();
        assert_eq!(gesture.state(), InteractionState::Idle);
    }
}
