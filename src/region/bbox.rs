//! Free bounding-box selection tool
//!
//! Spawns centered at 20% of the container (at least 40px), supports
//! dragging and per-edge resizing, and keeps a minimum size of
//! [`BBOX_MIN_SIZE`] on both axes. When a grid overlay is active the painted
//! rectangle snaps to the grid on every motion, while an unsnapped copy
//! keeps accumulating pointer deltas so snapping never eats drag progress.

use tracing::debug;

use crate::model::{InteractionState, RectF, ResizeDirection};

use super::{detect_corner, detect_edge, Gesture, RegionTool, BBOX_MIN_SIZE};

/// Free bounding-box tool state
#[derive(Debug, Default)]
pub struct BBoxTool {
    /// Painted rectangle (snapped when a grid overlay is active)
    rect: Option<RectF>,
    /// Unsnapped rectangle accumulating raw motion during a gesture
    live:    Option<RectF>,
    gesture: Gesture,
}

impl BBoxTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegionTool for BBoxTool {
    fn ensure_created(&mut self, container_width: f64, container_height: f64) -> Option<RectF> {
        if self.rect.is_some() {
            return None;
        }
        let width = (container_width * 0.2).max(40.0);
        let height = (container_height * 0.2).max(40.0);
        let rect = RectF::from_origin_size(
            (container_width - width) / 2.0,
            (container_height - height) / 2.0,
            width,
            height,
        );
        debug!("bbox created {}x{} at ({}, {})", width, height, rect.left, rect.top);
        self.rect = Some(rect);
        self.live = Some(rect);
        Some(rect)
    }

    fn detect_resize_direction(&self, x: f64, y: f64, scale: f64) -> Option<ResizeDirection> {
        let rect = self.rect?;
        detect_corner(rect, x, y, scale).or_else(|| detect_edge(rect, x, y, scale))
    }

    fn begin_drag(&mut self) {
        if self.rect.is_none() {
            return;
        }
        self.gesture.begin_drag();
        self.live = self.rect;
    }

    fn begin_resize(&mut self, direction: ResizeDirection) {
        if self.rect.is_none() {
            return;
        }
        self.gesture.begin_resize(direction);
        self.live = self.rect;
    }

    fn apply_motion(
        &mut self,
        dx: f64,
        dy: f64,
        _scale: f64,
        snap: Option<&dyn Fn(RectF) -> RectF>,
    ) {
        let (Some(live), true) = (self.live, self.gesture.is_active()) else {
            return;
        };

        let new_rect = if self.gesture.is_dragging() {
            live.translated(dx, dy)
        } else if let Some(direction) = self.gesture.resize_direction() {
            let mut r = live;
            if direction.affects_top() {
                r.top += dy;
            }
            if direction.affects_bottom() {
                r.bottom += dy;
            }
            if direction.affects_left() {
                r.left += dx;
            }
            if direction.affects_right() {
                r.right += dx;
            }
            r
        } else {
            return;
        };

        if new_rect.width() >= BBOX_MIN_SIZE && new_rect.height() >= BBOX_MIN_SIZE {
            self.rect = Some(match snap {
                Some(snap) => snap(new_rect),
                None => new_rect,
            });
            self.live = Some(new_rect);
        }
    }

    fn finish_interaction(&mut self) -> Option<RectF> {
        self.gesture.finish();
        self.rect
    }

    fn current_rect(&self) -> Option<RectF> {
        self.rect
    }

    fn state(&self) -> InteractionState {
        self.gesture.state()
    }

    fn clear(&mut self) {
        self.rect = None;
        self.live = None;
        self.gesture.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_created_centered_default() {
        let mut tool = BBoxTool::new();
        let rect = tool.ensure_created(1000.0, 600.0).unwrap();
        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 120.0);
        assert_eq!(rect.left, 400.0);
        assert_eq!(rect.top, 240.0);
        // Second call is a no-op
        assert!(tool.ensure_created(1000.0, 600.0).is_none());
    }

    #[test]
    fn test_ensure_created_minimum_size() {
        let mut tool = BBoxTool::new();
        let rect = tool.ensure_created(100.0, 100.0).unwrap();
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 40.0);
    }

    #[test]
    fn test_drag_translates() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_drag();
        assert_eq!(tool.state(), InteractionState::Dragging);
        tool.apply_motion(15.0, -10.0, 1.0, None);
        tool.apply_motion(5.0, 0.0, 1.0, None);
        let rect = tool.finish_interaction().unwrap();
        assert_eq!(rect.left, 420.0);
        assert_eq!(rect.top, 230.0);
        assert_eq!(rect.width(), 200.0);
        assert_eq!(tool.state(), InteractionState::Idle);
    }

    #[test]
    fn test_resize_moves_only_active_edges() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_resize(ResizeDirection::E);
        tool.apply_motion(30.0, 999.0, 1.0, None);
        let rect = tool.current_rect().unwrap();
        assert_eq!(rect.right, 630.0);
        assert_eq!(rect.left, 400.0);
        assert_eq!(rect.top, 240.0);
        assert_eq!(rect.bottom, 360.0);
    }

    #[test]
    fn test_resize_corner_moves_two_edges() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_resize(ResizeDirection::Nw);
        tool.apply_motion(-20.0, -15.0, 1.0, None);
        let rect = tool.current_rect().unwrap();
        assert_eq!(rect.left, 380.0);
        assert_eq!(rect.top, 225.0);
        assert_eq!(rect.right, 600.0);
        assert_eq!(rect.bottom, 360.0);
    }

    #[test]
    fn test_minimum_size_floor_rejects_motion() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_resize(ResizeDirection::E);
        // Would shrink width to 200 - 195 = 5, below the floor
        tool.apply_motion(-195.0, 0.0, 1.0, None);
        let rect = tool.current_rect().unwrap();
        assert_eq!(rect.width(), 200.0);
        // A legal shrink still applies
        tool.apply_motion(-100.0, 0.0, 1.0, None);
        assert_eq!(tool.current_rect().unwrap().width(), 100.0);
    }

    #[test]
    fn test_snap_applies_to_painted_rect_only() {
        let snap = |r: RectF| {
            RectF::new(
                (r.left / 10.0).round() * 10.0,
                (r.top / 10.0).round() * 10.0,
                (r.right / 10.0).round() * 10.0,
                (r.bottom / 10.0).round() * 10.0,
            )
        };
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_drag();
        tool.apply_motion(3.0, 3.0, 1.0, Some(&snap));
        // Painted rect is snapped back to the grid
        assert_eq!(tool.current_rect().unwrap().left, 400.0);
        // The unsnapped rect kept the 3px so further motion accumulates
        tool.apply_motion(3.0, 3.0, 1.0, Some(&snap));
        assert_eq!(tool.current_rect().unwrap().left, 410.0);
    }

    #[test]
    fn test_motion_without_gesture_ignored() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.apply_motion(50.0, 50.0, 1.0, None);
        assert_eq!(tool.current_rect().unwrap().left, 400.0);
    }

    #[test]
    fn test_finish_idempotent_and_reports_rect() {
        let mut tool = BBoxTool::new();
        assert!(tool.finish_interaction().is_none());
        tool.ensure_created(1000.0, 600.0);
        let first = tool.finish_interaction();
        let second = tool.finish_interaction();
        assert_eq!(first, second);
    }

    #[test]
    fn test_detect_direction_requires_rect() {
        let tool = BBoxTool::new();
        assert_eq!(tool.detect_resize_direction(0.0, 0.0, 1.0), None);
    }

    #[test]
    fn test_detect_corner_beats_edge() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        // Top-right corner of the spawned rect is (600, 240)
        assert_eq!(
            tool.detect_resize_direction(600.0, 240.0, 1.0),
            Some(ResizeDirection::Ne)
        );
        // Middle of the top edge is an N hit
        assert_eq!(
            tool.detect_resize_direction(500.0, 240.0, 1.0),
            Some(ResizeDirection::N)
        );
    }

    #[test]
    fn test_clear_resets() {
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_drag();
        tool.clear();
        assert!(tool.current_rect().is_none());
        assert_eq!(tool.state(), InteractionState::Idle);
    }

    #[test]
    fn test_drag_3_3_47_47_snap_step_10() {
        // Snapping (3, 3, 47, 47) with step 10 yields (0, 0, 50, 50)
        let snap = |r: RectF| crate::overlay::snap_rect_to_grid(r, 10.0, 10.0);
        let mut tool = BBoxTool::new();
        tool.ensure_created(1000.0, 600.0);
        tool.begin_drag();
        // Move the spawned (400, 240, 600, 360) rect so the live rect
        // becomes (3, 3, 203, 123); snapped left/top land on 0
        tool.apply_motion(-397.0, -237.0, 1.0, Some(&snap));
        let rect = tool.current_rect().unwrap();
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
    }
}
