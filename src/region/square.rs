//! Fixed-grid square selection tool
//!
//! The square's size is quantized to a lattice of multiples of 16 between
//! 16 and 512 pixels and changes only through discrete size-up/size-down
//! steps that re-center the square about its centroid. Dragging is raw 1:1
//! pointer motion with no snapping; the position snaps to the nearest
//! integer pixel on release. A 16x16 interior sub-grid is derived from the
//! current rectangle whenever it changes (purely visual, never persisted).

use tracing::debug;

use crate::model::{InteractionState, RectF, ResizeDirection};

use super::{Gesture, RegionTool};

/// Starting size in pixels
pub const SQUARE_DEFAULT_SIZE: i32 = 64;
/// Smallest valid size
pub const SQUARE_MIN_SIZE: i32 = 16;
/// Largest valid size
pub const SQUARE_MAX_SIZE: i32 = 512;
/// Lattice step
pub const SQUARE_SIZE_STEP: i32 = 16;

/// Interior sub-grid line in frame-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubGridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Size information for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSizeInfo {
    /// Current size in pixels
    pub size:          i32,
    /// Pixels per sub-grid cell
    pub grid_interval: i32,
    pub can_size_up:   bool,
    pub can_size_down: bool,
}

/// Fixed-grid square tool state
#[derive(Debug)]
pub struct SquareTool {
    rect:         Option<RectF>,
    current_size: i32,
    gesture:      Gesture,
}

impl Default for SquareTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SquareTool {
    pub fn new() -> Self {
        Self {
            rect:         None,
            current_size: SQUARE_DEFAULT_SIZE,
            gesture:      Gesture::default(),
        }
    }

    /// Rounds a target size to the closest lattice value
    pub fn closest_valid_size(target: f64) -> i32 {
        let step = f64::from(SQUARE_SIZE_STEP);
        let rounded = (target / step).round() as i32 * SQUARE_SIZE_STEP;
        rounded.clamp(SQUARE_MIN_SIZE, SQUARE_MAX_SIZE)
    }

    /// Steps the size up one lattice notch, re-centering the square
    ///
    /// Returns the committed rectangle when a visible square changed;
    /// the logical size updates even when no rectangle exists. A no-op at
    /// the top of the lattice.
    pub fn size_up(&mut self) -> Option<RectF> {
        if self.current_size >= SQUARE_MAX_SIZE {
            return None;
        }
        self.resize_to(self.current_size + SQUARE_SIZE_STEP)
    }

    /// Steps the size down one lattice notch; no-op at the bottom
    pub fn size_down(&mut self) -> Option<RectF> {
        if self.current_size <= SQUARE_MIN_SIZE {
            return None;
        }
        self.resize_to(self.current_size - SQUARE_SIZE_STEP)
    }

    /// Current size in pixels
    pub fn current_size(&self) -> i32 {
        self.current_size
    }

    /// Size details for UI display
    pub fn size_info(&self) -> SquareSizeInfo {
        SquareSizeInfo {
            size:          self.current_size,
            grid_interval: self.current_size / 16,
            can_size_up:   self.current_size < SQUARE_MAX_SIZE,
            can_size_down: self.current_size > SQUARE_MIN_SIZE,
        }
    }

    /// Interior 16x16 sub-grid lines for the current rectangle
    ///
    /// Recomputed on demand; 15 vertical and 15 horizontal lines (the
    /// rectangle border itself is not included).
    pub fn sub_grid_lines(&self) -> Vec<SubGridLine> {
        let Some(rect) = self.rect else {
            return Vec::new();
        };
        let interval = rect.width() / 16.0;
        let mut lines = Vec::with_capacity(30);
        for i in 1..16 {
            let x = rect.left + f64::from(i) * interval;
            lines.push(SubGridLine {
                x1: x,
                y1: rect.top,
                x2: x,
                y2: rect.bottom,
            });
        }
        for i in 1..16 {
            let y = rect.top + f64::from(i) * interval;
            lines.push(SubGridLine {
                x1: rect.left,
                y1: y,
                x2: rect.right,
                y2: y,
            });
        }
        lines
    }

    fn resize_to(&mut self, new_size: i32) -> Option<RectF> {
        self.current_size = new_size;
        let rect = self.rect?;
        let (cx, cy) = rect.center();
        let half = f64::from(new_size) / 2.0;
        let resized = RectF::new(cx - half, cy - half, cx + half, cy + half);
        debug!("square resized to {new_size} around ({cx}, {cy})");
        self.rect = Some(resized);
        Some(resized)
    }
}

impl RegionTool for SquareTool {
    fn ensure_created(&mut self, container_width: f64, container_height: f64) -> Option<RectF> {
        if self.rect.is_some() {
            return None;
        }
        let side = f64::from(SQUARE_DEFAULT_SIZE);
        self.current_size = SQUARE_DEFAULT_SIZE;
        let rect = RectF::from_origin_size(
            (container_width - side) / 2.0,
            (container_height - side) / 2.0,
            side,
            side,
        );
        debug!("square created at ({}, {})", rect.left, rect.top);
        self.rect = Some(rect);
        Some(rect)
    }

    /// Size changes go through the size buttons, not drag handles
    fn detect_resize_direction(&self, _x: f64, _y: f64, _scale: f64) -> Option<ResizeDirection> {
        None
    }

    fn begin_drag(&mut self) {
        if self.rect.is_none() {
            return;
        }
        self.gesture.begin_drag();
    }

    /// Continuous resize is not part of this tool's contract
    fn begin_resize(&mut self, _direction: ResizeDirection) {}

    fn apply_motion(
        &mut self,
        dx: f64,
        dy: f64,
        _scale: f64,
        _snap: Option<&dyn Fn(RectF) -> RectF>,
    ) {
        // Raw 1:1 motion; no grid snapping during drag
        if !self.gesture.is_dragging() {
            return;
        }
        if let Some(rect) = self.rect {
            self.rect = Some(rect.translated(dx, dy));
        }
    }

    fn finish_interaction(&mut self) -> Option<RectF> {
        if self.gesture.is_dragging() {
            if let Some(rect) = self.rect {
                // Snap position to the nearest integer pixel on release
                let snapped = RectF::from_origin_size(
                    rect.left.round(),
                    rect.top.round(),
                    rect.width(),
                    rect.height(),
                );
                self.rect = Some(snapped);
            }
        }
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
        self.gesture.finish();
        self.current_size = SQUARE_DEFAULT_SIZE;
    }
}
