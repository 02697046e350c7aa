//! Interactive selection session
//!
//! Wires the two region tools, the copy-mode manager, the grid overlay
//! state, and the clipboard collaborator together. UI glue feeds pointer
//! events here; the session decides which tool is active, whether a press
//! starts a drag or a resize, and copies the formatted rectangle to the
//! clipboard on every committed change (creation, release, size change).
//!
//! All geometry is frame-local. The caller converts viewport deltas by the
//! zoom scale before calling [`SelectionSession::pointer_moved`].

use tracing::{debug, warn};

use crate::copy_mode::{CopyMode, CopyModeManager};
use crate::locate::{parse_coordinates, to_frame_coords, ParsedCoordinates};
use crate::model::{Rect, RectF};
use crate::overlay::{grid_step_for_zoom, snap_rect_to_grid, MIN_OVERLAY_SCALE};
use crate::providers::Clipboard;
use crate::region::{BBoxTool, RegionTool, SquareTool};
use crate::error::TrackerResult;

/// Which region tool currently owns pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTool {
    #[default]
    None,
    BoundingBox,
    Square,
}

/// Region-selection session state
#[derive(Debug)]
pub struct SelectionSession<C: Clipboard> {
    bbox:       BBoxTool,
    square:     SquareTool,
    active:     ActiveTool,
    copy_modes: CopyModeManager,
    clipboard:  C,
    frame_area: Option<Rect>,
    show_grid:  bool,
    zoom_scale: f64,
}

impl<C: Clipboard> SelectionSession<C> {
    pub fn new(initial_mode: CopyMode, clipboard: C) -> Self {
        Self {
            bbox: BBoxTool::new(),
            square: SquareTool::new(),
            active: ActiveTool::None,
            copy_modes: CopyModeManager::new(initial_mode),
            clipboard,
            frame_area: None,
            show_grid: false,
            zoom_scale: 1.0,
        }
    }

    /// Replaces the frame area used for formatting
    pub fn update_frame_area(&mut self, frame: Option<Rect>) {
        self.frame_area = frame;
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active
    }

    /// The clipboard collaborator (tests inspect committed writes here)
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn copy_mode(&self) -> CopyMode {
        self.copy_modes.mode()
    }

    /// Advances the copy mode cycle
    pub fn cycle_copy_mode(&mut self) -> CopyMode {
        self.copy_modes.cycle()
    }

    pub fn set_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn set_zoom(&mut self, scale: f64) {
        self.zoom_scale = scale.max(1e-6);
    }

    /// Activates the bounding-box tool, spawning its rectangle if needed
    pub fn activate_bbox(&mut self, container_width: f64, container_height: f64) {
        self.active = ActiveTool::BoundingBox;
        if let Some(rect) = self.bbox.ensure_created(container_width, container_height) {
            self.commit(rect);
        }
    }

    /// Activates the square tool, spawning its rectangle if needed
    pub fn activate_square(&mut self, container_width: f64, container_height: f64) {
        self.active = ActiveTool::Square;
        if let Some(rect) = self.square.ensure_created(container_width, container_height) {
            self.commit(rect);
        }
    }

    /// Deactivates and clears the active tool
    pub fn deactivate(&mut self) {
        match self.active {
            ActiveTool::BoundingBox => self.bbox.clear(),
            ActiveTool::Square => self.square.clear(),
            ActiveTool::None => {}
        }
        self.active = ActiveTool::None;
    }

    /// The active tool's current rectangle
    pub fn current_rect(&self) -> Option<RectF> {
        self.tool()?.current_rect()
    }

    /// Routes a pointer press in frame-local coordinates
    ///
    /// Returns `true` when the event was captured (a gesture started);
    /// `false` means the press landed outside the selection and the caller
    /// may use it for panning.
    pub fn pointer_pressed(&mut self, x: f64, y: f64) -> bool {
        let scale = self.zoom_scale;
        let Some(tool) = self.tool_mut() else {
            return false;
        };
        if let Some(direction) = tool.detect_resize_direction(x, y, scale) {
            debug!("resize gesture started: {direction:?}");
            tool.begin_resize(direction);
            return true;
        }
        match tool.current_rect() {
            Some(rect) if rect.contains(x, y) => {
                tool.begin_drag();
                true
            }
            _ => false,
        }
    }

    /// Applies a pointer motion delta (already divided by the zoom scale)
    pub fn pointer_moved(&mut self, dx: f64, dy: f64) {
        let scale = self.zoom_scale;
        let snap_active = self.show_grid && scale >= MIN_OVERLAY_SCALE;
        let step = f64::from(grid_step_for_zoom(scale));
        let snap = move |rect: RectF| snap_rect_to_grid(rect, step, step);

        let Some(tool) = self.tool_mut() else {
            return;
        };
        if snap_active {
            tool.apply_motion(dx, dy, scale, Some(&snap));
        } else {
            tool.apply_motion(dx, dy, scale, None);
        }
    }

    /// Finishes the active gesture and copies the committed rectangle
    ///
    /// A release with no gesture in progress is not a committed change and
    /// copies nothing.
    pub fn pointer_released(&mut self) {
        let Some(tool) = self.tool_mut() else {
            return;
        };
        if !tool.state().is_active() {
            return;
        }
        if let Some(rect) = tool.finish_interaction() {
            self.commit(rect);
        }
    }

    /// Steps the square size up; copies on change
    pub fn size_up(&mut self) {
        if self.active != ActiveTool::Square {
            return;
        }
        if let Some(rect) = self.square.size_up() {
            self.commit(rect);
        }
    }

    /// Steps the square size down; copies on change
    pub fn size_down(&mut self) {
        if self.active != ActiveTool::Square {
            return;
        }
        if let Some(rect) = self.square.size_down() {
            self.commit(rect);
        }
    }

    /// Parses locate text and converts it to frame coordinates using the
    /// active copy mode
    ///
    /// Malformed text returns the parse error; session state is unchanged.
    pub fn locate(&self, text: &str) -> TrackerResult<ParsedCoordinates> {
        let parsed = parse_coordinates(text)?;
        let frame = self.frame_area;
        let mode = self.copy_modes.mode();
        Ok(match parsed {
            ParsedCoordinates::Point { x, y } => {
                let (fx, fy) = to_frame_coords(x, y, mode, frame.as_ref());
                ParsedCoordinates::Point { x: fx, y: fy }
            }
            ParsedCoordinates::BBox { x1, y1, x2, y2 } => {
                let (fx1, fy1) = to_frame_coords(x1, y1, mode, frame.as_ref());
                let (fx2, fy2) = to_frame_coords(x2, y2, mode, frame.as_ref());
                ParsedCoordinates::BBox {
                    x1: fx1,
                    y1: fy1,
                    x2: fx2,
                    y2: fy2,
                }
            }
        })
    }

    fn tool(&self) -> Option<&dyn RegionTool> {
        match self.active {
            ActiveTool::BoundingBox => Some(&self.bbox),
            ActiveTool::Square => Some(&self.square),
            ActiveTool::None => None,
        }
    }

    fn tool_mut(&mut self) -> Option<&mut dyn RegionTool> {
        match self.active {
            ActiveTool::BoundingBox => Some(&mut self.bbox),
            ActiveTool::Square => Some(&mut self.square),
            ActiveTool::None => None,
        }
    }

    /// Formats a committed rectangle and writes it to the clipboard
    fn commit(&mut self, rect: RectF) {
        let text = self.copy_modes.format_rect(rect, self.frame_area.as_ref());
        if let Err(err) = self.clipboard.set_text(&text) {
            warn!("Clipboard write failed: {err}");
        }
    }
}
