//! Data models and type definitions for framespy
//!
//! This module defines the core types used throughout the crate:
//! - Screen-space and frame-local rectangle types
//! - Coordinate space classification
//! - Region tool interaction state and resize directions
//! - Window geometry and pointer position reports

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer screen-space pixels
///
/// Used for window client areas and the resolved frame area. A `Rect` is
/// considered degenerate when either dimension is not positive; the frame
/// resolution pipeline rejects degenerate inputs before any conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle from origin and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether either dimension is zero or negative
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Inclusive containment test on both edges
    ///
    /// Points exactly on the right/bottom edge count as inside, matching the
    /// frame bounds test used by the pointer tracker.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Width-to-height ratio; 1.0 for a zero-height rectangle
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

/// Edge-addressed rectangle in frame-local pixel space
///
/// Region tools store their selection as a `RectF` so that a resize gesture
/// can move a single edge without recomputing origin and size. Edges may
/// momentarily invert during snapping; `normalized` restores ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub left:   f64,
    pub top:    f64,
    pub right:  f64,
    pub bottom: f64,
}

impl RectF {
    /// Creates a rectangle from its four edges
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from origin and size
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center point of the rectangle
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Returns the rectangle moved by the given offset
    pub fn translated(&self, dx: f64, dy: f64) -> RectF {
        RectF {
            left:   self.left + dx,
            top:    self.top + dy,
            right:  self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Returns a copy with inverted edges swapped back into order
    pub fn normalized(&self) -> RectF {
        let (left, right) = if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        };
        let (top, bottom) = if self.top <= self.bottom {
            (self.top, self.bottom)
        } else {
            (self.bottom, self.top)
        };
        RectF {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Containment test (inclusive on all edges)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// An RGB pixel sample from the screen-capture collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Coordinate space inferred from raw numeric magnitude
///
/// Classification order is load-bearing: ambiguous small values such as
/// `(1, 1)` classify as decimal percentages, not frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// Absolute screen pixels
    Screen,
    /// Pixels relative to the frame origin
    FrameRelative,
    /// Percentages in `0..=100`
    PercentageInteger,
    /// Fractions in `0.0..=1.0`
    PercentageDecimal,
}

impl CoordinateSpace {
    /// Returns the space as a lowercase identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSpace::Screen => "screen",
            CoordinateSpace::FrameRelative => "frame",
            CoordinateSpace::PercentageInteger => "integer_percent",
            CoordinateSpace::PercentageDecimal => "decimal_percent",
        }
    }
}

impl std::fmt::Display for CoordinateSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resize direction derived from hit-testing a region tool's handles
///
/// Never stored beyond the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeDirection {
    /// Whether this direction moves the top edge
    pub fn affects_top(&self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Whether this direction moves the bottom edge
    pub fn affects_bottom(&self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Whether this direction moves the left edge
    pub fn affects_left(&self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Whether this direction moves the right edge
    pub fn affects_right(&self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }
}

/// Gesture state of a region tool
///
/// Transitions are `Idle -> Dragging -> Idle` and
/// `Idle -> Resizing(dir) -> Idle`; only one active state at a time, and
/// `finish_interaction` is the single (idempotent) exit back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeDirection),
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        !matches!(self, InteractionState::Idle)
    }
}

/// Geometry of the tracked target window, from the window-system collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetWindow {
    /// Process ID owning the window
    pub pid:         u32,
    /// Window title at detection time
    pub title:       String,
    /// Full window rectangle including decorations
    pub window_rect: Rect,
    /// Client area rectangle in screen coordinates
    pub client_rect: Rect,
}

/// Pointer position report produced on each tracking tick
///
/// Window and frame fields are only populated when the pointer is inside the
/// respective rectangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionInfo {
    pub screen_x: i32,
    pub screen_y: i32,

    /// Whether the pointer is inside the target window rectangle
    pub inside_window:    bool,
    pub window_x_percent: Option<f64>,
    pub window_y_percent: Option<f64>,

    /// Whether the pointer is inside the frame area
    pub inside_frame: bool,
    pub frame_x:      Option<i32>,
    pub frame_y:      Option<i32>,
    pub x_percent:    Option<f64>,
    pub y_percent:    Option<f64>,
}
