//! Copy modes and coordinate formatting
//!
//! The copy mode selects which coordinate space is rendered when a point or
//! region rectangle is written out for the clipboard. The status-line
//! patterns here use fixed field widths and decimal precision that consumers
//! rely on for column alignment; they are part of the observable contract
//! and tests assert them byte-for-byte.

use serde::{Deserialize, Serialize};

use crate::model::{Rect, RectF};

/// Placeholder for coordinate cells with no value
pub const COORD_EMPTY: &str = "----, ----";
/// Placeholder when the pointer is outside the tracked rectangle
pub const COORD_OUTSIDE: &str = "Outside";
/// Placeholder when no window has been detected
pub const COORD_NA: &str = "N/A";

/// Coordinate space used when formatting output for the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyMode {
    /// Fractions of the frame dimensions, 6 decimal places
    Percentage,
    /// Frame-relative integer pixels
    #[default]
    FrameCoords,
    /// Absolute screen pixels
    ScreenCoords,
}

impl CopyMode {
    /// The next mode in the cycle
    pub fn next(self) -> CopyMode {
        match self {
            CopyMode::Percentage => CopyMode::FrameCoords,
            CopyMode::FrameCoords => CopyMode::ScreenCoords,
            CopyMode::ScreenCoords => CopyMode::Percentage,
        }
    }

    /// Display label for the mode
    pub fn label(&self) -> &'static str {
        match self {
            CopyMode::Percentage => "PERCENTAGE",
            CopyMode::FrameCoords => "FRAME COORDS",
            CopyMode::ScreenCoords => "SCREEN COORDS",
        }
    }
}

impl std::fmt::Display for CopyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Holds the active copy mode and renders points/rectangles in it
#[derive(Debug, Clone, Default)]
pub struct CopyModeManager {
    mode: CopyMode,
}

impl CopyModeManager {
    pub fn new(initial: CopyMode) -> Self {
        Self { mode: initial }
    }

    pub fn mode(&self) -> CopyMode {
        self.mode
    }

    /// Advances circularly to the next mode and returns it
    pub fn cycle(&mut self) -> CopyMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Formats a frame-local point in the active mode
    ///
    /// Percentage mode divides by the frame dimensions (guarding zero) to 6
    /// decimal places; frame mode truncates to integers; screen mode adds
    /// the frame origin.
    pub fn format_point(&self, frame_x: f64, frame_y: f64, frame: Option<&Rect>) -> String {
        match self.mode {
            CopyMode::Percentage => {
                let (fw, fh) = frame_dims(frame);
                format!("{:.6}, {:.6}", frame_x / fw, frame_y / fh)
            }
            CopyMode::FrameCoords => {
                format!("{}, {}", frame_x as i32, frame_y as i32)
            }
            CopyMode::ScreenCoords => {
                let (ox, oy) = frame_origin(frame);
                format!("{}, {}", ox + frame_x as i32, oy + frame_y as i32)
            }
        }
    }

    /// Formats a frame-local rectangle in the active mode as
    /// `x1, y1, x2, y2`
    pub fn format_rect(&self, rect: RectF, frame: Option<&Rect>) -> String {
        match self.mode {
            CopyMode::Percentage => {
                let (fw, fh) = frame_dims(frame);
                format!(
                    "{:.6}, {:.6}, {:.6}, {:.6}",
                    rect.left / fw,
                    rect.top / fh,
                    rect.right / fw,
                    rect.bottom / fh
                )
            }
            CopyMode::FrameCoords => {
                format!(
                    "{}, {}, {}, {}",
                    rect.left as i32, rect.top as i32, rect.right as i32, rect.bottom as i32
                )
            }
            CopyMode::ScreenCoords => {
                let (ox, oy) = frame_origin(frame);
                format!(
                    "{}, {}, {}, {}",
                    ox + rect.left as i32,
                    oy + rect.top as i32,
                    ox + rect.right as i32,
                    oy + rect.bottom as i32
                )
            }
        }
    }
}

fn frame_dims(frame: Option<&Rect>) -> (f64, f64) {
    match frame {
        Some(f) => (f64::from(f.width.max(1)), f64::from(f.height.max(1))),
        None => (1.0, 1.0),
    }
}

fn frame_origin(frame: Option<&Rect>) -> (i32, i32) {
    match frame {
        Some(f) => (f.x, f.y),
        None => (0, 0),
    }
}

/// Prefix tag for a formatted status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Mouse,
    Copied,
    Locate,
}

impl StatusTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Mouse => "MOUSE",
            StatusTag::Copied => "COPIED",
            StatusTag::Locate => "LOCATE",
        }
    }
}

/// Formats the fixed-width coordinate status line
///
/// Field widths and decimal precision are part of the observable contract:
///
/// ```text
/// MOUSE || Screen Coords:  1286, 1000 | Frame Coords: 1027, 1000 | Frame %: 50.0000%, 73.0460%
/// ```
pub fn format_coordinate_line(
    tag: StatusTag,
    screen_x: i32,
    screen_y: i32,
    frame_x: i32,
    frame_y: i32,
    x_percent: f64,
    y_percent: f64,
) -> String {
    format!(
        "{} || Screen Coords: {:>5}, {:>4} | Frame Coords: {:>4}, {:>4} | Frame %: {:>7.4}%, {:>7.4}%",
        tag.as_str(),
        screen_x,
        screen_y,
        frame_x,
        frame_y,
        x_percent,
        y_percent
    )
}

/// Formats the fixed-width bounding-box status line
pub fn format_bbox_line(
    frame_rect: (i32, i32, i32, i32),
    screen_rect: (i32, i32, i32, i32),
) -> String {
    let (x1, y1, x2, y2) = frame_rect;
    let (sx1, sy1, sx2, sy2) = screen_rect;
    format!(
        "COPIED || BBOX: Frame({x1:>4},{y1:>4},{x2:>4},{y2:>4}) | Screen({sx1:>4},{sy1:>4},{sx2:>4},{sy2:>4})"
    )
}
