//! Frame area resolution
//!
//! Derives the canonical aspect-locked frame rectangle from a window's
//! client rectangle. The frame always uses the full extent of the limiting
//! axis and is centered on the other one.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::model::Rect;

/// Width-to-height ratio of the frame area
pub const TARGET_ASPECT_RATIO: f64 = 3.0 / 2.0;

/// Computes the 3:2 frame rectangle inside a client rectangle
///
/// If the client is wider than 3:2 the frame fits the client height and is
/// centered horizontally; otherwise it fits the client width and is centered
/// vertically. Centering uses integer floor division, so an odd leftover
/// pixel lands on the right/bottom side.
///
/// Degenerate client rectangles (non-positive width or height) are rejected
/// rather than producing a zero-area or negative frame.
///
/// # Examples
///
/// ```
/// use framespy::geometry::resolve_frame_area;
/// use framespy::model::Rect;
///
/// let frame = resolve_frame_area(Rect::new(0, 0, 1920, 1080)).unwrap();
/// assert_eq!(frame, Rect::new(150, 0, 1620, 1080));
/// ```
pub fn resolve_frame_area(client: Rect) -> TrackerResult<Rect> {
    if client.is_degenerate() {
        return Err(TrackerError::DegenerateClientRect {
            width:  client.width,
            height: client.height,
        });
    }

    let client_ratio = client.aspect_ratio();

    let frame = if client_ratio > TARGET_ASPECT_RATIO {
        // Client is wider than 3:2 - fit height, center width
        let frame_height = client.height;
        let frame_width = (f64::from(frame_height) * TARGET_ASPECT_RATIO).round() as i32;
        Rect {
            x:      client.x + (client.width - frame_width) / 2,
            y:      client.y,
            width:  frame_width,
            height: frame_height,
        }
    } else {
        // Client is taller than 3:2 - fit width, center height
        let frame_width = client.width;
        let frame_height = (f64::from(frame_width) / TARGET_ASPECT_RATIO).round() as i32;
        Rect {
            x:      client.x,
            y:      client.y + (client.height - frame_height) / 2,
            width:  frame_width,
            height: frame_height,
        }
    };

    debug!(
        "Resolved frame {}x{} at ({}, {}) from client {}x{}",
        frame.width, frame.height, frame.x, frame.y, client.width, client.height
    );

    Ok(frame)
}
