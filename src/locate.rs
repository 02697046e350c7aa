//! Locate-by-coordinate text parsing
//!
//! Users can paste a point (`"x, y"`) or a bounding box
//! (`"x1, y1, x2, y2"`) to highlight a location. The values are interpreted
//! in the active copy mode and converted to frame-local coordinates.
//! Malformed text is a local validation failure: the caller reports it and
//! no core state changes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::copy_mode::CopyMode;
use crate::error::{TrackerError, TrackerResult};
use crate::model::Rect;

static POINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*$").unwrap());

static BBOX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*$",
    )
    .unwrap()
});

/// A parsed locate request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsedCoordinates {
    Point { x: f64, y: f64 },
    BBox { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Parses locate text into a point or bounding box
///
/// Interior spaces are stripped first, so `"1, 2 , 3, 4"` parses. The
/// four-value bounding-box form is tried before the two-value point form.
pub fn parse_coordinates(text: &str) -> TrackerResult<ParsedCoordinates> {
    let cleaned: String = text.trim().replace(' ', "");

    if let Some(caps) = BBOX_RE.captures(&cleaned) {
        let mut values = [0.0_f64; 4];
        for (slot, cap) in values.iter_mut().zip(caps.iter().skip(1)) {
            *slot = cap
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| TrackerError::InvalidCoordinateText {
                    input: text.to_string(),
                })?;
        }
        return Ok(ParsedCoordinates::BBox {
            x1: values[0],
            y1: values[1],
            x2: values[2],
            y2: values[3],
        });
    }

    if let Some(caps) = POINT_RE.captures(&cleaned) {
        let x = caps[1].parse().map_err(|_| TrackerError::InvalidCoordinateText {
            input: text.to_string(),
        })?;
        let y = caps[2].parse().map_err(|_| TrackerError::InvalidCoordinateText {
            input: text.to_string(),
        })?;
        return Ok(ParsedCoordinates::Point { x, y });
    }

    Err(TrackerError::InvalidCoordinateText {
        input: text.to_string(),
    })
}

/// Converts a value pair from the given copy mode to frame coordinates
///
/// Percentage mode treats the values as fractions of the frame dimensions,
/// frame mode passes through, and screen mode subtracts the frame origin.
pub fn to_frame_coords(x: f64, y: f64, mode: CopyMode, frame: Option<&Rect>) -> (f64, f64) {
    match mode {
        CopyMode::Percentage => {
            let (fw, fh) = match frame {
                Some(f) => (f64::from(f.width.max(1)), f64::from(f.height.max(1))),
                None => (1.0, 1.0),
            };
            (x * fw, y * fh)
        }
        CopyMode::FrameCoords => (x, y),
        CopyMode::ScreenCoords => {
            let (ox, oy) = match frame {
                Some(f) => (f64::from(f.x), f64::from(f.y)),
                None => (0.0, 0.0),
            };
            (x - ox, y - oy)
        }
    }
}
