//! Frame border refinement
//!
//! The resolved frame width can drift a few pixels from the application's
//! real frame because of window-decoration rounding. When the resolved width
//! is within tolerance of the known target width, this module searches a
//! short ordered list of left/right edge adjustments and validates each
//! candidate with the pixel-sampling collaborator: one probe just outside
//! the candidate's left edge and one just outside its right edge, at the
//! vertical midpoint. A real edge produces a color discontinuity between the
//! probes; two probes landing on the same side of the edge typically match.
//!
//! This is a best-effort local search with an imperfect oracle, not an edge
//! detector: the first candidate whose probes differ wins, and any failure
//! leaves the frame unrefined. Candidate order matters because downstream
//! consumers treat the frame's left edge as the stable anchor, so
//! right-edge-only adjustments are tried first.

use tracing::{debug, trace};

use crate::model::Rect;
use crate::providers::PixelSampler;

/// Known width of the application's frame at 100% scale
pub const TARGET_FRAME_WIDTH: i32 = 2054;

/// Maximum distance from the target width at which refinement is attempted
pub const REFINEMENT_TOLERANCE: i32 = 10;

/// Largest width difference the candidate search will try to correct
const MAX_ADJUSTMENT: i32 = 4;

/// Safe multi-monitor sampling bounds (inclusive left, exclusive right)
pub const MONITOR_BOUNDS_LEFT: i32 = -3840;
pub const MONITOR_BOUNDS_RIGHT: i32 = 7680;

/// Nudges a resolved frame to exactly `target_width` using pixel sampling
///
/// Returns the refined frame, or the input unchanged when the width already
/// matches, is out of tolerance, or no candidate adjustment validates.
///
/// The single-pixel case (`width == target_width - 1`) is corrected by
/// expanding the right edge without sampling; it is by far the most common
/// drift and the right-only correction preserves the left anchor exactly.
pub fn refine_frame_width(
    frame: Rect,
    target_width: i32,
    sampler: &dyn PixelSampler,
) -> Rect {
    if (frame.width - target_width).abs() > REFINEMENT_TOLERANCE {
        return frame;
    }

    let width_diff = target_width - frame.width;
    if width_diff == 0 {
        return frame;
    }

    if frame.width == target_width - 1 {
        debug!("Refined frame width {} -> {} (right-edge fast path)", frame.width, target_width);
        return Rect {
            width: target_width,
            ..frame
        };
    }

    let validation_y = frame.y + frame.height / 2;

    for (left_adj, right_adj) in candidate_adjustments(width_diff) {
        let new_x = frame.x + left_adj;
        let new_width = frame.width - left_adj + right_adj;
        if new_width != target_width {
            continue;
        }

        let left_x = new_x - 1;
        let right_x = new_x + new_width;
        if !sample_in_bounds(left_x) || !sample_in_bounds(right_x) {
            trace!("Skipping candidate ({left_adj}, {right_adj}): probes out of monitor bounds");
            continue;
        }

        let left_pixel = match sampler.pixel(left_x, validation_y) {
            Ok(pixel) => pixel,
            Err(err) => {
                trace!("Skipping candidate ({left_adj}, {right_adj}): {err}");
                continue;
            }
        };
        let right_pixel = match sampler.pixel(right_x, validation_y) {
            Ok(pixel) => pixel,
            Err(err) => {
                trace!("Skipping candidate ({left_adj}, {right_adj}): {err}");
                continue;
            }
        };

        if left_pixel != right_pixel {
            debug!(
                "Refined frame width {} -> {} via adjustment ({left_adj}, {right_adj})",
                frame.width, new_width
            );
            return Rect {
                x: new_x,
                width: new_width,
                ..frame
            };
        }
    }

    frame
}

/// Ordered edge-adjustment candidates for a given width difference
///
/// Each entry is `(left_delta, right_delta)` applied as
/// `x += left_delta; width += right_delta - left_delta`. Right-only comes
/// first (preserves the left anchor), then left-only, then a split that
/// gives the odd remainder to the right edge. Differences beyond
/// `MAX_ADJUSTMENT` produce no candidates.
fn candidate_adjustments(width_diff: i32) -> Vec<(i32, i32)> {
    if width_diff.abs() > MAX_ADJUSTMENT {
        return Vec::new();
    }
    if width_diff > 0 {
        vec![
            (0, width_diff),
            (-width_diff, 0),
            (-width_diff / 2, width_diff / 2 + width_diff % 2),
        ]
    } else {
        let diff = width_diff.abs();
        vec![
            (0, -diff),
            (diff, 0),
            (diff / 2, -(diff / 2 + diff % 2)),
        ]
    }
}

fn sample_in_bounds(x: i32) -> bool {
    (MONITOR_BOUNDS_LEFT..MONITOR_BOUNDS_RIGHT).contains(&x)
}
