//! Collaborator interfaces for the desktop environment
//!
//! The core engine never talks to a windowing system directly. Window
//! geometry, pointer position, pixel sampling, and clipboard access are
//! supplied through the narrow traits in this module, injected explicitly
//! where they are used (never captured as ambient callbacks).
//!
//! All calls are synchronous, fallible, and idempotent: implementations are
//! expected to return quickly or fail fast, and a failure on one tick must
//! not poison the next. The periodic scheduling around these calls lives in
//! [`crate::tracker`].

use crate::error::TrackerResult;
use crate::model::{Rgb, TargetWindow};

pub mod mock;

pub use mock::{MemoryClipboard, MockDesktop};

/// Capability: locate the target application window and its client area.
pub trait WindowProvider {
    /// Finds the first visible window belonging to `process_name`.
    ///
    /// Returns `WindowNotFound` when no window matches; any platform error
    /// is treated the same way by callers (keep the previous frame).
    fn find_target_window(&self, process_name: &str) -> TrackerResult<TargetWindow>;
}

/// Capability: read the current pointer position in screen coordinates.
pub trait PointerProvider {
    fn cursor_position(&self) -> TrackerResult<(i32, i32)>;
}

/// Capability: sample a single screen pixel.
///
/// Used by the border refiner as a ground-truth oracle for window edges.
pub trait PixelSampler {
    fn pixel(&self, x: i32, y: i32) -> TrackerResult<Rgb>;
}

/// Capability: write text to the system clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> TrackerResult<()>;
}
