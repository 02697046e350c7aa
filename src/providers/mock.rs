//! Mock desktop collaborators for testing and the simulated demo
//!
//! `MockDesktop` implements every provider trait against a synthetic
//! desktop: a configurable target window, a movable cursor, and a pixel
//! plane where the "true" frame region is filled with one color and the
//! surrounding desktop with another. That is enough to exercise the whole
//! detection pipeline, including the border refiner's edge oracle.
//!
//! # Examples
//!
//! ```
//! use framespy::model::Rect;
//! use framespy::providers::{MockDesktop, PixelSampler, WindowProvider};
//!
//! let desktop = MockDesktop::new()
//!     .with_client_rect(Rect::new(0, 0, 3072, 1728))
//!     .with_true_frame(Rect::new(259, 0, 2554, 1728));
//!
//! let window = desktop.find_target_window("WidgetInc.exe").unwrap();
//! assert_eq!(window.client_rect.width, 3072);
//!
//! // Inside the true frame and outside it sample differently
//! let inside = desktop.pixel(300, 100).unwrap();
//! let outside = desktop.pixel(10, 100).unwrap();
//! assert_ne!(inside, outside);
//! ```

use std::cell::Cell;

use crate::error::{TrackerError, TrackerResult};
use crate::geometry::{MONITOR_BOUNDS_LEFT, MONITOR_BOUNDS_RIGHT};
use crate::model::{Rect, Rgb, TargetWindow};

use super::{Clipboard, PixelSampler, PointerProvider, WindowProvider};

/// Synthetic desktop implementing all collaborator traits
#[derive(Debug)]
pub struct MockDesktop {
    process_name: String,
    title:        String,
    window_rect:  Rect,
    client_rect:  Rect,
    /// Where the application actually renders its frame; pixels inside
    /// sample as `frame_color`, everything else as `desktop_color`.
    true_frame:    Option<Rect>,
    frame_color:   Rgb,
    desktop_color: Rgb,
    cursor:        Cell<(i32, i32)>,
    /// When set, every provider call fails with this reason
    fail_reason: Option<String>,
}

impl Default for MockDesktop {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDesktop {
    pub fn new() -> Self {
        Self {
            process_name:  "WidgetInc.exe".to_string(),
            title:         "WidgetInc - Main".to_string(),
            window_rect:   Rect::new(-8, -8, 3088, 1776),
            client_rect:   Rect::new(0, 0, 3072, 1728),
            true_frame:    None,
            frame_color:   Rgb::new(24, 24, 32),
            desktop_color: Rgb::new(200, 200, 200),
            cursor:        Cell::new((0, 0)),
            fail_reason:   None,
        }
    }

    /// Sets the process name the window responds to
    pub fn with_process_name(mut self, name: &str) -> Self {
        self.process_name = name.to_string();
        self
    }

    /// Sets the client rectangle reported for the target window
    pub fn with_client_rect(mut self, rect: Rect) -> Self {
        self.client_rect = rect;
        self.window_rect = Rect::new(rect.x - 8, rect.y - 8, rect.width + 16, rect.height + 48);
        self
    }

    /// Sets the region that samples as frame-colored pixels
    pub fn with_true_frame(mut self, rect: Rect) -> Self {
        self.true_frame = Some(rect);
        self
    }

    /// Makes every provider call fail with the given reason
    pub fn with_failure(mut self, reason: &str) -> Self {
        self.fail_reason = Some(reason.to_string());
        self
    }

    /// Moves the synthetic cursor
    pub fn move_cursor(&self, x: i32, y: i32) {
        self.cursor.set((x, y));
    }

    fn check_failure(&self) -> TrackerResult<()> {
        match &self.fail_reason {
            Some(reason) => Err(TrackerError::PointerUnavailable {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl WindowProvider for MockDesktop {
    fn find_target_window(&self, process_name: &str) -> TrackerResult<TargetWindow> {
        if self.fail_reason.is_some() || process_name != self.process_name {
            return Err(TrackerError::WindowNotFound {
                process: process_name.to_string(),
            });
        }
        Ok(TargetWindow {
            pid:         4242,
            title:       self.title.clone(),
            window_rect: self.window_rect,
            client_rect: self.client_rect,
        })
    }
}

impl PointerProvider for MockDesktop {
    fn cursor_position(&self) -> TrackerResult<(i32, i32)> {
        self.check_failure()?;
        Ok(self.cursor.get())
    }
}

impl PixelSampler for MockDesktop {
    fn pixel(&self, x: i32, y: i32) -> TrackerResult<Rgb> {
        if let Some(reason) = &self.fail_reason {
            return Err(TrackerError::SampleFailed {
                x,
                y,
                reason: reason.clone(),
            });
        }
        if !(MONITOR_BOUNDS_LEFT..MONITOR_BOUNDS_RIGHT).contains(&x) {
            return Err(TrackerError::SampleOutOfBounds { x, y });
        }
        let inside = self
            .true_frame
            .map(|frame| {
                x >= frame.x && x < frame.right() && y >= frame.y && y < frame.bottom()
            })
            .unwrap_or(false);
        Ok(if inside {
            self.frame_color
        } else {
            self.desktop_color
        })
    }
}

/// In-memory clipboard recording every write, newest last
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    entries: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent clipboard contents, if any
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// All writes in order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> TrackerResult<()> {
        self.entries.push(text.to_string());
        Ok(())
    }
}
