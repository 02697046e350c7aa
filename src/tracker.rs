//! Periodic frame detection and pointer tracking
//!
//! `FrameTracker` ties the geometry pipeline to the desktop collaborators:
//! every monitor tick it re-finds the target window, resolves the 3:2 frame
//! from its client rectangle, refines the frame width against the known
//! target, and swaps the complete rectangle into the coordinate converter.
//! Every tracking tick it samples the pointer and builds a [`PositionInfo`]
//! across all coordinate spaces.
//!
//! Collaborator failures degrade: a missed detection keeps the previous
//! frame, a failed pointer read produces no report for that tick. Nothing
//! here blocks; the loop exits when the receiving side of the channel is
//! dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::geometry::{refine_frame_width, resolve_frame_area, CoordinateConverter};
use crate::model::{PositionInfo, Rect, TargetWindow};
use crate::providers::{PixelSampler, PointerProvider, WindowProvider};

/// Frame detection and pointer tracking pipeline
#[derive(Debug)]
pub struct FrameTracker {
    config:    TrackerConfig,
    converter: CoordinateConverter,
    window:    Option<TargetWindow>,
    /// Whether the last detection's refinement changed the resolved frame
    refinement_applied: bool,
}

impl FrameTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            converter: CoordinateConverter::new(),
            window: None,
            refinement_applied: false,
        }
    }

    /// The coordinate converter holding the current frame
    pub fn converter(&self) -> &CoordinateConverter {
        &self.converter
    }

    /// The current frame area, if a window has been detected
    pub fn frame_area(&self) -> Option<Rect> {
        self.converter.frame_area()
    }

    /// The most recently detected window
    pub fn window(&self) -> Option<&TargetWindow> {
        self.window.as_ref()
    }

    /// Whether the last detection nudged the frame width
    pub fn refinement_applied(&self) -> bool {
        self.refinement_applied
    }

    /// Runs one re-detection pass
    ///
    /// Returns the new frame area on success. On collaborator failure or
    /// degenerate geometry the previous frame stays in place and `None` is
    /// returned.
    pub fn redetect(
        &mut self,
        windows: &dyn WindowProvider,
        sampler: &dyn PixelSampler,
    ) -> Option<Rect> {
        let window = match windows.find_target_window(&self.config.target_process) {
            Ok(window) => window,
            Err(err) => {
                warn!("Window detection failed: {err}");
                return None;
            }
        };

        let resolved = match resolve_frame_area(window.client_rect) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("Frame resolution rejected client rect: {err}");
                return None;
            }
        };

        let refined = refine_frame_width(resolved, self.config.target_frame_width, sampler);
        self.refinement_applied = refined != resolved;
        if self.refinement_applied {
            debug!(
                "Refinement adjusted frame: {}x{} at ({}, {})",
                refined.width, refined.height, refined.x, refined.y
            );
        }

        self.window = Some(window);
        // Replace wholesale so converter readers always see a complete rect
        self.converter.update_frame_area(Some(refined));
        Some(refined)
    }

    /// Samples the pointer and reports its position in every space
    pub fn poll_position(&self, pointer: &dyn PointerProvider) -> Option<PositionInfo> {
        let (screen_x, screen_y) = match pointer.cursor_position() {
            Ok(position) => position,
            Err(err) => {
                warn!("Pointer sampling failed: {err}");
                return None;
            }
        };

        let mut info = PositionInfo {
            screen_x,
            screen_y,
            ..PositionInfo::default()
        };

        if let Some(window) = &self.window {
            let rect = window.window_rect;
            if rect.contains(screen_x, screen_y) {
                info.inside_window = true;
                info.window_x_percent =
                    Some(100.0 * f64::from(screen_x - rect.x) / f64::from(rect.width.max(1)));
                info.window_y_percent =
                    Some(100.0 * f64::from(screen_y - rect.y) / f64::from(rect.height.max(1)));
            }
        }

        if self.converter.is_inside_frame(screen_x, screen_y) {
            info.inside_frame = true;
            let (frame_x, frame_y) = self.converter.screen_to_frame(screen_x, screen_y);
            info.frame_x = Some(frame_x);
            info.frame_y = Some(frame_y);
            let (x_percent, y_percent) = self.converter.frame_to_percent(frame_x, frame_y);
            info.x_percent = Some(x_percent);
            info.y_percent = Some(y_percent);
        }

        Some(info)
    }

    /// Runs the periodic detection and tracking loop
    ///
    /// Re-detects the window every `monitor_interval_ms` and samples the
    /// pointer every `tracking_interval_ms`, sending each report over the
    /// channel. Returns when the receiver is dropped; that is the only
    /// cancellation mechanism needed because no tick blocks.
    pub async fn run<D>(mut self, desktop: D, tx: mpsc::Sender<PositionInfo>)
    where
        D: WindowProvider + PointerProvider + PixelSampler,
    {
        let mut monitor = tokio::time::interval(Duration::from_millis(
            self.config.monitor_interval_ms.max(1),
        ));
        let mut tracking = tokio::time::interval(Duration::from_millis(
            self.config.tracking_interval_ms.max(1),
        ));
        monitor.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tracking.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Tracking '{}' (monitor {}ms, pointer {}ms)",
            self.config.target_process,
            self.config.monitor_interval_ms,
            self.config.tracking_interval_ms
        );

        loop {
            tokio::select! {
                _ = monitor.tick() => {
                    self.redetect(&desktop, &desktop);
                }
                _ = tracking.tick() => {
                    if let Some(info) = self.poll_position(&desktop) {
                        if tx.send(info).await.is_err() {
                            debug!("Position receiver dropped; stopping tracker");
                            return;
                        }
                    }
                }
            }
        }
    }
}
