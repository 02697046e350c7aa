//! Error types for frame tracking and region selection
//!
//! Collaborator failures (window not found, pixel sampling errors) are
//! recoverable by design: the pipeline degrades to a neutral result and
//! keeps the previous frame. The error variants here carry enough context
//! for the caller to decide user-facing messaging; nothing in the library
//! escalates to a top-level handler.

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Error type for frame tracking, refinement, and user-input parsing
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Client rectangle has a non-positive dimension
    #[error("Degenerate client rectangle: {width}x{height}")]
    DegenerateClientRect {
        /// Client width that was rejected
        width:  i32,
        /// Client height that was rejected
        height: i32,
    },

    /// Pixel sampling coordinates fall outside the safe multi-monitor range
    #[error("Sample coordinates ({x}, {y}) outside safe monitor bounds")]
    SampleOutOfBounds {
        /// Requested X coordinate
        x: i32,
        /// Requested Y coordinate
        y: i32,
    },

    /// Screen-capture collaborator failed to sample a pixel
    #[error("Pixel sample at ({x}, {y}) failed: {reason}")]
    SampleFailed {
        /// Requested X coordinate
        x:      i32,
        /// Requested Y coordinate
        y:      i32,
        /// Collaborator-reported reason
        reason: String,
    },

    /// No visible window matched the target process
    #[error("Target window not found for process '{process}'")]
    WindowNotFound {
        /// Process name that was searched for
        process: String,
    },

    /// Pointer position could not be read
    #[error("Pointer position unavailable: {reason}")]
    PointerUnavailable {
        /// Collaborator-reported reason
        reason: String,
    },

    /// Clipboard collaborator rejected the write
    #[error("Clipboard write failed: {reason}")]
    ClipboardFailed {
        /// Collaborator-reported reason
        reason: String,
    },

    /// Locate-by-coordinate text did not parse as a point or bounding box
    #[error("Unparseable coordinate text: '{input}'")]
    InvalidCoordinateText {
        /// The rejected input
        input: String,
    },

    /// I/O error (config persistence)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file did not deserialize
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_rect_message() {
        let err = TrackerError::DegenerateClientRect {
            width:  0,
            height: 720,
        };
        let msg = err.to_string();
        assert!(msg.contains("Degenerate"));
        assert!(msg.contains("0x720"));
    }

    #[test]
    fn test_sample_out_of_bounds_message() {
        let err = TrackerError::SampleOutOfBounds { x: -4000, y: 500 };
        assert!(err.to_string().contains("-4000"));
        assert!(err.to_string().contains("monitor bounds"));
    }

    #[test]
    fn test_window_not_found_message() {
        let err = TrackerError::WindowNotFound {
            process: "WidgetInc.exe".to_string(),
        };
        assert!(err.to_string().contains("WidgetInc.exe"));
    }

    #[test]
    fn test_invalid_coordinate_text_message() {
        let err = TrackerError::InvalidCoordinateText {
            input: "12, banana".to_string(),
        };
        assert!(err.to_string().contains("banana"));
        assert!(err.to_string().contains("Unparseable"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TrackerError = io.into();
        assert!(err.to_string().contains("I/O error"));
    }
}
