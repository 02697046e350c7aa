//! framespy: frame geometry tracking and region selection engine
//!
//! This library locates a 3:2 "frame" rectangle inside an application
//! window's client area, converts pointer positions between screen, frame,
//! and percentage coordinate spaces, and runs the interactive bounding-box
//! and fixed-grid-square selection tools whose bounds are formatted per the
//! active copy mode.
//!
//! Window enumeration, pointer position, pixel sampling, and clipboard
//! access are collaborator traits (see [`providers`]); the crate ships a
//! mock desktop for tests and simulation.

pub mod config;
pub mod copy_mode;
pub mod error;
pub mod geometry;
pub mod locate;
pub mod model;
pub mod overlay;
pub mod providers;
pub mod region;
pub mod session;
pub mod tracker;
