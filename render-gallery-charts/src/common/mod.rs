//! Shared infrastructure for the chart renderers
//!
//! This module provides reusable pieces for the chart modules:
//! - Bucket types and ASCII table formatting
//! - Serde structures mirroring the gallery data file
//! - Plot error type, drawing-area setup, and tick-label formatters
//! - Palette and style presets

pub mod buckets;
pub mod data_structures;
pub mod plots;
pub mod style;

// Re-export commonly used items
pub use data_structures::GalleryData;
pub use plots::PlotError;
