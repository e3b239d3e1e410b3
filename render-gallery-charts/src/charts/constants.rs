//! Threshold cuts and chart dimension constants
//!
//! The three cuts drive both the count-axis tick labels and the magnitude
//! bucket tables, so reports and axes always agree.

/// Counts below this cut are "super tiny"
pub const CUT_SMALL: f64 = 25.0;

/// Counts from [`CUT_SMALL`] up to this cut are "medium-ish"
pub const CUT_MEDIUM: f64 = 50.0;

/// Counts from [`CUT_MEDIUM`] up to this cut are "pretty big"; strictly above
/// it they are "super big!" (the cut itself matches neither side)
pub const CUT_LARGE: f64 = 75.0;

/// Height of the dashed target rule on the annotated bar chart
pub const TARGET_RULE: f64 = 80.0;

/// Upper bound of the count axis on the labeled bar stages
pub const COUNT_AXIS_MAX: f64 = 105.0;

/// Bin width shared by both marginal histograms of the scatter panel
pub const BIN_WIDTH: f64 = 0.25;

/// Pixel size of the wide bar-chart stages (width, height)
pub const BAR_CHART_SIZE: (u32, u32) = (800, 400);

/// Pixel size of the annotated bar stage, taller to fit the annotations
pub const BAR_CHART_TALL_SIZE: (u32, u32) = (800, 600);

/// Pixel size of the square pie renderings
pub const PIE_CHART_SIZE: (u32, u32) = (800, 800);

/// Pixel size of the scatter-histogram composite
pub const SCATTER_CHART_SIZE: (u32, u32) = (840, 840);

/// Pixel size of the time-series charts
pub const PRICE_CHART_SIZE: (u32, u32) = (1200, 800);
