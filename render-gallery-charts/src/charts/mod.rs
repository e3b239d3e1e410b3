//! Chart-family rendering modules
//!
//! One module per chart family in the gallery:
//! - Staged group bar charts
//! - Nested pie renderings
//! - Scatter plot with marginal histograms
//! - Closing-price time series

pub mod constants;
pub mod group_bars;
pub mod nested_pie;
pub mod price_series;
pub mod scatter_hist;

// Re-export the generation entry points for convenience
pub use group_bars::{generate_group_bars_analysis, generate_group_bars_plots};
pub use nested_pie::generate_nested_pie_plots;
pub use price_series::{generate_price_analysis, generate_price_plots};
pub use scatter_hist::{generate_scatter_analysis, generate_scatter_plots};
