//! Dataset synthesis modules for the gallery pipeline
//!
//! One module per tutorial dataset:
//! - Grouped counts for the bar charts
//! - Nested ring shares for the pie renderings
//! - Bivariate normal samples for the scatter panel
//! - Daily closing-price walk for the time series charts

pub mod group_counts;
pub mod price_walk;
pub mod ring_shares;
pub mod scatter_samples;
