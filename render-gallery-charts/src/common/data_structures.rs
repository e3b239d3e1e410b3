use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single bar-chart group with its sampled count
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupSample {
    /// Group identifier shown on the category axis (e.g. "group_a")
    pub name: String,
    /// Sampled count for this group, drawn from 0..100
    pub count: u32,
}

/// Geometry of one annular ring in the polar pie rendering
#[derive(Debug, Serialize, Deserialize)]
pub struct RingLayer {
    /// Number of equal angular segments in this ring
    pub segments: u32,
    /// Radial thickness of the ring
    pub height: f64,
    /// Inner radius the ring starts at
    pub bottom: f64,
}

/// Paired samples for the scatter panel, one coordinate per axis
#[derive(Debug, Serialize, Deserialize)]
pub struct ScatterSamples {
    /// Horizontal coordinates
    pub xs: Vec<f64>,
    /// Vertical coordinates
    pub ys: Vec<f64>,
}

/// One trading day of the synthetic closing-price series
#[derive(Debug, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date (weekdays only)
    pub date: NaiveDate,
    /// Closing price for the day
    pub close: f64,
}

/// The full synthetic closing-price series
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Display symbol used in chart titles
    pub symbol: String,
    /// Daily points in chronological order
    pub points: Vec<PricePoint>,
}

/// Summary statistics for the generated bundle
#[derive(Debug, Serialize, Deserialize)]
pub struct GallerySummary {
    /// Seed every generator was derived from
    pub seed: u64,
    /// Number of bar-chart groups
    pub total_groups: usize,
    /// Number of scatter sample pairs
    pub total_scatter_samples: usize,
    /// Number of trading days in the price series
    pub total_trading_days: usize,
}

/// Complete input structure for the gallery renderers
#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryData {
    /// Grouped counts for the bar charts
    pub groups: Vec<GroupSample>,
    /// Share matrix for the nested pie (rows are rings, inner to outer)
    pub ring_shares: Vec<Vec<u32>>,
    /// Ring geometry for the polar pie rendering
    pub ring_layers: Vec<RingLayer>,
    /// Bivariate normal samples for the scatter panel
    pub scatter: ScatterSamples,
    /// Synthetic daily closing prices
    pub prices: PriceSeries,
    /// Overall statistics
    pub summary: GallerySummary,
}
