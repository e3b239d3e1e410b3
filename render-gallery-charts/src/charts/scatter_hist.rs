//! Scatter plot with marginal histograms
//!
//! Renders the square scatter panel with a histogram of the x coordinates
//! above it and a horizontal histogram of the y coordinates to its right.
//! Both axes share symmetric limits derived from the samples and the fixed
//! bin width, so the marginals line up with the scatter panel exactly.

use crate::charts::constants::{BIN_WIDTH, SCATTER_CHART_SIZE};
use crate::common::data_structures::ScatterSamples;
use crate::common::plots::fill_background;
use crate::common::style::PALETTE;
use crate::common::{GalleryData, PlotError};
use plotters::prelude::*;
use std::path::Path;

/// Pixel height of the top marginal / width of the right marginal
const MARGINAL_SIZE: u32 = 240;

/// Pixel edge of the square scatter panel area
const SCATTER_PANEL_SIZE: u32 = 600;

/// Errors that can occur during scatter analysis
#[derive(Debug)]
pub enum ScatterHistError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for ScatterHistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScatterHistError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            ScatterHistError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for ScatterHistError {}

impl From<std::io::Error> for ScatterHistError {
    fn from(err: std::io::Error) -> Self {
        ScatterHistError::FileWrite(err)
    }
}

impl From<PlotError> for ScatterHistError {
    fn from(err: PlotError) -> Self {
        ScatterHistError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, ScatterHistError>;

/// Generate the scatter sample analysis report
///
/// Computes per-axis means and standard deviations plus the shared axis
/// limit, saved to scatter-samples.txt.
pub fn generate_scatter_analysis(data: &GalleryData, output_dir: &Path) -> Result<()> {
    let samples = &data.scatter;

    if samples.xs.is_empty() || samples.ys.is_empty() {
        return Ok(());
    }

    let (x_mean, x_std) = mean_and_std(&samples.xs);
    let (y_mean, y_std) = mean_and_std(&samples.ys);
    let limit = axis_limit(samples);

    let stats = format!(
        "Per-Axis Statistics\n{}\n\
         x: mean {:.4}, standard deviation {:.4}\n\
         y: mean {:.4}, standard deviation {:.4}\n\
         Shared axis limit: ±{:.2} ({} bins of width {})",
        "=".repeat(19),
        x_mean,
        x_std,
        y_mean,
        y_std,
        limit,
        bin_count(limit),
        BIN_WIDTH
    );

    let summary = format!(
        "Summary\n{}\nTotal sample pairs: {}",
        "=".repeat(7),
        samples.xs.len()
    );

    let output_file = output_dir.join("scatter-samples.txt");
    let output = format!(
        "Scatter Sample Analysis\n{}\n\n{}\n\n{}",
        "=".repeat(23),
        stats,
        summary
    );

    use std::fs;
    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate the scatter-histogram composite PNG
///
/// Layout: x histogram across the top, square scatter panel at bottom left,
/// horizontal y histogram at bottom right. The marginals suppress the tick
/// labels adjacent to the scatter panel and keep sparse labels on their
/// count axes.
pub fn generate_scatter_plots(data: &GalleryData, output_dir: &Path) -> Result<()> {
    let samples = &data.scatter;

    if samples.xs.is_empty() || samples.ys.is_empty() {
        return Ok(());
    }

    let limit = axis_limit(samples);
    let x_bins = bin_counts(&samples.xs, limit);
    let y_bins = bin_counts(&samples.ys, limit);
    let tallest = x_bins.iter().chain(y_bins.iter()).copied().max().unwrap_or(1) as f64;
    let count_axis_max = tallest * 1.1;

    let output_path = output_dir.join("scatter-hist.png");
    let root = BitMapBackend::new(&output_path, SCATTER_CHART_SIZE).into_drawing_area();
    fill_background(&root, &WHITE)?;

    let (top, bottom) = root.split_vertically(MARGINAL_SIZE);
    let (top_hist_area, _corner) = top.split_horizontally(SCATTER_PANEL_SIZE);
    let (scatter_area, right_hist_area) = bottom.split_horizontally(SCATTER_PANEL_SIZE);

    // Scatter panel, square with symmetric limits
    let mut scatter_chart = ChartBuilder::on(&scatter_area)
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-limit..limit, -limit..limit)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    scatter_chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    scatter_chart
        .draw_series(
            samples
                .xs
                .iter()
                .zip(samples.ys.iter())
                .map(|(&x, &y)| Circle::new((x, y), 2, PALETTE[0].filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Top marginal: x histogram; labels toward the scatter panel suppressed
    let mut top_chart = ChartBuilder::on(&top_hist_area)
        .margin(5)
        .y_label_area_size(50)
        .build_cartesian_2d(-limit..limit, 0f64..count_axis_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    top_chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(3)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    top_chart
        .draw_series(x_bins.iter().enumerate().map(|(index, &count)| {
            let left = -limit + index as f64 * BIN_WIDTH;
            Rectangle::new(
                [(left, 0.0), (left + BIN_WIDTH, count as f64)],
                PALETTE[0].filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Right marginal: y histogram drawn horizontally
    let mut right_chart = ChartBuilder::on(&right_hist_area)
        .margin(5)
        .x_label_area_size(40)
        .build_cartesian_2d(0f64..count_axis_max, -limit..limit)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    right_chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(3)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    right_chart
        .draw_series(y_bins.iter().enumerate().map(|(index, &count)| {
            let bottom_edge = -limit + index as f64 * BIN_WIDTH;
            Rectangle::new(
                [(0.0, bottom_edge), (count as f64, bottom_edge + BIN_WIDTH)],
                PALETTE[0].filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// The shared symmetric axis limit: one bin width past the largest absolute
/// coordinate, truncated to the bin grid
fn axis_limit(samples: &ScatterSamples) -> f64 {
    let max_abs = samples
        .xs
        .iter()
        .chain(samples.ys.iter())
        .map(|value| value.abs())
        .fold(0.0, f64::max);

    ((max_abs / BIN_WIDTH).floor() + 1.0) * BIN_WIDTH
}

/// Number of bins spanning `-limit..limit` at the fixed bin width
fn bin_count(limit: f64) -> usize {
    (2.0 * limit / BIN_WIDTH).round() as usize
}

/// Histogram counts over bins aligned to the bin grid across `-limit..limit`
fn bin_counts(values: &[f64], limit: f64) -> Vec<usize> {
    let bins = bin_count(limit);
    let mut counts = vec![0usize; bins];

    for &value in values {
        let offset = ((value + limit) / BIN_WIDTH).floor();
        if offset < 0.0 {
            continue;
        }
        // The limit itself falls into the last bin
        let index = (offset as usize).min(bins.saturating_sub(1));
        counts[index] += 1;
    }

    counts
}

/// Sample mean and (population) standard deviation
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(xs: Vec<f64>, ys: Vec<f64>) -> ScatterSamples {
        ScatterSamples { xs, ys }
    }

    #[test]
    fn test_axis_limit_rule() {
        // Largest |coordinate| 2.7 with bin width 0.25 gives a 2.75 limit
        let limit = axis_limit(&samples(vec![2.7, -1.0], vec![0.5, -2.2]));
        assert!((limit - 2.75).abs() < 1e-12);
    }

    #[test]
    fn test_axis_limit_on_grid_value() {
        // A maximum already on the bin grid still gets one extra bin
        let limit = axis_limit(&samples(vec![2.5], vec![0.0]));
        assert!((limit - 2.75).abs() < 1e-12);
    }

    #[test]
    fn test_bin_count() {
        assert_eq!(bin_count(2.75), 22);
        assert_eq!(bin_count(0.25), 2);
    }

    #[test]
    fn test_bin_counts_sum_to_sample_count() {
        let values = vec![-2.6, -1.0, -0.1, 0.0, 0.1, 1.3, 2.7];
        let limit = 2.75;

        let counts = bin_counts(&values, limit);
        assert_eq!(counts.len(), 22);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn test_bin_counts_edges() {
        // -limit lands in the first bin, +limit in the last
        let limit = 1.0;
        let counts = bin_counts(&[-1.0, 1.0], limit);

        assert_eq!(counts[0], 1);
        assert_eq!(*counts.last().unwrap(), 1);
    }

    #[test]
    fn test_mean_and_std() {
        let (mean, std) = mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_generate_analysis_report_contents() {
        use crate::common::data_structures::{
            GallerySummary, PriceSeries, RingLayer,
        };

        let temp_dir = tempfile::TempDir::new().unwrap();
        let data = GalleryData {
            groups: vec![],
            ring_shares: vec![],
            ring_layers: Vec::<RingLayer>::new(),
            scatter: samples(vec![2.7, -1.0, 0.3], vec![0.5, -2.2, 1.1]),
            prices: PriceSeries {
                symbol: "DEMO".to_string(),
                points: vec![],
            },
            summary: GallerySummary {
                seed: 0,
                total_groups: 0,
                total_scatter_samples: 3,
                total_trading_days: 0,
            },
        };

        generate_scatter_analysis(&data, temp_dir.path()).unwrap();

        let report =
            std::fs::read_to_string(temp_dir.path().join("scatter-samples.txt")).unwrap();
        assert!(report.contains("Scatter Sample Analysis"));
        assert!(report.contains("±2.75"));
        assert!(report.contains("Total sample pairs: 3"));
    }
}
