//! Time-series charts of the synthetic closing prices
//!
//! Two renderings of the same series: a single line chart with readable date
//! labels, and a pair of side-by-side panels sharing one price range (line on
//! the left, area fill on the right) under a common supertitle.

use crate::charts::constants::PRICE_CHART_SIZE;
use crate::common::data_structures::{PricePoint, PriceSeries};
use crate::common::plots::{fill_background, format_date_label};
use crate::common::style::PALETTE;
use crate::common::{GalleryData, PlotError};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Pixel height of the supertitle band above the panels
const SUPERTITLE_HEIGHT: u32 = 50;

/// Date labels rendered on each time axis; few enough to never overlap
const DATE_LABEL_COUNT: usize = 6;

/// Errors that can occur during price series analysis
#[derive(Debug)]
pub enum PriceSeriesError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for PriceSeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSeriesError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            PriceSeriesError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for PriceSeriesError {}

impl From<std::io::Error> for PriceSeriesError {
    fn from(err: std::io::Error) -> Self {
        PriceSeriesError::FileWrite(err)
    }
}

impl From<PlotError> for PriceSeriesError {
    fn from(err: PlotError) -> Self {
        PriceSeriesError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, PriceSeriesError>;

/// Generate the price series summary report
///
/// First/last/min/max close, trading-day count, and date span, saved to
/// price-summary.txt.
pub fn generate_price_analysis(data: &GalleryData, output_dir: &Path) -> Result<()> {
    let series = &data.prices;

    if series.points.is_empty() {
        return Ok(());
    }

    let first = &series.points[0];
    let last = &series.points[series.points.len() - 1];
    let min_close = series
        .points
        .iter()
        .map(|point| point.close)
        .fold(f64::INFINITY, f64::min);
    let max_close = series
        .points
        .iter()
        .map(|point| point.close)
        .fold(f64::NEG_INFINITY, f64::max);

    let stats = format!(
        "Closing Price Statistics ({})\n{}\n\
         First close: {:.2} on {}\n\
         Last close: {:.2} on {}\n\
         Lowest close: {:.2}\n\
         Highest close: {:.2}",
        series.symbol,
        "=".repeat(31),
        first.close,
        first.date,
        last.close,
        last.date,
        min_close,
        max_close
    );

    let summary = format!(
        "Summary\n{}\nTrading days: {}\nDate span: {} to {}",
        "=".repeat(7),
        series.points.len(),
        first.date,
        last.date
    );

    let output_file = output_dir.join("price-summary.txt");
    let output = format!(
        "Price Series Analysis\n{}\n\n{}\n\n{}",
        "=".repeat(21),
        stats,
        summary
    );

    use std::fs;
    fs::write(&output_file, output)?;

    Ok(())
}

/// Generate both time-series PNGs
///
/// 1. price-closes.png - single line chart on a date axis
/// 2. price-panels.png - line and area-fill panels sharing one price range
pub fn generate_price_plots(data: &GalleryData, output_dir: &Path) -> Result<()> {
    if data.prices.points.is_empty() {
        return Ok(());
    }

    draw_close_line(&data.prices, &output_dir.join("price-closes.png"))?;
    draw_shared_panels(&data.prices, &output_dir.join("price-panels.png"))?;

    Ok(())
}

/// The price range with headroom above and below the observed closes
fn padded_price_range(points: &[PricePoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.close);
        max = max.max(point.close);
    }

    if min >= max {
        return (min - 1.0, max + 1.0);
    }

    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// Single line chart of the daily closes on a date axis
fn draw_close_line(series: &PriceSeries, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, PRICE_CHART_SIZE).into_drawing_area();
    fill_background(&root, &WHITE)?;

    let first_date = series.points[0].date;
    let last_date = series.points[series.points.len() - 1].date;
    let (price_min, price_max) = padded_price_range(&series.points);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} daily closing price", series.symbol),
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(first_date..last_date, price_min..price_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_labels(DATE_LABEL_COUNT)
        .x_label_formatter(&format_date_label)
        .y_desc("price")
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            series.points.iter().map(|point| (point.date, point.close)),
            PALETTE[0],
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Two panels sharing the y range under one supertitle: a thicker line on
/// the left, an area fill from the series minimum on the right with its
/// price labels hidden
fn draw_shared_panels(series: &PriceSeries, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, PRICE_CHART_SIZE).into_drawing_area();
    fill_background(&root, &WHITE)?;

    let (title_area, chart_area) = root.split_vertically(SUPERTITLE_HEIGHT);
    let title_style = ("sans-serif", 28)
        .into_text_style(&title_area)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let title_dims = title_area.dim_in_pixel();
    title_area
        .draw_text(
            &format!("{} daily closing price", series.symbol),
            &title_style,
            (title_dims.0 as i32 / 2, title_dims.1 as i32 / 2),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let (left_area, right_area) = chart_area.split_horizontally(PRICE_CHART_SIZE.0 / 2);

    let first_date = series.points[0].date;
    let last_date = series.points[series.points.len() - 1].date;
    let (price_min, price_max) = padded_price_range(&series.points);
    let close_min = series
        .points
        .iter()
        .map(|point| point.close)
        .fold(f64::INFINITY, f64::min);

    // Left panel: 2px line
    let mut left_chart = ChartBuilder::on(&left_area)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(first_date..last_date, price_min..price_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    left_chart
        .configure_mesh()
        .x_labels(DATE_LABEL_COUNT / 2)
        .x_label_formatter(&format_date_label)
        .y_desc("price")
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    left_chart
        .draw_series(LineSeries::new(
            series.points.iter().map(|point| (point.date, point.close)),
            PALETTE[0].stroke_width(2),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Right panel: area fill from the series minimum, price labels hidden
    let mut right_chart = ChartBuilder::on(&right_area)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(first_date..last_date, price_min..price_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    right_chart
        .configure_mesh()
        .x_labels(DATE_LABEL_COUNT / 2)
        .x_label_formatter(&format_date_label)
        .y_label_formatter(&|_| String::new())
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    right_chart
        .draw_series(AreaSeries::new(
            series.points.iter().map(|point| (point.date, point.close)),
            close_min,
            PALETTE[0].mix(0.5),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
