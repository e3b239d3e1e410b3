//! Nested pie renderings of the ring share data
//!
//! Two renderings of the same share matrix: a flat nested pie (outer ring of
//! the flattened leaves over an inner disc of the row sums) and a polar
//! version built from three annular rings of equal segments. Sectors are
//! drawn as filled polygons with white separating borders.

use crate::charts::constants::PIE_CHART_SIZE;
use crate::common::data_structures::RingLayer;
use crate::common::plots::fill_background;
use crate::common::style::palette_color;
use crate::common::{GalleryData, PlotError};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

/// Radius of the outer leaf ring in the flat rendering
const FLAT_OUTER_RADIUS: f64 = 1.2;

/// Radius of the inner row-sum disc in the flat rendering
const FLAT_INNER_RADIUS: f64 = 1.0;

/// Leaf wedges cycle through this many palette colors
const FLAT_COLOR_CYCLE: usize = 4;

/// Polygon steps per full circle; enough for smooth arcs at chart size
const STEPS_PER_TURN: f64 = 120.0;

/// Errors that can occur during nested pie rendering
#[derive(Debug)]
pub enum NestedPieError {
    FileWrite(std::io::Error),
    PlotGeneration(PlotError),
}

impl std::fmt::Display for NestedPieError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NestedPieError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
            NestedPieError::PlotGeneration(e) => write!(f, "Failed to generate plot: {}", e),
        }
    }
}

impl std::error::Error for NestedPieError {}

impl From<std::io::Error> for NestedPieError {
    fn from(err: std::io::Error) -> Self {
        NestedPieError::FileWrite(err)
    }
}

impl From<PlotError> for NestedPieError {
    fn from(err: PlotError) -> Self {
        NestedPieError::PlotGeneration(err)
    }
}

type Result<T> = core::result::Result<T, NestedPieError>;

/// Generate both nested pie PNGs
///
/// 1. nested-pie-flat.png - outer leaf ring over an inner row-sum disc
/// 2. nested-pie-polar.png - three annular rings of equal segments
pub fn generate_nested_pie_plots(data: &GalleryData, output_dir: &Path) -> Result<()> {
    if !data.ring_shares.is_empty() {
        draw_flat_pie(&data.ring_shares, &output_dir.join("nested-pie-flat.png"))?;
    }
    if !data.ring_layers.is_empty() {
        draw_polar_pie(&data.ring_layers, &output_dir.join("nested-pie-polar.png"))?;
    }
    Ok(())
}

/// Splits the full circle into one (start, end) angle pair per value,
/// proportional to the value, starting at angle zero counterclockwise
fn share_angles(values: &[u32]) -> Vec<(f64, f64)> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angles = Vec::with_capacity(values.len());
    let mut cursor = 0.0;
    for &value in values {
        let sweep = 2.0 * PI * (f64::from(value) / f64::from(total));
        angles.push((cursor, cursor + sweep));
        cursor += sweep;
    }
    angles
}

/// Builds the closed outline of an annular sector as a point list
///
/// Walks the outer arc from `start` to `end`, then the inner arc back. With
/// an inner radius of zero the inner arc collapses onto the center, giving a
/// plain pie wedge.
fn sector_points(r_inner: f64, r_outer: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let sweep = end - start;
    let steps = ((sweep / (2.0 * PI)) * STEPS_PER_TURN).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(2 * (steps + 1));
    for i in 0..=steps {
        let angle = start + sweep * (i as f64 / steps as f64);
        points.push((r_outer * angle.cos(), r_outer * angle.sin()));
    }
    for i in (0..=steps).rev() {
        let angle = start + sweep * (i as f64 / steps as f64);
        points.push((r_inner * angle.cos(), r_inner * angle.sin()));
    }
    points
}

/// Draws one filled sector with a white separating border
fn draw_sector<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    r_inner: f64,
    r_outer: f64,
    start: f64,
    end: f64,
    color: RGBColor,
) -> Result<()> {
    let points = sector_points(r_inner, r_outer, start, end);

    chart
        .draw_series(std::iter::once(Polygon::new(points.clone(), color.filled())))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Close the outline back to the first point for the border stroke
    let mut outline = points;
    if let Some(&first) = outline.first() {
        outline.push(first);
    }
    chart
        .draw_series(std::iter::once(PathElement::new(
            outline,
            WHITE.stroke_width(2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// The flat nested pie: leaf wedges at the outer radius, row-sum wedges
/// drawn over them at the inner radius
fn draw_flat_pie(shares: &[Vec<u32>], output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, PIE_CHART_SIZE).into_drawing_area();
    fill_background(&root, &WHITE)?;

    // Square canvas and symmetric ranges keep the aspect equal
    let mut chart = ChartBuilder::on(&root)
        .caption("Nested pie, flat rendering", ("sans-serif", 30))
        .margin(20)
        .build_cartesian_2d(-1.5f64..1.5f64, -1.5f64..1.5f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Outer ring: the flattened leaves, colors cycling through the first
    // four palette entries
    let leaves: Vec<u32> = shares.iter().flatten().copied().collect();
    for (index, (start, end)) in share_angles(&leaves).iter().enumerate() {
        draw_sector(
            &mut chart,
            0.0,
            FLAT_OUTER_RADIUS,
            *start,
            *end,
            palette_color(index % FLAT_COLOR_CYCLE),
        )?;
    }

    // Inner disc: the row sums, drawn on top
    let row_sums: Vec<u32> = shares.iter().map(|row| row.iter().sum()).collect();
    for (index, (start, end)) in share_angles(&row_sums).iter().enumerate() {
        draw_sector(
            &mut chart,
            0.0,
            FLAT_INNER_RADIUS,
            *start,
            *end,
            palette_color(index),
        )?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// The polar rendering: each layer is a ring of equal segments occupying the
/// radial band `bottom..bottom + height`; no axes are drawn
fn draw_polar_pie(layers: &[RingLayer], output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, PIE_CHART_SIZE).into_drawing_area();
    fill_background(&root, &WHITE)?;

    let max_radius = layers
        .iter()
        .map(|layer| layer.bottom + layer.height)
        .fold(0.0, f64::max);
    let extent = max_radius * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Nested pie, polar rendering", ("sans-serif", 30))
        .margin(20)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    for (layer_index, layer) in layers.iter().enumerate() {
        let color = palette_color(layer_index);
        let sweep = 2.0 * PI / f64::from(layer.segments);
        for segment in 0..layer.segments {
            let start = f64::from(segment) * sweep;
            draw_sector(
                &mut chart,
                layer.bottom,
                layer.bottom + layer.height,
                start,
                start + sweep,
                color,
            )?;
        }
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
