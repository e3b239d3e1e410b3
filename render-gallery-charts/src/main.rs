// main.rs
mod charts;
mod common;
mod parsing;

use argh::FromArgs;
use bytesize::ByteSize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

// Import chart generation functions
use charts::{
    generate_group_bars_analysis, generate_group_bars_plots, generate_nested_pie_plots,
    generate_price_analysis, generate_price_plots, generate_scatter_analysis,
    generate_scatter_plots,
};

// Import parsing functionality
use parsing::parse_gallery_data;

/// Errors that can occur during rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Group bar chart error: {0}")]
    GroupBars(#[from] charts::group_bars::GroupBarsError),

    #[error("Nested pie chart error: {0}")]
    NestedPie(#[from] charts::nested_pie::NestedPieError),

    #[error("Scatter histogram error: {0}")]
    ScatterHist(#[from] charts::scatter_hist::ScatterHistError),

    #[error("Price series chart error: {0}")]
    PriceSeries(#[from] charts::price_series::PriceSeriesError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, RenderError>;

/// Renders the chart gallery from generated gallery data
#[derive(FromArgs, Debug)]
pub struct Args {
    /// compressed dataset bundle to render (default: gallery-data.json.zst)
    #[argh(option, short = 'i', default = "PathBuf::from(\"gallery-data.json.zst\")")]
    input: PathBuf,

    /// directory for the PNG charts and text reports (default: charts)
    #[argh(option, short = 'o', default = "PathBuf::from(\"charts\")")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args: Args = argh::from_env();

    // Check if input file exists
    if !args.input.exists() {
        eprintln!(
            "Error: Input file does not exist: {}",
            args.input.display()
        );
        std::process::exit(1);
    }

    // Parse the gallery data file
    let data = parse_gallery_data(&args.input)?;

    // Create the output directory if absent
    fs::create_dir_all(&args.output_dir)?;
    let output_dir = args.output_dir.as_path();

    // Render everything behind one progress bar
    let progress = ProgressBar::new(7);
    progress.set_style(ProgressStyle::default_bar());

    progress.set_message("group count analysis");
    generate_group_bars_analysis(&data, output_dir)?;
    progress.inc(1);

    progress.set_message("group bar charts");
    generate_group_bars_plots(&data, output_dir)?;
    progress.inc(1);

    progress.set_message("nested pie charts");
    generate_nested_pie_plots(&data, output_dir)?;
    progress.inc(1);

    progress.set_message("scatter analysis");
    generate_scatter_analysis(&data, output_dir)?;
    progress.inc(1);

    progress.set_message("scatter histogram");
    generate_scatter_plots(&data, output_dir)?;
    progress.inc(1);

    progress.set_message("price analysis");
    generate_price_analysis(&data, output_dir)?;
    progress.inc(1);

    progress.set_message("price charts");
    generate_price_plots(&data, output_dir)?;
    progress.inc(1);

    progress.finish_with_message("gallery rendered");

    // Summarize what landed on disk
    let mut file_count = 0usize;
    let mut total_bytes = 0u64;
    for entry in fs::read_dir(output_dir)? {
        let metadata = entry?.metadata()?;
        if metadata.is_file() {
            file_count += 1;
            total_bytes += metadata.len();
        }
    }
    println!(
        "Wrote {} files ({}) to {}",
        file_count,
        ByteSize::b(total_bytes),
        output_dir.display()
    );

    Ok(())
}
