// main.rs
mod datasets;
mod output;

use argh::FromArgs;
use bytesize::ByteSize;
use datasets::{group_counts, price_walk, ring_shares, scatter_samples};
use output::{GalleryData, GallerySummary};
use std::fs;
use std::path::PathBuf;

/// Generates the synthetic datasets behind the chart gallery
#[derive(FromArgs, Debug)]
pub struct Args {
    /// random seed shared by every generator (default: 19680801)
    #[argh(option, short = 's', default = "19680801")]
    seed: u64,

    /// output file for the compressed dataset bundle (default: gallery-data.json.zst)
    #[argh(option, short = 'o', default = "PathBuf::from(\"gallery-data.json.zst\")")]
    output: PathBuf,

    /// number of scatter sample pairs (default: 1000)
    #[argh(option, default = "scatter_samples::DEFAULT_SAMPLES")]
    scatter_samples: usize,

    /// number of trading days in the price series (default: 500)
    #[argh(option, default = "price_walk::DEFAULT_TRADING_DAYS")]
    trading_days: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Args = argh::from_env();

    // Validate arguments
    if args.scatter_samples == 0 {
        return Err("Scatter sample count must be at least 1".into());
    }

    if args.trading_days == 0 {
        return Err("Trading day count must be at least 1".into());
    }

    println!("Starting chart gallery data pipeline...");
    println!("🎲 Using seed: {}", args.seed);

    // Stage 1: grouped counts for the bar charts
    println!("\n📊 Stage 1: Sampling group counts");
    let groups = group_counts::generate(args.seed);
    for group in &groups {
        println!("   📦 {}: {}", group.name, group.count);
    }

    // Stage 2: fixed share quantities for the pie renderings
    println!("\n🥧 Stage 2: Building ring shares");
    let shares = ring_shares::share_matrix();
    let layers = ring_shares::ring_layers();
    let leaf_count: usize = shares.iter().map(|row| row.len()).sum();
    println!("   ✅ {} rings, {} leaf shares", shares.len(), leaf_count);

    // Stage 3: scatter samples
    println!("\n🎯 Stage 3: Sampling scatter coordinates");
    let scatter = scatter_samples::generate(args.seed, args.scatter_samples)?;
    println!("   ✅ {} coordinate pairs", scatter.xs.len());

    // Stage 4: daily closing prices
    println!("\n📈 Stage 4: Walking daily closing prices");
    let start_date = price_walk::default_start_date()?;
    let prices = price_walk::generate(args.seed, start_date, args.trading_days)?;
    let first = &prices.points[0];
    let last = &prices.points[prices.points.len() - 1];
    println!(
        "   ✅ {} trading days: {} ({:.2}) → {} ({:.2})",
        prices.points.len(),
        first.date,
        first.close,
        last.date,
        last.close
    );

    // Assemble the bundle
    let summary = GallerySummary {
        seed: args.seed,
        total_groups: groups.len(),
        total_scatter_samples: scatter.xs.len(),
        total_trading_days: prices.points.len(),
    };
    let results = GalleryData {
        groups,
        ring_shares: shares,
        ring_layers: layers,
        scatter,
        prices,
        summary,
    };

    // Save results to compressed file
    println!("\n💾 Saving final results...");
    output::save_results(&results, &args.output)?;

    let file_size = fs::metadata(&args.output)?.len();

    println!("\n🎉 Pipeline complete!");
    println!("📊 Final Statistics:");
    println!("   📦 Groups sampled: {}", results.summary.total_groups);
    println!(
        "   🎯 Scatter pairs: {}",
        results.summary.total_scatter_samples
    );
    println!(
        "   📅 Trading days: {}",
        results.summary.total_trading_days
    );
    println!(
        "   📂 Results saved to: {} ({})",
        args.output.display(),
        ByteSize::b(file_size)
    );

    Ok(())
}
