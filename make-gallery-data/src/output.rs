use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use zstd::Encoder;

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

/// Complete output structure for the gallery datasets
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

/// Saves gallery data to a compressed JSON file
pub fn save_results(data: &GalleryData, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("💾 Saving results to: {}", output_path.display());

    // Serialize to JSON
    let json_data = serde_json::to_string(data)?;

    // Create compressed output file
    let output_file = fs::File::create(output_path)?;
    let mut encoder = Encoder::new(output_file, 16)?; // ZStandard compression level 16
    encoder.write_all(json_data.as_bytes())?;
    encoder.finish()?;

    println!("✅ Results saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn sample_data() -> GalleryData {
        GalleryData {
            groups: vec![GroupSample {
                name: "group_a".to_string(),
                count: 42,
            }],
            ring_shares: vec![vec![1, 2, 3, 4]],
            ring_layers: vec![RingLayer {
                segments: 6,
                height: 5.0,
                bottom: 0.0,
            }],
            scatter: ScatterSamples {
                xs: vec![0.5, -1.25],
                ys: vec![0.75, 2.0],
            },
            prices: PriceSeries {
                symbol: "DEMO".to_string(),
                points: vec![PricePoint {
                    date: NaiveDate::from_ymd_opt(2004, 8, 19).unwrap(),
                    close: 100.0,
                }],
            },
            summary: GallerySummary {
                seed: 19680801,
                total_groups: 1,
                total_scatter_samples: 2,
                total_trading_days: 1,
            },
        }
    }

    #[test]
    fn test_gallery_data_serialization() {
        let data = sample_data();

        let json = serde_json::to_string(&data).unwrap();
        let deserialized: GalleryData = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.groups.len(), 1);
        assert_eq!(deserialized.groups[0].name, "group_a");
        assert_eq!(deserialized.groups[0].count, 42);
        assert_eq!(deserialized.ring_shares, vec![vec![1, 2, 3, 4]]);
        assert_eq!(deserialized.scatter.xs.len(), 2);
        assert_eq!(deserialized.prices.symbol, "DEMO");
        assert_eq!(deserialized.summary.seed, 19680801);
    }

    #[test]
    fn test_save_results() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("gallery-data.json.zst");

        let data = sample_data();
        save_results(&data, &output_path).unwrap();

        assert!(output_path.exists());
        assert!(output_path.metadata().unwrap().len() > 0);

        // Decompress and parse back to confirm the file is a valid artifact
        let file = File::open(&output_path).unwrap();
        let mut decoder = zstd::Decoder::new(file).unwrap();
        let restored: GalleryData = serde_json::from_reader(&mut decoder).unwrap();

        assert_eq!(restored.groups[0].count, 42);
        assert_eq!(restored.summary.total_trading_days, 1);
        assert_eq!(restored.prices.points[0].close, 100.0);
    }
}
