//! Bucket types and ASCII table formatting for the analysis reports
//!
//! Shared pieces of the bucket-based reporting:
//! - [`BucketEntry`] pairs a range label with a count and percentage
//! - ASCII table formatting using the [`tabled`] crate
//!
//! The bucket creation functions themselves live in the chart modules that
//! own the data they summarize.

use tabled::{Table, Tabled};

/// A single bucket row: range label, count, and share of the total
#[derive(Debug, Clone, Tabled)]
pub struct BucketEntry {
    /// Human-readable range description (e.g., "<25", "exactly 75")
    #[tabled(rename = "Range")]
    pub range: String,
    /// Number of data points in this bucket
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Percentage of total data points in this bucket
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl BucketEntry {
    /// Creates a bucket entry, formatting the percentage to two decimals
    pub fn new(range: impl Into<String>, count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            range: range.into(),
            count,
            percentage,
        }
    }
}

/// Formats bucket entries as an ASCII table with an optional underlined title
pub fn format_bucket_table(buckets: &[BucketEntry], title: Option<&str>) -> String {
    if buckets.is_empty() {
        return "No data available for bucketing".to_string();
    }

    let table = Table::new(buckets).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_entry_new() {
        let entry = BucketEntry::new("<25", 25, 100);
        assert_eq!(entry.range, "<25");
        assert_eq!(entry.count, 25);
        assert_eq!(entry.percentage, "25.00%");

        // Zero total must not divide
        let entry_zero = BucketEntry::new("<25", 10, 0);
        assert_eq!(entry_zero.percentage, "0.00%");
    }

    #[test]
    fn test_format_bucket_table() {
        let buckets = vec![
            BucketEntry::new("<25", 10, 100),
            BucketEntry::new("25-49", 20, 100),
        ];

        let table = format_bucket_table(&buckets, Some("Test Table"));
        assert!(table.contains("Test Table"));
        assert!(table.contains("Range"));
        assert!(table.contains("Count"));
        assert!(table.contains("Percentage"));
        assert!(table.contains("<25"));
        assert!(table.contains("10.00%"));

        // Without a title only the table body remains
        let table_no_title = format_bucket_table(&buckets, None);
        assert!(!table_no_title.contains("Test Table"));
        assert!(table_no_title.contains("Range"));
    }

    #[test]
    fn test_format_bucket_table_empty() {
        let table = format_bucket_table(&[], Some("Empty"));
        assert_eq!(table, "No data available for bucketing");
    }
}
