//! File parsing functionality for the gallery data bundle
//!
//! This module handles loading and parsing the gallery-data.json.zst file
//! written by the generation stage.

use crate::common::GalleryData;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use zstd::Decoder;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to decompress zstd file: {0}")]
    Decompression(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the gallery-data.json.zst file and load the data for rendering
///
/// This function:
/// - Opens the compressed file
/// - Creates a ZStandard decoder
/// - Deserializes JSON directly from the decoder
///
/// # Arguments
/// * `file_path` - Path to the gallery-data.json.zst file
///
/// # Returns
/// * `Ok(GalleryData)` - Successfully parsed gallery data
/// * `Err(ParsingError)` - If file reading, decompression, or JSON parsing failed
pub fn parse_gallery_data(file_path: &Path) -> Result<GalleryData> {
    // Open the compressed file
    let file = File::open(file_path)?;

    // Create a ZStandard decoder
    let mut decoder = Decoder::new(file)
        .map_err(|e| ParsingError::Decompression(format!("Failed to create decoder: {}", e)))?;

    // Deserialize JSON directly from the decoder
    let data: GalleryData = serde_json::from_reader(&mut decoder)?;
    Ok(data)
}
