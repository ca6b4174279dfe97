//! Pixel dimension probing
//!
//! The upload payload is written to a temporary on-disk copy and decoded
//! from there. Decode failures (or scratch-file I/O failures) surface as a
//! storage error carrying the underlying cause.

use image::GenericImageView;
use image::ImageReader;
use pixbin_core::AppError;
use std::io::Write;

/// Probe `(width, height)` of an image payload.
pub fn probe_dimensions(filename: &str, data: &[u8]) -> Result<(f64, f64), AppError> {
    let mut scratch = tempfile::NamedTempFile::new().map_err(|e| {
        AppError::storage_with(format!("Failed to store file {}", filename), e)
    })?;

    scratch.write_all(data).map_err(|e| {
        AppError::storage_with(format!("Failed to store file {}", filename), e)
    })?;
    scratch.flush().map_err(|e| {
        AppError::storage_with(format!("Failed to store file {}", filename), e)
    })?;

    let img = ImageReader::open(scratch.path())
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| AppError::storage_with(format!("Failed to store file {}", filename), e))?
        .decode()
        .map_err(|e| AppError::storage_with(format!("Failed to store file {}", filename), e))?;

    let (width, height) = img.dimensions();
    Ok((width as f64, height as f64))
}
