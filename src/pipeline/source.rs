//! Source logo loading

use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::core::IconError;

/// Decode the source logo into an RGBA buffer
///
/// A missing file and undecodable content are both reported as errors; the
/// caller treats either as fatal. The format is sniffed from the file
/// content rather than trusted from the extension.
pub fn load(path: &Path) -> Result<RgbaImage, IconError> {
    if !path.is_file() {
        return Err(IconError::SourceMissing(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)
        .map_err(|e| IconError::SourceDecode(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| IconError::SourceDecode(image::ImageError::IoError(e)))?;

    let image = reader.decode().map_err(IconError::SourceDecode)?;
    tracing::debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        image.color(),
        image.width(),
        image.height()
    );

    Ok(image.into_rgba8())
}
