//! Errors raised while generating launcher assets

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Density;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source logo not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Error loading source logo: {0}")]
    SourceDecode(#[source] image::ImageError),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid icon size {size}px for {density}")]
    InvalidSize { density: Density, size: u32 },
}

impl IconError {
    /// Whether the error came from loading the source logo
    pub fn is_fatal_source(&self) -> bool {
        matches!(self, IconError::SourceMissing(_) | IconError::SourceDecode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = IconError::SourceMissing(PathBuf::from("logo.png"));
        assert_eq!(err.to_string(), "Source logo not found: logo.png");

        let err = IconError::InvalidSize {
            density: Density::Hdpi,
            size: 0,
        };
        assert_eq!(err.to_string(), "Invalid icon size 0px for hdpi");
    }

    #[test]
    fn test_fatal_source_tier() {
        assert!(IconError::SourceMissing(PathBuf::from("x")).is_fatal_source());

        let err = IconError::Write {
            path: PathBuf::from("values/colors.xml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_fatal_source());
        assert!(err.to_string().contains("values/colors.xml"));
    }
}
