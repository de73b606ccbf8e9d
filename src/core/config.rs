//! Generation settings passed into the pipeline

use std::path::{Path, PathBuf};

use super::SizeTable;

/// Source logo, relative to the project root
pub const DEFAULT_SOURCE: &str = "src/assets/divineCounterLogo-1024.png";

/// Android resource root, relative to the project root
pub const DEFAULT_RES_ROOT: &str = "android/app/src/main/res";

/// Fraction of the foreground canvas the logo occupies (adaptive icon safe zone)
pub const DEFAULT_SAFE_ZONE: f64 = 0.75;

/// Adaptive icon background layer color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

/// Everything the pipeline needs to know about inputs and outputs
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Raster logo to derive every bitmap from
    pub source: PathBuf,
    /// Directory the `mipmap-*` and `values` directories are created under
    pub res_root: PathBuf,
    /// Sizes for `ic_launcher.png` / `ic_launcher_round.png`
    pub launcher_sizes: SizeTable,
    /// Canvas sizes for `ic_launcher_foreground.png`
    pub foreground_sizes: SizeTable,
    /// Logo side as a fraction of the foreground canvas side
    pub safe_zone: f64,
    /// Value of the `ic_launcher_background` color resource
    pub background_color: String,
}

impl IconConfig {
    /// Production settings for the Android app
    pub fn android() -> Self {
        Self::with_paths(DEFAULT_SOURCE, DEFAULT_RES_ROOT)
    }

    /// Production tables with the source and output redirected
    pub fn with_paths(source: impl AsRef<Path>, res_root: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            res_root: res_root.as_ref().to_path_buf(),
            launcher_sizes: SizeTable::launcher(),
            foreground_sizes: SizeTable::launcher(),
            safe_zone: DEFAULT_SAFE_ZONE,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }

    /// Side length of the logo inside a foreground canvas of side `canvas`
    ///
    /// Truncates, so the result is reproducible for any canvas size.
    pub fn foreground_size(&self, canvas: u32) -> u32 {
        (f64::from(canvas) * self.safe_zone).floor() as u32
    }
}

/// Top-left offset that centers a `content`-sided square on a `canvas`-sided one
pub fn center_offset(canvas: u32, content: u32) -> u32 {
    canvas.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Density;

    #[test]
    fn test_android_defaults() {
        let config = IconConfig::android();
        assert_eq!(config.source, PathBuf::from("src/assets/divineCounterLogo-1024.png"));
        assert_eq!(config.res_root, PathBuf::from("android/app/src/main/res"));
        assert_eq!(config.launcher_sizes, config.foreground_sizes);
        assert_eq!(config.launcher_sizes.size_of(Density::Xxxhdpi), Some(192));
        assert_eq!(config.background_color, "#FFFFFF");
    }

    #[test]
    fn test_with_paths_keeps_tables() {
        let config = IconConfig::with_paths("/tmp/logo.png", "/tmp/res");
        assert_eq!(config.source, PathBuf::from("/tmp/logo.png"));
        assert_eq!(config.res_root, PathBuf::from("/tmp/res"));
        assert_eq!(config.launcher_sizes, SizeTable::launcher());
        assert!((config.safe_zone - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_foreground_size_for_production_buckets() {
        let config = IconConfig::android();
        let sizes: Vec<u32> = config
            .foreground_sizes
            .iter()
            .map(|(_, s)| config.foreground_size(s))
            .collect();
        assert_eq!(sizes, vec![36, 54, 72, 108, 144]);
    }

    #[test]
    fn test_foreground_size_truncates() {
        let config = IconConfig::android();
        // 50 * 0.75 = 37.5
        assert_eq!(config.foreground_size(50), 37);
        // 1 * 0.75 = 0.75
        assert_eq!(config.foreground_size(1), 0);
        assert_eq!(config.foreground_size(0), 0);
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(192, 144), 24);
        assert_eq!(center_offset(48, 36), 6);
        // 50 - 37 = 13, floored half
        assert_eq!(center_offset(50, 37), 6);
        assert_eq!(center_offset(10, 10), 0);
        assert_eq!(center_offset(5, 10), 0);
    }
}
