//! Output directory tree under the resource root

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Density, IconConfig, IconError};

/// Adaptive icon descriptors (API 26+)
pub const ADAPTIVE_DIR: &str = "mipmap-anydpi-v26";
/// Value resources
pub const VALUES_DIR: &str = "values";

pub const LAUNCHER_PNG: &str = "ic_launcher.png";
pub const LAUNCHER_ROUND_PNG: &str = "ic_launcher_round.png";
pub const FOREGROUND_PNG: &str = "ic_launcher_foreground.png";
pub const LAUNCHER_XML: &str = "ic_launcher.xml";
pub const LAUNCHER_ROUND_XML: &str = "ic_launcher_round.xml";
pub const COLORS_XML: &str = "colors.xml";

/// Resolves every output path from the resource root
#[derive(Debug, Clone)]
pub struct ResLayout {
    root: PathBuf,
}

impl ResLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn density_dir(&self, density: Density) -> PathBuf {
        self.root.join(density.dir_name())
    }

    pub fn adaptive_dir(&self) -> PathBuf {
        self.root.join(ADAPTIVE_DIR)
    }

    pub fn values_dir(&self) -> PathBuf {
        self.root.join(VALUES_DIR)
    }

    pub fn launcher(&self, density: Density) -> PathBuf {
        self.density_dir(density).join(LAUNCHER_PNG)
    }

    pub fn launcher_round(&self, density: Density) -> PathBuf {
        self.density_dir(density).join(LAUNCHER_ROUND_PNG)
    }

    pub fn foreground(&self, density: Density) -> PathBuf {
        self.density_dir(density).join(FOREGROUND_PNG)
    }

    pub fn launcher_xml(&self) -> PathBuf {
        self.adaptive_dir().join(LAUNCHER_XML)
    }

    pub fn launcher_round_xml(&self) -> PathBuf {
        self.adaptive_dir().join(LAUNCHER_ROUND_XML)
    }

    pub fn colors_xml(&self) -> PathBuf {
        self.values_dir().join(COLORS_XML)
    }

    /// Every directory the run writes into, in creation order
    ///
    /// Bucket directories from both size tables come first (deduplicated,
    /// table order), then the adaptive and values directories.
    pub fn directories(&self, config: &IconConfig) -> Vec<PathBuf> {
        let mut buckets: Vec<Density> = Vec::new();
        for (density, _) in config
            .launcher_sizes
            .iter()
            .chain(config.foreground_sizes.iter())
        {
            if !buckets.contains(&density) {
                buckets.push(density);
            }
        }

        let mut dirs: Vec<PathBuf> = buckets.into_iter().map(|d| self.density_dir(d)).collect();
        dirs.push(self.adaptive_dir());
        dirs.push(self.values_dir());
        dirs
    }

    /// Create every output directory; existing directories are left alone
    pub fn provision(&self, config: &IconConfig) -> Result<Vec<PathBuf>, IconError> {
        let dirs = self.directories(config);
        for dir in &dirs {
            fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
                path: dir.clone(),
                source,
            })?;
            println!("Created directory: {}", dir.display());
            tracing::debug!("Ensured {}", dir.display());
        }
        Ok(dirs)
    }
}
