//! Per-item outcomes of a generation run

use std::fmt;
use std::path::PathBuf;

use crate::core::{Density, IconError};

/// Which group of bitmaps a derivation produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `ic_launcher.png` plus its `ic_launcher_round.png` copy
    Launcher,
    /// `ic_launcher_foreground.png` on a transparent canvas
    Foreground,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Launcher => f.write_str("launcher"),
            Variant::Foreground => f.write_str("foreground"),
        }
    }
}

/// Result of deriving one variant for one bucket
#[derive(Debug)]
pub struct DerivationOutcome {
    pub density: Density,
    pub variant: Variant,
    /// Files that reached disk, including any written before a failure
    pub written: Vec<PathBuf>,
    /// Why the variant is incomplete, if it is
    pub error: Option<IconError>,
}

impl DerivationOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything a completed run produced
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Source logo dimensions
    pub source_size: (u32, u32),
    /// Directories ensured during provisioning
    pub directories: Vec<PathBuf>,
    /// One entry per (bucket, variant), in derivation order
    pub derivations: Vec<DerivationOutcome>,
    /// Static XML resources written
    pub resources: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> usize {
        self.derivations.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DerivationOutcome> {
        self.derivations.iter().filter(|o| !o.is_ok())
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Every bitmap written, in derivation order
    pub fn written_bitmaps(&self) -> Vec<&PathBuf> {
        self.derivations
            .iter()
            .flat_map(|o| o.written.iter())
            .collect()
    }

    /// One-line summary of what the run wrote
    pub fn summary(&self) -> String {
        let (width, height) = self.source_size;
        format!(
            "{}/{} icon sets generated from {}x{} source: {} bitmaps and {} resource files in {} directories",
            self.succeeded(),
            self.derivations.len(),
            width,
            height,
            self.written_bitmaps().len(),
            self.resources.len(),
            self.directories.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(density: Density, variant: Variant, ok: bool) -> DerivationOutcome {
        let path = PathBuf::from(format!("{}/{}.png", density.dir_name(), variant));
        if ok {
            DerivationOutcome {
                density,
                variant,
                written: vec![path],
                error: None,
            }
        } else {
            DerivationOutcome {
                density,
                variant,
                written: Vec::new(),
                error: Some(IconError::InvalidSize { density, size: 0 }),
            }
        }
    }

    #[test]
    fn test_counts() {
        let report = GenerationReport {
            derivations: vec![
                outcome(Density::Mdpi, Variant::Launcher, true),
                outcome(Density::Hdpi, Variant::Launcher, false),
                outcome(Density::Mdpi, Variant::Foreground, true),
            ],
            resources: vec![PathBuf::from("values/colors.xml")],
            source_size: (1024, 1024),
            directories: vec![PathBuf::from("mipmap-mdpi"), PathBuf::from("values")],
        };

        assert_eq!(report.succeeded(), 2);
        assert!(!report.is_complete());
        assert_eq!(report.written_bitmaps().len(), 2);

        let failed: Vec<_> = report.failures().map(|o| (o.density, o.variant)).collect();
        assert_eq!(failed, vec![(Density::Hdpi, Variant::Launcher)]);
        assert_eq!(
            report.summary(),
            "2/3 icon sets generated from 1024x1024 source: 2 bitmaps and 1 resource files in 2 directories"
        );
    }

    #[test]
    fn test_partial_writes_are_counted() {
        let partial = DerivationOutcome {
            density: Density::Xhdpi,
            variant: Variant::Launcher,
            written: vec![PathBuf::from("mipmap-xhdpi/ic_launcher.png")],
            error: Some(IconError::InvalidSize {
                density: Density::Xhdpi,
                size: 0,
            }),
        };
        let report = GenerationReport {
            derivations: vec![partial],
            ..Default::default()
        };

        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.written_bitmaps().len(), 1);
    }

    #[test]
    fn test_empty_report_is_complete() {
        assert!(GenerationReport::default().is_complete());
    }
}
