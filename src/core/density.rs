//! Screen density buckets and the pixel size each one requires

use std::fmt;

/// Android screen density bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    /// ~160dpi, 1x baseline
    Mdpi,
    /// ~240dpi, 1.5x
    Hdpi,
    /// ~320dpi, 2x
    Xhdpi,
    /// ~480dpi, 3x
    Xxhdpi,
    /// ~640dpi, 4x
    Xxxhdpi,
}

impl Density {
    /// Bare bucket label (e.g. "xhdpi")
    pub fn label(&self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Resource directory holding this bucket's launcher bitmaps
    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.label())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered mapping from density bucket to square icon side length in pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeTable {
    entries: Vec<(Density, u32)>,
}

impl SizeTable {
    pub fn new(entries: Vec<(Density, u32)>) -> Self {
        Self { entries }
    }

    /// Launcher sizes for the five standard buckets (48dp baseline)
    pub fn launcher() -> Self {
        Self::new(vec![
            (Density::Mdpi, 48),
            (Density::Hdpi, 72),
            (Density::Xhdpi, 96),
            (Density::Xxhdpi, 144),
            (Density::Xxxhdpi, 192),
        ])
    }

    /// Iterate `(bucket, size)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Density, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Size for a bucket, if the table has an entry for it
    #[cfg(test)]
    pub fn size_of(&self, density: Density) -> Option<u32> {
        self.entries
            .iter()
            .find(|(d, _)| *d == density)
            .map(|(_, size)| *size)
    }
}
