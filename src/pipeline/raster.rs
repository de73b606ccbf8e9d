//! Bitmap derivation: launcher, round and adaptive foreground icons

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use super::layout::ResLayout;
use super::report::{DerivationOutcome, Variant};
use crate::core::{center_offset, Density, IconConfig, IconError};

/// Lanczos keeps small targets free of nearest/box aliasing
const FILTER: FilterType = FilterType::Lanczos3;

/// Resample `source` to a `side`x`side` square
pub fn resize_square(source: &RgbaImage, side: u32) -> RgbaImage {
    imageops::resize(source, side, side, FILTER)
}

/// Paste `top` onto `canvas` at `(x, y)` using `top`'s own alpha as the mask
///
/// Every channel, alpha included, moves from the canvas value toward the
/// `top` value by `alpha / 255`. Pixels falling outside the canvas are dropped.
pub fn paste_masked(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (tx, ty, src) in top.enumerate_pixels() {
        let (cx, cy) = (x + tx, y + ty);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let mask = u32::from(src[3]);
        let dst = canvas.get_pixel_mut(cx, cy);
        for c in 0..4 {
            let mixed = u32::from(src[c]) * mask + u32::from(dst[c]) * (255 - mask);
            dst[c] = ((mixed + 127) / 255) as u8;
        }
    }
}

/// Resample `source` to `content` px and center it on a transparent `canvas` px square
pub fn foreground_canvas(source: &RgbaImage, canvas: u32, content: u32) -> RgbaImage {
    let logo = resize_square(source, content);
    let mut layer = RgbaImage::from_pixel(canvas, canvas, Rgba([0, 0, 0, 0]));
    let offset = center_offset(canvas, content);
    paste_masked(&mut layer, &logo, offset, offset);
    layer
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `ic_launcher.png` and an identical `ic_launcher_round.png` for one bucket
///
/// The round variant carries no circular mask; launchers that want a circle
/// apply their own. Each file that lands on disk is pushed to `written`
/// before the next one is attempted.
pub fn derive_launcher(
    source: &RgbaImage,
    layout: &ResLayout,
    density: Density,
    size: u32,
    written: &mut Vec<PathBuf>,
) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize { density, size });
    }

    let icon = resize_square(source, size);
    for path in [layout.launcher(density), layout.launcher_round(density)] {
        save_png(&icon, &path)?;
        tracing::debug!("Wrote {} ({}x{})", path.display(), size, size);
        written.push(path);
    }
    Ok(())
}

/// Write `ic_launcher_foreground.png` for one bucket
pub fn derive_foreground(
    source: &RgbaImage,
    layout: &ResLayout,
    config: &IconConfig,
    density: Density,
    size: u32,
    written: &mut Vec<PathBuf>,
) -> Result<(), IconError> {
    let content = config.foreground_size(size);
    if size == 0 || content == 0 {
        return Err(IconError::InvalidSize { density, size });
    }

    let layer = foreground_canvas(source, size, content);
    let path = layout.foreground(density);
    save_png(&layer, &path)?;
    tracing::debug!(
        "Wrote {} ({}x{} canvas, {}x{} logo)",
        path.display(),
        size,
        size,
        content,
        content
    );
    written.push(path);
    Ok(())
}

/// Derive every bucket's bitmaps, collecting one outcome per (bucket, variant)
///
/// All launcher icons are produced first, then all foregrounds. A failure
/// is recorded in its outcome and never stops the remaining items.
pub fn derive_all(
    source: &RgbaImage,
    layout: &ResLayout,
    config: &IconConfig,
) -> Vec<DerivationOutcome> {
    let launchers = config
        .launcher_sizes
        .iter()
        .map(|(density, size)| (density, size, Variant::Launcher));
    let foregrounds = config
        .foreground_sizes
        .iter()
        .map(|(density, size)| (density, size, Variant::Foreground));

    launchers
        .chain(foregrounds)
        .fold(Vec::new(), |mut outcomes, (density, size, variant)| {
            let mut written = Vec::new();
            let result = match variant {
                Variant::Launcher => derive_launcher(source, layout, density, size, &mut written),
                Variant::Foreground => {
                    derive_foreground(source, layout, config, density, size, &mut written)
                }
            };
            if let Err(e) = &result {
                tracing::warn!("{} {} failed: {}", density, variant, e);
            }
            outcomes.push(DerivationOutcome {
                density,
                variant,
                written,
                error: result.err(),
            });
            outcomes
        })
}
