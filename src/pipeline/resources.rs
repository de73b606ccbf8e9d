//! Static adaptive icon descriptors and the background color resource

use std::fs;
use std::path::{Path, PathBuf};

use super::layout::ResLayout;
use crate::core::IconError;

/// Name of the color resource the adaptive icon background points at
pub const BACKGROUND_COLOR_NAME: &str = "ic_launcher_background";

/// `<adaptive-icon>` descriptor layering the background color under the foreground mipmap
pub fn adaptive_icon_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/{BACKGROUND_COLOR_NAME}"/>
    <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>"#
    )
}

/// `values/colors.xml` declaring the adaptive icon background color
pub fn colors_xml(background: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="{BACKGROUND_COLOR_NAME}">{background}</color>
</resources>"#
    )
}

/// Truncate-and-write; any previous file at `path` is replaced
fn write_text(path: &Path, contents: &str) -> Result<(), IconError> {
    fs::write(path, contents).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both adaptive icon descriptors and the color resource
pub fn emit(layout: &ResLayout, background: &str) -> Result<Vec<PathBuf>, IconError> {
    let descriptor = adaptive_icon_xml();
    let files = [
        (layout.launcher_xml(), descriptor.clone()),
        (layout.launcher_round_xml(), descriptor),
        (layout.colors_xml(), colors_xml(background)),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        write_text(&path, &contents)?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        written.push(path);
    }
    Ok(written)
}
