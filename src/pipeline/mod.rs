//! Icon generation pipeline
//!
//! Runs four phases in order:
//! 1. load and decode the source logo (fatal on failure)
//! 2. ensure the output directory tree
//! 3. derive launcher, round and foreground bitmaps per bucket
//! 4. write the adaptive icon descriptors and color resource

pub mod layout;
pub mod raster;
pub mod report;
pub mod resources;
pub mod source;

use crate::core::{IconConfig, IconError};
use layout::ResLayout;
pub use report::GenerationReport;

/// Generate every launcher asset described by `config`
///
/// Only source, directory and resource errors are returned; per-bucket
/// bitmap failures are recorded in the report and the run carries on.
pub fn run(config: &IconConfig) -> Result<GenerationReport, IconError> {
    let logo = source::load(&config.source)?;
    let (width, height) = logo.dimensions();
    println!("Loaded source logo: {}x{}", width, height);

    tracing::info!("Provisioning {}", config.res_root.display());
    let layout = ResLayout::new(&config.res_root);
    let directories = layout.provision(config)?;

    println!();
    println!("Generating launcher icons...");
    let derivations = raster::derive_all(&logo, &layout, config);
    for outcome in &derivations {
        for path in &outcome.written {
            let name = path.strip_prefix(layout.root()).unwrap_or(path.as_path());
            println!("Generated {}", name.display());
        }
        if let Some(e) = &outcome.error {
            println!(
                "Error generating {} icons for {}: {}",
                outcome.variant,
                outcome.density.dir_name(),
                e
            );
        }
    }

    println!();
    println!("Writing adaptive icon resources...");
    let resources = resources::emit(&layout, &config.background_color)?;
    for path in &resources {
        let name = path.strip_prefix(layout.root()).unwrap_or(path.as_path());
        println!("Created {}", name.display());
    }

    Ok(GenerationReport {
        source_size: (width, height),
        directories,
        derivations,
        resources,
    })
}
