//! launcher-icons - Android launcher icon generator
//!
//! Reads the app logo once and writes, under the Android resource root:
//! - `ic_launcher.png` and `ic_launcher_round.png` for every density bucket
//! - `ic_launcher_foreground.png` adaptive foregrounds (logo at 75%, centered)
//! - the `mipmap-anydpi-v26` descriptors and `values/colors.xml`

mod cli;
mod core;
mod logging;
mod pipeline;

use clap::Parser;
use cli::{exit_codes, Cli};

use crate::core::{IconConfig, IconError};
use crate::pipeline::GenerationReport;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let config = IconConfig::android();
    println!("Generating Android launcher icons from {}", config.source.display());
    println!();

    let result = pipeline::run(&config);
    match &result {
        Ok(report) => print_summary(report),
        Err(e) => {
            if !e.is_fatal_source() {
                tracing::error!("Generation aborted: {}", e);
            }
            eprintln!("Error: {}", e);
        }
    }
    exit_code(&result)
}

/// Map a finished run to the process exit status
///
/// Per-bucket failures already reported during the run do not make it fail.
fn exit_code(result: &Result<GenerationReport, IconError>) -> i32 {
    match result {
        Ok(_) => exit_codes::SUCCESS,
        Err(e) if e.is_fatal_source() => exit_codes::SOURCE_FAILURE,
        Err(_) => exit_codes::UNEXPECTED_FAILURE,
    }
}

fn print_summary(report: &GenerationReport) {
    println!();
    if report.is_complete() {
        println!("Android launcher icons generated successfully!");
    } else {
        let failed = report.derivations.len() - report.succeeded();
        println!("Android launcher icons generated with {} failed icon sets", failed);
    }
    println!("{}", report.summary());

    println!();
    println!("Next steps:");
    println!("1. Update AndroidManifest.xml to reference the new icons");
    println!("2. Run: npx cap sync");
    println!("3. Build your APK: npx cap build android");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Density;
    use crate::pipeline::report::{DerivationOutcome, Variant};
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_complete_run_exits_zero() {
        let report = GenerationReport::default();
        assert_eq!(exit_code(&Ok(report)), 0);
    }

    #[test]
    fn test_failed_buckets_still_exit_zero() {
        let report = GenerationReport {
            derivations: vec![DerivationOutcome {
                density: Density::Mdpi,
                variant: Variant::Foreground,
                written: Vec::new(),
                error: Some(IconError::InvalidSize {
                    density: Density::Mdpi,
                    size: 1,
                }),
            }],
            ..Default::default()
        };
        assert!(!report.is_complete());
        assert_eq!(exit_code(&Ok(report)), 0);
    }

    #[test]
    fn test_source_failures_exit_one() {
        let missing = IconError::SourceMissing(PathBuf::from("logo.png"));
        assert_eq!(exit_code(&Err(missing)), 1);

        let corrupt = IconError::SourceDecode(image::ImageError::IoError(io::Error::new(
            io::ErrorKind::InvalidData,
            "bad header",
        )));
        assert_eq!(exit_code(&Err(corrupt)), 1);
    }

    #[test]
    fn test_resource_failure_exits_non_zero() {
        let err = IconError::Write {
            path: PathBuf::from("values/colors.xml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_ne!(exit_code(&Err(err)), 0);
    }
}
