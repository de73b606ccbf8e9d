//! Diagnostic logging via tracing
//!
//! Progress lines go to stdout with `println!`; everything here is written
//! to stderr so the two never interleave in redirected output.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the level filter: `debug` when verbose, else `RUST_LOG` or `info`
fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the logging system
pub fn init(verbose: bool, json: bool) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
