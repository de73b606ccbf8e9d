//! Command-line surface
//!
//! Paths and size tables are fixed; the flags only tune diagnostics.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "launcher-icons",
    version,
    about = "Generate Android launcher icons from src/assets/divineCounterLogo-1024.png"
)]
pub struct Cli {
    /// Emit debug-level diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format diagnostics as JSON lines
    #[arg(long = "json-output", global = true)]
    pub json_output: bool,
}

/// Process exit codes
pub mod exit_codes {
    /// Run completed, including runs where some buckets failed
    pub const SUCCESS: i32 = 0;
    /// Source logo missing or undecodable
    pub const SOURCE_FAILURE: i32 = 1;
    /// Anything else that stopped the run (directories, resource files, logging)
    pub const UNEXPECTED_FAILURE: i32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["launcher-icons"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.json_output);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["launcher-icons", "-v", "--json-output"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json_output);
    }

    #[test]
    fn test_rejects_positional_paths() {
        assert!(Cli::try_parse_from(["launcher-icons", "other.png"]).is_err());
    }
}
