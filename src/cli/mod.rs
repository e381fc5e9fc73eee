//! Command-line interface implementation
//!
//! Parses the optional target name and dispatches to the generate-all or
//! print-one mode in [`generate`].

mod generate;

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use crate::target::Target;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Generate JSON test fixtures for CSS color parsing
#[derive(Parser)]
#[command(name = "color-fixtures")]
#[command(about = "Generate JSON test fixtures for CSS color parsing")]
#[command(version)]
pub struct Cli {
    /// Target to print to stdout.
    /// If omitted, every target is written to color_{target}.json
    #[arg(value_enum)]
    pub target: Option<Target>,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not errors
            let code = if e.use_stderr() { EXIT_INVALID_ARGS } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match cli.target {
        Some(target) => generate::run_print(target),
        None => generate::run_generate_all(Path::new(".")),
    }
}
