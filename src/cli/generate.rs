//! Generate command implementations (all targets, single target)

use std::path::Path;
use std::process::ExitCode;

use crate::output::write_fixture;
use crate::target::Target;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Write every target's fixture file into `dir`, announcing each file first.
///
/// Stops at the first file that cannot be written; earlier files are kept.
pub fn run_generate_all(dir: &Path) -> ExitCode {
    for target in Target::ALL {
        println!("Generating {}", target.file_name());
        if let Err(e) = write_fixture(dir, target) {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Print one target's fixture JSON to stdout.
pub fn run_print(target: Target) -> ExitCode {
    println!("{}", target.generate());
    ExitCode::from(EXIT_SUCCESS)
}
