//! color-fixtures - Generate JSON test fixtures for CSS color parsing

use std::process::ExitCode;

use color_fixtures::cli;

fn main() -> ExitCode {
    cli::run()
}
