//! color-fixtures - Generator for CSS color parsing test fixtures
//!
//! This library provides functionality to:
//! - Enumerate fixed parameter grids for keyword, hex, `hsl()`, `hwb()`,
//!   `lab()`, `lch()`, `oklab()`, `oklch()` and `color()` inputs
//! - Format each sample as a CSS Color level 3 or level 4 test string and
//!   compute its canonical expected output
//! - Dump the resulting ordered test tables as JSON fixture files

pub mod cli;
pub mod convert;
pub mod grid;
pub mod keywords;
pub mod legacy;
pub mod number;
pub mod output;
pub mod syntax;
pub mod table;
pub mod target;

pub use table::TestTable;
pub use target::Target;
