//! color-hsl-table - Print the legacy HSL fixture table

use color_fixtures::legacy;

fn main() {
    println!("{}", legacy::hsl_table());
}
