//! Legacy HSL table
//!
//! An older fixture format listing level 3 `hsl()`/`hsla()` inputs next to
//! their unit-range `[r, g, b, a]` channels, one pair per line:
//!
//! ```text
//! [
//! "hsl(0, 0%, 0%)", [0, 0, 0, 1],
//! "hsl(30, 0%, 0%)", [0, 0, 0, 1],
//! ...
//! ]
//! ```

use crate::convert::hls_to_unit_rgb;
use crate::number::{round_to, trim};

const ALPHAS: [Option<f64>; 4] = [None, Some(1.0), Some(0.2), Some(0.0)];

/// Decimals kept for unit-range channels.
const UNIT_DECIMALS: usize = 10;

/// Lightness and saturation steps, in tenths of a percent.
fn permille_steps() -> impl Iterator<Item = u32> {
    (0..=1000).step_by(125)
}

fn line(hue: u32, saturation: u32, lightness: u32, alpha: Option<f64>) -> String {
    let saturation_percent = trim(f64::from(saturation) / 10.0);
    let lightness_percent = trim(f64::from(lightness) / 10.0);
    let (name, alpha_suffix) = match alpha {
        Some(alpha) => ("hsla", format!(", {}", trim(alpha))),
        None => ("hsl", String::new()),
    };
    let [r, g, b] = hls_to_unit_rgb(
        f64::from(hue) / 360.0,
        f64::from(lightness) / 1000.0,
        f64::from(saturation) / 1000.0,
    )
    .map(|c| trim(round_to(c, UNIT_DECIMALS)));
    format!(
        "\"{}({}, {}%, {}%{})\", [{}, {}, {}, {}]",
        name,
        hue,
        saturation_percent,
        lightness_percent,
        alpha_suffix,
        r,
        g,
        b,
        trim(alpha.unwrap_or(1.0))
    )
}

/// Lines of the table, alpha varying slowest and hue fastest.
pub fn hsl_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for alpha in ALPHAS {
        for lightness in permille_steps() {
            for saturation in permille_steps() {
                for hue in (0..360).step_by(30) {
                    lines.push(line(hue, saturation, lightness, alpha));
                }
            }
        }
    }
    lines
}

/// The complete table text, without a trailing newline.
pub fn hsl_table() -> String {
    format!("[\n{}\n]", hsl_lines().join(",\n"))
}
