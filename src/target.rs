//! Generation targets
//!
//! Each [`Target`] names one fixture file and maps to a pure function that
//! builds its [`TestTable`] from the constant grids.

use clap::ValueEnum;

use crate::convert::{hsl_to_rgb, hwb_to_rgb};
use crate::grid::{self, Sample, SpaceSample};
use crate::keywords;
use crate::syntax::{function, rgb, Level, Value};
use crate::table::TestTable;

/// A fixture file that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Target {
    /// Level 3 named colors, case variants and malformed keywords
    #[value(name = "keywords", alias = "keywords_3")]
    Keywords,
    /// Keywords added by level 4
    #[value(name = "keywords_4")]
    Keywords4,
    /// `#rgb` and `#rrggbb` notation
    #[value(name = "hexadecimal", alias = "hexadecimal_3")]
    Hexadecimal,
    /// `#rgba` and `#rrggbbaa` notation as well
    #[value(name = "hexadecimal_4")]
    Hexadecimal4,
    /// Comma-separated `hsl()`/`hsla()`
    #[value(name = "hsl", alias = "hsl_3")]
    Hsl,
    /// Space-separated `hsl()` with `none`
    #[value(name = "hsl_4")]
    Hsl4,
    /// `hwb()`
    #[value(name = "hwb_4")]
    Hwb4,
    /// `lab()`
    #[value(name = "lab_4")]
    Lab4,
    /// `oklab()`
    #[value(name = "oklab_4")]
    Oklab4,
    /// `lch()`
    #[value(name = "lch_4")]
    Lch4,
    /// `oklch()`
    #[value(name = "oklch_4")]
    Oklch4,
    /// `color()` with predefined color spaces
    #[value(name = "function_4")]
    Function4,
}

impl Target {
    /// All targets, in generation order.
    pub const ALL: [Target; 12] = [
        Target::Keywords,
        Target::Keywords4,
        Target::Hexadecimal,
        Target::Hexadecimal4,
        Target::Hsl,
        Target::Hsl4,
        Target::Hwb4,
        Target::Lab4,
        Target::Oklab4,
        Target::Lch4,
        Target::Oklch4,
        Target::Function4,
    ];

    /// Command-line name of the target.
    pub fn name(self) -> &'static str {
        match self {
            Target::Keywords => "keywords",
            Target::Keywords4 => "keywords_4",
            Target::Hexadecimal => "hexadecimal",
            Target::Hexadecimal4 => "hexadecimal_4",
            Target::Hsl => "hsl",
            Target::Hsl4 => "hsl_4",
            Target::Hwb4 => "hwb_4",
            Target::Lab4 => "lab_4",
            Target::Oklab4 => "oklab_4",
            Target::Lch4 => "lch_4",
            Target::Oklch4 => "oklch_4",
            Target::Function4 => "function_4",
        }
    }

    /// Look up a target by its command-line name or `_3` alias.
    pub fn from_name(name: &str) -> Option<Target> {
        Target::from_str(name, false).ok()
    }

    /// CSS Color level the target's inputs are written for.
    pub fn level(self) -> Level {
        match self {
            Target::Keywords | Target::Hexadecimal | Target::Hsl => Level::Three,
            _ => Level::Four,
        }
    }

    /// Name of the generated file, `color_<name>.json`.
    pub fn file_name(self) -> String {
        format!("color_{}.json", self.name())
    }

    /// Build the test table for this target.
    pub fn generate(self) -> TestTable {
        match self {
            Target::Keywords => keyword_tests(Level::Three),
            Target::Keywords4 => keyword_tests(Level::Four),
            Target::Hexadecimal => hexadecimal_tests(Level::Three),
            Target::Hexadecimal4 => hexadecimal_tests(Level::Four),
            Target::Hsl => hsl_tests(Level::Three),
            Target::Hsl4 => hsl_tests(Level::Four),
            Target::Hwb4 => hwb_tests(),
            Target::Lab4 => space_tests("lab", grid::lab_samples(grid::LAB_RATIOS)),
            Target::Oklab4 => space_tests("oklab", grid::lab_samples(grid::OKLAB_RATIOS)),
            Target::Lch4 => space_tests("lch", grid::lch_samples(grid::LCH_RATIOS)),
            Target::Oklch4 => space_tests("oklch", grid::lch_samples(grid::OKLCH_RATIOS)),
            Target::Function4 => color_function_tests(),
        }
    }
}

fn byte_channels(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(f64::from)
}

fn keyword_tests(level: Level) -> TestTable {
    let mut tests = TestTable::new();
    match level {
        Level::Three => {
            tests.insert("transparent", Some(rgb([0.0; 3], Some(0.0))));
            for &(name, channels) in keywords::NAMED_COLORS {
                tests.insert(name, Some(rgb(byte_channels(channels), None)));
            }
            for &variant in keywords::CASE_VARIANTS {
                tests.insert(variant, Some(rgb([0.0; 3], None)));
            }
            for &invalid in keywords::INVALID {
                tests.insert(invalid, None);
            }
        }
        Level::Four => {
            for &(name, channels) in keywords::LEVEL_4_COLORS {
                tests.insert(name, Some(rgb(byte_channels(channels), None)));
            }
        }
    }
    tests
}

/// Level 3 has no alpha in hex notation, so those samples are left out.
fn hexadecimal_tests(level: Level) -> TestTable {
    grid::hex_samples()
        .into_iter()
        .filter(|sample| level == Level::Four || sample.alpha.is_none())
        .map(|sample| {
            let expected = rgb(byte_channels(sample.rgb), sample.alpha);
            (sample.test, Some(expected))
        })
        .collect()
}

/// Level 3 uses percentages for saturation and lightness and has no `none`.
fn hsl_tests(level: Level) -> TestTable {
    let mut tests = TestTable::new();
    for sample in grid::hsl_samples() {
        let [hue, saturation, lightness] = sample.channels;
        let test = match level {
            Level::Three => match (hue, saturation, lightness) {
                (Some(hue), Some(saturation), Some(lightness)) => {
                    let channels =
                        [Value::Number(hue), Value::percent(saturation), Value::percent(lightness)];
                    function("hsl", &channels, alpha_value(&sample).as_ref(), level)
                }
                _ => continue,
            },
            Level::Four => four_channel_function("hsl", &sample),
        };
        let [hue, saturation, lightness] = sample.resolved();
        tests.insert(test, Some(rgb(hsl_to_rgb(hue, saturation, lightness), sample.alpha)));
    }
    tests
}

fn hwb_tests() -> TestTable {
    grid::hwb_samples()
        .map(|sample| {
            let test = four_channel_function("hwb", &sample);
            let [hue, white, black] = sample.resolved();
            (test, Some(rgb(hwb_to_rgb(hue, white, black), sample.alpha)))
        })
        .collect()
}

fn alpha_value(sample: &Sample) -> Option<Value> {
    sample.alpha.map(Value::Number)
}

fn four_channel_function(name: &str, sample: &Sample) -> String {
    let channels = sample.channels.map(Value::from);
    function(name, &channels, alpha_value(sample).as_ref(), Level::Four)
}

/// Lab-like and lch-like tests, whose expected values stay in their space.
fn space_tests(name: &str, samples: Vec<SpaceSample>) -> TestTable {
    samples
        .into_iter()
        .map(|sample| {
            let test = function(name, &sample.channels, sample.alpha.as_ref(), Level::Four);
            let channels = sample.expected.map(Value::Number);
            let alpha = sample.expected_alpha.map(Value::Number);
            let expected = function(name, &channels, alpha.as_ref(), Level::Four);
            (test, Some(expected))
        })
        .collect()
}

/// Unsupported color spaces only get the first sample, expected invalid.
fn color_function_tests() -> TestTable {
    let samples = grid::color_samples();
    let mut tests = TestTable::new();
    for space in grid::COLOR_SPACES {
        let count = if space.canonical.is_some() { samples.len() } else { 1 };
        for sample in samples.iter().take(count) {
            let mut channels = vec![Value::text(space.name)];
            channels.extend(sample.channels.iter().cloned());
            let test = function("color", &channels, sample.alpha.as_ref(), Level::Four);
            let expected = space.canonical.zip(sample.expected).map(|(canonical, expected)| {
                let mut channels = vec![Value::text(canonical)];
                channels.extend(expected.channels.map(Value::from));
                let alpha = expected.alpha.map(Value::Number);
                function("color", &channels, alpha.as_ref(), Level::Four)
            });
            tests.insert(test, expected);
        }
    }
    tests
}
