//! Parameter grids for generated fixtures
//!
//! Every grid is a fixed, deterministic nested loop over constant tables.
//! Loops are listed outermost first, so alpha always varies slowest. Edge
//! cases (hue above 360, negative lightness, `none` channels, malformed
//! `color()` arguments) are plain table entries.

use crate::number::round_to;
use crate::syntax::{visible_alpha, Value};

/// Alpha values paired with how they are spelled as a percentage.
type AlphaSpelling = (Option<f64>, Option<&'static str>);

const HSL_ALPHAS: &[Option<f64>] = &[None, Some(1.0), Some(0.25), Some(0.0)];
const HSL_LIGHTNESS: &[Option<f64>] = &[Some(0.0), Some(12.5), Some(44.0), Some(100.0), None];
const HSL_SATURATION: &[Option<f64>] = &[Some(0.0), Some(33.33), Some(88.0), Some(100.0), None];
const HSL_HUE: &[Option<f64>] = &[Some(0.0), Some(17.5), Some(188.0), Some(360.0), None];

const HWB_ALPHAS: &[Option<f64>] = &[None, Some(1.0), Some(0.55), Some(0.0)];
const HWB_WHITE: &[Option<f64>] = &[Some(0.0), Some(55.0), Some(92.2), Some(100.0), None];
const HWB_BLACK: &[Option<f64>] = &[Some(0.0), Some(12.0), Some(86.2), Some(100.0), None];
const HWB_HUE: &[Option<f64>] = &[Some(0.0), Some(100.0), Some(190.7), Some(360.0), None];

const LAB_ALPHAS: &[AlphaSpelling] =
    &[(None, None), (Some(1.0), Some("100%")), (Some(0.25), Some("25.0%")), (Some(0.0), Some("0%"))];
const LAB_B: &[f64] = &[0.0, 10.0, 100.0, 115.0, -10.0];
const LAB_A: &[f64] = &[0.0, 20.0, 100.0, 110.0, -10.0];
const LAB_LIGHTNESS: &[f64] = &[0.0, 10.0, 100.0, 110.0, -10.0];

const LCH_HUE: &[f64] = &[0.0, 10.0, 110.0, 700.0, -10.0];
const LCH_CHROMA: &[f64] = &[0.0, 30.0, 100.0, 150.0, -75.0];
const LCH_LIGHTNESS: &[f64] = &[0.0, 10.0, 100.0, 110.0, -10.0];

/// Iterate `(outer, middle, inner)` for every value of `first`, outermost first.
fn nested<A: Copy, T: Copy>(
    first: &'static [A],
    outer: &'static [T],
    middle: &'static [T],
    inner: &'static [T],
) -> impl Iterator<Item = (A, T, T, T)> {
    first.iter().flat_map(move |&a| {
        outer.iter().flat_map(move |&o| {
            middle.iter().flat_map(move |&m| inner.iter().map(move |&i| (a, o, m, i)))
        })
    })
}

/// A three-channel sample whose channels may be `none`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub channels: [Option<f64>; 3],
    pub alpha: Option<f64>,
}

impl Sample {
    /// Channels with `none` resolved to zero.
    pub fn resolved(&self) -> [f64; 3] {
        self.channels.map(|c| c.unwrap_or(0.0))
    }
}

/// `(hue, saturation, lightness)` samples for `hsl()`.
pub fn hsl_samples() -> impl Iterator<Item = Sample> {
    nested(HSL_ALPHAS, HSL_LIGHTNESS, HSL_SATURATION, HSL_HUE).map(
        |(alpha, lightness, saturation, hue)| Sample {
            channels: [hue, saturation, lightness],
            alpha,
        },
    )
}

/// `(hue, white, black)` samples for `hwb()`.
pub fn hwb_samples() -> impl Iterator<Item = Sample> {
    nested(HWB_ALPHAS, HWB_WHITE, HWB_BLACK, HWB_HUE).map(|(alpha, white, black, hue)| Sample {
        channels: [hue, white, black],
        alpha,
    })
}

/// A hexadecimal notation test and the color it denotes.
#[derive(Debug, Clone, PartialEq)]
pub struct HexSample {
    pub test: String,
    pub rgb: [u8; 3],
    pub alpha: Option<f64>,
}

fn hex_alpha_bytes(alpha: Option<f64>) -> (String, String) {
    match alpha {
        None => (String::new(), String::new()),
        Some(alpha) => {
            let byte = (alpha * 255.0).round() as u8;
            let nibble = (alpha * 255.0 / 17.0).round() as u8;
            (format!("{:02x}", byte), format!("{:x}", nibble))
        }
    }
}

/// Long (`#rrggbb[aa]`) and short (`#rgb[a]`) hex notation samples.
///
/// The first grid only uses channels that are multiples of 17 and so gets a
/// short form for every color; the second grid is long form only.
pub fn hex_samples() -> Vec<HexSample> {
    let mut samples = Vec::new();

    let alphas = [None, Some(1.0), Some(round_to(136.0 / 255.0, 6)), Some(0.0)];
    for alpha in alphas {
        let (long_alpha, short_alpha) = hex_alpha_bytes(alpha);
        for blue in [0u8, 68, 255] {
            for green in [0u8, 102, 255] {
                for red in [0u8, 187, 255] {
                    let rgb = [red, green, blue];
                    samples.push(HexSample {
                        test: format!("#{:02x}{:02x}{:02x}{}", red, green, blue, long_alpha),
                        rgb,
                        alpha,
                    });
                    samples.push(HexSample {
                        test: format!(
                            "#{:x}{:x}{:x}{}",
                            red / 17,
                            green / 17,
                            blue / 17,
                            short_alpha
                        ),
                        rgb,
                        alpha,
                    });
                }
            }
        }
    }

    let alphas = [None, Some(1.0), Some(round_to(49.0 / 255.0, 6)), Some(0.0)];
    for alpha in alphas {
        let (long_alpha, _) = hex_alpha_bytes(alpha);
        for blue in [17u8, 33, 198] {
            for green in [4u8, 97, 200] {
                for red in [28u8, 48, 188] {
                    samples.push(HexSample {
                        test: format!("#{:02x}{:02x}{:02x}{}", red, green, blue, long_alpha),
                        rgb: [red, green, blue],
                        alpha,
                    });
                }
            }
        }
    }

    samples
}

/// A test input paired with the expected channels in the same color space.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceSample {
    pub channels: [Value; 3],
    pub alpha: Option<Value>,
    pub expected: [f64; 3],
    pub expected_alpha: Option<f64>,
}

/// Scale factors turning grid values into a lab-like space's ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    /// Applied to `a`/`b` (lab-like) or chroma (lch-like)
    pub chroma: f64,
    pub lightness: f64,
}

pub const LAB_RATIOS: Ratios = Ratios { chroma: 1.25, lightness: 1.0 };
pub const OKLAB_RATIOS: Ratios = Ratios { chroma: 0.004, lightness: 0.01 };
pub const LCH_RATIOS: Ratios = Ratios { chroma: 1.5, lightness: 1.0 };
pub const OKLCH_RATIOS: Ratios = Ratios { chroma: 0.004, lightness: 0.01 };

/// `(lightness, a, b)` samples, three spellings per grid point.
///
/// Spellings are all numbers; percent lightness with the alpha as a
/// percentage; and all channels as percentages.
pub fn lab_samples(ratios: Ratios) -> Vec<SpaceSample> {
    nested(LAB_ALPHAS, LAB_B, LAB_A, LAB_LIGHTNESS)
        .flat_map(|((alpha, alpha_percent), b, a, lightness)| {
            let l = lightness * ratios.lightness;
            let a_scaled = a * ratios.chroma;
            let b_scaled = b * ratios.chroma;
            let expected = [l, a_scaled, b_scaled];
            let expected_alpha = visible_alpha(alpha);
            let alpha_value = alpha.map(Value::Number);
            [
                SpaceSample {
                    channels: [l.into(), a_scaled.into(), b_scaled.into()],
                    alpha: alpha_value.clone(),
                    expected,
                    expected_alpha,
                },
                SpaceSample {
                    channels: [Value::percent(lightness), a_scaled.into(), b_scaled.into()],
                    alpha: alpha_percent.map(Value::text),
                    expected,
                    expected_alpha,
                },
                SpaceSample {
                    channels: [Value::percent(lightness), Value::percent(a), Value::percent(b)],
                    alpha: alpha_value,
                    expected,
                    expected_alpha,
                },
            ]
        })
        .collect()
}

/// `(lightness, chroma, hue)` samples, three spellings per grid point.
///
/// The expected hue is normalized into `[0, 360)`; chroma is not clamped.
pub fn lch_samples(ratios: Ratios) -> Vec<SpaceSample> {
    nested(LAB_ALPHAS, LCH_HUE, LCH_CHROMA, LCH_LIGHTNESS)
        .flat_map(|((alpha, alpha_percent), hue, chroma, lightness)| {
            let l = lightness * ratios.lightness;
            let c = chroma * ratios.chroma;
            let expected = [l, c, hue.rem_euclid(360.0)];
            let expected_alpha = visible_alpha(alpha);
            let alpha_value = alpha.map(Value::Number);
            [
                SpaceSample {
                    channels: [l.into(), c.into(), hue.into()],
                    alpha: alpha_value.clone(),
                    expected,
                    expected_alpha,
                },
                SpaceSample {
                    channels: [Value::percent(lightness), c.into(), hue.into()],
                    alpha: alpha_percent.map(Value::text),
                    expected,
                    expected_alpha,
                },
                SpaceSample {
                    channels: [
                        Value::percent(lightness),
                        Value::percent(chroma),
                        Value::degrees(hue),
                    ],
                    alpha: alpha_value,
                    expected,
                    expected_alpha,
                },
            ]
        })
        .collect()
}

/// A predefined color space accepted (or not) by `color()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpace {
    pub name: &'static str,
    /// Name used in serialized output, `None` for unsupported spaces
    pub canonical: Option<&'static str>,
}

const fn space(name: &'static str, canonical: Option<&'static str>) -> ColorSpace {
    ColorSpace { name, canonical }
}

pub const COLOR_SPACES: &[ColorSpace] = &[
    space("srgb", Some("srgb")),
    space("srgb-linear", Some("srgb-linear")),
    space("display-p3", Some("display-p3")),
    space("a98-rgb", Some("a98-rgb")),
    space("prophoto-rgb", Some("prophoto-rgb")),
    space("rec2020", Some("rec2020")),
    space("xyz", Some("xyz-d65")),
    space("xyz-d50", Some("xyz-d50")),
    space("xyz-d65", Some("xyz-d65")),
    space("xyz-d80", None),
    space("rgb", None),
];

/// Expected `color()` arguments: channels (`None` is `none`) and alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expected {
    pub channels: [Option<f64>; 3],
    pub alpha: Option<f64>,
}

/// Arguments of a `color()` test after the color space name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    pub channels: Vec<Value>,
    pub alpha: Option<Value>,
    /// `None` when the arguments are invalid in every color space
    pub expected: Option<Expected>,
}

fn num(value: f64) -> Value {
    Value::Number(value)
}

fn txt(text: &'static str) -> Value {
    Value::text(text)
}

fn valid(channels: [Option<f64>; 3], alpha: Option<f64>) -> Option<Expected> {
    Some(Expected { channels, alpha })
}

fn sample(channels: Vec<Value>, alpha: Option<Value>, expected: Option<Expected>) -> ColorSample {
    ColorSample { channels, alpha, expected }
}

/// `color()` argument samples.
///
/// Out-of-range channels are kept as-is, out-of-range alpha is clamped to
/// `[0, 1]`, and an alpha of 1 disappears from the expected output.
pub fn color_samples() -> Vec<ColorSample> {
    let zero = Some(0.0);
    vec![
        sample(vec![txt("0%"), txt("0%"), txt("0%")], None, valid([zero; 3], None)),
        sample(vec![txt("10%"), txt("10%"), txt("10%")], None, valid([Some(0.1); 3], None)),
        sample(
            vec![num(0.2), num(0.2), txt("25%")],
            None,
            valid([Some(0.2), Some(0.2), Some(0.25)], None),
        ),
        sample(vec![num(0.0), num(0.0), num(0.0)], Some(num(1.0)), valid([zero; 3], None)),
        sample(vec![txt("0%"), num(0.0), num(0.0)], Some(num(0.5)), valid([zero; 3], Some(0.5))),
        sample(
            vec![txt("20%"), num(0.0), num(10.0)],
            Some(num(0.5)),
            valid([Some(0.2), zero, Some(10.0)], Some(0.5)),
        ),
        sample(
            vec![txt("20%"), num(0.0), num(10.0)],
            Some(txt("50%")),
            valid([Some(0.2), zero, Some(10.0)], Some(0.5)),
        ),
        sample(
            vec![txt("400%"), num(0.0), num(10.0)],
            Some(txt("50%")),
            valid([Some(4.0), zero, Some(10.0)], Some(0.5)),
        ),
        sample(
            vec![txt("50%"), num(-160.0), num(160.0)],
            None,
            valid([Some(0.5), Some(-160.0), Some(160.0)], None),
        ),
        sample(
            vec![txt("50%"), num(-200.0), num(200.0)],
            None,
            valid([Some(0.5), Some(-200.0), Some(200.0)], None),
        ),
        sample(vec![num(0.0), num(0.0), num(0.0)], Some(txt("-10%")), valid([zero; 3], Some(0.0))),
        sample(vec![num(0.0), num(0.0), num(0.0)], Some(txt("110%")), valid([zero; 3], None)),
        sample(vec![num(0.0), num(0.0), num(0.0)], Some(txt("300%")), valid([zero; 3], None)),
        sample(
            vec![num(100.0), num(200.0), num(200.0)],
            None,
            valid([Some(100.0), Some(200.0), Some(200.0)], None),
        ),
        sample(
            vec![num(200.0), num(200.0), num(200.0)],
            Some(txt("200")),
            valid([Some(200.0); 3], None),
        ),
        sample(
            vec![num(-200.0), num(-200.0), num(-200.0)],
            None,
            valid([Some(-200.0); 3], None),
        ),
        sample(
            vec![num(-200.0), num(-200.0), num(-200.0)],
            Some(num(-200.0)),
            valid([Some(-200.0); 3], Some(0.0)),
        ),
        sample(
            vec![txt("100%"), txt("200%"), txt("200%")],
            None,
            valid([Some(1.0), Some(2.0), Some(2.0)], None),
        ),
        sample(
            vec![txt("200%"), txt("200%"), txt("100%")],
            Some(txt("200%")),
            valid([Some(2.0), Some(2.0), Some(1.0)], None),
        ),
        sample(
            vec![txt("0%"), txt("-100%"), txt("-200.0%")],
            Some(txt("-200%")),
            valid([zero, Some(-1.0), Some(-2.0)], Some(0.0)),
        ),
        sample(vec![Value::None, Value::None, Value::None], None, valid([None; 3], None)),
        sample(
            vec![num(10.0), txt("none"), txt("none")],
            Some(num(0.5)),
            valid([Some(10.0), None, None], Some(0.5)),
        ),
        // Percentages need no separating whitespace
        sample(vec![txt("10%90%.1%")], None, valid([Some(0.1), Some(0.9), Some(0.001)], None)),
        sample(vec![txt("a"), txt("b"), txt("c")], None, None),
        sample(vec![num(1.0), num(1.0)], None, None),
        sample(vec![num(1.0), num(1.0), num(1.0), num(1.0)], None, None),
        sample(vec![txt("10% 90.% .1%")], None, None),
    ]
}
