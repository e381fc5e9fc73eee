//! Numeric rounding and textual trimming for fixture values
//!
//! Every number written into a fixture goes through [`trim`]: integral values
//! are written without a fractional part, everything else as the shortest
//! decimal that round-trips. Channel values are additionally rounded to six
//! decimals by [`round_channel`] first.

/// Nudge added before rounding channels, so that values sitting just below a
/// six-decimal boundary because of binary representation round up.
const ROUNDING_NUDGE: f64 = 0.0000001;

/// Number of decimals kept for channel values.
pub const CHANNEL_DECIMALS: usize = 6;

/// Round `value` to `decimals` decimal places.
///
/// Rounding is done on the exact binary value (ties to even), the same way
/// a decimal formatter would print it, rather than by scaling with powers
/// of ten which introduces its own representation error.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Round a channel value to six decimals, nudged upwards by 1e-7.
///
/// Rounding is deterministic: the same input always gives the same output.
pub fn round_channel(value: f64) -> f64 {
    round_to(value + ROUNDING_NUDGE, CHANNEL_DECIMALS)
}

/// Write a number the way the fixtures expect it.
///
/// - integral values have no fractional part (`255`, `-10`, and `0` for `-0.0`)
/// - other values use the shortest round-trip decimal (`0.533333`)
/// - magnitudes below `1e-4` switch to exponent notation (`1e-05`)
pub fn trim(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{}", value);
    }
    if value.abs() < 1e-4 {
        return exponent(value);
    }
    format!("{}", value)
}

/// Round a channel value and trim it.
pub fn channel(value: f64) -> String {
    trim(round_channel(value))
}

/// Exponent notation with a signed, at least two-digit exponent.
fn exponent(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
