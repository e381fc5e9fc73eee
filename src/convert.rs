//! HSL and HWB to sRGB conversion
//!
//! Results are on the 0-255 scale. Floating-point operations are kept in a
//! fixed order so generated fixtures are reproducible bit for bit.

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Convert hue/lightness/saturation, all in the 0-1 range, to unit RGB.
///
/// The hue wraps around, so `1.0` is the same as `0.0`.
pub fn hls_to_unit_rgb(hue: f64, lightness: f64, saturation: f64) -> [f64; 3] {
    if saturation == 0.0 {
        return [lightness; 3];
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - (lightness * saturation)
    };
    let m1 = 2.0 * lightness - m2;
    [
        hue_channel(m1, m2, hue + ONE_THIRD),
        hue_channel(m1, m2, hue),
        hue_channel(m1, m2, hue - ONE_THIRD),
    ]
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Convert CSS `hsl()` channels to 0-255 RGB.
///
/// `hue` is in degrees, `saturation` and `lightness` in percent.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    hls_to_unit_rgb(hue / 360.0, lightness / 100.0, saturation / 100.0).map(|c| c * 255.0)
}

/// Convert CSS `hwb()` channels to 0-255 RGB.
///
/// `hue` is in degrees, `white` and `black` in percent. When whiteness and
/// blackness add up to 100 or more the result is the gray
/// `white / (white + black)`.
pub fn hwb_to_rgb(hue: f64, white: f64, black: f64) -> [f64; 3] {
    if white + black >= 100.0 {
        return [white / (white + black) * 255.0; 3];
    }
    hls_to_unit_rgb(hue / 360.0, 0.5, 1.0)
        .map(|c| ((c * (100.0 - white - black)) + white) / 100.0 * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 100.0, 50.0), [255.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(120.0, 100.0, 50.0), [0.0, 255.0, 0.0]));
        assert!(close(hsl_to_rgb(240.0, 100.0, 50.0), [0.0, 0.0, 255.0]));
    }

    #[test]
    fn test_hsl_black_white_gray() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_eq!(hsl_to_rgb(188.0, 0.0, 100.0), [255.0, 255.0, 255.0]);
        assert!(close(hsl_to_rgb(17.5, 88.0, 100.0), [255.0, 255.0, 255.0]));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 44.0), [44.0 / 100.0 * 255.0; 3]);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert!(close(hsl_to_rgb(360.0, 100.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0)));
        assert!(close(hsl_to_rgb(-120.0, 100.0, 50.0), hsl_to_rgb(240.0, 100.0, 50.0)));
    }

    #[test]
    fn test_hwb_gray_when_saturated() {
        assert_eq!(hwb_to_rgb(0.0, 100.0, 0.0), [255.0; 3]);
        assert_eq!(hwb_to_rgb(190.7, 0.0, 100.0), [0.0; 3]);
        assert_eq!(hwb_to_rgb(0.0, 100.0, 100.0), [127.5; 3]);
    }

    #[test]
    fn test_hwb_blend() {
        assert!(close(hwb_to_rgb(0.0, 0.0, 0.0), [255.0, 0.0, 0.0]));
        let [r, g, b] = hwb_to_rgb(0.0, 55.0, 12.0);
        assert!((r - (88.0 / 100.0 * 255.0)).abs() < 1e-9);
        assert!((g - (55.0 / 100.0 * 255.0)).abs() < 1e-9);
        assert_eq!(g, b);
    }
}
