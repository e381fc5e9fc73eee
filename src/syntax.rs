//! CSS color function rendering
//!
//! Renders channel tuples in the functional notation of CSS Color level 3
//! (`hsla(0, 0%, 0%, 0.5)`) and level 4 (`hsl(0 0% 0% / 0.5)`).

use std::borrow::Cow;
use std::fmt;

use crate::number;

/// CSS Color specification level a fixture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Legacy comma syntax, `rgba()`/`hsla()` for alpha
    Three,
    /// Space syntax with `/ alpha`, `none` channels, `color()`
    Four,
}

impl Level {
    pub fn number(self) -> u8 {
        match self {
            Level::Three => 3,
            Level::Four => 4,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A channel or alpha slot of a color sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `none` keyword
    None,
    /// A plain number, rounded when written as a channel
    Number(f64),
    /// Preformatted text written verbatim (`10%`, `700deg`, `srgb`)
    Text(Cow<'static, str>),
}

impl Value {
    /// Text value, written verbatim.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Value::Text(text.into())
    }

    /// Percentage of an unrounded number (`12.5%`).
    pub fn percent(value: f64) -> Self {
        Value::Text(format!("{}%", number::trim(value)).into())
    }

    /// Angle in degrees of an unrounded number (`700deg`).
    pub fn degrees(value: f64) -> Self {
        Value::Text(format!("{}deg", number::trim(value)).into())
    }

    /// Text of this value in a channel position.
    pub fn channel_text(&self) -> Cow<'_, str> {
        match self {
            Value::None => Cow::Borrowed("none"),
            Value::Number(n) => Cow::Owned(number::channel(*n)),
            Value::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Text of this value in the alpha position, where numbers are not rounded.
    pub fn alpha_text(&self) -> Cow<'_, str> {
        match self {
            Value::Number(n) => Cow::Owned(number::trim(*n)),
            other => other.channel_text(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Value::None, Value::Number)
    }
}

impl From<&'static str> for Value {
    fn from(text: &'static str) -> Self {
        Value::Text(Cow::Borrowed(text))
    }
}

/// Render `name(channels [/ alpha])` at the given level.
///
/// Level 3 joins channels with `, ` and appends `a` to the function name when
/// an alpha is present; level 4 joins with spaces and uses ` / alpha`.
pub fn function(name: &str, channels: &[Value], alpha: Option<&Value>, level: Level) -> String {
    let channels: Vec<Cow<'_, str>> = channels.iter().map(Value::channel_text).collect();
    match (level, alpha) {
        (Level::Three, None) => format!("{}({})", name, channels.join(", ")),
        (Level::Three, Some(alpha)) => {
            format!("{}a({}, {})", name, channels.join(", "), alpha.alpha_text())
        }
        (Level::Four, None) => format!("{}({})", name, channels.join(" ")),
        (Level::Four, Some(alpha)) => {
            format!("{}({} / {})", name, channels.join(" "), alpha.alpha_text())
        }
    }
}

/// Drop an alpha of exactly 1, which is the opaque default.
pub fn visible_alpha(alpha: Option<f64>) -> Option<f64> {
    alpha.filter(|&a| a != 1.0)
}

/// Canonical `rgb()`/`rgba()` form of an expected color.
///
/// Channels are on the 0-255 scale. An alpha of exactly 1 is omitted.
pub fn rgb(channels: [f64; 3], alpha: Option<f64>) -> String {
    let channels = channels.map(Value::Number);
    let alpha = visible_alpha(alpha).map(Value::Number);
    function("rgb", &channels, alpha.as_ref(), Level::Three)
}
