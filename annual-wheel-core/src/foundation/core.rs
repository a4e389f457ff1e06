use std::fmt;

use crate::foundation::error::{WheelError, WheelResult};

pub use kurbo::{BezPath, Point, Vec2};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SWEDISH_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Mars",
    "April",
    "Maj",
    "Juni",
    "Juli",
    "Augusti",
    "September",
    "Oktober",
    "November",
    "December",
];

/// Calendar month as a zero-based index (January = 0).
///
/// A `Month` always holds a value in `0..=11`; construction from anything wider goes through
/// [`Month::new`], which reports [`WheelError::InvalidMonthIndex`] instead of clamping.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Number of months in a wheel.
    pub const COUNT: usize = 12;

    /// Validate a raw month index.
    pub fn new(index: i64) -> WheelResult<Self> {
        Self::for_event(index, None)
    }

    /// Validate a raw month index, attributing failures to `event_id`.
    pub fn for_event(index: i64, event_id: Option<i64>) -> WheelResult<Self> {
        match u8::try_from(index) {
            Ok(v) if usize::from(v) < Self::COUNT => Ok(Self(v)),
            _ => Err(WheelError::invalid_month(index, event_id)),
        }
    }

    /// Zero-based index in `0..=11`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Index as `f64`, the form the angle functions take.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// All twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Month> {
        (0u8..12).map(Month)
    }

    /// English month name ("January" ..).
    pub fn english_name(self) -> &'static str {
        ENGLISH_MONTHS[usize::from(self.0)]
    }

    /// Swedish month name ("Januari" ..).
    pub fn swedish_name(self) -> &'static str {
        SWEDISH_MONTHS[usize::from(self.0)]
    }

    /// Parse an English month name, ignoring case and surrounding whitespace.
    pub fn from_english_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ENGLISH_MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))
            .and_then(|i| u8::try_from(i).ok())
            .map(Month)
    }
}

impl TryFrom<i64> for Month {
    type Error = WheelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(value: Month) -> Self {
        value.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Angular span in radians with `start_angle <= end_angle`.
///
/// Angles follow the wheel convention: 0 is 12 o'clock and values grow clockwise.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AngleSpan {
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl AngleSpan {
    /// Build a span from two angles in either order.
    pub fn ordered(a: f64, b: f64) -> Self {
        Self {
            start_angle: a.min(b),
            end_angle: a.max(b),
        }
    }

    /// Angular width in radians.
    pub fn width(self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Midpoint angle.
    pub fn mid(self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }

    /// Shrink both ends by `pad / 2`, never past the midpoint.
    pub fn padded(self, pad: f64) -> Self {
        let half = (pad * 0.5).clamp(0.0, self.width() * 0.5);
        Self {
            start_angle: self.start_angle + half,
            end_angle: self.end_angle - half,
        }
    }
}

/// Straight-alpha RGBA8 color, serialized as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> WheelResult<Self> {
        let raw = s.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WheelError::validation(format!("invalid hex color '{raw}'")));
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let short = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
        let parsed = match hex.len() {
            3 => short(0).and_then(|r| Ok(Self::rgb(r, short(1)?, short(2)?))),
            6 => channel(0).and_then(|r| Ok(Self::rgb(r, channel(2)?, channel(4)?))),
            8 => channel(0).and_then(|r| {
                Ok(Self {
                    r,
                    g: channel(2)?,
                    b: channel(4)?,
                    a: channel(6)?,
                })
            }),
            _ => {
                return Err(WheelError::validation(format!(
                    "hex color '{raw}' must have 3, 6 or 8 digits"
                )));
            }
        };
        parsed.map_err(|e| WheelError::validation(format!("invalid hex color '{raw}': {e}")))
    }

    /// Lowercase hex form; alpha is only written when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    /// Perceived luminance in `[0, 1]` (ITU-R BT.601 weights).
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Black or white, whichever reads better on top of `self`.
    pub fn contrast_text(self) -> Self {
        if self.luminance() > 0.5 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Alpha as an opacity in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = WheelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
