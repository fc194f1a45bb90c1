use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A byte count as it arrives from a rendering context: a number, a numeric
/// string, or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ByteCount {
    Missing,
    Number(f64),
    Text(String),
}

impl ByteCount {
    /// The finite numeric value, or `None` when the input is not renderable.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            ByteCount::Missing => return None,
            ByteCount::Number(value) => *value,
            ByteCount::Text(text) => {
                let trimmed = text.trim();
                // f64::from_str accepts "inf" and "NaN"; both are filtered below.
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for ByteCount {
    fn from(value: f64) -> Self {
        ByteCount::Number(value)
    }
}

impl From<u64> for ByteCount {
    fn from(value: u64) -> Self {
        ByteCount::Number(value as f64)
    }
}

impl From<i64> for ByteCount {
    fn from(value: i64) -> Self {
        ByteCount::Number(value as f64)
    }
}

impl From<u32> for ByteCount {
    fn from(value: u32) -> Self {
        ByteCount::Number(f64::from(value))
    }
}

impl From<i32> for ByteCount {
    fn from(value: i32) -> Self {
        ByteCount::Number(f64::from(value))
    }
}

impl From<&str> for ByteCount {
    fn from(value: &str) -> Self {
        ByteCount::Text(value.to_string())
    }
}

impl From<String> for ByteCount {
    fn from(value: String) -> Self {
        ByteCount::Text(value)
    }
}

impl<T: Into<ByteCount>> From<Option<T>> for ByteCount {
    fn from(value: Option<T>) -> Self {
        value.map_or(ByteCount::Missing, Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Bytes,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl Unit {
    pub const ALL: [Unit; 6] =
        [Unit::Bytes, Unit::Kilo, Unit::Mega, Unit::Giga, Unit::Tera, Unit::Peta];

    pub const BASE: f64 = 1024.0;

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Bytes => "bytes",
            Unit::Kilo => "kB",
            Unit::Mega => "MB",
            Unit::Giga => "GB",
            Unit::Tera => "TB",
            Unit::Peta => "PB",
        }
    }

    pub fn exponent(&self) -> i32 {
        *self as i32
    }

    /// Number of bytes in one of this unit.
    pub fn factor(&self) -> f64 {
        Self::BASE.powi(self.exponent())
    }

    /// Logarithmic bucket for a positive value. Values below one byte land in
    /// `Bytes`; values past the petabyte bucket have no unit.
    pub fn for_value(value: f64) -> Option<Unit> {
        let index = (value.log2() / Self::BASE.log2()).floor();
        if index.is_nan() {
            return None;
        }
        let mut index = index.max(0.0) as i32;
        // Nudge back into place when the logarithm lands a hair off a boundary.
        if index > 0 && Self::BASE.powi(index) > value {
            index -= 1;
        } else if Self::BASE.powi(index + 1) <= value {
            index += 1;
        }
        Self::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What to render for values beyond the largest unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Express the value in petabytes. The integer part grows without bound,
    /// so `1e300` renders with close to three hundred digits.
    #[default]
    Clamp,
    /// Treat the value as not renderable.
    Blank,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Clamp => "clamp",
            OverflowPolicy::Blank => "blank",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamp" => Ok(OverflowPolicy::Clamp),
            "blank" => Ok(OverflowPolicy::Blank),
            _ => Err(format!("Unknown overflow policy '{s}'")),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteFormatter {
    overflow: OverflowPolicy,
}

impl ByteFormatter {
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Render a byte count such as `"1.5 kB"`. Returns an empty string when the
    /// input is missing, not a finite number, or negative.
    pub fn format(&self, input: impl Into<ByteCount>) -> String {
        let Some(value) = input.into().value() else {
            return String::new();
        };
        if value == 0.0 {
            return "0 bytes".to_string();
        }
        if value < 0.0 {
            return String::new();
        }

        let unit = match (Unit::for_value(value), self.overflow) {
            (Some(unit), _) => unit,
            (None, OverflowPolicy::Clamp) => Unit::Peta,
            (None, OverflowPolicy::Blank) => return String::new(),
        };

        format!("{} {}", to_fixed_one(value / unit.factor()), unit)
    }
}

/// Format bytes into a human-readable string, clamping oversized values to
/// petabytes.
pub fn format_bytes(input: impl Into<ByteCount>) -> String {
    ByteFormatter::default().format(input)
}

/// One decimal place with half-way cases rounded up.
///
/// `{:.1}` rounds exact ties to even. A tie at one decimal needs the value to
/// be an odd multiple of 0.25, which is exactly representable, so it is
/// detected directly.
fn to_fixed_one(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).ceil() / 10.0);
    }
    format!("{value:.1}")
}
