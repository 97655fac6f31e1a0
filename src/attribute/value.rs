//! Loose value coercion
//!
//! Attribute values arrive as JSON values from the scripting layer. Strings, numbers
//! and booleans are accepted interchangeably where it makes sense; `null` means
//! "missing" and selects the documented default.

use crate::config::LayoutScale;
use crate::error::{ImageWidgetError, Result};
use serde_json::Value;

/// Unit of a parsed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Logical pixels (also used for bare numbers)
    Px,
    /// Density-independent pixels
    Dp,
    /// Percentage of a reference size
    Percent,
}

/// A number with a unit, as written by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    /// Numeric value; may be negative or non-finite, callers validate
    pub value: f32,
    /// Unit suffix
    pub unit: LengthUnit,
}

impl Length {
    /// Resolve to device pixels; percentages have no absolute size and yield `None`
    pub fn to_device_px(&self, scale: &LayoutScale) -> Option<f32> {
        match self.unit {
            LengthUnit::Px => Some(scale.to_device(self.value)),
            LengthUnit::Dp => Some(self.value * scale.density),
            LengthUnit::Percent => None,
        }
    }
}

/// Parse `"12"`, `"12px"`, `"4dp"` or `"50%"`
pub fn parse_length(text: &str) -> Result<Length> {
    let trimmed = text.trim();
    let lower = trimmed.to_ascii_lowercase();
    let (number, unit) = if let Some(n) = lower.strip_suffix("px") {
        (n, LengthUnit::Px)
    } else if let Some(n) = lower.strip_suffix("dp") {
        (n, LengthUnit::Dp)
    } else if let Some(n) = lower.strip_suffix('%') {
        (n, LengthUnit::Percent)
    } else {
        (lower.as_str(), LengthUnit::Px)
    };

    let value = number
        .trim()
        .parse::<f32>()
        .map_err(|_| ImageWidgetError::InvalidLength(trimmed.to_string()))?;
    Ok(Length { value, unit })
}

/// Coerce a value to a length: numbers are pixels, strings are parsed
#[allow(clippy::cast_possible_truncation)] // Attribute lengths are stored as f32
pub fn get_length(value: &Value) -> Result<Length> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|v| Length {
                value: v as f32,
                unit: LengthUnit::Px,
            })
            .ok_or_else(|| ImageWidgetError::InvalidLength(n.to_string())),
        Value::String(s) => parse_length(s),
        other => Err(ImageWidgetError::InvalidLength(other.to_string())),
    }
}

/// Coerce a value to a string; `null`, arrays and objects are missing
pub fn get_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerce a value to a boolean, using `default` when missing or unrecognised
pub fn get_bool(value: &Value, default: bool) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => match s.trim() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    }
}
