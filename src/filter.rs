//! Blur filter
//!
//! The `filter` attribute accepts a CSS-like function list such as
//! `"blur(5px) grayscale(1)"`, or an already-parsed object such as `{"blur": "5px"}`.
//! Only `blur` is honoured; other functions are skipped without error. Blur lengths
//! may be `px` or `dp`. Percentages are a caller error and the filter is ignored.

use crate::attribute::value::{self, LengthUnit};
use crate::component::state::ImageState;
use crate::config::LayoutScale;
use crate::error::{ImageWidgetError, Result};
use crate::view::ImageView;
use serde_json::Value;
use tracing::debug;

const BLUR: &str = "blur";

/// Extract the blur argument from a filter value
///
/// `Ok(None)` means the filter has no blur (or is empty); `Err` means the filter or the
/// blur length is malformed.
pub fn parse_blur(filter: &Value) -> Result<Option<String>> {
    match filter {
        Value::Null => Ok(None),
        Value::String(text) => blur_from_function_list(text),
        Value::Object(map) => Ok(map
            .get(BLUR)
            .and_then(value::get_string)
            .filter(|s| !s.trim().is_empty())),
        other => Err(ImageWidgetError::InvalidFilter(other.to_string())),
    }
}

/// Scan `name(args) name(args) ...` for the first `blur`
fn blur_from_function_list(text: &str) -> Result<Option<String>> {
    let invalid = || ImageWidgetError::InvalidFilter(text.to_string());
    let mut rest = text.trim();
    if rest.is_empty() || rest.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    while !rest.is_empty() {
        let open = rest.find('(').ok_or_else(invalid)?;
        let close = matching_paren(rest, open).ok_or_else(invalid)?;
        let name = rest[..open].trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(invalid());
        }
        let args = rest[open + 1..close].trim();
        if name.eq_ignore_ascii_case(BLUR) {
            return Ok(Some(args.to_string()));
        }
        rest = rest[close + 1..].trim_start();
    }
    Ok(None)
}

/// Byte index of the `)` closing the `(` at `open`, honouring nesting
fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Resolve a blur argument to a device-pixel radius, clamped to be non-negative
pub fn blur_radius(argument: &str, scale: &LayoutScale) -> Result<f32> {
    if argument.trim().is_empty() {
        return Ok(0.0);
    }
    let length = value::parse_length(argument)?;
    if length.unit == LengthUnit::Percent {
        return Err(ImageWidgetError::InvalidLength(argument.to_string()));
    }
    let radius = length.to_device_px(scale).unwrap_or(0.0);
    Ok(if radius.is_finite() { radius.max(0.0) } else { 0.0 })
}

/// Applies the `filter` attribute
pub struct FilterController;

impl FilterController {
    /// Parse `filter` and forward its blur radius
    ///
    /// Returns the forwarded radius, or `None` when nothing was forwarded.
    pub fn apply(
        state: &mut ImageState,
        view: Option<&mut dyn ImageView>,
        scale: &LayoutScale,
        filter: &Value,
    ) -> Option<f32> {
        let argument = match parse_blur(filter) {
            Ok(Some(argument)) => argument,
            Ok(None) => return None,
            Err(e) => {
                debug!("Ignoring filter: {}", e);
                return None;
            }
        };

        let radius = match blur_radius(&argument, scale) {
            Ok(radius) => radius,
            Err(e) => {
                debug!("Ignoring blur: {}", e);
                return None;
            }
        };

        state.blur_radius = radius;
        if let Some(view) = view {
            view.set_blur_radius(radius);
        }
        Some(radius)
    }
}
