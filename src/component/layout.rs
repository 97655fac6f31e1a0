//! Layout dimensions as seen by the image component
//!
//! Only "is this dimension resolved, and did it change" matters here; the actual
//! layout computation belongs to the host.

use crate::attribute::value::{self, Length};
use serde_json::Value;

/// A width or height that is either resolved or pending layout
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Not yet resolved (missing, empty or `auto`)
    #[default]
    Undefined,
    /// Resolved to a concrete length
    Defined(Length),
}

impl Dimension {
    /// Interpret an attribute value; anything unparsable or negative is undefined
    pub fn from_value(value: &Value) -> Self {
        if let Value::String(s) = value {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
                return Self::Undefined;
            }
        }
        match value::get_length(value) {
            Ok(length) if length.value.is_finite() && length.value >= 0.0 => {
                Self::Defined(length)
            }
            _ => Self::Undefined,
        }
    }

    /// Whether the dimension is resolved
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}
