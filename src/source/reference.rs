//! Source references

use crate::error::{ImageWidgetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved image reference: an absolute URI or a path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    uri: String,
    scheme: Option<String>,
}

impl SourceRef {
    /// Parse a raw reference
    ///
    /// Accepts `scheme:rest` URIs (hierarchical schemes such as `http` must carry an
    /// authority, `data:` must carry a payload separator) and bare paths. Whitespace,
    /// control characters and empty input are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let uri = raw.trim();
        let malformed = || ImageWidgetError::MalformedSource(raw.to_string());

        if uri.is_empty() || uri.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(malformed());
        }

        let Some(scheme) = scheme_of(uri) else {
            // Relative or absolute path; a colon before any slash means a broken scheme
            let first_colon = uri.find(':');
            let first_slash = uri.find('/');
            return match (first_colon, first_slash) {
                (Some(c), Some(s)) if c < s => Err(malformed()),
                (Some(_), None) => Err(malformed()),
                _ => Ok(Self {
                    uri: uri.to_string(),
                    scheme: None,
                }),
            };
        };

        let rest = &uri[scheme.len() + 1..];
        let valid = match scheme.as_str() {
            "http" | "https" | "ftp" => rest
                .strip_prefix("//")
                .is_some_and(|authority| !authority.is_empty() && !authority.starts_with('/')),
            "file" => rest.starts_with('/'),
            "data" => rest.contains(','),
            _ => !rest.is_empty(),
        };
        if !valid {
            return Err(malformed());
        }

        Ok(Self {
            uri: uri.to_string(),
            scheme: Some(scheme),
        })
    }

    /// The reference as written (trimmed)
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Lowercased URI scheme, `None` for paths
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`, then `:`
fn scheme_of(uri: &str) -> Option<String> {
    let colon = uri.find(':')?;
    let candidate = &uri[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    // Single letters are drive prefixes, not schemes
    if candidate.len() == 1 {
        return None;
    }
    Some(candidate.to_ascii_lowercase())
}
