//! Configuration data models
//!
//! This module defines the data structures used for component configuration.

use serde::{Deserialize, Serialize};

/// Top-level component configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Layout scale for unit conversion
    pub layout: LayoutScale,
    /// Night-mode defaults
    pub night_mode: NightModeDefaults,
}

/// Relationship between the framework's logical unit and device pixels
///
/// Logical ("design") pixels are defined against a fixed design width; the physical
/// screen width maps them to device pixels. `dp` lengths are scaled by `density`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutScale {
    /// Width of the design canvas in logical pixels
    pub design_width: u32,
    /// Physical screen width in device pixels
    pub screen_width: u32,
    /// Device pixels per `dp`
    pub density: f32,
}

/// Night-mode defaults applied to every new component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightModeDefaults {
    /// Whether components participate in automatic night-mode filtering until told otherwise
    pub enabled_by_default: bool,
    /// ARGB color of the darkening overlay (default: 50% black)
    pub overlay_argb: u32,
}

impl LayoutScale {
    /// Convert device pixels to logical units
    ///
    /// Falls back to the identity mapping when either width is zero.
    pub fn to_logical(&self, device_px: f32) -> f32 {
        if self.design_width == 0 || self.screen_width == 0 {
            return device_px;
        }
        device_px * self.design_width as f32 / self.screen_width as f32
    }

    /// Convert logical units to device pixels
    pub fn to_device(&self, logical_px: f32) -> f32 {
        if self.design_width == 0 || self.screen_width == 0 {
            return logical_px;
        }
        logical_px * self.screen_width as f32 / self.design_width as f32
    }
}

impl Default for LayoutScale {
    fn default() -> Self {
        Self {
            design_width: 750,
            screen_width: 1080,
            density: 3.0,
        }
    }
}

impl Default for NightModeDefaults {
    fn default() -> Self {
        Self {
            enabled_by_default: true,
            overlay_argb: 0x8000_0000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.layout.design_width, 750);
        assert!(config.night_mode.enabled_by_default);
        assert_eq!(config.night_mode.overlay_argb, 0x8000_0000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"layout": {"screen_width": 750}}"#).unwrap();
        assert_eq!(config.layout.screen_width, 750);
        assert_eq!(config.layout.design_width, 750);
        assert!(config.night_mode.enabled_by_default);
    }

    #[test]
    fn test_logical_conversion() {
        let scale = LayoutScale {
            design_width: 750,
            screen_width: 1500,
            density: 2.0,
        };
        assert!((scale.to_logical(300.0) - 150.0).abs() < f32::EPSILON);
        assert!((scale.to_device(150.0) - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_width_is_identity() {
        let scale = LayoutScale {
            design_width: 0,
            screen_width: 1080,
            density: 1.0,
        };
        assert!((scale.to_logical(42.0) - 42.0).abs() < f32::EPSILON);
    }
}
