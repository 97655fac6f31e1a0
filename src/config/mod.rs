//! Configuration management module
//!
//! This module handles loading and saving the component configuration: the layout
//! scale used to convert between device pixels and logical units, and night-mode
//! defaults. Configuration is stored as JSON with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{LayoutScale, NightModeDefaults, WidgetConfig};
