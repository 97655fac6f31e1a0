//! Native image view capability
//!
//! The component never draws pixels itself. It drives a realised view through the
//! `ImageView` trait and receives decode results back over a `LoadStatusSender`.

use crate::source::SourceRef;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Scaling strategy mapping image pixels into the component box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Scale uniformly to cover the box, cropping overflow
    #[default]
    Cover,
    /// Scale uniformly to fit inside the box
    Contain,
    /// Stretch to fill the box
    Fill,
    /// No scaling
    None,
    /// `None` or `Contain`, whichever is smaller
    ScaleDown,
}

impl ObjectFit {
    /// Parse an object-fit or resize-mode keyword
    ///
    /// Returns `None` for unknown keywords; callers fall back to `Cover`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cover" => Some(Self::Cover),
            "contain" => Some(Self::Contain),
            "fill" | "stretch" => Some(Self::Fill),
            "none" | "center" => Some(Self::None),
            "scale-down" => Some(Self::ScaleDown),
            _ => None,
        }
    }
}

/// A single corner of the component box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    /// Top left
    TopLeft,
    /// Top right
    TopRight,
    /// Bottom left
    BottomLeft,
    /// Bottom right
    BottomRight,
}

impl Corner {
    /// All corners in storage order
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Index into per-corner storage
    pub const fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// A validated border radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BorderRadius {
    /// Absolute radius in device pixels
    Length(f32),
    /// Radius as a percentage of the box size
    Percent(f32),
}

impl BorderRadius {
    /// Build a radius, rejecting non-finite and negative values
    pub fn length(value: f32) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self::Length(value))
    }

    /// Build a percentage radius, rejecting non-finite and negative values
    pub fn percent(value: f32) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self::Percent(value))
    }
}

/// Porter-Duff compositing rule for color filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Draw the filter color over the image, keeping the image's alpha shape
    SrcAtop,
}

/// A color filter applied over the rendered image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFilter {
    /// Color as `0xAARRGGBB`
    pub argb: u32,
    /// Compositing rule
    pub mode: BlendMode,
}

impl ColorFilter {
    /// The night-mode overlay: `argb` drawn with source-atop
    pub const fn overlay(argb: u32) -> Self {
        Self {
            argb,
            mode: BlendMode::SrcAtop,
        }
    }
}

/// Result of a decode attempt, produced by the view's load pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Image decoded; dimensions in device pixels
    Complete {
        /// Width in device pixels
        pixel_width: u32,
        /// Height in device pixels
        pixel_height: u32,
    },
    /// Decode or fetch failed
    Error(String),
}

/// Sender handed to the view so its load pipeline can report outcomes from any thread
pub type LoadStatusSender = mpsc::Sender<LoadOutcome>;

/// Imperative capability of a realised native image view
pub trait ImageView: Send {
    /// Display `source`, or clear the displayed image for `None`
    fn set_source(&mut self, source: Option<&SourceRef>);
    /// Re-dispatch the load of the current source
    fn retry_source(&mut self);
    /// Show `placeholder` while the source is absent or loading
    fn set_placeholder(&mut self, placeholder: Option<&SourceRef>);
    /// Scale mode for the source image
    fn set_object_fit(&mut self, fit: ObjectFit);
    /// Scale mode for the placeholder image
    fn set_alt_object_fit(&mut self, fit: ObjectFit);
    /// Blur radius in device pixels; 0 disables blurring
    fn set_blur_radius(&mut self, radius: f32);
    /// Install an overlay color filter
    fn set_color_filter(&mut self, filter: ColorFilter);
    /// Remove any overlay color filter
    fn clear_color_filter(&mut self);
    /// Set the radius of one corner, or of all corners for `None`
    fn set_border_radius(&mut self, corner: Option<Corner>, radius: BorderRadius);
    /// Query the radius of one corner, or the uniform radius for `None`
    fn border_radius(&self, corner: Option<Corner>) -> Option<BorderRadius>;
    /// Whether animated images start playing on their own
    fn set_autoplay(&mut self, autoplay: bool);
    /// Start animated playback
    fn start_animation(&mut self);
    /// Stop animated playback
    fn stop_animation(&mut self);
    /// Whether animated playback is running
    fn is_animation_running(&self) -> bool;
    /// Install the channel the load pipeline reports outcomes on
    fn set_load_status_sender(&mut self, sender: LoadStatusSender);

    /// Whether the host may apply its own forced-dark rendering to this view
    fn set_force_dark_allowed(&mut self, _allowed: bool) {}
}
