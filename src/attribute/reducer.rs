//! Attribute reduction
//!
//! `reduce` applies the state half of an attribute write and returns the single
//! imperative follow-up the component must run. It never touches the view, which
//! keeps precedence rules testable without one.

use crate::attribute::key::{AttributeKey, BorderPosition};
use crate::attribute::value::{self, LengthUnit};
use crate::component::layout::Dimension;
use crate::component::state::ImageState;
use crate::config::LayoutScale;
use crate::view::{BorderRadius, ObjectFit};
use serde_json::Value;
use tracing::debug;

/// Imperative follow-up of an attribute write
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing further to do
    None,
    /// Resolve and load the raw `src` value
    LoadSource(Option<String>),
    /// Forward the source scale mode
    SetObjectFit(ObjectFit),
    /// Forward the placeholder scale mode
    SetAltObjectFit(ObjectFit),
    /// Parse the filter spec and forward its blur radius
    ApplyFilter(Value),
    /// Resolve the raw `alt` value into a placeholder
    ResolvePlaceholder(Option<String>),
    /// A layout dimension changed; retry the source if the gate allows
    RetrySource,
    /// Night-mode inputs changed; re-evaluate the overlay
    EvaluateNightMode,
    /// Stop playback, then forward the autoplay flag
    SetAutoplay(bool),
    /// Forward a validated border radius
    SetBorderRadius(BorderPosition, BorderRadius),
}

/// Apply an attribute write to `state` and return the follow-up action
pub fn reduce(
    state: &mut ImageState,
    scale: &LayoutScale,
    key: AttributeKey,
    value: &Value,
) -> Action {
    match key {
        AttributeKey::Src => {
            state.src_pending_init = true;
            Action::LoadSource(value::get_string(value))
        }
        AttributeKey::ResizeMode | AttributeKey::ObjectFit => {
            let fit = object_fit_or_cover(value);
            state.object_fit = fit;
            Action::SetObjectFit(fit)
        }
        AttributeKey::AltObjectFit => {
            let fit = object_fit_or_cover(value);
            state.alt_object_fit = fit;
            Action::SetAltObjectFit(fit)
        }
        AttributeKey::Filter => Action::ApplyFilter(value.clone()),
        AttributeKey::Alt => Action::ResolvePlaceholder(value::get_string(value)),
        AttributeKey::Width => resize(&mut state.width, value),
        AttributeKey::Height => resize(&mut state.height, value),
        AttributeKey::EnableNightMode => {
            if state.night_mode_explicitly_set {
                debug!("Ignoring enablenightmode: forcedark already set");
                return Action::None;
            }
            state.night_mode_enabled = value::get_bool(value, true);
            Action::EvaluateNightMode
        }
        AttributeKey::ForceDark => {
            state.night_mode_explicitly_set = true;
            state.night_mode_enabled = value::get_bool(value, true);
            Action::EvaluateNightMode
        }
        AttributeKey::Autoplay => {
            let autoplay = value::get_bool(value, true);
            state.autoplay = autoplay;
            Action::SetAutoplay(autoplay)
        }
        AttributeKey::BorderRadius(position) => match border_radius(scale, value) {
            Some(radius) => {
                state.border_radii.set(position, radius);
                Action::SetBorderRadius(position, radius)
            }
            None => {
                debug!("Ignoring invalid {}: {}", key.as_str(), value);
                Action::None
            }
        },
    }
}

fn object_fit_or_cover(value: &Value) -> ObjectFit {
    value::get_string(value)
        .and_then(|s| ObjectFit::parse(&s))
        .unwrap_or_default()
}

fn resize(dimension: &mut Dimension, value: &Value) -> Action {
    let next = Dimension::from_value(value);
    if *dimension == next {
        return Action::None;
    }
    *dimension = next;
    Action::RetrySource
}

/// Validate a border-radius value; `None` for missing, NaN or negative input
fn border_radius(scale: &LayoutScale, value: &Value) -> Option<BorderRadius> {
    let length = value::get_length(value).ok()?;
    match length.unit {
        LengthUnit::Percent => BorderRadius::percent(length.value),
        LengthUnit::Px | LengthUnit::Dp => {
            if !length.value.is_finite() || length.value < 0.0 {
                return None;
            }
            BorderRadius::length(length.to_device_px(scale)?)
        }
    }
}
