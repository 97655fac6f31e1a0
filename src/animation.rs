//! Animation playback control
//!
//! Animated images can be started and stopped directly through the method channel,
//! or by an external autoplay orchestrator (e.g. a viewport-visibility driver) through
//! the generic `Autoplay` capability.

use crate::view::ImageView;
use tracing::debug;

/// Generic playback capability driven by an autoplay orchestrator
pub trait Autoplay {
    /// Start playback
    fn start(&mut self);
    /// Stop playback
    fn stop(&mut self);
    /// Whether playback is running
    fn is_running(&self) -> bool;
}

/// Methods invocable by name on the component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentMethod {
    /// `startAnimation`
    StartAnimation,
    /// `stopAnimation`
    StopAnimation,
}

impl ComponentMethod {
    /// Look up a method by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "startAnimation" => Some(Self::StartAnimation),
            "stopAnimation" => Some(Self::StopAnimation),
            _ => None,
        }
    }
}

/// Playback operations; every call is a no-op without a view
pub struct AnimationController;

impl AnimationController {
    /// Start playback
    pub fn start(view: Option<&mut dyn ImageView>) {
        if let Some(view) = view {
            view.start_animation();
        }
    }

    /// Stop playback
    pub fn stop(view: Option<&mut dyn ImageView>) {
        if let Some(view) = view {
            view.stop_animation();
        }
    }

    /// Whether playback is running; `false` without a view
    pub fn is_running(view: Option<&dyn ImageView>) -> bool {
        view.is_some_and(|view| view.is_animation_running())
    }

    /// Stop any running playback, then forward the autoplay flag
    pub fn set_autoplay(view: Option<&mut dyn ImageView>, autoplay: bool) {
        let Some(view) = view else {
            return;
        };
        debug!("Setting autoplay to {}", autoplay);
        view.stop_animation();
        view.set_autoplay(autoplay);
    }
}
