//! `image-widget` - Declarative image component state machine
//!
//! Translates a retained attribute set into imperative calls on a native image view
//! while reconciling source loading, layout-gated reload, placeholder fallback,
//! blur filtering, theme-driven night-mode overlay, outcome-event gating and
//! animation playback.
//!
//! # Architecture
//!
//! - `ImageComponent`: owns `ImageState` and the optional realised `ImageView`
//! - `attribute`: key/value coercion and the `reduce` step producing one `Action`
//! - `source`, `filter`, `night_mode`, `events`, `animation`: per-concern controllers
//! - `theme`: `ThemeSignal` subscription channel with weak back-references
//! - `scenario`: JSON-scripted replay used by the `image-widget` binary
//!
//! All entry points run on one serialized sequence. Load outcomes from the decode
//! pipeline are marshaled through a channel and drained with
//! `ImageComponent::pump_load_outcomes`.

// Module declarations
pub mod animation;
pub mod attribute;
pub mod component;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod night_mode;
pub mod scenario;
pub mod source;
pub mod theme;
pub mod utils;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use component::{ComponentContext, ImageComponent, ImageState};
pub use error::{ImageWidgetError, Result};
