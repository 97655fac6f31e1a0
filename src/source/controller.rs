//! Source and placeholder controller

use crate::component::state::ImageState;
use crate::config::LayoutScale;
use crate::events::{EventSink, OutcomeEvent};
use crate::source::SourceRef;
use crate::view::ImageView;
use tracing::debug;

/// Sentinel `alt` value that clears the placeholder
pub const BLANK_PLACEHOLDER: &str = "blank";

/// Resolves `alt` keys into placeholder references
///
/// Backed by the host's resource cache; unknown keys resolve to `None`.
pub trait PlaceholderResolver: Send + Sync {
    /// Look up the placeholder for `key`
    fn resolve(&self, key: &str) -> Option<SourceRef>;
}

/// Resolves every key as a source reference; used when the host has no cache
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectPlaceholderResolver;

impl PlaceholderResolver for DirectPlaceholderResolver {
    fn resolve(&self, key: &str) -> Option<SourceRef> {
        SourceRef::parse(key).ok()
    }
}

/// Source, placeholder and retry-gate operations over the component state
pub struct SourceLoadController;

impl SourceLoadController {
    /// Apply a `src` write
    ///
    /// Empty input clears the displayed source without an error. A malformed reference
    /// also clears it and reports an `error` outcome if someone is listening.
    pub fn set_source(
        state: &mut ImageState,
        view: Option<&mut dyn ImageView>,
        events: &dyn EventSink,
        raw: Option<&str>,
    ) {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            debug!("Clearing source");
            state.source = None;
            if let Some(view) = view {
                view.set_source(None);
            }
            return;
        }

        match SourceRef::parse(raw) {
            Ok(source) => {
                debug!("Loading source {}", source);
                if let Some(view) = view {
                    view.set_source(Some(&source));
                }
                state.source = Some(source);
            }
            Err(e) => {
                debug!("Source rejected: {}", e);
                state.source = None;
                if let Some(view) = view {
                    view.set_source(None);
                }
                state.listeners.dispatch(events, OutcomeEvent::Error);
            }
        }
    }

    /// Retry the current source once layout is known
    ///
    /// Fires only when both dimensions are defined, a `src` write happened since the
    /// last retry, and a view exists to retry on. Returns whether the retry fired.
    pub fn maybe_retry(state: &mut ImageState, view: Option<&mut dyn ImageView>) -> bool {
        if !(state.width.is_defined() && state.height.is_defined() && state.src_pending_init) {
            return false;
        }
        let Some(view) = view else {
            return false;
        };
        state.src_pending_init = false;
        debug!("Layout resolved, retrying source");
        view.retry_source();
        true
    }

    /// Apply an `alt` write
    ///
    /// Empty input or `"blank"` clears the placeholder. Unresolvable keys leave the
    /// current placeholder untouched.
    pub fn set_placeholder(
        state: &mut ImageState,
        view: Option<&mut dyn ImageView>,
        resolver: &dyn PlaceholderResolver,
        raw: Option<&str>,
    ) {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() || raw == BLANK_PLACEHOLDER {
            state.placeholder = None;
            if let Some(view) = view {
                view.set_placeholder(None);
            }
            return;
        }

        let Some(placeholder) = resolver.resolve(raw) else {
            debug!("Placeholder {} not resolvable, keeping current", raw);
            return;
        };
        if let Some(view) = view {
            view.set_placeholder(Some(&placeholder));
        }
        state.placeholder = Some(placeholder);
    }

    /// The decode pipeline finished; report the size in logical units
    pub fn on_complete(
        state: &ImageState,
        scale: &LayoutScale,
        events: &dyn EventSink,
        pixel_width: u32,
        pixel_height: u32,
    ) {
        #[allow(clippy::cast_precision_loss)] // Image dimensions fit comfortably in f32
        let event = OutcomeEvent::Complete {
            width: scale.to_logical(pixel_width as f32),
            height: scale.to_logical(pixel_height as f32),
        };
        state.listeners.dispatch(events, event);
    }

    /// The decode pipeline failed; the cause is logged, never forwarded
    pub fn on_error(state: &ImageState, events: &dyn EventSink, cause: &str) {
        debug!("Source failed to load: {}", cause);
        state.listeners.dispatch(events, OutcomeEvent::Error);
    }
}
