//! Scripted scenarios
//!
//! A scenario is a JSON document describing a host environment and a sequence of
//! steps (attribute writes, listener registration, theme changes, load outcomes and
//! so on) applied to a single component. Running it yields the outcome events the
//! component emitted, in order.
//!
//! ```json
//! {
//!   "host": { "dark": true },
//!   "steps": [
//!     { "op": "create_view" },
//!     { "op": "add_event", "name": "complete" },
//!     { "op": "set_attribute", "name": "src", "value": "https://example.com/a.png" },
//!     { "op": "load_complete", "width": 1080, "height": 540 }
//!   ]
//! }
//! ```

use crate::component::{ComponentContext, ImageComponent};
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::events::{ChannelEventSink, OutcomeEvent};
use crate::night_mode::{HostEnvironment, ThemeProvider};
use crate::source::{PlaceholderResolver, SourceRef};
use crate::theme::{PinnedMode, ThemeChange, ThemeSignal, UiMode};
use crate::view::{
    BorderRadius, ColorFilter, Corner, ImageView, LoadOutcome, LoadStatusSender, ObjectFit,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Host capabilities of a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSpec {
    /// Initial system appearance
    pub dark: bool,
    /// Whether the platform can draw overlay color filters
    pub overlay_supported: bool,
    /// Whether the container permits forced-dark rendering
    pub container_allows_force_dark: bool,
}

impl Default for HostSpec {
    fn default() -> Self {
        Self {
            dark: false,
            overlay_supported: true,
            container_allows_force_dark: true,
        }
    }
}

/// Behaviour of the scripted theme provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSpec {
    /// Whether the provider claims every force-dark request
    pub handles: bool,
    /// Whether the global night filter is turned off
    pub global_night_mode_disabled: bool,
}

/// One scripted step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Realise the view
    CreateView,
    /// Write an attribute
    SetAttribute {
        /// Wire name
        name: String,
        /// Raw value
        #[serde(default)]
        value: Value,
    },
    /// Register an outcome listener
    AddEvent {
        /// Event name
        name: String,
    },
    /// Unregister an outcome listener
    RemoveEvent {
        /// Event name
        name: String,
    },
    /// Invoke a component method
    Invoke {
        /// Method name
        method: String,
        /// Method arguments
        #[serde(default)]
        args: Map<String, Value>,
    },
    /// Broadcast a system appearance change
    ThemeChange {
        /// Appearance after the change
        ui_mode: UiMode,
        /// Appearance before the change
        last_ui_mode: UiMode,
    },
    /// Pin or unpin the app-wide night-mode preference
    PinMode {
        /// New preference
        mode: PinnedMode,
    },
    /// Report a successful decode from the load pipeline
    LoadComplete {
        /// Width in device pixels
        width: u32,
        /// Height in device pixels
        height: u32,
    },
    /// Report a failed decode from the load pipeline
    LoadError {
        /// Failure cause, logged only
        #[serde(default)]
        cause: String,
    },
    /// Tear the component down
    Destroy,
}

/// A complete scenario document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Host capabilities
    pub host: HostSpec,
    /// Theme provider; absent means the platform has none
    pub provider: Option<ProviderSpec>,
    /// `alt` keys and the references they resolve to
    pub placeholders: HashMap<String, String>,
    /// Steps, applied in order
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Read a scenario from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// An outcome event as printed by the runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmittedEvent {
    /// Event name
    pub event: String,
    /// Event payload, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl From<OutcomeEvent> for EmittedEvent {
    fn from(event: OutcomeEvent) -> Self {
        Self {
            event: event.name().as_str().to_string(),
            detail: event.payload(),
        }
    }
}

struct ScriptedHost {
    dark: Mutex<bool>,
    spec: HostSpec,
}

impl HostEnvironment for ScriptedHost {
    fn is_dark_mode(&self) -> bool {
        *self.dark.lock()
    }

    fn supports_overlay_filter(&self) -> bool {
        self.spec.overlay_supported
    }

    fn container_allows_force_dark(&self) -> bool {
        self.spec.container_allows_force_dark
    }
}

struct ScriptedProvider(ProviderSpec);

impl ThemeProvider for ScriptedProvider {
    fn handle_image_force_dark(&self, _view: Option<&mut dyn ImageView>, enabled: bool) -> bool {
        debug!(
            "Provider asked to force dark (enabled = {}), handles = {}",
            enabled, self.0.handles
        );
        self.0.handles
    }

    fn is_global_night_mode_disabled(&self) -> bool {
        self.0.global_night_mode_disabled
    }
}

struct ScriptedPlaceholders(HashMap<String, String>);

impl PlaceholderResolver for ScriptedPlaceholders {
    fn resolve(&self, key: &str) -> Option<SourceRef> {
        let uri = self.0.get(key)?;
        match SourceRef::parse(uri) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!("Placeholder {} maps to an unusable reference: {}", key, e);
                None
            }
        }
    }
}

/// `ImageView` that logs every call instead of drawing
#[derive(Default)]
pub struct TracingView {
    running: bool,
    radii: HashMap<Option<Corner>, BorderRadius>,
}

impl ImageView for TracingView {
    fn set_source(&mut self, source: Option<&SourceRef>) {
        match source {
            Some(source) => info!("view: load {}", source),
            None => info!("view: clear source"),
        }
    }

    fn retry_source(&mut self) {
        info!("view: retry source");
    }

    fn set_placeholder(&mut self, placeholder: Option<&SourceRef>) {
        match placeholder {
            Some(placeholder) => info!("view: placeholder {}", placeholder),
            None => info!("view: clear placeholder"),
        }
    }

    fn set_object_fit(&mut self, fit: ObjectFit) {
        info!("view: object fit {:?}", fit);
    }

    fn set_alt_object_fit(&mut self, fit: ObjectFit) {
        info!("view: placeholder object fit {:?}", fit);
    }

    fn set_blur_radius(&mut self, radius: f32) {
        info!("view: blur {}", radius);
    }

    fn set_color_filter(&mut self, filter: ColorFilter) {
        info!("view: color filter {:#010x} {:?}", filter.argb, filter.mode);
    }

    fn clear_color_filter(&mut self) {
        info!("view: clear color filter");
    }

    fn set_border_radius(&mut self, corner: Option<Corner>, radius: BorderRadius) {
        info!("view: border radius {:?} = {:?}", corner, radius);
        if corner.is_none() {
            self.radii.clear();
        }
        self.radii.insert(corner, radius);
    }

    fn border_radius(&self, corner: Option<Corner>) -> Option<BorderRadius> {
        self.radii
            .get(&corner)
            .or_else(|| self.radii.get(&None))
            .copied()
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        info!("view: autoplay {}", autoplay);
    }

    fn start_animation(&mut self) {
        info!("view: start animation");
        self.running = true;
    }

    fn stop_animation(&mut self) {
        info!("view: stop animation");
        self.running = false;
    }

    fn is_animation_running(&self) -> bool {
        self.running
    }

    fn set_load_status_sender(&mut self, _sender: LoadStatusSender) {
        debug!("view: load status channel installed");
    }

    fn set_force_dark_allowed(&mut self, allowed: bool) {
        debug!("view: force dark allowed = {}", allowed);
    }
}

/// Run `scenario` against a fresh component and collect emitted events
pub fn run(scenario: &Scenario, config: WidgetConfig) -> Vec<EmittedEvent> {
    let host = Arc::new(ScriptedHost {
        dark: Mutex::new(scenario.host.dark),
        spec: scenario.host.clone(),
    });
    let signal = Arc::new(ThemeSignal::new());
    let (sink, receiver) = ChannelEventSink::new();

    let placeholders = Arc::new(ScriptedPlaceholders(scenario.placeholders.clone()));
    let mut context =
        ComponentContext::new(config, Arc::clone(&signal), host.clone(), Arc::new(sink))
            .with_placeholder_resolver(placeholders);
    if let Some(provider) = &scenario.provider {
        context = context.with_theme_provider(Arc::new(ScriptedProvider(provider.clone())));
    }
    let component = ImageComponent::new(context);

    for (index, step) in scenario.steps.iter().enumerate() {
        debug!("Step {}: {:?}", index, step);
        match step {
            Step::CreateView => component.lock().create_view(Box::new(TracingView::default())),
            Step::SetAttribute { name, value } => {
                if !component.lock().set_attribute(name, value) {
                    warn!("Attribute {} is not handled by the image component", name);
                }
            }
            Step::AddEvent { name } => {
                if !component.lock().add_event(name) {
                    warn!("Event {} is not handled by the image component", name);
                }
            }
            Step::RemoveEvent { name } => {
                if !component.lock().remove_event(name) {
                    warn!("Event {} is not handled by the image component", name);
                }
            }
            Step::Invoke { method, args } => {
                if !component.lock().invoke_method(method, args) {
                    warn!("Method {} is not handled by the image component", method);
                }
            }
            Step::ThemeChange {
                ui_mode,
                last_ui_mode,
            } => {
                let change = ThemeChange {
                    ui_mode: *ui_mode,
                    last_ui_mode: *last_ui_mode,
                };
                *host.dark.lock() = change.is_dark();
                signal.notify(change);
            }
            Step::PinMode { mode } => signal.set_pinned_mode(*mode),
            Step::LoadComplete { width, height } => report(
                &component,
                LoadOutcome::Complete {
                    pixel_width: *width,
                    pixel_height: *height,
                },
            ),
            Step::LoadError { cause } => report(&component, LoadOutcome::Error(cause.clone())),
            Step::Destroy => component.lock().destroy(),
        }
    }

    drop(component);
    receiver.try_iter().map(EmittedEvent::from).collect()
}

/// Deliver an outcome the way a decode thread would, then drain it on this thread
fn report(component: &Arc<Mutex<ImageComponent>>, outcome: LoadOutcome) {
    let sender = component.lock().load_status_sender();
    if let Err(e) = sender.send(outcome) {
        warn!("Failed to report load outcome: {}", e);
        return;
    }
    let handled = component.lock().pump_load_outcomes();
    debug!("Handled {} load outcome(s)", handled);
}
