//! Image component implementation
//!
//! This module implements the component that reconciles attribute writes, layout
//! changes, theme notifications and load outcomes into calls on the native view.

use crate::animation::{AnimationController, Autoplay, ComponentMethod};
use crate::attribute::{self, Action, AttributeKey};
use crate::component::state::ImageState;
use crate::config::WidgetConfig;
use crate::events::EventSink;
use crate::filter::FilterController;
use crate::night_mode::{
    HostEnvironment, NightModeController, NightModeDecision, NightModeInputs, ThemeProvider,
};
use crate::source::controller::DirectPlaceholderResolver;
use crate::source::{PlaceholderResolver, SourceLoadController};
use crate::theme::{PinnedMode, SubscriptionId, ThemeChange, ThemeListener, ThemeSignal};
use crate::view::{BorderRadius, Corner, ImageView, LoadOutcome, LoadStatusSender};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::sync::{Arc, Weak, mpsc};
use tracing::{debug, info, warn};

/// Collaborators injected into a component at construction
#[derive(Clone)]
pub struct ComponentContext {
    /// Layout scale and night-mode defaults
    pub config: WidgetConfig,
    /// Theme change channel the component subscribes to
    pub theme_signal: Arc<ThemeSignal>,
    /// Host capabilities
    pub host: Arc<dyn HostEnvironment>,
    /// Privileged theming provider, if the platform has one
    pub theme_provider: Option<Arc<dyn ThemeProvider>>,
    /// Outbound outcome events
    pub events: Arc<dyn EventSink>,
    /// Placeholder lookup for `alt`
    pub placeholders: Arc<dyn PlaceholderResolver>,
}

impl ComponentContext {
    /// Context without a theme provider, resolving `alt` values as references
    pub fn new(
        config: WidgetConfig,
        theme_signal: Arc<ThemeSignal>,
        host: Arc<dyn HostEnvironment>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            theme_signal,
            host,
            theme_provider: None,
            events,
            placeholders: Arc::new(DirectPlaceholderResolver),
        }
    }

    /// Use `provider` as the privileged theming provider
    #[must_use]
    pub fn with_theme_provider(mut self, provider: Arc<dyn ThemeProvider>) -> Self {
        self.theme_provider = Some(provider);
        self
    }

    /// Use `resolver` for `alt` lookups
    #[must_use]
    pub fn with_placeholder_resolver(mut self, resolver: Arc<dyn PlaceholderResolver>) -> Self {
        self.placeholders = resolver;
        self
    }
}

/// Declarative image component
pub struct ImageComponent {
    state: ImageState,
    view: Option<Box<dyn ImageView>>,
    context: ComponentContext,
    subscription: Option<SubscriptionId>,
    load_sender: LoadStatusSender,
    load_receiver: mpsc::Receiver<LoadOutcome>,
    destroyed: bool,
}

/// Theme subscription holding a weak back-reference to its component
struct ImageThemeListener {
    component: Weak<Mutex<ImageComponent>>,
}

impl ThemeListener for ImageThemeListener {
    fn on_theme_changed(&self, change: ThemeChange, pinned: PinnedMode) {
        let Some(component) = self.component.upgrade() else {
            debug!("Theme change for a dropped component ignored");
            return;
        };
        if !change.mode_changed() {
            return;
        }
        if pinned.is_pinned() {
            debug!("Night mode pinned to {:?}, ignoring theme change", pinned);
            return;
        }
        component.lock().on_system_theme_changed(change.is_dark());
    }
}

/// Reborrow the boxed view with a lifetime short enough for the controllers
fn view_mut(view: &mut Option<Box<dyn ImageView>>) -> Option<&mut dyn ImageView> {
    match view {
        Some(view) => Some(&mut **view),
        None => None,
    }
}

impl ImageComponent {
    /// Create a component and subscribe it to theme changes
    pub fn new(context: ComponentContext) -> Arc<Mutex<Self>> {
        let (load_sender, load_receiver) = mpsc::channel();
        let theme_signal = Arc::clone(&context.theme_signal);
        let state = ImageState::new(context.config.night_mode.enabled_by_default);

        let component = Arc::new(Mutex::new(Self {
            state,
            view: None,
            context,
            subscription: None,
            load_sender,
            load_receiver,
            destroyed: false,
        }));

        let listener = Arc::new(ImageThemeListener {
            component: Arc::downgrade(&component),
        });
        let id = theme_signal.subscribe(listener);
        component.lock().subscription = Some(id);

        info!("Image component created");
        component
    }

    /// Current state
    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Whether a view has been realised
    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    /// Realise the native view
    ///
    /// Opts the view out of host forced-dark rendering, installs the load-status
    /// channel, replays retained attributes and evaluates night mode.
    pub fn create_view(&mut self, mut view: Box<dyn ImageView>) {
        if self.destroyed {
            warn!("create_view on a destroyed component ignored");
            return;
        }
        view.set_force_dark_allowed(false);
        view.set_load_status_sender(self.load_sender.clone());
        self.view = Some(view);
        self.replay_state();
        let is_dark = self.context.host.is_dark_mode();
        self.evaluate_night_mode(is_dark);
        info!("Image view created");
    }

    fn replay_state(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        let state = &self.state;

        if let Some(source) = &state.source {
            view.set_source(Some(source));
        }
        if let Some(placeholder) = &state.placeholder {
            view.set_placeholder(Some(placeholder));
        }
        view.set_object_fit(state.object_fit);
        view.set_alt_object_fit(state.alt_object_fit);
        if state.blur_radius > 0.0 {
            view.set_blur_radius(state.blur_radius);
        }
        view.set_autoplay(state.autoplay);
        if let Some(radius) = state.border_radii.uniform() {
            view.set_border_radius(None, radius);
        }
        for (corner, radius) in state.border_radii.overrides() {
            view.set_border_radius(Some(corner), radius);
        }
    }

    /// Apply an attribute write by wire name
    ///
    /// Returns `false` for keys this component does not own, so the caller can route
    /// them to the generic attribute path.
    pub fn set_attribute(&mut self, name: &str, value: &Value) -> bool {
        let Some(key) = AttributeKey::parse(name) else {
            debug!("Attribute {} not handled by image component", name);
            return false;
        };
        self.apply_attribute(key, value);
        true
    }

    /// Apply an attribute write
    pub fn apply_attribute(&mut self, key: AttributeKey, value: &Value) {
        debug!("Attribute {} = {}", key.as_str(), value);
        let action = attribute::reduce(&mut self.state, &self.context.config.layout, key, value);
        self.run(action);
    }

    fn run(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::LoadSource(raw) => SourceLoadController::set_source(
                &mut self.state,
                view_mut(&mut self.view),
                self.context.events.as_ref(),
                raw.as_deref(),
            ),
            Action::SetObjectFit(fit) => {
                if let Some(view) = self.view.as_mut() {
                    view.set_object_fit(fit);
                }
            }
            Action::SetAltObjectFit(fit) => {
                if let Some(view) = self.view.as_mut() {
                    view.set_alt_object_fit(fit);
                }
            }
            Action::ApplyFilter(spec) => {
                FilterController::apply(
                    &mut self.state,
                    view_mut(&mut self.view),
                    &self.context.config.layout,
                    &spec,
                );
            }
            Action::ResolvePlaceholder(raw) => SourceLoadController::set_placeholder(
                &mut self.state,
                view_mut(&mut self.view),
                self.context.placeholders.as_ref(),
                raw.as_deref(),
            ),
            Action::RetrySource => {
                SourceLoadController::maybe_retry(&mut self.state, view_mut(&mut self.view));
            }
            Action::EvaluateNightMode => {
                let is_dark = self.context.host.is_dark_mode();
                self.evaluate_night_mode(is_dark);
            }
            Action::SetAutoplay(autoplay) => {
                AnimationController::set_autoplay(view_mut(&mut self.view), autoplay);
            }
            Action::SetBorderRadius(position, radius) => {
                if let Some(view) = self.view.as_mut() {
                    view.set_border_radius(position.corner(), radius);
                }
            }
        }
    }

    /// Run the night-mode chain for the given system appearance
    pub fn evaluate_night_mode(&mut self, is_dark_mode: bool) -> NightModeDecision {
        let inputs = NightModeInputs {
            is_dark_mode,
            enabled: self.state.night_mode_enabled,
            overlay_argb: self.context.config.night_mode.overlay_argb,
        };
        NightModeController::evaluate(
            view_mut(&mut self.view),
            self.context.host.as_ref(),
            self.context.theme_provider.as_deref(),
            inputs,
        )
    }

    fn on_system_theme_changed(&mut self, is_dark: bool) {
        if self.destroyed {
            return;
        }
        debug!("System theme changed, dark = {}", is_dark);
        self.evaluate_night_mode(is_dark);
    }

    /// Register an outcome listener
    ///
    /// Returns `false` for names owned by the generic event system. Empty names and
    /// calls before the view exists are handled as no-ops.
    pub fn add_event(&mut self, name: &str) -> bool {
        if name.is_empty() || self.view.is_none() {
            return true;
        }
        self.state.listeners.add(name)
    }

    /// Unregister an outcome listener; same return contract as `add_event`
    pub fn remove_event(&mut self, name: &str) -> bool {
        if name.is_empty() || self.view.is_none() {
            return true;
        }
        self.state.listeners.remove(name)
    }

    /// Invoke a method by wire name; returns `false` if it is not one of ours
    pub fn invoke_method(&mut self, name: &str, _args: &Map<String, Value>) -> bool {
        match ComponentMethod::parse(name) {
            Some(ComponentMethod::StartAnimation) => self.start_animation(),
            Some(ComponentMethod::StopAnimation) => self.stop_animation(),
            None => return false,
        }
        true
    }

    /// Start animated playback
    pub fn start_animation(&mut self) {
        AnimationController::start(view_mut(&mut self.view));
    }

    /// Stop animated playback
    pub fn stop_animation(&mut self) {
        AnimationController::stop(view_mut(&mut self.view));
    }

    /// Radius currently reported by the view, falling back to stored state
    pub fn border_radius(&self, corner: Option<Corner>) -> Option<BorderRadius> {
        if let Some(radius) = self.view.as_ref().and_then(|view| view.border_radius(corner)) {
            return Some(radius);
        }
        match corner {
            Some(corner) => self.state.border_radii.corner(corner),
            None => self.state.border_radii.uniform(),
        }
    }

    /// Sender the decode pipeline can report outcomes on from any thread
    pub fn load_status_sender(&self) -> LoadStatusSender {
        self.load_sender.clone()
    }

    /// Drain outcomes reported by the decode pipeline; returns how many were handled
    pub fn pump_load_outcomes(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(outcome) = self.load_receiver.try_recv() {
            match outcome {
                LoadOutcome::Complete {
                    pixel_width,
                    pixel_height,
                } => self.on_complete(pixel_width, pixel_height),
                LoadOutcome::Error(cause) => self.on_error(&cause),
            }
            handled += 1;
        }
        handled
    }

    /// The source decoded at `pixel_width` x `pixel_height` device pixels
    pub fn on_complete(&mut self, pixel_width: u32, pixel_height: u32) {
        SourceLoadController::on_complete(
            &self.state,
            &self.context.config.layout,
            self.context.events.as_ref(),
            pixel_width,
            pixel_height,
        );
    }

    /// The source failed to load
    pub fn on_error(&mut self, cause: &str) {
        SourceLoadController::on_error(&self.state, self.context.events.as_ref(), cause);
    }

    /// Tear the component down
    ///
    /// Unsubscribes from theme changes exactly once and drops the view. Further calls
    /// are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.unsubscribe();
        self.view = None;
        info!("Image component destroyed");
    }

    fn unsubscribe(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.context.theme_signal.unsubscribe(id);
        }
    }
}

impl Autoplay for ImageComponent {
    fn start(&mut self) {
        self.start_animation();
    }

    fn stop(&mut self) {
        self.stop_animation();
    }

    fn is_running(&self) -> bool {
        AnimationController::is_running(self.view.as_deref())
    }
}

impl Drop for ImageComponent {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
