//! Shared doubles for integration tests

#![allow(dead_code)]

use image_widget::ComponentContext;
use image_widget::config::WidgetConfig;
use image_widget::events::{EventSink, OutcomeEvent};
use image_widget::night_mode::{HostEnvironment, ThemeProvider};
use image_widget::source::SourceRef;
use image_widget::theme::ThemeSignal;
use image_widget::view::{
    BorderRadius, ColorFilter, Corner, ImageView, LoadStatusSender, ObjectFit,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Observable effect on the view
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Source(Option<String>),
    Retry,
    Placeholder(Option<String>),
    Fit(ObjectFit),
    Blur(f32),
    Filter(Option<ColorFilter>),
    Radius(Option<Corner>, BorderRadius),
    Autoplay(bool),
    Animation(bool),
}

#[derive(Default)]
struct Log {
    effects: Vec<Effect>,
    running: bool,
    sender: Option<LoadStatusSender>,
}

/// View that shares its effect log with the test
#[derive(Clone, Default)]
pub struct SharedView {
    log: Arc<Mutex<Log>>,
}

impl SharedView {
    pub fn effects(&self) -> Vec<Effect> {
        self.log.lock().effects.clone()
    }

    pub fn reset(&self) {
        self.log.lock().effects.clear();
    }

    pub fn sender(&self) -> Option<LoadStatusSender> {
        self.log.lock().sender.clone()
    }

    fn push(&self, effect: Effect) {
        self.log.lock().effects.push(effect);
    }
}

impl ImageView for SharedView {
    fn set_source(&mut self, source: Option<&SourceRef>) {
        self.push(Effect::Source(source.map(ToString::to_string)));
    }

    fn retry_source(&mut self) {
        self.push(Effect::Retry);
    }

    fn set_placeholder(&mut self, placeholder: Option<&SourceRef>) {
        self.push(Effect::Placeholder(placeholder.map(ToString::to_string)));
    }

    fn set_object_fit(&mut self, fit: ObjectFit) {
        self.push(Effect::Fit(fit));
    }

    fn set_alt_object_fit(&mut self, _fit: ObjectFit) {}

    fn set_blur_radius(&mut self, radius: f32) {
        self.push(Effect::Blur(radius));
    }

    fn set_color_filter(&mut self, filter: ColorFilter) {
        self.push(Effect::Filter(Some(filter)));
    }

    fn clear_color_filter(&mut self) {
        self.push(Effect::Filter(None));
    }

    fn set_border_radius(&mut self, corner: Option<Corner>, radius: BorderRadius) {
        self.push(Effect::Radius(corner, radius));
    }

    fn border_radius(&self, _corner: Option<Corner>) -> Option<BorderRadius> {
        None
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.push(Effect::Autoplay(autoplay));
    }

    fn start_animation(&mut self) {
        let mut log = self.log.lock();
        log.running = true;
        log.effects.push(Effect::Animation(true));
    }

    fn stop_animation(&mut self) {
        let mut log = self.log.lock();
        log.running = false;
        log.effects.push(Effect::Animation(false));
    }

    fn is_animation_running(&self) -> bool {
        self.log.lock().running
    }

    fn set_load_status_sender(&mut self, sender: LoadStatusSender) {
        self.log.lock().sender = Some(sender);
    }
}

/// Event sink collecting outcomes
#[derive(Clone, Default)]
pub struct Outcomes(Arc<Mutex<Vec<OutcomeEvent>>>);

impl Outcomes {
    pub fn take(&self) -> Vec<OutcomeEvent> {
        std::mem::take(&mut *self.0.lock())
    }
}

impl EventSink for Outcomes {
    fn emit(&self, event: OutcomeEvent) {
        self.0.lock().push(event);
    }
}

/// Host whose appearance can be flipped by the test
pub struct Host {
    pub dark: AtomicBool,
    pub overlay_supported: bool,
    pub container_allows: bool,
}

impl Host {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: AtomicBool::new(dark),
            overlay_supported: true,
            container_allows: true,
        }
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
    }
}

impl HostEnvironment for Host {
    fn is_dark_mode(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }

    fn supports_overlay_filter(&self) -> bool {
        self.overlay_supported
    }

    fn container_allows_force_dark(&self) -> bool {
        self.container_allows
    }
}

/// Provider that always declines and reports a fixed global switch
pub struct DecliningProvider {
    pub global_disabled: bool,
}

impl ThemeProvider for DecliningProvider {
    fn handle_image_force_dark(&self, _view: Option<&mut dyn ImageView>, _enabled: bool) -> bool {
        false
    }

    fn is_global_night_mode_disabled(&self) -> bool {
        self.global_disabled
    }
}

/// Everything a test needs around one component
pub struct Fixture {
    pub signal: Arc<ThemeSignal>,
    pub host: Arc<Host>,
    pub outcomes: Outcomes,
    pub context: ComponentContext,
}

impl Fixture {
    pub fn new(host: Host) -> Self {
        let signal = Arc::new(ThemeSignal::new());
        let host = Arc::new(host);
        let outcomes = Outcomes::default();
        let context = ComponentContext::new(
            WidgetConfig::default(),
            Arc::clone(&signal),
            host.clone(),
            Arc::new(outcomes.clone()),
        );
        Self {
            signal,
            host,
            outcomes,
            context,
        }
    }
}
