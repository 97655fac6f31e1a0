#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test doubles for image component unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::events::{EventSink, OutcomeEvent};
use crate::night_mode::{HostEnvironment, ThemeProvider};
use crate::source::{PlaceholderResolver, SourceRef};
use crate::view::{
    BorderRadius, ColorFilter, Corner, ImageView, LoadOutcome, LoadStatusSender, ObjectFit,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// One call observed on a `RecordingView`
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    SetSource(Option<String>),
    RetrySource,
    SetPlaceholder(Option<String>),
    SetObjectFit(ObjectFit),
    SetAltObjectFit(ObjectFit),
    SetBlurRadius(f32),
    SetColorFilter(ColorFilter),
    ClearColorFilter,
    SetBorderRadius(Option<Corner>, BorderRadius),
    SetAutoplay(bool),
    StartAnimation,
    StopAnimation,
    SetForceDarkAllowed(bool),
}

#[derive(Default)]
struct ViewModel {
    calls: Vec<ViewCall>,
    running: bool,
    radii: HashMap<Option<Corner>, BorderRadius>,
    sender: Option<LoadStatusSender>,
}

/// `ImageView` that records every call
///
/// Clones share the same log, so a test can keep a handle after boxing one into a
/// component.
#[derive(Clone, Default)]
pub struct RecordingView {
    model: Arc<Mutex<ViewModel>>,
}

impl RecordingView {
    /// Calls observed so far
    pub fn calls(&self) -> Vec<ViewCall> {
        self.model.lock().calls.clone()
    }

    /// Forget observed calls
    pub fn clear(&self) {
        self.model.lock().calls.clear();
    }

    /// Simulate the decode pipeline reporting an outcome
    pub fn report(&self, outcome: LoadOutcome) {
        let sender = self.model.lock().sender.clone().unwrap();
        sender.send(outcome).unwrap();
    }

    fn record(&self, call: ViewCall) {
        self.model.lock().calls.push(call);
    }
}

impl ImageView for RecordingView {
    fn set_source(&mut self, source: Option<&SourceRef>) {
        self.record(ViewCall::SetSource(source.map(|s| s.as_str().to_string())));
    }

    fn retry_source(&mut self) {
        self.record(ViewCall::RetrySource);
    }

    fn set_placeholder(&mut self, placeholder: Option<&SourceRef>) {
        self.record(ViewCall::SetPlaceholder(
            placeholder.map(|s| s.as_str().to_string()),
        ));
    }

    fn set_object_fit(&mut self, fit: ObjectFit) {
        self.record(ViewCall::SetObjectFit(fit));
    }

    fn set_alt_object_fit(&mut self, fit: ObjectFit) {
        self.record(ViewCall::SetAltObjectFit(fit));
    }

    fn set_blur_radius(&mut self, radius: f32) {
        self.record(ViewCall::SetBlurRadius(radius));
    }

    fn set_color_filter(&mut self, filter: ColorFilter) {
        self.record(ViewCall::SetColorFilter(filter));
    }

    fn clear_color_filter(&mut self) {
        self.record(ViewCall::ClearColorFilter);
    }

    fn set_border_radius(&mut self, corner: Option<Corner>, radius: BorderRadius) {
        let mut model = self.model.lock();
        if corner.is_none() {
            model.radii.clear();
        }
        model.radii.insert(corner, radius);
        model.calls.push(ViewCall::SetBorderRadius(corner, radius));
    }

    fn border_radius(&self, corner: Option<Corner>) -> Option<BorderRadius> {
        let model = self.model.lock();
        model
            .radii
            .get(&corner)
            .or_else(|| model.radii.get(&None))
            .copied()
    }

    fn set_autoplay(&mut self, autoplay: bool) {
        self.record(ViewCall::SetAutoplay(autoplay));
    }

    fn start_animation(&mut self) {
        let mut model = self.model.lock();
        model.running = true;
        model.calls.push(ViewCall::StartAnimation);
    }

    fn stop_animation(&mut self) {
        let mut model = self.model.lock();
        model.running = false;
        model.calls.push(ViewCall::StopAnimation);
    }

    fn is_animation_running(&self) -> bool {
        self.model.lock().running
    }

    fn set_load_status_sender(&mut self, sender: LoadStatusSender) {
        self.model.lock().sender = Some(sender);
    }

    fn set_force_dark_allowed(&mut self, allowed: bool) {
        self.record(ViewCall::SetForceDarkAllowed(allowed));
    }
}

/// `EventSink` that records emitted outcomes
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<OutcomeEvent>>>,
}

impl RecordingSink {
    /// Outcomes emitted so far
    pub fn events(&self) -> Vec<OutcomeEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: OutcomeEvent) {
        self.events.lock().push(event);
    }
}

/// Host with settable capabilities
pub struct FakeHost {
    pub dark: Mutex<bool>,
    pub overlay_supported: bool,
    pub container_allows: bool,
}

impl FakeHost {
    pub fn dark() -> Self {
        Self {
            dark: Mutex::new(true),
            overlay_supported: true,
            container_allows: true,
        }
    }

    pub fn light() -> Self {
        Self {
            dark: Mutex::new(false),
            ..Self::dark()
        }
    }

    pub fn set_dark(&self, dark: bool) {
        *self.dark.lock() = dark;
    }
}

impl HostEnvironment for FakeHost {
    fn is_dark_mode(&self) -> bool {
        *self.dark.lock()
    }

    fn supports_overlay_filter(&self) -> bool {
        self.overlay_supported
    }

    fn container_allows_force_dark(&self) -> bool {
        self.container_allows
    }
}

/// Theme provider recording the `enabled` flag of each request
#[derive(Default)]
pub struct FakeProvider {
    pub handles: bool,
    pub global_disabled: bool,
    pub requests: Mutex<Vec<bool>>,
}

impl FakeProvider {
    pub fn requests(&self) -> Vec<bool> {
        self.requests.lock().clone()
    }
}

impl ThemeProvider for FakeProvider {
    fn handle_image_force_dark(&self, _view: Option<&mut dyn ImageView>, enabled: bool) -> bool {
        self.requests.lock().push(enabled);
        self.handles
    }

    fn is_global_night_mode_disabled(&self) -> bool {
        self.global_disabled
    }
}

/// Placeholder resolver backed by a fixed map
#[derive(Default)]
pub struct MapResolver {
    entries: HashMap<String, SourceRef>,
}

impl MapResolver {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(key, uri)| ((*key).to_string(), SourceRef::parse(uri).unwrap()))
                .collect(),
        }
    }
}

impl PlaceholderResolver for MapResolver {
    fn resolve(&self, key: &str) -> Option<SourceRef> {
        self.entries.get(key).cloned()
    }
}
