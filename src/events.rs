//! Outcome events and listener gating
//!
//! The scripting layer registers interest in `complete` and `error` by name. Outcomes
//! that occur while the matching listener is absent are dropped, never queued.

use serde::Serialize;
use serde_json::Value;
use std::sync::mpsc;
use tracing::{debug, warn};

/// Recognised outcome event names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// `complete`
    Complete,
    /// `error`
    Error,
}

impl EventName {
    /// Look up an event by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "complete" => Some(Self::Complete),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Wire name of the event
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }
}

/// Load outcome reported to the scripting layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutcomeEvent {
    /// Image loaded; size in logical units
    Complete {
        /// Width in logical units
        width: f32,
        /// Height in logical units
        height: f32,
    },
    /// Load failed or the source was malformed; carries no detail
    Error,
}

#[derive(Serialize)]
struct CompleteDetail {
    width: f32,
    height: f32,
}

impl OutcomeEvent {
    /// Name of the event
    pub const fn name(&self) -> EventName {
        match self {
            Self::Complete { .. } => EventName::Complete,
            Self::Error => EventName::Error,
        }
    }

    /// JSON payload handed to the listener, if any
    pub fn payload(&self) -> Option<Value> {
        match *self {
            Self::Complete { width, height } => {
                serde_json::to_value(CompleteDetail { width, height }).ok()
            }
            Self::Error => None,
        }
    }
}

/// Outbound event channel to the scripting layer
pub trait EventSink: Send + Sync {
    /// Deliver an outcome
    fn emit(&self, event: OutcomeEvent);
}

/// `EventSink` forwarding into an mpsc channel
pub struct ChannelEventSink {
    sender: mpsc::Sender<OutcomeEvent>,
}

impl ChannelEventSink {
    /// Create a sink and the receiver that observes it
    pub fn new() -> (Self, mpsc::Receiver<OutcomeEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: OutcomeEvent) {
        if let Err(e) = self.sender.send(event) {
            warn!("Failed to deliver {} event: {}", event.name().as_str(), e);
        }
    }
}

/// Tracks which outcome listeners are registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventGate {
    complete: bool,
    error: bool,
}

impl EventGate {
    /// Register a listener; returns `false` for names this gate does not own
    pub fn add(&mut self, name: &str) -> bool {
        self.set(name, true)
    }

    /// Unregister a listener; returns `false` for names this gate does not own
    pub fn remove(&mut self, name: &str) -> bool {
        self.set(name, false)
    }

    fn set(&mut self, name: &str, present: bool) -> bool {
        match EventName::parse(name) {
            Some(EventName::Complete) => self.complete = present,
            Some(EventName::Error) => self.error = present,
            None => return false,
        }
        true
    }

    /// Whether a listener for `name` is registered
    pub const fn is_listening(&self, name: EventName) -> bool {
        match name {
            EventName::Complete => self.complete,
            EventName::Error => self.error,
        }
    }

    /// Emit `event` if its listener is registered; returns whether it was emitted
    pub fn dispatch(&self, sink: &dyn EventSink, event: OutcomeEvent) -> bool {
        if !self.is_listening(event.name()) {
            debug!("Dropping {} event: no listener", event.name().as_str());
            return false;
        }
        sink.emit(event);
        true
    }
}
