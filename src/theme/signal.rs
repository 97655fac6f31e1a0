//! Theme signal implementation

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// System UI appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Appearance not reported
    #[default]
    Undefined,
    /// Light appearance
    Light,
    /// Dark appearance
    Dark,
}

/// App-wide night-mode preference that overrides the system appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinnedMode {
    /// Follow the system
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl PinnedMode {
    /// Whether automatic reaction to system changes is suppressed
    pub const fn is_pinned(self) -> bool {
        matches!(self, PinnedMode::Light | PinnedMode::Dark)
    }
}

/// A configuration change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    /// Appearance after the change
    pub ui_mode: UiMode,
    /// Appearance before the change
    pub last_ui_mode: UiMode,
}

impl ThemeChange {
    /// Whether the light/dark appearance actually changed
    pub fn mode_changed(&self) -> bool {
        self.ui_mode != self.last_ui_mode
    }

    /// Whether the new appearance is dark
    pub fn is_dark(&self) -> bool {
        self.ui_mode == UiMode::Dark
    }
}

/// Receives theme notifications
pub trait ThemeListener: Send + Sync {
    /// Called for every published change, with the pinned mode at publish time
    fn on_theme_changed(&self, change: ThemeChange, pinned: PinnedMode);
}

/// Token identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// Subscribe/unsubscribe channel for theme changes
#[derive(Default)]
pub struct ThemeSignal {
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn ThemeListener>)>>,
    pinned: Mutex<PinnedMode>,
}

impl ThemeSignal {
    /// Create a signal with no subscribers, following the system appearance
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe(&self, listener: Arc<dyn ThemeListener>) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.listeners.lock().push((id, listener));
        debug!("Theme listener subscribed: {:?}", id);
        id
    }

    /// Remove a listener; returns `false` if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            debug!("Theme listener unsubscribed: {:?}", id);
        }
        removed
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Current pinned mode
    pub fn pinned_mode(&self) -> PinnedMode {
        *self.pinned.lock()
    }

    /// Change the pinned mode
    pub fn set_pinned_mode(&self, mode: PinnedMode) {
        info!("Pinned night mode set to {:?}", mode);
        *self.pinned.lock() = mode;
    }

    /// Deliver `change` to every subscriber
    ///
    /// Listeners are snapshotted and the lock released before delivery, so a listener
    /// may unsubscribe from inside its callback.
    pub fn notify(&self, change: ThemeChange) {
        let pinned = self.pinned_mode();
        let snapshot: SmallVec<[Arc<dyn ThemeListener>; 8]> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        debug!(
            "Delivering theme change {:?} -> {:?} to {} listener(s)",
            change.last_ui_mode,
            change.ui_mode,
            snapshot.len()
        );
        for listener in snapshot {
            listener.on_theme_changed(change, pinned);
        }
    }
}
