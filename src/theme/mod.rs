//! Theme change notifications
//!
//! The host publishes system appearance changes on a `ThemeSignal`. Components
//! subscribe at creation and unsubscribe at teardown; each subscription holds only a
//! weak back-reference so a late notification can never reach a dead component.

pub mod signal;

pub use signal::{PinnedMode, SubscriptionId, ThemeChange, ThemeListener, ThemeSignal, UiMode};
