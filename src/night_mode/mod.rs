//! Night-mode overlay
//!
//! Decides whether a darkening overlay is drawn over the image when the system is in
//! dark mode. Evaluation is a strict priority chain:
//!
//! 1. A privileged `ThemeProvider` that handles the request wins outright
//! 2. No view, or no overlay-filter support on the platform: nothing to do
//! 3. Clear if this instance opted out, the system is light, or the container
//!    forbids forced-dark rendering
//! 4. Clear if the provider disabled the global automatic night filter
//! 5. Otherwise apply the overlay (50% black, source-atop)

pub mod controller;
pub mod provider;

pub use controller::{ClearReason, NightModeController, NightModeDecision, NightModeInputs};
pub use provider::{HostEnvironment, ThemeProvider};
