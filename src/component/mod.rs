//! Image component module
//!
//! This module owns the component aggregate and wires the per-concern controllers
//! to the attribute, event, method, theming and view channels.
//!
//! # Overview
//!
//! The component:
//! - **Receives attribute writes** and reduces them into state plus one action
//! - **Gates source retries** on resolved layout
//! - **Re-evaluates night mode** on attribute writes and on theme notifications
//! - **Forwards load outcomes** to registered listeners only
//! - **Treats "no view yet" as a valid state**, retaining attributes until
//!   `create_view` replays them
//!
//! # Event Flow
//!
//! ```text
//! attribute ─► reduce ─► ImageState ─► Action ─► controller ─► ImageView
//! ThemeSignal ─► (weak) ImageThemeListener ─► NightModeController ─► ImageView
//! decode pipeline ─► LoadStatusSender ─► pump_load_outcomes ─► EventGate ─► EventSink
//! ```

pub mod image;
pub mod layout;
pub mod state;

pub use image::{ComponentContext, ImageComponent};
pub use layout::Dimension;
pub use state::{BorderRadii, ImageState};
