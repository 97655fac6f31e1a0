//! Source loading
//!
//! Resolves raw `src`/`alt` strings into references, forwards them to the view and
//! owns the layout gate that decides when a deferred load is retried.
//!
//! # Retry gate
//!
//! Every `src` write sets `src_pending_init`. When a width or height write changes
//! the layout, the load is retried only if both dimensions are defined and the flag
//! is still set; firing the retry clears it.

pub mod controller;
pub mod reference;

pub use controller::{PlaceholderResolver, SourceLoadController};
pub use reference::SourceRef;
