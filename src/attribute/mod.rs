//! Attribute channel
//!
//! Incoming attribute writes are loosely typed `(key, value)` pairs. This module turns
//! the key into a closed `AttributeKey` enum, coerces values with documented defaults,
//! and reduces each write into a state mutation plus at most one imperative `Action`.
//!
//! # Flow
//!
//! ```text
//! "objectFit" ──parse──► AttributeKey::ObjectFit ──reduce──► ImageState mutation
//!                                                      └──► Action::SetObjectFit(..)
//! ```
//!
//! Unknown keys are not handled here; `ImageComponent::set_attribute` reports them as
//! unhandled so the caller can route them to the generic attribute path.

pub mod key;
pub mod reducer;
pub mod value;

pub use key::{AttributeKey, BorderPosition};
pub use reducer::{Action, reduce};
pub use value::{Length, LengthUnit};
