//! Utility modules
//!
//! Provides logging initialization for the scenario runner and embedding hosts.

pub mod logging;

pub use logging::init_logging;
