//! Configuration module for the trend viewer.

pub mod binance;
pub mod demo;
pub mod pipeline;
pub mod plot;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use binance::BINANCE;
pub use demo::DEMO;
pub use pipeline::{IMAGE_EXTENSION, PIPELINE};
pub use plot::PLOT_CONFIG;
