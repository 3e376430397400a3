//! Utility functions and helpers for lingolens.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and API key scrubbing.

pub mod logging;
