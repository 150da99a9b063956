//! Shared utilities for the page engine.

pub mod easing;
