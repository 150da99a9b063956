//! Mobile/desktop classification of the host window.

use serde::{Deserialize, Serialize};

use crate::options::ViewportOptions;

/// Binary display context that picks the background video variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Window width at or below the breakpoint.
    Mobile,
    /// Anything wider.
    Desktop,
}

impl ViewportClass {
    /// Whether this is [`ViewportClass::Mobile`].
    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Classifies window widths against a fixed breakpoint.
///
/// No debouncing and no hysteresis: every resize is classified on its own
/// and the classifier remembers only the latest result.
#[derive(Debug, Clone)]
pub struct ViewportClassifier {
    mobile_max_width: u32,
    current: ViewportClass,
}

impl ViewportClassifier {
    /// Classify the initial window width.
    #[must_use]
    pub fn new(options: &ViewportOptions, width: u32) -> Self {
        Self {
            mobile_max_width: options.mobile_max_width,
            current: classify(options.mobile_max_width, width),
        }
    }

    /// Reclassify after a resize. Returns the new class if it changed.
    pub fn resize(&mut self, width: u32) -> Option<ViewportClass> {
        let next = classify(self.mobile_max_width, width);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Latest classification.
    #[must_use]
    pub fn current(&self) -> ViewportClass {
        self.current
    }
}

fn classify(mobile_max_width: u32, width: u32) -> ViewportClass {
    if width <= mobile_max_width {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}
