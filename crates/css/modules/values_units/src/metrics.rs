//! Layout metrics consulted when converting lengths.

use serde::{Deserialize, Serialize};

/// Metrics of the current layout surface.
///
/// The cascade never inspects these values itself; it only threads them
/// through to [`crate::compute_length`] for units that need them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMetrics {
    /// Device resolution in dots per inch, used by `pt` lengths.
    pub dpi: i32,
    /// Font size of the document root, used by `rem` lengths.
    pub root_font_size: i32,
    /// Height of a lowercase `x` in the current face, used by `ex` lengths.
    pub x_height: i32,
}

impl TextMetrics {
    /// Construct metrics from their components.
    #[inline]
    pub const fn new(dpi: i32, root_font_size: i32, x_height: i32) -> Self {
        Self {
            dpi,
            root_font_size,
            x_height,
        }
    }
}

impl Default for TextMetrics {
    #[inline]
    fn default() -> Self {
        Self::new(96, 16, 8)
    }
}
