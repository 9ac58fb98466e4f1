//! Enumerated codes: text alignment and vertical-align keywords.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    #[default]
    Undefined,
    Left,
    Right,
    Center,
    Justify,
    /// Start edge of the line in the paragraph's direction.
    LineStart,
}

/// Keyword forms of `vertical-align`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAlignKeyword {
    Sub,
    Super,
    Top,
    TextTop,
    Middle,
    Bottom,
    TextBottom,
    Initial,
    Inherit,
}

impl VerticalAlignKeyword {
    /// Numeric code as stored by the document model.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}
