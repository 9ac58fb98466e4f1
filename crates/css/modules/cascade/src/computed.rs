//! Fully resolved text style for one node.

use css_style_entry::{FontList, TextAlignment};

/// Every attribute of a node, resolved against one set of metrics and one
/// toggle snapshot. Nodes are immutable, so callers may keep this around for
/// as long as those inputs stay the same.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputedTextStyle {
    pub font_entries: FontList,
    pub font_size: i32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
    pub left_indent: i32,
    pub right_indent: i32,
    pub first_line_indent: i32,
    pub space_before: i32,
    pub space_after: i32,
    pub vertical_align: i32,
    pub line_space_percent: i32,
    pub allow_hyphenations: bool,
    pub alignment: TextAlignment,
}

impl ComputedTextStyle {
    /// Line height implied by the font size and line spacing.
    #[inline]
    pub const fn line_height(&self) -> i32 {
        let height = self.font_size as i64 * self.line_space_percent as i64 / 100;
        if height > i32::MAX as i64 {
            i32::MAX
        } else if height < i32::MIN as i64 {
            i32::MIN
        } else {
            height as i32
        }
    }

    /// The primary font candidate, if any family resolved.
    #[inline]
    pub fn primary_font(&self) -> Option<&str> {
        self.font_entries.first().map(|entry| entry.family())
    }
}
