//! User override toggles for stylesheet-derived styling.
//!
//! Each toggle gates one category of attributes. When a toggle is off,
//! stylesheet entries stop contributing to that category; markup entries are
//! never affected.

use core::sync::atomic::{AtomicU8, Ordering};
use serde::{Deserialize, Serialize};

/// Attribute categories a toggle can gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CssCategory {
    FontFamily,
    FontSize,
    /// Left, right and first-line indents plus space before and after.
    Margins,
    TextAlignment,
}

impl CssCategory {
    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A consistent snapshot of every toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CssToggles {
    pub font_family: bool,
    pub font_size: bool,
    pub margins: bool,
    pub text_alignment: bool,
}

impl CssToggles {
    /// Every stylesheet category enabled.
    pub const ALL: Self = Self {
        font_family: true,
        font_size: true,
        margins: true,
        text_alignment: true,
    };

    /// Every stylesheet category disabled.
    pub const NONE: Self = Self {
        font_family: false,
        font_size: false,
        margins: false,
        text_alignment: false,
    };

    #[inline]
    pub const fn enabled(self, category: CssCategory) -> bool {
        match category {
            CssCategory::FontFamily => self.font_family,
            CssCategory::FontSize => self.font_size,
            CssCategory::Margins => self.margins,
            CssCategory::TextAlignment => self.text_alignment,
        }
    }

    #[must_use]
    pub const fn with(mut self, category: CssCategory, enabled: bool) -> Self {
        match category {
            CssCategory::FontFamily => self.font_family = enabled,
            CssCategory::FontSize => self.font_size = enabled,
            CssCategory::Margins => self.margins = enabled,
            CssCategory::TextAlignment => self.text_alignment = enabled,
        }
        self
    }

    const fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.font_family {
            bits |= CssCategory::FontFamily.bit();
        }
        if self.font_size {
            bits |= CssCategory::FontSize.bit();
        }
        if self.margins {
            bits |= CssCategory::Margins.bit();
        }
        if self.text_alignment {
            bits |= CssCategory::TextAlignment.bit();
        }
        bits
    }

    const fn from_bits(bits: u8) -> Self {
        Self {
            font_family: bits & CssCategory::FontFamily.bit() != 0,
            font_size: bits & CssCategory::FontSize.bit() != 0,
            margins: bits & CssCategory::Margins.bit() != 0,
            text_alignment: bits & CssCategory::TextAlignment.bit() != 0,
        }
    }
}

impl Default for CssToggles {
    #[inline]
    fn default() -> Self {
        Self::ALL
    }
}

/// Shared toggle state that configuration can update while layout reads it.
///
/// All four toggles live in one atomic word, so a [`Self::snapshot`] never
/// observes half of an update.
#[derive(Debug)]
pub struct ToggleStore {
    bits: AtomicU8,
}

impl ToggleStore {
    pub const fn new(toggles: CssToggles) -> Self {
        Self {
            bits: AtomicU8::new(toggles.to_bits()),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> CssToggles {
        CssToggles::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Replace every toggle at once.
    #[inline]
    pub fn store(&self, toggles: CssToggles) {
        self.bits.store(toggles.to_bits(), Ordering::Release);
    }

    /// Flip one category, leaving the others untouched.
    pub fn set(&self, category: CssCategory, enabled: bool) {
        if enabled {
            self.bits.fetch_or(category.bit(), Ordering::AcqRel);
        } else {
            self.bits.fetch_and(!category.bit(), Ordering::AcqRel);
        }
    }
}

impl Default for ToggleStore {
    fn default() -> Self {
        Self::new(CssToggles::ALL)
    }
}

static GLOBAL_TOGGLES: ToggleStore = ToggleStore::new(CssToggles::ALL);

/// Process-wide toggle store for hosts that keep a single configuration.
pub fn global_toggles() -> &'static ToggleStore {
    &GLOBAL_TOGGLES
}
