//! The base style: root of every cascade tree.
//!
//! Every query that falls through all decorated nodes lands here and receives
//! an unconditional default.

use anyhow::{Context as _, Result};
use css_style_entry::{FontEntry, FontList, TextAlignment};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::CssToggles;

/// Persisted defaults for the base style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStyleConfig {
    /// Default font families, primary first.
    pub font_family: Vec<String>,
    pub font_size: i32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
    pub alignment: TextAlignment,
    /// Line height as a percentage of the font size.
    pub line_space_percent: i32,
    pub allow_hyphenations: bool,
    /// Initial state of the stylesheet override toggles.
    pub css_overrides: CssToggles,
}

impl Default for BaseStyleConfig {
    fn default() -> Self {
        Self {
            font_family: vec!["serif".to_owned()],
            font_size: 18,
            bold: false,
            italic: false,
            underline: false,
            strike_through: false,
            alignment: TextAlignment::Justify,
            line_space_percent: 120,
            allow_hyphenations: true,
            css_overrides: CssToggles::ALL,
        }
    }
}

impl BaseStyleConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns the deserializer error for malformed input.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Load a [`BaseStyleConfig`] from a JSON file.
///
/// # Errors
/// Fails when the file cannot be read or does not parse.
pub fn load_base_config(path: &Path) -> Result<BaseStyleConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading base style config {}", path.display()))?;
    let config = BaseStyleConfig::from_json_str(&text)
        .with_context(|| format!("parsing base style config {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        font_size = config.font_size,
        "loaded base style config"
    );
    Ok(config)
}

/// Resolved defaults at the root of a cascade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseStyle {
    font_entries: FontList,
    font_size: i32,
    bold: bool,
    italic: bool,
    underline: bool,
    strike_through: bool,
    alignment: TextAlignment,
    line_space_percent: i32,
    allow_hyphenations: bool,
}

impl BaseStyle {
    pub fn new(config: &BaseStyleConfig) -> Self {
        Self {
            font_entries: config
                .font_family
                .iter()
                .map(|family| FontEntry::new(family))
                .collect(),
            font_size: config.font_size,
            bold: config.bold,
            italic: config.italic,
            underline: config.underline,
            strike_through: config.strike_through,
            alignment: config.alignment,
            line_space_percent: config.line_space_percent,
            allow_hyphenations: config.allow_hyphenations,
        }
    }

    #[inline]
    pub fn font_entries(&self) -> &FontList {
        &self.font_entries
    }

    #[inline]
    pub const fn font_size(&self) -> i32 {
        self.font_size
    }

    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    #[inline]
    pub const fn is_italic(&self) -> bool {
        self.italic
    }

    #[inline]
    pub const fn is_underline(&self) -> bool {
        self.underline
    }

    #[inline]
    pub const fn is_strike_through(&self) -> bool {
        self.strike_through
    }

    #[inline]
    pub const fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    #[inline]
    pub const fn line_space_percent(&self) -> i32 {
        self.line_space_percent
    }

    #[inline]
    pub const fn allow_hyphenations(&self) -> bool {
        self.allow_hyphenations
    }
}

impl Default for BaseStyle {
    fn default() -> Self {
        Self::new(&BaseStyleConfig::default())
    }
}

impl From<&BaseStyleConfig> for BaseStyle {
    #[inline]
    fn from(config: &BaseStyleConfig) -> Self {
        Self::new(config)
    }
}
