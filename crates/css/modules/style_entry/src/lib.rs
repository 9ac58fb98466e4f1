//! Style entries: the explicitly declared properties of one style application.
//!
//! A [`StyleEntry`] is what one markup tag or one stylesheet rule contributes.
//! It is a sparse, immutable bag: every [`Feature`] is independently present or
//! absent, and absence always means "defer to the ancestor". Entries know
//! nothing about inheritance; that lives in the cascade.

#![forbid(unsafe_code)]

mod error;
mod feature;
mod font;
mod keyword;
mod modifier;

use css_values_units::{Length, TextMetrics, compute_length};
use std::collections::BTreeMap;

pub use error::StyleEntryError;
pub use feature::{EntryOrigin, Feature, FeatureSet};
pub use font::{FontEntry, FontList, font_list};
pub use keyword::{TextAlignment, VerticalAlignKeyword};
pub use modifier::{FontModifier, ModifierSet, TriState};

/// Typed value stored for a present feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureValue {
    Length(Length),
    Alignment(TextAlignment),
    VerticalAlign(VerticalAlignKeyword),
    FontList(FontList),
    Modifiers(ModifierSet),
}

/// Explicitly declared properties for a single style application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleEntry {
    origin: EntryOrigin,
    features: FeatureSet,
    values: BTreeMap<Feature, FeatureValue>,
}

impl StyleEntry {
    /// Start building an entry for `origin`.
    #[inline]
    pub const fn builder(origin: EntryOrigin) -> StyleEntryBuilder {
        StyleEntryBuilder::new(origin)
    }

    /// Start building an entry produced by markup.
    #[inline]
    pub const fn markup() -> StyleEntryBuilder {
        StyleEntryBuilder::new(EntryOrigin::Markup)
    }

    /// Start building an entry produced by a stylesheet rule.
    #[inline]
    pub const fn stylesheet() -> StyleEntryBuilder {
        StyleEntryBuilder::new(EntryOrigin::Stylesheet)
    }

    /// An entry declaring nothing.
    pub const fn empty(origin: EntryOrigin) -> Self {
        Self {
            origin,
            features: FeatureSet::empty(),
            values: BTreeMap::new(),
        }
    }

    #[inline]
    pub const fn origin(&self) -> EntryOrigin {
        self.origin
    }

    #[inline]
    pub const fn features(&self) -> FeatureSet {
        self.features
    }

    /// Whether this entry explicitly declares `feature`.
    #[inline]
    pub const fn is_feature_supported(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    /// The stored value for `feature`, if declared.
    #[inline]
    pub fn value(&self, feature: Feature) -> Option<&FeatureValue> {
        self.values.get(&feature)
    }

    /// The declared length for a length-typed `feature`.
    ///
    /// # Errors
    /// `Undeclared` if the entry has no value for `feature`, `WrongType` if the
    /// feature is not length-typed.
    pub fn declared_length(&self, feature: Feature) -> Result<Length, StyleEntryError> {
        match self.value(feature) {
            Some(FeatureValue::Length(length)) => Ok(*length),
            Some(_) => Err(StyleEntryError::WrongType(feature)),
            None if feature.is_length() => Err(StyleEntryError::Undeclared(feature)),
            None => Err(StyleEntryError::WrongType(feature)),
        }
    }

    /// Resolve the declared length for `feature` to absolute units.
    ///
    /// `reference_size` is the font size relative units scale against.
    ///
    /// # Errors
    /// Same as [`Self::declared_length`].
    pub fn length(
        &self,
        feature: Feature,
        metrics: &TextMetrics,
        reference_size: i32,
    ) -> Result<i32, StyleEntryError> {
        self.declared_length(feature)
            .map(|length| compute_length(length, metrics, reference_size))
    }

    /// Declared state of `modifier`; `Undefined` when not declared.
    pub fn font_modifier(&self, modifier: FontModifier) -> TriState {
        match self.value(Feature::FontStyleModifier) {
            Some(FeatureValue::Modifiers(set)) => set.get(modifier),
            _ => TriState::Undefined,
        }
    }

    /// Declared font families, primary first. Empty when none are declared.
    pub fn font_entries(&self) -> &[FontEntry] {
        match self.value(Feature::FontFamily) {
            Some(FeatureValue::FontList(list)) => list.as_slice(),
            _ => &[],
        }
    }

    /// # Errors
    /// `Undeclared` when the entry has no alignment.
    pub fn alignment_type(&self) -> Result<TextAlignment, StyleEntryError> {
        match self.value(Feature::AlignmentType) {
            Some(FeatureValue::Alignment(alignment)) => Ok(*alignment),
            Some(_) => Err(StyleEntryError::WrongType(Feature::AlignmentType)),
            None => Err(StyleEntryError::Undeclared(Feature::AlignmentType)),
        }
    }

    /// # Errors
    /// `Undeclared` when the entry has no keyword vertical alignment.
    pub fn vertical_align_code(&self) -> Result<VerticalAlignKeyword, StyleEntryError> {
        match self.value(Feature::NonLengthVerticalAlign) {
            Some(FeatureValue::VerticalAlign(keyword)) => Ok(*keyword),
            Some(_) => Err(StyleEntryError::WrongType(Feature::NonLengthVerticalAlign)),
            None => Err(StyleEntryError::Undeclared(Feature::NonLengthVerticalAlign)),
        }
    }
}

/// Builder for [`StyleEntry`]. Each setter stores its feature with the
/// matching value type, so built entries are always well-typed.
#[derive(Clone, Debug)]
pub struct StyleEntryBuilder {
    origin: EntryOrigin,
    values: BTreeMap<Feature, FeatureValue>,
    modifiers: ModifierSet,
}

impl StyleEntryBuilder {
    pub const fn new(origin: EntryOrigin) -> Self {
        Self {
            origin,
            values: BTreeMap::new(),
            modifiers: ModifierSet::new(),
        }
    }

    /// Declare a length for any length-typed feature.
    ///
    /// # Errors
    /// `WrongType` if `feature` does not hold lengths.
    pub fn length(mut self, feature: Feature, length: Length) -> Result<Self, StyleEntryError> {
        if !feature.is_length() {
            return Err(StyleEntryError::WrongType(feature));
        }
        self.values.insert(feature, FeatureValue::Length(length));
        Ok(self)
    }

    fn with_length(mut self, feature: Feature, length: Length) -> Self {
        self.values.insert(feature, FeatureValue::Length(length));
        self
    }

    #[must_use]
    pub fn left_indent(self, length: Length) -> Self {
        self.with_length(Feature::LeftIndent, length)
    }

    #[must_use]
    pub fn right_indent(self, length: Length) -> Self {
        self.with_length(Feature::RightIndent, length)
    }

    #[must_use]
    pub fn first_line_indent(self, length: Length) -> Self {
        self.with_length(Feature::FirstLineIndent, length)
    }

    #[must_use]
    pub fn space_before(self, length: Length) -> Self {
        self.with_length(Feature::SpaceBefore, length)
    }

    #[must_use]
    pub fn space_after(self, length: Length) -> Self {
        self.with_length(Feature::SpaceAfter, length)
    }

    #[must_use]
    pub fn font_size(self, length: Length) -> Self {
        self.with_length(Feature::FontSize, length)
    }

    #[must_use]
    pub fn vertical_align(self, length: Length) -> Self {
        self.with_length(Feature::VerticalAlign, length)
    }

    #[must_use]
    pub fn vertical_align_keyword(mut self, keyword: VerticalAlignKeyword) -> Self {
        self.values.insert(
            Feature::NonLengthVerticalAlign,
            FeatureValue::VerticalAlign(keyword),
        );
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.values
            .insert(Feature::AlignmentType, FeatureValue::Alignment(alignment));
        self
    }

    /// Declare font families, primary first. An empty list still marks the
    /// feature as present but contributes no candidates.
    #[must_use]
    pub fn font_family<I>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = FontEntry>,
    {
        self.values.insert(
            Feature::FontFamily,
            FeatureValue::FontList(families.into_iter().collect()),
        );
        self
    }

    #[must_use]
    pub fn font_modifier(mut self, modifier: FontModifier, state: TriState) -> Self {
        self.modifiers = self.modifiers.with(modifier, state);
        self
    }

    pub fn build(mut self) -> StyleEntry {
        if !self.modifiers.is_empty() {
            self.values.insert(
                Feature::FontStyleModifier,
                FeatureValue::Modifiers(self.modifiers),
            );
        }
        let features = self.values.keys().copied().collect();
        StyleEntry {
            origin: self.origin,
            features,
            values: self.values,
        }
    }
}
