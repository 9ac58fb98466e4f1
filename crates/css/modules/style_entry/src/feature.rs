//! Feature kinds an entry may declare, and the set type used to track them.

use core::fmt;

/// Where a style entry came from.
///
/// Stylesheet entries can be switched off per category by the user's
/// override toggles; markup entries always apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryOrigin {
    /// Presentational markup or an explicit tag style.
    Markup,
    /// A rule from a document or user stylesheet.
    Stylesheet,
}

/// Every attribute kind an entry can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    LeftIndent,
    RightIndent,
    FirstLineIndent,
    SpaceBefore,
    SpaceAfter,
    FontSize,
    VerticalAlign,
    AlignmentType,
    FontFamily,
    FontStyleModifier,
    NonLengthVerticalAlign,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::LeftIndent,
        Self::RightIndent,
        Self::FirstLineIndent,
        Self::SpaceBefore,
        Self::SpaceAfter,
        Self::FontSize,
        Self::VerticalAlign,
        Self::AlignmentType,
        Self::FontFamily,
        Self::FontStyleModifier,
        Self::NonLengthVerticalAlign,
    ];

    /// Whether values of this feature are stored as a length.
    #[inline]
    pub const fn is_length(self) -> bool {
        matches!(
            self,
            Self::LeftIndent
                | Self::RightIndent
                | Self::FirstLineIndent
                | Self::SpaceBefore
                | Self::SpaceAfter
                | Self::FontSize
                | Self::VerticalAlign
        )
    }

    #[inline]
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftIndent => "left-indent",
            Self::RightIndent => "right-indent",
            Self::FirstLineIndent => "first-line-indent",
            Self::SpaceBefore => "space-before",
            Self::SpaceAfter => "space-after",
            Self::FontSize => "font-size",
            Self::VerticalAlign => "vertical-align",
            Self::AlignmentType => "text-align",
            Self::FontFamily => "font-family",
            Self::FontStyleModifier => "font-style-modifier",
            Self::NonLengthVerticalAlign => "vertical-align-keyword",
        };
        formatter.write_str(name)
    }
}

/// Compact set of [`Feature`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FeatureSet(u16);

impl FeatureSet {
    /// The empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    #[inline]
    pub const fn with(self, feature: Feature) -> Self {
        Self(self.0 | feature.bit())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL
            .into_iter()
            .filter(move |feature| self.contains(*feature))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}
