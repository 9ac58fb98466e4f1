//! Accessor contract violations.

use crate::Feature;
use core::fmt;

/// Returned when an accessor is used for a feature the entry cannot answer.
///
/// Callers are expected to check [`crate::StyleEntry::is_feature_supported`]
/// first, so seeing one of these is a programming error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleEntryError {
    /// The entry does not declare this feature.
    Undeclared(Feature),
    /// The feature is declared, but not with the requested value type.
    WrongType(Feature),
}

impl fmt::Display for StyleEntryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undeclared(feature) => {
                write!(formatter, "style entry does not declare {feature}")
            }
            Self::WrongType(feature) => {
                write!(formatter, "{feature} is not readable with this accessor")
            }
        }
    }
}

impl core::error::Error for StyleEntryError {}
