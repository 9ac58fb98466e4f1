//! Font descriptors and ordered font lists.

use core::fmt;
use smallvec::SmallVec;
use std::sync::Arc;

/// An opaque font family descriptor.
///
/// The cascade only orders and compares these; it never interprets the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontEntry {
    family: Arc<str>,
}

impl FontEntry {
    pub fn new(family: &str) -> Self {
        Self {
            family: Arc::from(family),
        }
    }

    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl fmt::Display for FontEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.family)
    }
}

impl From<&str> for FontEntry {
    #[inline]
    fn from(family: &str) -> Self {
        Self::new(family)
    }
}

/// Ordered font candidates, primary first.
pub type FontList = SmallVec<[FontEntry; 4]>;

/// Build a [`FontList`] from family names.
pub fn font_list<'name, I>(families: I) -> FontList
where
    I: IntoIterator<Item = &'name str>,
{
    families.into_iter().map(FontEntry::new).collect()
}
