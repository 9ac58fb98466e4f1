//! Tri-state font modifiers.

/// A three-valued style flag.
///
/// `Undefined` means "no opinion" and is distinct from an explicit `False`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriState {
    True,
    False,
    #[default]
    Undefined,
}

impl TriState {
    /// The explicit value, if any.
    #[inline]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Undefined => None,
        }
    }
}

impl From<bool> for TriState {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for TriState {
    #[inline]
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Undefined, Self::from)
    }
}

/// Font modifiers a style entry may switch on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontModifier {
    Bold,
    Italic,
    Underlined,
    StrikedThrough,
    SmallCaps,
    /// Use the inherited size unchanged.
    Inherit,
    /// One relative step down.
    Smaller,
    /// One relative step up.
    Larger,
}

impl FontModifier {
    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Declared modifiers: which are set, and to what.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet {
    declared: u8,
    values: u8,
}

impl ModifierSet {
    #[inline]
    pub const fn new() -> Self {
        Self {
            declared: 0,
            values: 0,
        }
    }

    /// Return a copy with `modifier` set to `state`.
    ///
    /// Setting `Undefined` removes an earlier declaration.
    #[must_use]
    pub const fn with(self, modifier: FontModifier, state: TriState) -> Self {
        let bit = modifier.bit();
        match state {
            TriState::True => Self {
                declared: self.declared | bit,
                values: self.values | bit,
            },
            TriState::False => Self {
                declared: self.declared | bit,
                values: self.values & !bit,
            },
            TriState::Undefined => Self {
                declared: self.declared & !bit,
                values: self.values & !bit,
            },
        }
    }

    #[inline]
    pub const fn get(self, modifier: FontModifier) -> TriState {
        let bit = modifier.bit();
        if self.declared & bit == 0 {
            TriState::Undefined
        } else if self.values & bit == 0 {
            TriState::False
        } else {
            TriState::True
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.declared == 0
    }
}
