//! Lengths and their conversion to absolute units.

/// Unit attached to a [`Length`] magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    /// Absolute device pixels; the magnitude is used unchanged.
    Pixel,
    /// Typographic points, scaled by the metrics' DPI.
    Point,
    /// Hundredths of the reference font size.
    Em100,
    /// Hundredths of the root font size.
    Rem100,
    /// Hundredths of the current x-height.
    Ex100,
    /// Percent of the reference size.
    Percent,
}

/// A declared length: a magnitude paired with its unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Length {
    pub size: i16,
    pub unit: SizeUnit,
}

impl Length {
    /// Construct a length from its parts.
    #[inline]
    pub const fn new(size: i16, unit: SizeUnit) -> Self {
        Self { size, unit }
    }

    /// Absolute pixels.
    #[inline]
    pub const fn px(size: i16) -> Self {
        Self::new(size, SizeUnit::Pixel)
    }

    /// Hundredths of an em.
    #[inline]
    pub const fn em100(size: i16) -> Self {
        Self::new(size, SizeUnit::Em100)
    }

    /// Percent of the reference size.
    #[inline]
    pub const fn percent(size: i16) -> Self {
        Self::new(size, SizeUnit::Percent)
    }
}

/// Resolve `length` to absolute units.
///
/// `reference_size` is the font size that relative units (`Em100`, `Percent`)
/// scale against. All arithmetic truncates toward zero; intermediate products
/// are widened so large reference sizes cannot overflow.
pub fn compute_length(length: Length, metrics: &crate::TextMetrics, reference_size: i32) -> i32 {
    let size = i64::from(length.size);
    let absolute = match length.unit {
        SizeUnit::Pixel => size,
        SizeUnit::Point => size * i64::from(metrics.dpi) / 72,
        SizeUnit::Em100 | SizeUnit::Percent => i64::from(reference_size) * size / 100,
        SizeUnit::Rem100 => i64::from(metrics.root_font_size) * size / 100,
        SizeUnit::Ex100 => i64::from(metrics.x_height) * size / 100,
    };
    saturate(absolute)
}

/// Scale `base` by `numerator / denominator` with truncating integer arithmetic.
///
/// This is the arithmetic behind relative font-size steps such as
/// `base * 120 / 100`.
pub fn scale_percent(base: i32, numerator: i32, denominator: i32) -> i32 {
    if denominator == 0 {
        return base;
    }
    saturate(i64::from(base) * i64::from(numerator) / i64::from(denominator))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
