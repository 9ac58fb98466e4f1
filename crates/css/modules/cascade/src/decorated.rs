//! Resolution of effective attribute values for one cascade node.
//!
//! A decorated node answers each query from its own entry when it can and
//! otherwise takes its parent's answer. Font size and font family are folded
//! from the top of the lineage down, since each node builds on an ancestor's
//! resolved value; every other attribute is found by walking up until some
//! node answers, ending at the base style.

use css_style_entry::{
    EntryOrigin, Feature, FontList, FontModifier, StyleEntry, StyleEntryError,
    TextAlignment, TriState, VerticalAlignKeyword,
};
use css_values_units::{Length, TextMetrics, compute_length, scale_percent};
use smallvec::SmallVec;

use crate::tree::Lineage;
use crate::{ComputedTextStyle, CssCategory, CssToggles, StyleNodeId, StyleTree, global_toggles};

/// Length-valued attributes gated by the margins toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthAttribute {
    LeftIndent,
    RightIndent,
    FirstLineIndent,
    SpaceBefore,
    SpaceAfter,
}

impl LengthAttribute {
    pub const ALL: [Self; 5] = [
        Self::LeftIndent,
        Self::RightIndent,
        Self::FirstLineIndent,
        Self::SpaceBefore,
        Self::SpaceAfter,
    ];

    /// The entry feature holding this attribute.
    #[inline]
    pub const fn feature(self) -> Feature {
        match self {
            Self::LeftIndent => Feature::LeftIndent,
            Self::RightIndent => Feature::RightIndent,
            Self::FirstLineIndent => Feature::FirstLineIndent,
            Self::SpaceBefore => Feature::SpaceBefore,
            Self::SpaceAfter => Feature::SpaceAfter,
        }
    }
}

/// Font-size steps used by the `Larger` and `Smaller` modifiers.
const RELATIVE_STEP_NUMERATOR: i32 = 120;
const RELATIVE_STEP_DENOMINATOR: i32 = 100;

/// Offsets used for the `sub` and `super` keywords, in hundredths of an em.
const SUBSCRIPT_SHIFT: Length = Length::em100(-50);
const SUPERSCRIPT_SHIFT: Length = Length::em100(50);

/// Resolved font sizes for a lineage, keyed by node.
type SizeTable = SmallVec<[(StyleNodeId, i32); 16]>;

/// Borrowed view of one node in a [`StyleTree`].
#[derive(Clone, Copy, Debug)]
pub struct StyleNode<'tree> {
    tree: &'tree StyleTree,
    id: StyleNodeId,
}

impl<'tree> StyleNode<'tree> {
    pub(crate) const fn new(tree: &'tree StyleTree, id: StyleNodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    pub const fn id(&self) -> StyleNodeId {
        self.id
    }

    #[inline]
    pub const fn is_base(&self) -> bool {
        self.id.is_base()
    }

    /// This node's entry; `None` for the base style.
    pub fn entry(&self) -> Option<&'tree StyleEntry> {
        self.tree.slot(self.id).map(|slot| &slot.entry)
    }

    /// Nesting depth below the base style.
    pub fn depth(&self) -> usize {
        self.tree.slot(self.id).map_or(0, |slot| slot.depth)
    }

    /// Immediate parent. The base style is its own parent.
    pub fn parent(&self) -> Self {
        let parent = self
            .tree
            .slot(self.id)
            .map_or(StyleNodeId::BASE, |slot| slot.parent);
        Self::new(self.tree, parent)
    }

    /// The ancestor whose font size this node scales against: the parent's
    /// parent.
    pub fn scaling_base(&self) -> Self {
        let base = self
            .tree
            .slot(self.id)
            .map_or(StyleNodeId::BASE, |slot| slot.scaling_base);
        Self::new(self.tree, base)
    }

    /// Ordered font candidates, primary first.
    pub fn font_entries(&self, toggles: CssToggles) -> FontList {
        let mut fonts = self.tree.base().font_entries().clone();
        for (_, slot) in self.tree.lineage(self.id) {
            if let Some(combined) = own_font_entries(&slot.entry, &fonts, toggles) {
                fonts = combined;
            }
        }
        fonts
    }

    /// Effective font size.
    pub fn font_size(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        let lineage = self.tree.lineage(self.id);
        let sizes = self.size_table(&lineage, metrics, toggles);
        lookup_size(&sizes, self.id, self.tree.base().font_size())
    }

    pub fn is_bold(&self) -> bool {
        self.modifier_flag(FontModifier::Bold, self.tree.base().is_bold())
    }

    pub fn is_italic(&self) -> bool {
        self.modifier_flag(FontModifier::Italic, self.tree.base().is_italic())
    }

    pub fn is_underline(&self) -> bool {
        self.modifier_flag(FontModifier::Underlined, self.tree.base().is_underline())
    }

    pub fn is_strike_through(&self) -> bool {
        self.modifier_flag(
            FontModifier::StrikedThrough,
            self.tree.base().is_strike_through(),
        )
    }

    pub fn left_indent(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        self.length(LengthAttribute::LeftIndent, metrics, toggles)
    }

    pub fn right_indent(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        self.length(LengthAttribute::RightIndent, metrics, toggles)
    }

    pub fn first_line_indent(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        self.length(LengthAttribute::FirstLineIndent, metrics, toggles)
    }

    pub fn space_before(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        self.length(LengthAttribute::SpaceBefore, metrics, toggles)
    }

    pub fn space_after(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        self.length(LengthAttribute::SpaceAfter, metrics, toggles)
    }

    /// Resolve a margin-category length using this node's own font size as
    /// the reference for relative units.
    pub fn length(
        &self,
        attribute: LengthAttribute,
        metrics: &TextMetrics,
        toggles: CssToggles,
    ) -> i32 {
        self.length_with_font_size(attribute, metrics, toggles, None)
    }

    /// Like [`Self::length`], but this node's entry converts against
    /// `font_size` instead of its resolved size. Ancestors reached by
    /// delegation still use their own resolved sizes.
    pub fn length_with_font_size(
        &self,
        attribute: LengthAttribute,
        metrics: &TextMetrics,
        toggles: CssToggles,
        font_size: Option<i32>,
    ) -> i32 {
        let feature = attribute.feature();
        self.walk_up(metrics, toggles, font_size, 0, |entry, reference| {
            if !applies(entry, CssCategory::Margins, toggles) {
                return None;
            }
            if !entry.is_feature_supported(feature) {
                return None;
            }
            checked(entry.length(feature, metrics, reference))
        })
    }

    /// Vertical shift of the baseline; positive raises the text.
    pub fn vertical_align(&self, metrics: &TextMetrics, toggles: CssToggles) -> i32 {
        self.vertical_align_with_font_size(metrics, toggles, None)
    }

    /// Like [`Self::vertical_align`] with an explicit reference size for
    /// this node's entry.
    pub fn vertical_align_with_font_size(
        &self,
        metrics: &TextMetrics,
        toggles: CssToggles,
        font_size: Option<i32>,
    ) -> i32 {
        self.walk_up(metrics, toggles, font_size, 0, |entry, reference| {
            own_vertical_align(entry, metrics, reference)
        })
    }

    /// Line height as a percentage of the font size.
    ///
    /// Decorated entries do not override this yet, so the value always comes
    /// from the base style.
    pub fn line_space_percent(&self) -> i32 {
        self.tree.base().line_space_percent()
    }

    /// Whether hyphenation may be applied. Like line spacing, decorated
    /// entries never override it.
    pub fn allow_hyphenations(&self) -> bool {
        self.tree.base().allow_hyphenations()
    }

    pub fn alignment(&self, toggles: CssToggles) -> TextAlignment {
        self.tree
            .lineage(self.id)
            .iter()
            .rev()
            .find_map(|(_, slot)| own_alignment(&slot.entry, toggles))
            .unwrap_or_else(|| self.tree.base().alignment())
    }

    /// Resolve every attribute at once.
    pub fn compute(&self, metrics: &TextMetrics, toggles: CssToggles) -> ComputedTextStyle {
        let lineage = self.tree.lineage(self.id);
        let sizes = self.size_table(&lineage, metrics, toggles);
        let font_size = lookup_size(&sizes, self.id, self.tree.base().font_size());
        let length = |attribute: LengthAttribute| {
            self.length_with_font_size(attribute, metrics, toggles, Some(font_size))
        };
        ComputedTextStyle {
            font_entries: self.font_entries(toggles),
            font_size,
            bold: self.is_bold(),
            italic: self.is_italic(),
            underline: self.is_underline(),
            strike_through: self.is_strike_through(),
            left_indent: length(LengthAttribute::LeftIndent),
            right_indent: length(LengthAttribute::RightIndent),
            first_line_indent: length(LengthAttribute::FirstLineIndent),
            space_before: length(LengthAttribute::SpaceBefore),
            space_after: length(LengthAttribute::SpaceAfter),
            vertical_align: self.vertical_align_with_font_size(metrics, toggles, Some(font_size)),
            line_space_percent: self.line_space_percent(),
            allow_hyphenations: self.allow_hyphenations(),
            alignment: self.alignment(toggles),
        }
    }

    /// [`Self::compute`] with the process-wide toggles read once.
    pub fn compute_current(&self, metrics: &TextMetrics) -> ComputedTextStyle {
        self.compute(metrics, global_toggles().snapshot())
    }

    fn modifier_flag(&self, modifier: FontModifier, base: bool) -> bool {
        self.tree
            .lineage(self.id)
            .iter()
            .rev()
            .find_map(|(_, slot)| slot.entry.font_modifier(modifier).to_option())
            .unwrap_or(base)
    }

    /// Resolve font sizes for every node in `lineage`, top down.
    ///
    /// Each node reads its parent and scaling base through their ids, so the
    /// two-hop rule for relative sizes is explicit rather than positional.
    fn size_table(
        &self,
        lineage: &Lineage<'tree>,
        metrics: &TextMetrics,
        toggles: CssToggles,
    ) -> SizeTable {
        let base_size = self.tree.base().font_size();
        let mut sizes = SizeTable::new();
        for (id, slot) in lineage {
            let parent = lookup_size(&sizes, slot.parent, base_size);
            let scaling_base = lookup_size(&sizes, slot.scaling_base, base_size);
            let size = own_font_size(&slot.entry, parent, scaling_base, metrics, toggles);
            sizes.push((*id, size));
        }
        sizes
    }

    /// Walk from this node towards the base until `answer` yields a value.
    ///
    /// `answer` receives each entry with that node's reference font size;
    /// `font_size`, when given, replaces the reference for this node only.
    fn walk_up<F>(
        &self,
        metrics: &TextMetrics,
        toggles: CssToggles,
        font_size: Option<i32>,
        base_value: i32,
        answer: F,
    ) -> i32
    where
        F: Fn(&StyleEntry, i32) -> Option<i32>,
    {
        let lineage = self.tree.lineage(self.id);
        let sizes = self.size_table(&lineage, metrics, toggles);
        let base_size = self.tree.base().font_size();
        lineage
            .iter()
            .rev()
            .find_map(|(id, slot)| {
                let reference = match font_size {
                    Some(size) if *id == self.id => size,
                    _ => lookup_size(&sizes, *id, base_size),
                };
                answer(&slot.entry, reference)
            })
            .unwrap_or(base_value)
    }
}

fn lookup_size(sizes: &SizeTable, id: StyleNodeId, base_size: i32) -> i32 {
    sizes
        .iter()
        .rev()
        .find(|(candidate, _)| *candidate == id)
        .map_or(base_size, |(_, size)| *size)
}

/// Whether `entry` may contribute to `category` under `toggles`.
fn applies(entry: &StyleEntry, category: CssCategory, toggles: CssToggles) -> bool {
    let allowed = entry.origin() == EntryOrigin::Markup || toggles.enabled(category);
    if !allowed {
        tracing::trace!(?category, "stylesheet override disabled; deferring to parent");
    }
    allowed
}

/// Unwrap an accessor result the caller already guarded with a support check.
fn checked<T>(result: Result<T, StyleEntryError>) -> Option<T> {
    debug_assert!(
        result.is_ok(),
        "style entry accessor used without support check"
    );
    result
        .map_err(|err| tracing::error!(%err, "style entry accessor used without support check"))
        .ok()
}

fn own_font_entries(entry: &StyleEntry, parent: &FontList, toggles: CssToggles) -> Option<FontList> {
    if !applies(entry, CssCategory::FontFamily, toggles)
        || !entry.is_feature_supported(Feature::FontFamily)
    {
        return None;
    }
    let declared = entry.font_entries();
    // A strict prefix of the parent's list is already in effect.
    if declared.is_empty() || (parent.len() > declared.len() && parent.starts_with(declared)) {
        return None;
    }
    Some(declared.iter().chain(parent.iter()).cloned().collect())
}

fn own_font_size(
    entry: &StyleEntry,
    parent: i32,
    scaling_base: i32,
    metrics: &TextMetrics,
    toggles: CssToggles,
) -> i32 {
    if !applies(entry, CssCategory::FontSize, toggles) {
        return parent;
    }
    if entry.is_feature_supported(Feature::FontStyleModifier) {
        if entry.font_modifier(FontModifier::Inherit) == TriState::True {
            return scaling_base;
        }
        if entry.font_modifier(FontModifier::Larger) == TriState::True {
            return scale_percent(scaling_base, RELATIVE_STEP_NUMERATOR, RELATIVE_STEP_DENOMINATOR);
        }
        if entry.font_modifier(FontModifier::Smaller) == TriState::True {
            return scale_percent(scaling_base, RELATIVE_STEP_DENOMINATOR, RELATIVE_STEP_NUMERATOR);
        }
    }
    if entry.is_feature_supported(Feature::FontSize) {
        return checked(entry.length(Feature::FontSize, metrics, scaling_base)).unwrap_or(parent);
    }
    parent
}

fn own_vertical_align(entry: &StyleEntry, metrics: &TextMetrics, reference: i32) -> Option<i32> {
    if entry.is_feature_supported(Feature::VerticalAlign) {
        return checked(entry.length(Feature::VerticalAlign, metrics, reference));
    }
    if !entry.is_feature_supported(Feature::NonLengthVerticalAlign) {
        return None;
    }
    // Only sub and super are mapped; the remaining keywords defer to the parent.
    let keyword = checked(entry.vertical_align_code())?;
    match keyword {
        VerticalAlignKeyword::Sub => Some(compute_length(SUBSCRIPT_SHIFT, metrics, reference)),
        VerticalAlignKeyword::Super => Some(compute_length(SUPERSCRIPT_SHIFT, metrics, reference)),
        VerticalAlignKeyword::Top
        | VerticalAlignKeyword::TextTop
        | VerticalAlignKeyword::Middle
        | VerticalAlignKeyword::Bottom
        | VerticalAlignKeyword::TextBottom
        | VerticalAlignKeyword::Initial
        | VerticalAlignKeyword::Inherit => {
            tracing::trace!(code = keyword.code(), "unmapped vertical-align keyword");
            None
        }
    }
}

fn own_alignment(entry: &StyleEntry, toggles: CssToggles) -> Option<TextAlignment> {
    if !applies(entry, CssCategory::TextAlignment, toggles)
        || !entry.is_feature_supported(Feature::AlignmentType)
    {
        return None;
    }
    checked(entry.alignment_type())
}
