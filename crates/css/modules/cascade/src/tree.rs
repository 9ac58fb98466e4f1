//! Arena holding the cascade: a base style plus decorated nodes.

use css_style_entry::StyleEntry;
use smallvec::SmallVec;

use crate::{BaseStyle, CascadeError, StyleNode};

/// Handle to a node in a [`StyleTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleNodeId(pub u32);

impl StyleNodeId {
    /// The base style at the root of every tree.
    pub const BASE: Self = Self(0);

    #[inline]
    pub const fn is_base(self) -> bool {
        self.0 == 0
    }
}

/// Construction limits for a [`StyleTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeLimits {
    /// Deepest nesting accepted below the base style.
    pub max_depth: usize,
}

impl Default for CascadeLimits {
    #[inline]
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// One decorated node: an entry plus its two named ancestors.
#[derive(Clone, Debug)]
pub(crate) struct DecoratedSlot {
    pub(crate) entry: StyleEntry,
    pub(crate) parent: StyleNodeId,
    /// The parent's parent. Font sizes scale against this node.
    pub(crate) scaling_base: StyleNodeId,
    pub(crate) depth: usize,
}

/// Ancestors of a node ordered from the child of the base down to the node.
pub(crate) type Lineage<'tree> = SmallVec<[(StyleNodeId, &'tree DecoratedSlot); 16]>;

/// An immutable cascade built once per laid-out region.
///
/// Parents must exist before their children are inserted, so the parent
/// chain can never loop back on itself.
#[derive(Clone, Debug)]
pub struct StyleTree {
    base: BaseStyle,
    slots: Vec<DecoratedSlot>,
    limits: CascadeLimits,
}

impl StyleTree {
    pub fn new(base: BaseStyle) -> Self {
        Self::with_limits(base, CascadeLimits::default())
    }

    pub fn with_limits(base: BaseStyle, limits: CascadeLimits) -> Self {
        Self {
            base,
            slots: Vec::new(),
            limits,
        }
    }

    #[inline]
    pub const fn base(&self) -> &BaseStyle {
        &self.base
    }

    /// Number of nodes including the base style.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() + 1
    }

    /// Always false: the base style is always present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Add a node decorating `parent` with `entry`.
    ///
    /// # Errors
    /// `UnknownNode` if `parent` is not in this tree; `DepthExceeded` if the
    /// new node would nest deeper than [`CascadeLimits::max_depth`];
    /// `CapacityExhausted` once every `u32` id is taken.
    pub fn insert(
        &mut self,
        parent: StyleNodeId,
        entry: StyleEntry,
    ) -> Result<StyleNodeId, CascadeError> {
        let (depth, scaling_base) = if parent.is_base() {
            (1, StyleNodeId::BASE)
        } else {
            let parent_slot = self.slot(parent).ok_or(CascadeError::UnknownNode(parent))?;
            (parent_slot.depth + 1, parent_slot.parent)
        };
        if depth > self.limits.max_depth {
            return Err(CascadeError::DepthExceeded {
                limit: self.limits.max_depth,
            });
        }
        let id = next_id(self.slots.len())?;
        tracing::debug!(
            node = id.0,
            parent = parent.0,
            depth,
            origin = ?entry.origin(),
            "inserted style node"
        );
        self.slots.push(DecoratedSlot {
            entry,
            parent,
            scaling_base,
            depth,
        });
        Ok(id)
    }

    /// View a node for resolution queries.
    pub fn node(&self, id: StyleNodeId) -> Option<StyleNode<'_>> {
        (id.is_base() || self.slot(id).is_some()).then_some(StyleNode::new(self, id))
    }

    /// View the base style as a node.
    #[inline]
    pub const fn base_node(&self) -> StyleNode<'_> {
        StyleNode::new(self, StyleNodeId::BASE)
    }

    pub(crate) fn slot(&self, id: StyleNodeId) -> Option<&DecoratedSlot> {
        if id.is_base() {
            return None;
        }
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.slots.get(index)
    }

    /// Collect the decorated ancestors of `id`, the node itself last.
    ///
    /// The walk is an explicit loop bounded by the depth limit, so even a
    /// corrupted chain cannot exhaust the stack.
    pub(crate) fn lineage(&self, id: StyleNodeId) -> Lineage<'_> {
        let mut lineage = Lineage::new();
        let mut cursor = id;
        while let Some(slot) = self.slot(cursor) {
            if lineage.len() > self.limits.max_depth {
                tracing::error!(node = id.0, "style lineage exceeds depth limit; truncating");
                break;
            }
            lineage.push((cursor, slot));
            cursor = slot.parent;
        }
        lineage.reverse();
        lineage
    }
}

impl Default for StyleTree {
    fn default() -> Self {
        Self::new(BaseStyle::default())
    }
}

/// Id for the node stored after `slot_count` decorated slots; id 0 is the base.
fn next_id(slot_count: usize) -> Result<StyleNodeId, CascadeError> {
    slot_count
        .checked_add(1)
        .and_then(|index| u32::try_from(index).ok())
        .map(StyleNodeId)
        .ok_or(CascadeError::CapacityExhausted)
}
