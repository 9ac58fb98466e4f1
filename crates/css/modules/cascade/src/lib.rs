//! Text style cascade: resolves the effective typographic attributes of styled
//! text from a tree of style entries.
//!
//! A [`StyleTree`] is rooted at a [`BaseStyle`] and grows one decorated node
//! per markup tag or stylesheet rule. Queries on a [`StyleNode`] combine the
//! node's [`css_style_entry::StyleEntry`] with its ancestors, honoring the
//! per-category [`CssToggles`] for stylesheet-derived entries.

#![forbid(unsafe_code)]

mod base;
mod computed;
mod decorated;
mod error;
mod toggles;
mod tree;

pub use base::{BaseStyle, BaseStyleConfig, load_base_config};
pub use computed::ComputedTextStyle;
pub use decorated::{LengthAttribute, StyleNode};
pub use error::CascadeError;
pub use toggles::{CssCategory, CssToggles, ToggleStore, global_toggles};
pub use tree::{CascadeLimits, StyleNodeId, StyleTree};
