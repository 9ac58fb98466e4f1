#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use core::error::Error;
use css_cascade::{CssCategory, CssToggles, StyleNodeId, StyleTree, global_toggles};
use css_style_entry::StyleEntry;
use css_values_units::{Length, TextMetrics};

#[test]
fn current_compute_reads_process_toggles() -> Result<(), Box<dyn Error>> {
    let metrics = TextMetrics::default();
    let mut tree = StyleTree::default();
    let rule = tree.insert(
        StyleNodeId::BASE,
        StyleEntry::stylesheet()
            .left_indent(Length::px(12))
            .font_size(Length::px(30))
            .build(),
    )?;
    let rule_node = tree.node(rule).ok_or("missing node")?;

    assert_eq!(global_toggles().snapshot(), CssToggles::ALL);
    let enabled = rule_node.compute_current(&metrics);
    assert_eq!(enabled.left_indent, 12);
    assert_eq!(enabled.font_size, 30);

    global_toggles().set(CssCategory::Margins, false);
    let gated = rule_node.compute_current(&metrics);
    global_toggles().store(CssToggles::ALL);
    assert_eq!(gated.left_indent, 0);
    assert_eq!(gated.font_size, 30);
    Ok(())
}
