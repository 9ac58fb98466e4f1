use criterion::{Criterion, criterion_group, criterion_main};
use css_cascade::{CssToggles, StyleNodeId, StyleTree};
use css_style_entry::{FontModifier, StyleEntry, TriState, font_list};
use css_values_units::{Length, TextMetrics};
use std::hint::black_box;

/// Build a chain resembling nested book markup: sections, paragraphs, spans.
fn build_chain(depth: usize) -> (StyleTree, StyleNodeId) {
    let mut tree = StyleTree::default();
    let mut leaf = StyleNodeId::BASE;
    for level in 0..depth {
        let entry = match level % 4 {
            0 => StyleEntry::stylesheet()
                .font_family(font_list(["Literata"]))
                .space_before(Length::em100(50))
                .build(),
            1 => StyleEntry::markup()
                .font_modifier(FontModifier::Larger, TriState::True)
                .build(),
            2 => StyleEntry::stylesheet()
                .left_indent(Length::percent(5))
                .first_line_indent(Length::em100(150))
                .build(),
            _ => StyleEntry::markup()
                .font_modifier(FontModifier::Italic, TriState::True)
                .build(),
        };
        match tree.insert(leaf, entry) {
            Ok(id) => leaf = id,
            Err(_) => break,
        }
    }
    (tree, leaf)
}

fn bench_resolve(criterion: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let metrics = TextMetrics::default();
    for depth in [4, 16, 64] {
        let (tree, leaf) = build_chain(depth);
        criterion.bench_function(&format!("compute_depth_{depth}"), |bencher| {
            bencher.iter(|| {
                let style = tree
                    .node(leaf)
                    .map(|node| node.compute(&metrics, CssToggles::ALL));
                black_box(style)
            });
        });
        criterion.bench_function(&format!("font_size_depth_{depth}"), |bencher| {
            bencher.iter(|| {
                let size = tree
                    .node(leaf)
                    .map(|node| node.font_size(&metrics, CssToggles::ALL));
                black_box(size)
            });
        });
    }
}

criterion_group!(resolve_benches, bench_resolve);
criterion_main!(resolve_benches);
