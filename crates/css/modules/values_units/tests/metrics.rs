#![cfg(test)]
#![allow(clippy::unwrap_used, reason = "Tests unwrap fixture deserialization")]

use css_values_units::{Length, SizeUnit, TextMetrics, compute_length};

#[test]
fn metrics_fill_missing_fields_with_defaults() {
    let metrics: TextMetrics = serde_json::from_str(r#"{ "dpi": 300 }"#).unwrap();
    assert_eq!(metrics.dpi, 300);
    assert_eq!(metrics.root_font_size, TextMetrics::default().root_font_size);
    assert_eq!(metrics.x_height, TextMetrics::default().x_height);
}

#[test]
fn points_follow_device_resolution() {
    let screen = TextMetrics::new(72, 16, 8);
    let print = TextMetrics::new(300, 16, 8);
    let length = Length::new(10, SizeUnit::Point);
    assert_eq!(compute_length(length, &screen, 0), 10);
    assert_eq!(compute_length(length, &print, 0), 41);
}
