//! Property-style checks of the layout pass against a realistic
//! listing: determinism, stacking, extent, viewport queries and the
//! equivalence of the two measurement strategies.

use vitrine_foundation::{
    compute_listing_layout, CellStyle, FittingTextMeasurer, FontMetricsRegistry,
    MetricTextMeasurer, TextMeasurer,
};
use vitrine_testing::{assert_extent_consistent, assert_stacked, lorem, test_measurer};
use vitrine_ui_graphics::Rect;

const WIDTH: f32 = 390.0;

fn sample_items(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("Campaign {i}"), lorem(3 + i * 5)))
        .collect()
}

#[test]
fn layout_is_deterministic() {
    let items = sample_items(12);
    let style = CellStyle::default();
    let measurer = test_measurer();
    let first = compute_listing_layout(&items, WIDTH, &style, &measurer);
    let second = compute_listing_layout(&items, WIDTH, &style, &measurer);
    assert_eq!(first, second);
}

#[test]
fn frames_satisfy_stacking_and_extent_invariants() {
    let items = sample_items(20);
    let pass =
        compute_listing_layout(&items, WIDTH, &CellStyle::default(), &test_measurer());
    assert_eq!(pass.len(), 20);
    assert_stacked(&pass);
    assert_extent_consistent(&pass);
}

#[test]
fn empty_collection_has_zero_extent_and_no_visible_items() {
    let items: Vec<(String, String)> = Vec::new();
    let pass =
        compute_listing_layout(&items, WIDTH, &CellStyle::default(), &test_measurer());
    assert_eq!(pass.content_extent(), 0.0);
    assert!(pass.visible_in(Rect::new(0.0, 0.0, WIDTH, 10_000.0)).is_empty());
    assert_extent_consistent(&pass);
}

#[test]
fn viewport_queries_track_computed_frames() {
    let items = sample_items(10);
    let pass =
        compute_listing_layout(&items, WIDTH, &CellStyle::default(), &test_measurer());

    // Fully above and fully below all content.
    assert!(pass
        .visible_in(Rect::new(0.0, -1000.0, WIDTH, 999.0))
        .is_empty());
    assert!(pass
        .visible_in(Rect::new(0.0, pass.content_extent() + 1.0, WIDTH, 500.0))
        .is_empty());

    // Exactly one item's frame selects that item alone.
    let frame = pass.geometry_at(4).unwrap().frame;
    let visible = pass.visible_in(frame);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].index, 4);

    // A rect spanning items [2, 5) selects exactly 2, 3, 4 in order.
    let top = pass.geometry_at(2).unwrap().frame.y;
    let bottom = pass.geometry_at(5).unwrap().frame.y;
    let visible = pass.visible_in(Rect::new(0.0, top, WIDTH, bottom - top));
    let indices: Vec<usize> = visible.iter().map(|g| g.index).collect();
    assert_eq!(indices, vec![2, 3, 4]);
}

#[test]
fn line_cap_clips_title_measurement() {
    let style = CellStyle::default();
    let measurer = test_measurer();
    let paragraph = lorem(120);
    let usable = style.usable_width(WIDTH);

    let clipped = measurer.measure_height(&paragraph, usable, &style.title_font, 2);
    let unbounded = measurer.measure_height(&paragraph, usable, &style.title_font, 0);
    let two_lines = 2.0 * 17.0 * 1.2;

    assert!(clipped <= two_lines + 1e-3);
    assert!(clipped < unbounded);
}

#[test]
fn aspect_ratio_scenario() {
    let items: Vec<(String, String)> = vec![
        (String::new(), String::new()),
        (String::new(), String::new()),
    ];
    let style = CellStyle::default();
    let pass = compute_listing_layout(&items, 390.0, &style, &test_measurer());

    let image_area: f32 = 390.0 / 1.33;
    assert!((image_area - 293.23).abs() < 0.01);

    let first = pass.geometry_at(0).unwrap().frame;
    let second = pass.geometry_at(1).unwrap().frame;
    assert!((first.height - (image_area + style.vertical_padding)).abs() < 1e-3);
    assert!((second.height - first.height).abs() < 1e-3);
    assert!((second.y - first.height).abs() < 1e-3);
}

#[test]
fn both_strategies_produce_identical_passes() {
    let registry = FontMetricsRegistry::with_builtin();
    let metric = MetricTextMeasurer::new(registry.clone());
    let fitting = FittingTextMeasurer::new(registry);
    let style = CellStyle::default();
    let items = sample_items(15);

    for width in [320.0, 390.0, 834.0] {
        let manual = compute_listing_layout(&items, width, &style, &metric);
        let constrained = compute_listing_layout(&items, width, &style, &fitting);
        assert_eq!(manual, constrained, "strategies diverged at width {width}");
    }
}

#[test]
fn unknown_font_family_still_produces_a_full_pass() {
    let mut style = CellStyle::default();
    style.title_font.family = "Fantasy-Unregistered".to_string();
    let items = sample_items(5);
    let pass = compute_listing_layout(&items, WIDTH, &style, &test_measurer());
    assert_eq!(pass.len(), 5);
    assert_stacked(&pass);
    assert!(pass.content_extent() > 0.0);
}
