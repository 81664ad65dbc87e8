use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitrine_foundation::{compute_listing_layout, CellStyle, FontMetricsRegistry, MetricTextMeasurer};
use vitrine_ui_graphics::Rect;

fn bench_items(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| {
            (
                format!("Campaign {i}"),
                "a mid-length description that wraps a few times at phone width ".repeat(1 + i % 4),
            )
        })
        .collect()
}

fn layout_pass(c: &mut Criterion) {
    let items = bench_items(200);
    let style = CellStyle::default();
    let measurer = MetricTextMeasurer::new(FontMetricsRegistry::with_builtin());

    c.bench_function("compute_listing_layout/200", |b| {
        b.iter(|| {
            black_box(compute_listing_layout(
                &items,
                black_box(390.0),
                &style,
                &measurer,
            ))
        })
    });
}

fn visibility_query(c: &mut Criterion) {
    let items = bench_items(200);
    let style = CellStyle::default();
    let measurer = MetricTextMeasurer::new(FontMetricsRegistry::with_builtin());
    let pass = compute_listing_layout(&items, 390.0, &style, &measurer);
    let viewport = Rect::new(0.0, pass.content_extent() / 2.0, 390.0, 844.0);

    c.bench_function("visible_in/200", |b| {
        b.iter(|| black_box(pass.visible_in(black_box(viewport))))
    });
}

criterion_group!(benches, layout_pass, visibility_query);
criterion_main!(benches);
