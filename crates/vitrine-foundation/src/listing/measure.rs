//! The layout pass: measure every item once and stack the frames.

use vitrine_ui_graphics::Rect;

use super::{CellStyle, ItemGeometry, LayoutPass, ListingItemProvider};
use crate::text::TextMeasurer;

/// Computes the geometry of every item for one `(items, width)` pair.
///
/// Per item:
/// `height = image_area + title + body + vertical_padding`, where the
/// texts are measured at the viewport width minus the horizontal
/// insets, the title against the style's line cap and the body
/// unbounded. Frames stack from `y = 0` with no gaps; the content
/// height is kept as a running maximum of bottom edges so the
/// computation stays correct if a future layout is not single-column.
///
/// This runs in one synchronous pass and is the only place measurement
/// happens; every later query reads the returned [`LayoutPass`].
pub fn compute_listing_layout(
    items: &dyn ListingItemProvider,
    viewport_width: f32,
    style: &CellStyle,
    measurer: &dyn TextMeasurer,
) -> LayoutPass {
    let count = items.item_count();
    if count == 0 {
        return LayoutPass::new(Vec::new(), 0.0, viewport_width);
    }
    if viewport_width <= 0.0 {
        log::warn!("listing layout computed for non-positive viewport width {viewport_width}");
    }

    let usable_width = style.usable_width(viewport_width);
    let image_area = style.image_area_height(viewport_width.max(0.0));

    let mut geometries = Vec::with_capacity(count);
    let mut y_offset = 0.0f32;
    let mut content_height = 0.0f32;

    for index in 0..count {
        let title_height = measurer.measure_height(
            items.title(index),
            usable_width,
            &style.title_font,
            style.title_max_lines,
        );
        let body_height =
            measurer.measure_height(items.body(index), usable_width, &style.body_font, 0);
        let height = image_area + title_height + body_height + style.vertical_padding;

        let frame = Rect::new(0.0, y_offset, viewport_width, height);
        content_height = content_height.max(frame.max_y());
        y_offset += height;
        geometries.push(ItemGeometry { index, frame });
    }

    LayoutPass::new(geometries, content_height, viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{FontMetricsRegistry, MetricTextMeasurer};

    fn items(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(title, body)| (title.to_string(), body.to_string()))
            .collect()
    }

    fn measurer() -> MetricTextMeasurer {
        MetricTextMeasurer::new(FontMetricsRegistry::with_builtin())
    }

    #[test]
    fn empty_collection_yields_empty_pass() {
        let items: Vec<(String, String)> = Vec::new();
        let pass =
            compute_listing_layout(&items, 390.0, &CellStyle::default(), &measurer());
        assert!(pass.is_empty());
        assert_eq!(pass.content_extent(), 0.0);
    }

    #[test]
    fn frames_stack_without_gaps() {
        let items = items(&[
            ("Nordic Bedroom", "Soft linens and pale woods."),
            ("Atelier", "A long description that should wrap across several lines when measured at a phone width, growing the second cell taller than the first."),
            ("Terrace", ""),
        ]);
        let pass =
            compute_listing_layout(&items, 390.0, &CellStyle::default(), &measurer());

        assert_eq!(pass.len(), 3);
        let geometries = pass.geometries();
        for pair in geometries.windows(2) {
            assert_eq!(pair[0].frame.max_y(), pair[1].frame.y);
            assert_eq!(pair[0].frame.x, pair[1].frame.x);
            assert_eq!(pair[0].frame.width, pair[1].frame.width);
        }
        let last = geometries.last().unwrap();
        assert_eq!(pass.content_extent(), last.frame.max_y());
    }

    #[test]
    fn trivial_items_are_image_plus_padding() {
        let items = items(&[("", ""), ("", "")]);
        let style = CellStyle::default();
        let pass = compute_listing_layout(&items, 390.0, &style, &measurer());

        let expected = 390.0 / 1.33 + style.vertical_padding;
        let first = pass.geometry_at(0).unwrap().frame;
        let second = pass.geometry_at(1).unwrap().frame;
        assert!((first.height - expected).abs() < 1e-3);
        assert!((second.height - expected).abs() < 1e-3);
        assert!((second.y - first.height).abs() < 1e-3);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let items = items(&[("Title", "Body text that wraps."), ("Another", "More.")]);
        let style = CellStyle::default();
        let m = measurer();
        let first = compute_listing_layout(&items, 390.0, &style, &m);
        let second = compute_listing_layout(&items, 390.0, &style, &m);
        assert_eq!(first, second);
    }
}
