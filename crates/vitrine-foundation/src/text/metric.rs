//! Manual text-metrics measurement strategy.

use vitrine_ui_graphics::FontDescriptor;

use super::metrics::FontMetricsRegistry;
use super::wrap::line_count;
use super::TextMeasurer;

/// Measures text by simulating line wrapping from font metrics alone.
///
/// This is the "throwaway label" strategy of the original system
/// expressed without the label: count wrapped lines, multiply by the
/// line height, clip at `max_lines`.
#[derive(Clone, Debug, Default)]
pub struct MetricTextMeasurer {
    registry: FontMetricsRegistry,
}

impl MetricTextMeasurer {
    pub fn new(registry: FontMetricsRegistry) -> Self {
        Self { registry }
    }
}

impl TextMeasurer for MetricTextMeasurer {
    fn measure_height(
        &self,
        text: &str,
        max_width: f32,
        font: &FontDescriptor,
        max_lines: usize,
    ) -> f32 {
        let metrics = self.registry.resolve(font);
        let mut lines = line_count(text, max_width, metrics);
        if max_lines > 0 {
            lines = lines.min(max_lines);
        }
        lines as f32 * metrics.line_height
    }
}
