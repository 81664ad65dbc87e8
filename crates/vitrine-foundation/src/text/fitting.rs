//! Constraint-based (self-sizing) measurement strategy.
//!
//! Instead of computing the height directly, this strategy builds the
//! text's measurable node and resolves it through the constraint
//! solver with the width fixed and the height unbounded, then reads
//! the resolved height back. It is the analogue of asking a view tree
//! to size itself to a fitting size.

use vitrine_ui_graphics::{FontDescriptor, Size};
use vitrine_ui_layout::{Constraints, Measurable};

use super::metrics::{FontMetrics, FontMetricsRegistry};
use super::wrap::line_count;
use super::TextMeasurer;

/// A text block that can resolve its own size under constraints.
///
/// Shared with self-sizing cells, which stack one of these per label
/// inside a column and read back the column's resolved height.
#[derive(Clone, Debug)]
pub struct TextMeasurable<'a> {
    text: &'a str,
    metrics: FontMetrics,
    max_lines: usize,
}

impl<'a> TextMeasurable<'a> {
    pub fn new(text: &'a str, metrics: FontMetrics, max_lines: usize) -> Self {
        Self {
            text,
            metrics,
            max_lines,
        }
    }
}

impl Measurable for TextMeasurable<'_> {
    fn measure(&self, constraints: Constraints) -> Size {
        let mut lines = line_count(self.text, constraints.max_width, self.metrics);
        if self.max_lines > 0 {
            lines = lines.min(self.max_lines);
        }
        let (width, height) = constraints.constrain(
            constraints.max_width,
            lines as f32 * self.metrics.line_height,
        );
        Size::new(width, height)
    }
}

/// Measures text by constraint resolution of its node.
#[derive(Clone, Debug, Default)]
pub struct FittingTextMeasurer {
    registry: FontMetricsRegistry,
}

impl FittingTextMeasurer {
    pub fn new(registry: FontMetricsRegistry) -> Self {
        Self { registry }
    }

    /// Access to the registry so cell renderers can resolve the same
    /// metrics this strategy measures with.
    pub fn registry(&self) -> &FontMetricsRegistry {
        &self.registry
    }
}

impl TextMeasurer for FittingTextMeasurer {
    fn measure_height(
        &self,
        text: &str,
        max_width: f32,
        font: &FontDescriptor,
        max_lines: usize,
    ) -> f32 {
        let metrics = self.registry.resolve(font);
        let node = TextMeasurable::new(text, metrics, max_lines);
        node.measure(Constraints::fixed_width(max_width)).height
    }
}
