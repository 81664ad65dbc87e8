//! Text measurement for listing cells.
//!
//! The [`TextMeasurer`] contract turns `(text, max_width, font,
//! max_lines)` into a required height. Two strategies implement it:
//!
//! - [`MetricTextMeasurer`] simulates line wrapping directly from font
//!   metrics.
//! - [`FittingTextMeasurer`] resolves a text node through the
//!   constraint solver with the width fixed and the height unbounded.
//!
//! Both share the same line-breaking core, so a geometry cache built on
//! either produces identical frames.

mod fitting;
mod measurer;
mod metric;
mod metrics;
mod wrap;

pub use fitting::{FittingTextMeasurer, TextMeasurable};
pub use measurer::TextMeasurer;
pub use metric::MetricTextMeasurer;
pub use metrics::{FontMetrics, FontMetricsRegistry};
pub use wrap::line_count;
