//! The pluggable measurement contract.

use vitrine_ui_graphics::FontDescriptor;

/// Turns text content into the height required to render it.
///
/// Implementations must be deterministic for identical inputs; the
/// geometry cache relies on this to stay valid for the lifetime of a
/// layout pass.
///
/// Contract:
/// - `max_lines == 0` means unbounded.
/// - `max_lines > 0` clips: the returned height never exceeds that many
///   line heights of the given font. Excess text does not grow the
///   measurement.
/// - Empty text measures to height `0.0`, not one line.
/// - An unresolvable font degrades to fallback metrics instead of
///   failing; a layout pass always produces some height.
pub trait TextMeasurer {
    fn measure_height(
        &self,
        text: &str,
        max_width: f32,
        font: &FontDescriptor,
        max_lines: usize,
    ) -> f32;
}
