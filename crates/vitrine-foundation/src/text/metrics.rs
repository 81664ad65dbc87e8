//! Font metrics resolution with a documented fallback.
//!
//! Metrics are a deterministic model derived from the descriptor's
//! point size and a per-family shape table: a line height factor and a
//! uniform advance factor. Uniform advances keep wrapping exactly
//! reproducible across both measurement strategies, which is what the
//! geometry cache needs; real glyph metrics are a rendering concern and
//! live behind the cell renderer collaborator.

use rustc_hash::FxHashMap;
use vitrine_ui_graphics::FontDescriptor;

/// Resolved metrics for one font at one size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Height of a single line of text.
    pub line_height: f32,
    /// Advance width of one character.
    pub advance_width: f32,
}

/// Per-family shape of the metrics model, scaled by point size at
/// resolution time.
#[derive(Clone, Copy, Debug)]
struct FamilyMetrics {
    line_height_factor: f32,
    advance_factor: f32,
}

/// Metrics used when a family is not registered. Matches the original
/// system's "fall back to the system font" policy.
const FALLBACK_METRICS: FamilyMetrics = FamilyMetrics {
    line_height_factor: 1.2,
    advance_factor: 0.5,
};

/// Maps font family names to their metrics model.
///
/// Unknown families resolve to [fallback metrics](FALLBACK_METRICS)
/// with a warning rather than failing the layout pass.
#[derive(Clone, Debug, Default)]
pub struct FontMetricsRegistry {
    families: FxHashMap<String, FamilyMetrics>,
}

impl FontMetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the families the default cell style uses.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("HelveticaNeue-Bold", 1.2, 0.55);
        registry.register("HoeflerText-Regular", 1.25, 0.48);
        registry
    }

    pub fn register(
        &mut self,
        family: impl Into<String>,
        line_height_factor: f32,
        advance_factor: f32,
    ) {
        self.families.insert(
            family.into(),
            FamilyMetrics {
                line_height_factor,
                advance_factor,
            },
        );
    }

    /// Resolves a descriptor to concrete metrics.
    ///
    /// Unregistered families degrade to the fallback model; layout must
    /// always produce some height, so this never errors.
    pub fn resolve(&self, font: &FontDescriptor) -> FontMetrics {
        let family = match self.families.get(&font.family) {
            Some(family) => *family,
            None => {
                log::warn!(
                    "font family '{}' not registered; using fallback metrics",
                    font.family
                );
                FALLBACK_METRICS
            }
        };
        FontMetrics {
            line_height: font.size * family.line_height_factor,
            advance_width: font.size * family.advance_factor,
        }
    }
}
