//! Fixtures for listing tests.

use vitrine_foundation::{FontMetricsRegistry, MetricTextMeasurer};
use vitrine_ui::{Campaign, CellKind, CellRenderer, ImageSource, ListingHost};

/// Registry preloaded with the default cell fonts; what most tests
/// should measure with.
pub fn test_registry() -> FontMetricsRegistry {
    FontMetricsRegistry::with_builtin()
}

/// The manual-metrics strategy over [`test_registry`].
pub fn test_measurer() -> MetricTextMeasurer {
    MetricTextMeasurer::new(test_registry())
}

/// A campaign whose mood image never arrives. Layout never depends on
/// image delivery, so this is the default fixture.
pub fn campaign(name: &str, description: &str) -> Campaign {
    Campaign::new(name, description, ImageSource::pending().0)
}

/// Deterministic filler text: `words` words of varying length.
pub fn lorem(words: usize) -> String {
    const WORDS: [&str; 8] = [
        "velvet", "oak", "linen", "amber", "stoneware", "fern", "brass", "wool",
    ];
    (0..words)
        .map(|i| WORDS[i % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// `count` campaigns with progressively longer descriptions, so every
/// cell gets a different height.
pub fn campaigns_with_lorem(count: usize) -> Vec<Campaign> {
    (0..count)
        .map(|i| campaign(&format!("Campaign {i}"), &lorem(5 + i * 7)))
        .collect()
}

/// Records registrations and refreshes from a `ListingView`.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub registered: Vec<CellKind>,
    pub refreshes: usize,
}

impl ListingHost for RecordingHost {
    fn register_cell_kind(&mut self, kind: CellKind) {
        self.registered.push(kind);
    }

    fn request_refresh(&mut self) {
        self.refreshes += 1;
    }
}

/// Records which indices were bound, in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub bound: Vec<(usize, String)>,
}

impl CellRenderer for RecordingRenderer {
    fn bind(&mut self, index: usize, campaign: &Campaign) {
        self.bound.push((index, campaign.name.clone()));
    }

    fn preferred_height(&self, _campaign: &Campaign, _width: f32) -> f32 {
        0.0
    }
}
