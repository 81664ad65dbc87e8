//! Cell kinds and the renderer seam.
//!
//! The controller never builds views; it hands visible items to a
//! [`CellRenderer`]. [`CampaignCellRenderer`] is the constraint-based
//! self-sizing renderer: its preferred height comes from resolving the
//! cell's column of blocks, and it must agree with whatever the
//! geometry cache computed.

use vitrine_foundation::text::TextMeasurable;
use vitrine_foundation::{CellStyle, FontMetricsRegistry};
use vitrine_ui_graphics::EdgeInsets;
use vitrine_ui_layout::{solve_column, Constraints, FixedHeight};

use crate::{Campaign, ImageSlot};

/// The cell types a hosting surface can be asked to register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Shown while the real contents are still loading.
    LoadingIndicator,
    /// Displays one campaign.
    Campaign,
}

impl CellKind {
    /// Stable identifier for the hosting surface's reuse machinery.
    pub fn reuse_identifier(&self) -> &'static str {
        match self {
            CellKind::LoadingIndicator => "loadingIndicatorCell",
            CellKind::Campaign => "campaignCell",
        }
    }
}

/// Renders one visible item.
///
/// Implementations own their view construction entirely; the
/// controller only calls `bind` for each visible index. The
/// `preferred_height` hook exists so a self-sizing host can
/// cross-check a cell against the active measurement strategy.
pub trait CellRenderer {
    fn bind(&mut self, index: usize, campaign: &Campaign);

    fn preferred_height(&self, campaign: &Campaign, width: f32) -> f32;
}

/// Self-sizing campaign cell: image area, title label, description
/// label stacked inside the style's insets.
#[derive(Debug, Default)]
pub struct CampaignCellRenderer {
    style: CellStyle,
    registry: FontMetricsRegistry,
    image_slot: ImageSlot,
    bound: Option<usize>,
}

impl CampaignCellRenderer {
    pub fn new(style: CellStyle, registry: FontMetricsRegistry) -> Self {
        Self {
            style,
            registry,
            image_slot: ImageSlot::new(),
            bound: None,
        }
    }

    /// Index of the item currently bound, if any.
    pub fn bound_index(&self) -> Option<usize> {
        self.bound
    }

    /// The slot the mood image lands in; the hosting surface drains it
    /// on the rendering thread.
    pub fn image_slot(&self) -> &ImageSlot {
        &self.image_slot
    }
}

impl CellRenderer for CampaignCellRenderer {
    fn bind(&mut self, index: usize, campaign: &Campaign) {
        self.bound = Some(index);
        // Re-binding supersedes any image still in flight for the
        // previous item.
        self.image_slot.bind(&campaign.mood_image);
    }

    fn preferred_height(&self, campaign: &Campaign, width: f32) -> f32 {
        let title_metrics = self.registry.resolve(&self.style.title_font);
        let body_metrics = self.registry.resolve(&self.style.body_font);

        let image = FixedHeight::new(self.style.image_area_height(width));
        let title = TextMeasurable::new(&campaign.name, title_metrics, self.style.title_max_lines);
        let body = TextMeasurable::new(&campaign.description, body_metrics, 0);

        let insets = EdgeInsets::symmetric(
            self.style.horizontal_padding / 2.0,
            self.style.vertical_padding / 2.0,
        );
        solve_column(
            &[&image, &title, &body],
            Constraints::fixed_width(width),
            insets,
        )
        .height
    }
}
