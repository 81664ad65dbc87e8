//! The listing controller.
//!
//! `ListingView` is the single entry point: `display` swaps in a new
//! campaign collection, `show_loading` swaps in the placeholder, and
//! the hosting scroll surface reads geometry through the query
//! methods. The controller exclusively owns the item collection and
//! the layout pass; the host is reached only through the non-owning
//! [`ListingHost`] seam.

use vitrine_foundation::{
    compute_listing_layout, CellStyle, ItemGeometry, LayoutError, LayoutPass, TextMeasurer,
    VisibleGeometryVec,
};
use vitrine_ui_graphics::{Rect, Size};

use crate::{Campaign, CampaignSlice, CellKind, CellRenderer};

/// What the listing currently serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// A single synthetic placeholder filling the viewport.
    Loading,
    /// The real campaign collection.
    Content,
}

/// Non-owning seam to the hosting scroll surface.
///
/// The controller keeps no reference to the host between calls; the
/// host holds the controller and passes itself in, so ownership stays
/// unambiguous.
pub trait ListingHost {
    /// Called at most once per cell kind per controller.
    fn register_cell_kind(&mut self, kind: CellKind);

    /// Asks the surface to repaint from the (already rebuilt) pass.
    fn request_refresh(&mut self);
}

/// The list controller.
///
/// State machine: starts without any pass (uninitialized), enters
/// `Loading` or `Content` through [`show_loading`](Self::show_loading)
/// / [`display`](Self::display), and `Content` re-enters on every new
/// collection. A new pass is always computed *before* the host is told
/// to refresh, so queries never observe a half-populated cache.
pub struct ListingView {
    mode: DisplayMode,
    campaigns: Vec<Campaign>,
    pass: Option<LayoutPass>,
    viewport: Size,
    style: CellStyle,
    measurer: Box<dyn TextMeasurer>,
    registered_campaign_cell: bool,
    registered_loading_cell: bool,
}

impl ListingView {
    /// Creates a controller with the measurement strategy fixed for
    /// its lifetime. No pass exists until the first mode entry.
    pub fn new(style: CellStyle, measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            mode: DisplayMode::Loading,
            campaigns: Vec::new(),
            pass: None,
            viewport: Size::ZERO,
            style,
            measurer,
            registered_campaign_cell: false,
            registered_loading_cell: false,
        }
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Displays the given campaign list.
    ///
    /// Always (re-)enters `Content`: the previous collection and its
    /// pass are discarded, the new pass is computed eagerly, and only
    /// then is the host refreshed. An empty collection is valid and
    /// yields a zero extent.
    pub fn display(&mut self, campaigns: Vec<Campaign>, host: &mut dyn ListingHost) {
        self.mode = DisplayMode::Content;
        self.campaigns = campaigns;
        self.rebuild_pass();
        if !self.registered_campaign_cell {
            host.register_cell_kind(CellKind::Campaign);
            self.registered_campaign_cell = true;
        }
        host.request_refresh();
    }

    /// Shows the loading placeholder: one synthetic item whose
    /// geometry fills the current viewport.
    pub fn show_loading(&mut self, host: &mut dyn ListingHost) {
        self.mode = DisplayMode::Loading;
        self.campaigns.clear();
        self.rebuild_pass();
        self.register_loading_cell(host);
        host.request_refresh();
    }

    /// Updates the viewport (rotation/resize). A width change discards
    /// and rebuilds the current pass; the placeholder also tracks
    /// height changes since it fills the viewport.
    pub fn set_viewport(&mut self, viewport: Size, host: &mut dyn ListingHost) {
        let width_changed = viewport.width != self.viewport.width;
        let relayout = match self.mode {
            DisplayMode::Content => width_changed,
            DisplayMode::Loading => width_changed || viewport.height != self.viewport.height,
        };
        self.viewport = viewport;
        if relayout || self.pass.is_none() {
            self.rebuild_pass();
            // The first viewport of a fresh controller serves the
            // placeholder without going through `show_loading`; the
            // host still has to know the loading cell kind.
            if self.mode == DisplayMode::Loading {
                self.register_loading_cell(host);
            }
            host.request_refresh();
        }
    }

    /// Total scrollable height of the current pass.
    pub fn content_extent(&self) -> f32 {
        self.pass().map(LayoutPass::content_extent).unwrap_or(0.0)
    }

    /// Every geometry intersecting `rect`, in index order.
    pub fn geometries_visible_in(&self, rect: Rect) -> VisibleGeometryVec {
        self.pass()
            .map(|pass| pass.visible_in(rect))
            .unwrap_or_default()
    }

    /// Direct lookup by item index.
    pub fn geometry_at(&self, index: usize) -> Result<ItemGeometry, LayoutError> {
        match self.pass() {
            Some(pass) => pass.geometry_at(index),
            None => Err(LayoutError::OutOfRange { index, len: 0 }),
        }
    }

    /// Hands every campaign visible in `rect` to the renderer. Does
    /// nothing in `Loading` mode; the placeholder cell has no campaign
    /// content to bind.
    pub fn bind_visible(&self, rect: Rect, renderer: &mut dyn CellRenderer) {
        if self.mode != DisplayMode::Content {
            return;
        }
        for geometry in self.geometries_visible_in(rect) {
            if let Some(campaign) = self.campaigns.get(geometry.index) {
                renderer.bind(geometry.index, campaign);
            }
        }
    }

    fn register_loading_cell(&mut self, host: &mut dyn ListingHost) {
        if !self.registered_loading_cell {
            host.register_cell_kind(CellKind::LoadingIndicator);
            self.registered_loading_cell = true;
        }
    }

    /// Serves queries only from a fully built pass. Before the first
    /// mode entry there is nothing to serve: fail loudly in debug,
    /// degrade to the empty result in release.
    fn pass(&self) -> Option<&LayoutPass> {
        if self.pass.is_none() {
            debug_assert!(false, "listing queried before any layout pass was computed");
            log::error!("listing queried before any layout pass was computed");
        }
        self.pass.as_ref()
    }

    fn rebuild_pass(&mut self) {
        let pass = match self.mode {
            DisplayMode::Loading => LayoutPass::placeholder(self.viewport),
            DisplayMode::Content => compute_listing_layout(
                &CampaignSlice(&self.campaigns),
                self.viewport.width,
                &self.style,
                self.measurer.as_ref(),
            ),
        };
        self.pass = Some(pass);
    }
}

impl std::fmt::Debug for ListingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingView")
            .field("mode", &self.mode)
            .field("campaigns", &self.campaigns.len())
            .field("viewport", &self.viewport)
            .field("has_pass", &self.pass.is_some())
            .finish()
    }
}
