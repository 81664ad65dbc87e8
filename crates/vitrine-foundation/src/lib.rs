//! Text measurement, geometry cache and viewport queries for Vitrine
//!
//! This crate is the layout core of the listing engine:
//!
//! - [`text`] resolves fonts to deterministic metrics and measures the
//!   height a piece of text needs at a given width, behind one
//!   [`text::TextMeasurer`] contract with two interchangeable
//!   strategies.
//! - [`listing`] computes the frame of every listing item exactly once
//!   per layout pass and answers viewport visibility queries against
//!   the cached result.
//!
//! Everything here is synchronous and single-threaded; nothing blocks
//! on I/O.

pub mod listing;
pub mod text;

pub use listing::{
    compute_listing_layout, CellStyle, ItemGeometry, LayoutError, LayoutPass,
    ListingItemProvider, VisibleGeometryVec, IMAGE_ASPECT_DIVISOR,
};
pub use text::{
    FittingTextMeasurer, FontMetrics, FontMetricsRegistry, MetricTextMeasurer, TextMeasurer,
};
