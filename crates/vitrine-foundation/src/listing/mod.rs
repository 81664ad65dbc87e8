//! Listing geometry cache and viewport queries.
//!
//! [`compute_listing_layout`] measures every item exactly once and
//! produces a [`LayoutPass`]: the frame of each item plus the total
//! content height. The pass is immutable; it is discarded and rebuilt
//! wholesale when the item collection or the viewport width changes,
//! never invalidated per item. Queries ([`LayoutPass::visible_in`],
//! [`LayoutPass::geometry_at`], [`LayoutPass::content_extent`]) assume
//! a complete pass and re-measure nothing.

mod error;
mod item_provider;
mod measure;
mod pass;
mod style;

pub use error::LayoutError;
pub use item_provider::ListingItemProvider;
pub use measure::compute_listing_layout;
pub use pass::{ItemGeometry, LayoutPass, VisibleGeometryVec};
pub use style::{CellStyle, IMAGE_ASPECT_DIVISOR};
