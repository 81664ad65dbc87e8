//! Listing controller and cell seams for Vitrine
//!
//! [`ListingView`] owns the item collection and the current layout
//! pass, switches between the loading placeholder and real content,
//! and answers the hosting scroll surface's geometry queries. The
//! visual construction of a cell and the image pipeline live behind
//! the [`CellRenderer`] and [`ImageSource`] seams.

mod campaign;
mod cell;
mod image_source;
mod listing;

pub use campaign::{Campaign, CampaignSlice};
pub use cell::{CampaignCellRenderer, CellKind, CellRenderer};
pub use image_source::{ImageDelivery, ImageSlot, ImageSource};
pub use listing::{DisplayMode, ListingHost, ListingView};
