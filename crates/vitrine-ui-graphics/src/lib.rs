//! Pure math/data for geometry, typography and images in Vitrine
//!
//! This crate contains the geometry primitives, font descriptors and the
//! opaque image value that the rest of the Vitrine listing engine is built
//! on. It deliberately has no dependencies.

mod geometry;
mod image;
mod typography;

pub use geometry::*;
pub use image::*;
pub use typography::*;
