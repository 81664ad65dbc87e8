//! Opaque decoded image value.

use std::sync::Arc;

/// A decoded image, cheap to clone and safe to send across threads.
///
/// The listing engine never inspects pixel data; it only carries images
/// from an asynchronous source into a cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pixels: Arc<[u8]>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: impl Into<Arc<[u8]>>) -> Self {
        Self {
            width,
            height,
            pixels: pixels.into(),
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
