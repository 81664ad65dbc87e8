//! Shared cell style constants.
//!
//! Both measurement strategies and the self-sizing cell renderer read
//! from one `CellStyle`; none of them carries private copies of these
//! values.

use vitrine_ui_graphics::{FontDescriptor, FontWeight};

/// The image area keeps a 4:3 aspect against the full viewport width:
/// `image_area_height = viewport_width / 1.33`. System-wide constant.
pub const IMAGE_ASPECT_DIVISOR: f32 = 1.33;

/// Fonts, paddings and line caps for a listing cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellStyle {
    /// Font for the item title.
    pub title_font: FontDescriptor,
    /// Line cap for the title; excess lines are clipped.
    pub title_max_lines: usize,
    /// Font for the item description (no line cap).
    pub body_font: FontDescriptor,
    /// Left + right label insets, subtracted from the viewport width
    /// before measuring text.
    pub horizontal_padding: f32,
    /// Top + bottom label insets, added to each cell's height.
    pub vertical_padding: f32,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            title_font: FontDescriptor::new("HelveticaNeue-Bold", 17.0)
                .with_weight(FontWeight::BOLD),
            title_max_lines: 2,
            body_font: FontDescriptor::new("HoeflerText-Regular", 12.0),
            horizontal_padding: 16.0,
            vertical_padding: 16.0,
        }
    }
}

impl CellStyle {
    /// Height of the image area for the given viewport width.
    pub fn image_area_height(&self, viewport_width: f32) -> f32 {
        viewport_width / IMAGE_ASPECT_DIVISOR
    }

    /// Width available to text after the horizontal label insets.
    pub fn usable_width(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.horizontal_padding).max(0.0)
    }
}
