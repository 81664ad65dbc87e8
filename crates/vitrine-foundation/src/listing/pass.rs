//! The immutable result of one layout pass, and the viewport queries
//! served from it.

use smallvec::SmallVec;
use vitrine_ui_graphics::{Rect, Size};

use super::LayoutError;

/// The computed frame of one listing item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    /// Index in the item collection.
    pub index: usize,
    /// Frame in content coordinates.
    pub frame: Rect,
}

/// Inline capacity for visibility query results. A phone-sized viewport
/// over image-dominated cells shows a handful of items at once.
pub type VisibleGeometryVec = SmallVec<[ItemGeometry; 8]>;

/// Geometry for every item of one `(items, viewport_width)` pair.
///
/// Fully populated before any query is served, immutable afterwards,
/// and replaced atomically by the controller when items or width
/// change. Repeated queries reuse the cached frames at zero additional
/// measurement cost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPass {
    geometries: Vec<ItemGeometry>,
    content_height: f32,
    viewport_width: f32,
}

impl LayoutPass {
    pub(crate) fn new(
        geometries: Vec<ItemGeometry>,
        content_height: f32,
        viewport_width: f32,
    ) -> Self {
        Self {
            geometries,
            content_height,
            viewport_width,
        }
    }

    /// A single synthetic geometry filling the whole viewport, used by
    /// the loading placeholder.
    pub fn placeholder(viewport: Size) -> Self {
        Self {
            geometries: vec![ItemGeometry {
                index: 0,
                frame: Rect::from_size(viewport),
            }],
            content_height: viewport.height,
            viewport_width: viewport.width,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    #[inline]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Total scrollable height.
    #[inline]
    pub fn content_extent(&self) -> f32 {
        self.content_height
    }

    /// All geometries of the pass, in index order.
    pub fn geometries(&self) -> &[ItemGeometry] {
        &self.geometries
    }

    /// Every geometry whose frame intersects `rect`, in index order.
    ///
    /// A linear scan is fine at listing scale; an interval index would
    /// be a drop-in replacement behind the same contract.
    pub fn visible_in(&self, rect: Rect) -> VisibleGeometryVec {
        self.geometries
            .iter()
            .filter(|geometry| geometry.frame.intersects(&rect))
            .copied()
            .collect()
    }

    /// Direct O(1) lookup by item index.
    pub fn geometry_at(&self, index: usize) -> Result<ItemGeometry, LayoutError> {
        self.geometries
            .get(index)
            .copied()
            .ok_or(LayoutError::OutOfRange {
                index,
                len: self.geometries.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[f32], width: f32) -> LayoutPass {
        let mut y = 0.0;
        let mut geometries = Vec::new();
        for (index, &height) in heights.iter().enumerate() {
            geometries.push(ItemGeometry {
                index,
                frame: Rect::new(0.0, y, width, height),
            });
            y += height;
        }
        LayoutPass::new(geometries, y, width)
    }

    #[test]
    fn visible_above_and_below_content_is_empty() {
        let pass = stacked(&[100.0, 100.0, 100.0], 390.0);
        assert!(pass.visible_in(Rect::new(0.0, -500.0, 390.0, 400.0)).is_empty());
        assert!(pass.visible_in(Rect::new(0.0, 300.0, 390.0, 400.0)).is_empty());
    }

    #[test]
    fn exact_frame_selects_exactly_one() {
        let pass = stacked(&[100.0, 100.0, 100.0], 390.0);
        let frame = pass.geometry_at(1).unwrap().frame;
        let visible = pass.visible_in(frame);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].index, 1);
    }

    #[test]
    fn spanning_rect_selects_range_in_order() {
        let pass = stacked(&[50.0; 6], 390.0);
        // Spans items [2, 5): y in [100, 250).
        let visible = pass.visible_in(Rect::new(0.0, 100.0, 390.0, 150.0));
        let indices: Vec<usize> = visible.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
    }

    #[test]
    fn geometry_at_out_of_range() {
        let pass = stacked(&[50.0], 390.0);
        assert_eq!(
            pass.geometry_at(3),
            Err(LayoutError::OutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn placeholder_fills_viewport() {
        let pass = LayoutPass::placeholder(Size::new(390.0, 844.0));
        assert_eq!(pass.len(), 1);
        assert_eq!(pass.content_extent(), 844.0);
        let frame = pass.geometry_at(0).unwrap().frame;
        assert_eq!(frame, Rect::new(0.0, 0.0, 390.0, 844.0));
    }
}
