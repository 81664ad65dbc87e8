//! Measurable seam and the vertical box solver.
//!
//! A [`Measurable`] turns constraints into a resolved size without
//! placing anything. [`solve_column`] stacks measurables vertically
//! inside edge insets, which is the whole box resolution a self-sizing
//! listing cell needs: fix the width, sum the children's heights, read
//! back the total.

use vitrine_ui_graphics::{EdgeInsets, Size};

use crate::Constraints;

/// Anything that can resolve its own size under layout constraints.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> Size;
}

/// A block with a fixed height that fills the available width.
/// The image area of a listing cell is one of these.
#[derive(Clone, Copy, Debug)]
pub struct FixedHeight {
    pub height: f32,
}

impl FixedHeight {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Measurable for FixedHeight {
    fn measure(&self, constraints: Constraints) -> Size {
        let (width, height) = constraints.constrain(constraints.max_width, self.height);
        Size::new(width, height)
    }
}

/// Resolves a vertical stack of children inside `insets`.
///
/// The incoming constraints are expected to carry the fixed outer width
/// (see [`Constraints::fixed_width`]); each child is measured with that
/// width deflated by the horizontal insets and an unbounded height. The
/// resolved size is the inset-padded sum of child heights at the outer
/// width.
pub fn solve_column(
    children: &[&dyn Measurable],
    constraints: Constraints,
    insets: EdgeInsets,
) -> Size {
    let child_constraints = Constraints::fixed_width(
        (constraints.max_width - insets.horizontal_sum()).max(0.0),
    );

    let mut content_height = 0.0;
    for child in children {
        let size = child.measure(child_constraints);
        content_height += size.height;
    }

    let (width, height) = constraints.constrain(
        constraints.max_width,
        content_height + insets.vertical_sum(),
    );
    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_sums_heights_inside_insets() {
        let a = FixedHeight::new(30.0);
        let b = FixedHeight::new(70.0);
        let size = solve_column(
            &[&a, &b],
            Constraints::fixed_width(200.0),
            EdgeInsets::symmetric(8.0, 8.0),
        );
        assert_eq!(size.width, 200.0);
        assert_eq!(size.height, 30.0 + 70.0 + 16.0);
    }

    #[test]
    fn column_with_no_children_is_just_insets() {
        let size = solve_column(
            &[],
            Constraints::fixed_width(120.0),
            EdgeInsets::symmetric(0.0, 5.0),
        );
        assert_eq!(size.height, 10.0);
    }

    #[test]
    fn fixed_height_fills_width() {
        let block = FixedHeight::new(42.0);
        let size = block.measure(Constraints::fixed_width(390.0));
        assert_eq!(size, Size::new(390.0, 42.0));
    }
}
