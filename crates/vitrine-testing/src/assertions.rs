//! Assertion helpers for layout invariants.

use vitrine_foundation::LayoutPass;

/// Asserts the stacking invariant: frames are gap- and overlap-free,
/// with uniform `x` and width across the list.
pub fn assert_stacked(pass: &LayoutPass) {
    let geometries = pass.geometries();
    for pair in geometries.windows(2) {
        assert!(
            (pair[0].frame.max_y() - pair[1].frame.y).abs() < 1e-3,
            "gap or overlap between items {} and {}: bottom {} vs top {}",
            pair[0].index,
            pair[1].index,
            pair[0].frame.max_y(),
            pair[1].frame.y,
        );
        assert_eq!(pair[0].frame.x, pair[1].frame.x, "x drifted between items");
        assert_eq!(
            pair[0].frame.width, pair[1].frame.width,
            "width drifted between items"
        );
    }
}

/// Asserts that the content extent matches the last item's bottom edge
/// (or zero for an empty pass).
pub fn assert_extent_consistent(pass: &LayoutPass) {
    match pass.geometries().last() {
        Some(last) => assert!(
            (pass.content_extent() - last.frame.max_y()).abs() < 1e-3,
            "content extent {} does not match last bottom edge {}",
            pass.content_extent(),
            last.frame.max_y(),
        ),
        None => assert_eq!(pass.content_extent(), 0.0),
    }
}
