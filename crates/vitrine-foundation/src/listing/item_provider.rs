//! Item provider trait for listing layout.

/// Provides the textual content of the items a layout pass measures.
///
/// Implementations should be immutable: changes to the underlying data
/// should be expressed by supplying a new collection and computing a
/// fresh pass, not by mutating a provider in place.
pub trait ListingItemProvider {
    /// The total number of items in the listing.
    fn item_count(&self) -> usize;

    /// The item's title, rendered with the style's title font.
    fn title(&self, index: usize) -> &str;

    /// The item's description, rendered with the style's body font.
    fn body(&self, index: usize) -> &str;
}

/// Convenience for tests and simple data: `(title, body)` pairs.
impl ListingItemProvider for Vec<(String, String)> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn title(&self, index: usize) -> &str {
        &self[index].0
    }

    fn body(&self, index: usize) -> &str {
        &self[index].1
    }
}
