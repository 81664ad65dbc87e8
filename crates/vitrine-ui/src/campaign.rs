//! The item displayed by the listing.

use vitrine_foundation::ListingItemProvider;

use crate::ImageSource;

/// One campaign in the listing: a title, a description and the mood
/// image that eventually arrives for it.
///
/// Campaigns are immutable; supplying new content means handing the
/// controller a whole new collection.
#[derive(Clone, Debug)]
pub struct Campaign {
    pub name: String,
    pub description: String,
    pub mood_image: ImageSource,
}

impl Campaign {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mood_image: ImageSource,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            mood_image,
        }
    }
}

/// Sized carrier handing a campaign slice to the layout pass as a
/// `ListingItemProvider` trait object.
pub struct CampaignSlice<'a>(pub &'a [Campaign]);

impl ListingItemProvider for CampaignSlice<'_> {
    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn title(&self, index: usize) -> &str {
        &self.0[index].name
    }

    fn body(&self, index: usize) -> &str {
        &self.0[index].description
    }
}
