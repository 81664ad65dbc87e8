//! Single-eventual-value image delivery.
//!
//! An [`ImageSource`] delivers at most one [`Image`] per item, possibly
//! from a producer thread. The cell-side [`ImageSlot`] is the
//! marshaling point: deliveries land in the slot from any thread, and
//! the renderer collects them on the rendering thread. A bind
//! generation makes recycled cells ignore deliveries that belong to an
//! item they no longer display.
//!
//! The layout core holds no reference to image data; nothing here can
//! affect geometry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use vitrine_ui_graphics::Image;

#[derive(Debug, Default)]
struct SourceInner {
    image: Mutex<SourceState>,
}

#[derive(Default)]
enum SourceState {
    #[default]
    Pending,
    Waiting(Box<dyn FnOnce(Image) + Send>),
    Delivered(Image),
}

impl std::fmt::Debug for SourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceState::Pending => f.write_str("Pending"),
            SourceState::Waiting(_) => f.write_str("Waiting(<subscriber>)"),
            SourceState::Delivered(image) => f.debug_tuple("Delivered").field(image).finish(),
        }
    }
}

/// Producer half: delivers the one value, consuming itself.
#[derive(Debug)]
pub struct ImageDelivery {
    inner: Arc<SourceInner>,
}

impl ImageDelivery {
    /// Delivers the image. May be called from any thread; if a
    /// subscriber is waiting it runs on the delivering thread, which is
    /// why cells subscribe with a closure that only parks the value in
    /// an [`ImageSlot`].
    pub fn deliver(self, image: Image) {
        let waiting = {
            let mut state = self
                .inner
                .image
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            match std::mem::replace(&mut *state, SourceState::Delivered(image.clone())) {
                SourceState::Waiting(subscriber) => Some(subscriber),
                _ => None,
            }
        };
        if let Some(subscriber) = waiting {
            subscriber(image);
        }
    }
}

/// Consumer half: at most one eventual image.
#[derive(Clone, Debug)]
pub struct ImageSource {
    inner: Arc<SourceInner>,
}

impl ImageSource {
    /// A source whose value will arrive later through the returned
    /// delivery handle.
    pub fn pending() -> (Self, ImageDelivery) {
        let inner = Arc::new(SourceInner::default());
        (
            Self {
                inner: Arc::clone(&inner),
            },
            ImageDelivery { inner },
        )
    }

    /// A source whose value is already available. Useful for tests and
    /// cached images.
    pub fn ready(image: Image) -> Self {
        Self {
            inner: Arc::new(SourceInner {
                image: Mutex::new(SourceState::Delivered(image)),
            }),
        }
    }

    /// Registers the single subscriber. If the value already arrived
    /// the subscriber runs immediately on the calling thread;
    /// otherwise it runs on the delivering thread later. Re-subscribing
    /// replaces any previous waiter (a recycled cell's subscription is
    /// simply overwritten).
    pub fn subscribe(&self, subscriber: impl FnOnce(Image) + Send + 'static) {
        let mut state = self
            .inner
            .image
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let SourceState::Delivered(image) = &*state {
            let image = image.clone();
            drop(state);
            subscriber(image);
            return;
        }
        *state = SourceState::Waiting(Box::new(subscriber));
    }
}

/// Cell-side landing area for one eventual image.
///
/// `bind` advances the generation and subscribes; a delivery tagged
/// with an older generation is dropped when collected, so a cell
/// recycled to a different item never shows the previous item's image.
#[derive(Clone, Debug, Default)]
pub struct ImageSlot {
    generation: Arc<AtomicU64>,
    landed: Arc<Mutex<Option<(u64, Image)>>>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the slot at a new item's source. Any image still in
    /// flight for the previous binding will be ignored.
    pub fn bind(&self, source: &ImageSource) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let landed = Arc::clone(&self.landed);
        source.subscribe(move |image| {
            let mut slot = landed.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            *slot = Some((generation, image));
        });
    }

    /// Collects a delivered image on the rendering thread. Returns
    /// `None` while the value is pending or when the landed value
    /// belongs to a superseded binding.
    pub fn take_ready(&self) -> Option<Image> {
        let mut slot = self
            .landed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match slot.take() {
            Some((generation, image))
                if generation == self.generation.load(Ordering::SeqCst) =>
            {
                Some(image)
            }
            _ => None,
        }
    }
}
