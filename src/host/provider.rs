use std::rc::Rc;

use crate::foundation::{
    core::{ContainerRect, ScrollSample},
    error::ScrollFxResult,
};

/// Environment notification that may change transition geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Scroll,
    Resize,
}

/// Callback registered with a [`GeometryProvider`].
pub type Listener = Rc<dyn Fn(HostEvent)>;

/// Source of scroll/layout geometry and change notifications.
///
/// Implemented by the embedding environment (a browser binding, a native window, or
/// [`SyntheticHost`](crate::host::synthetic::SyntheticHost) in tests). All calls happen
/// on the UI thread.
pub trait GeometryProvider {
    /// Register `listener` for scroll and resize notifications.
    ///
    /// The returned [`Subscription`] deregisters it when dropped. Hosts without scroll
    /// events return an error.
    fn subscribe(&self, listener: Listener) -> ScrollFxResult<Subscription>;

    /// Viewport-relative bounding box of the transition container, if laid out.
    fn measure(&self) -> Option<ContainerRect>;

    /// Current document scroll offset, px.
    fn scroll_offset(&self) -> f64;

    /// Current viewport height, px.
    fn viewport_height(&self) -> f64;

    /// Read everything needed for one frame in a single pass.
    ///
    /// A container that is not laid out yet reads as zero height.
    fn sample(&self) -> ScrollSample {
        let container = self.measure().unwrap_or_default();
        ScrollSample::new(self.scroll_offset(), container, self.viewport_height())
    }
}

/// Registration guard; dropping it (or calling [`Subscription::cancel`]) unsubscribes once.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
