//! Lifecycle glue between a [`GeometryProvider`] and a [`ScrollTransition`].
//!
//! `MountedTransition::mount` is the `Unmounted -> Mounted` edge: it registers exactly one
//! listener and renders the first frame. Dropping the handle (or calling
//! [`MountedTransition::unmount`]) is the reverse edge and deregisters that listener.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    foundation::{core::ScrollSample, math::same_f64},
    host::provider::{GeometryProvider, HostEvent, Subscription},
    transition::scroll::{ScrollTransition, TransitionFrame},
};

/// Receives computed styles for the two sections.
pub trait StyleSink {
    /// Apply one frame. Both sections come from the same geometry sample.
    fn apply(&mut self, frame: &TransitionFrame);
}

impl<F> StyleSink for F
where
    F: FnMut(&TransitionFrame),
{
    fn apply(&mut self, frame: &TransitionFrame) {
        self(frame)
    }
}

/// Sink that records every applied frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    frames: Rc<RefCell<Vec<TransitionFrame>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<TransitionFrame> {
        self.frames.borrow().clone()
    }

    pub fn last(&self) -> Option<TransitionFrame> {
        self.frames.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }
}

impl StyleSink for RecordingSink {
    fn apply(&mut self, frame: &TransitionFrame) {
        self.frames.borrow_mut().push(*frame);
    }
}

struct MountState {
    transition: ScrollTransition,
    sink: Box<dyn StyleSink>,
    last_sample: Option<ScrollSample>,
    last_frame: Option<TransitionFrame>,
}

impl MountState {
    fn render(&mut self, sample: ScrollSample) {
        if self
            .last_sample
            .is_some_and(|prev| same_sample(&prev, &sample))
        {
            return;
        }
        let frame = self.transition.frame(&sample);
        tracing::trace!(progress = frame.progress, "transition frame");
        self.sink.apply(&frame);
        self.last_sample = Some(sample);
        self.last_frame = Some(frame);
    }

    fn render_static(&mut self) {
        let frame = self.transition.static_frame();
        self.sink.apply(&frame);
        self.last_frame = Some(frame);
    }
}

fn same_sample(a: &ScrollSample, b: &ScrollSample) -> bool {
    same_f64(a.scroll_offset, b.scroll_offset)
        && same_f64(a.container_top, b.container_top)
        && same_f64(a.container_height, b.container_height)
        && same_f64(a.viewport_height, b.viewport_height)
}

/// A transition attached to a host. Detaches on drop.
pub struct MountedTransition {
    state: Rc<RefCell<MountState>>,
    _provider: Rc<dyn GeometryProvider>,
    subscription: Option<Subscription>,
}

impl MountedTransition {
    /// Attach `transition` to `provider`, writing frames into `sink`.
    ///
    /// If the host cannot deliver scroll events the transition still mounts, rendering the
    /// static progress-0 frame once.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn mount(
        provider: Rc<dyn GeometryProvider>,
        transition: ScrollTransition,
        sink: impl StyleSink + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(MountState {
            transition,
            sink: Box::new(sink),
            last_sample: None,
            last_frame: None,
        }));

        let weak_state: Weak<RefCell<MountState>> = Rc::downgrade(&state);
        let weak_provider: Weak<dyn GeometryProvider> = Rc::downgrade(&provider);
        let listener = Rc::new(move |_event: HostEvent| {
            let (Some(state), Some(provider)) = (weak_state.upgrade(), weak_provider.upgrade())
            else {
                return;
            };
            // One measurement per event, shared by both sections.
            let sample = provider.sample();
            state.borrow_mut().render(sample);
        });

        let subscription = match provider.subscribe(listener) {
            Ok(sub) => {
                state.borrow_mut().render(provider.sample());
                tracing::debug!("scroll transition mounted");
                Some(sub)
            }
            Err(err) => {
                tracing::warn!(%err, "scroll events unavailable; rendering static frame");
                state.borrow_mut().render_static();
                None
            }
        };

        Self {
            state,
            _provider: provider,
            subscription,
        }
    }

    /// `true` while a host listener is registered.
    pub fn is_live(&self) -> bool {
        self.subscription.is_some()
    }

    /// Most recently applied frame.
    pub fn last_frame(&self) -> Option<TransitionFrame> {
        self.state.borrow().last_frame
    }

    pub fn transition(&self) -> std::cell::Ref<'_, ScrollTransition> {
        std::cell::Ref::map(self.state.borrow(), |s| &s.transition)
    }

    /// Detach from the host.
    pub fn unmount(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.cancel();
            tracing::debug!("scroll transition unmounted");
        }
    }
}

impl Drop for MountedTransition {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for MountedTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedTransition")
            .field("live", &self.is_live())
            .field("last_frame", &self.last_frame())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/mount.rs"]
mod tests;
