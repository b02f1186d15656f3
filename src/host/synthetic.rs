use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::{
    foundation::{
        core::ContainerRect,
        error::{ScrollFxError, ScrollFxResult},
    },
    host::provider::{GeometryProvider, HostEvent, Listener, Subscription},
};

#[derive(Default)]
struct Inner {
    listeners: BTreeMap<u64, Listener>,
    next_id: u64,
    scroll_offset: f64,
    viewport_height: f64,
    // Document-space placement; `None` until laid out.
    container: Option<(f64, f64)>,
    events_supported: bool,
}

/// In-memory host driven by explicit calls; useful for tests and offline sweeps.
///
/// Cloning yields another handle to the same host.
#[derive(Clone)]
pub struct SyntheticHost {
    inner: Rc<RefCell<Inner>>,
}

impl SyntheticHost {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                viewport_height,
                events_supported: true,
                ..Inner::default()
            })),
        }
    }

    /// A host that cannot deliver scroll events (e.g. server-side rendering).
    pub fn without_events(viewport_height: f64) -> Self {
        let host = Self::new(viewport_height);
        host.inner.borrow_mut().events_supported = false;
        host
    }

    /// Place the container at `document_top` with the given height; notifies as a resize.
    pub fn layout(&self, document_top: f64, height: f64) {
        self.inner.borrow_mut().container = Some((document_top, height));
        self.emit(HostEvent::Resize);
    }

    pub fn scroll_to(&self, offset: f64) {
        self.inner.borrow_mut().scroll_offset = offset;
        self.emit(HostEvent::Scroll);
    }

    pub fn resize(&self, viewport_height: f64) {
        self.inner.borrow_mut().viewport_height = viewport_height;
        self.emit(HostEvent::Resize);
    }

    /// Fire an event without changing any geometry.
    pub fn emit(&self, event: HostEvent) {
        // Snapshot first: listeners read geometry back through `measure`.
        let listeners: Vec<Listener> = self.inner.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl GeometryProvider for SyntheticHost {
    fn subscribe(&self, listener: Listener) -> ScrollFxResult<Subscription> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            if !inner.events_supported {
                return Err(ScrollFxError::host("scroll events are not available"));
            }
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, listener);
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.remove(&id);
            }
        }))
    }

    fn measure(&self) -> Option<ContainerRect> {
        let inner = self.inner.borrow();
        inner
            .container
            .map(|(doc_top, height)| ContainerRect::new(doc_top - inner.scroll_offset, height))
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.borrow().scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        self.inner.borrow().viewport_height
    }
}

impl std::fmt::Debug for SyntheticHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SyntheticHost")
            .field("listeners", &inner.listeners.len())
            .field("scroll_offset", &inner.scroll_offset)
            .field("viewport_height", &inner.viewport_height)
            .field("container", &inner.container)
            .finish()
    }
}
