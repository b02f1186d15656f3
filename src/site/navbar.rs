use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    foundation::error::ScrollFxResult,
    host::provider::{GeometryProvider, HostEvent, Subscription},
};

/// Scroll offset past which the navbar switches to its compact, backed style.
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Transient navbar UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub language_sheet_open: bool,
}

impl NavbarState {
    /// Update from the window scroll offset; returns `true` if `scrolled` flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_language_sheet(&mut self) {
        self.language_sheet_open = true;
    }

    /// The sheet closes only once a language switch has completed.
    pub fn language_changed(&mut self) {
        self.language_sheet_open = false;
    }

    pub fn close_language_sheet(&mut self) {
        self.language_sheet_open = false;
    }

    /// Following a link closes the full-screen menu.
    pub fn navigated(&mut self) {
        self.menu_open = false;
    }
}

/// A [`NavbarState`] kept in sync with the host's scroll offset.
pub struct AttachedNavbar {
    state: Rc<RefCell<NavbarState>>,
    _subscription: Subscription,
}

impl AttachedNavbar {
    pub fn attach(provider: &Rc<dyn GeometryProvider>) -> ScrollFxResult<Self> {
        let state = Rc::new(RefCell::new(NavbarState::default()));
        state.borrow_mut().on_scroll(provider.scroll_offset());

        let weak_state: Weak<RefCell<NavbarState>> = Rc::downgrade(&state);
        let weak_provider: Weak<dyn GeometryProvider> = Rc::downgrade(provider);
        let subscription = provider.subscribe(Rc::new(move |event: HostEvent| {
            if event != HostEvent::Scroll {
                return;
            }
            let (Some(state), Some(provider)) = (weak_state.upgrade(), weak_provider.upgrade())
            else {
                return;
            };
            if state.borrow_mut().on_scroll(provider.scroll_offset()) {
                tracing::trace!(scrolled = state.borrow().scrolled, "navbar style changed");
            }
        }))?;

        Ok(Self {
            state,
            _subscription: subscription,
        })
    }

    pub fn state(&self) -> NavbarState {
        *self.state.borrow()
    }

    pub fn update(&self, f: impl FnOnce(&mut NavbarState)) {
        f(&mut self.state.borrow_mut());
    }
}
