//! Headless scroll-linked section transitions.
//!
//! A pinned hero section shrinks/fades while a content section rises over it, driven by
//! how far the host container has scrolled through the viewport:
//!
//! - Describe the effect with a [`TransitionConfig`] and build a [`ScrollTransition`]
//! - Evaluate frames directly from a [`ScrollSample`], or
//! - Attach to a [`GeometryProvider`] with [`MountedTransition`] and receive frames in a
//!   [`StyleSink`]
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod host;
pub mod mount;
pub mod site;
pub mod transition;

pub use crate::animation::{
    ease::Ease,
    ramp::{Lerp, Ramp},
};
pub use crate::foundation::core::{Affine, ContainerRect, Rect, ScrollSample, Vec2};
pub use crate::foundation::error::{ScrollFxError, ScrollFxResult};
pub use crate::host::{
    provider::{GeometryProvider, HostEvent, Listener, Subscription},
    synthetic::SyntheticHost,
};
pub use crate::mount::{MountedTransition, RecordingSink, StyleSink};
pub use crate::site::{
    booking::{BookingSheet, BookingTimings, LoadEnd, LoadOutcome, LoadTicket},
    navbar::{AttachedNavbar, NavbarState, SCROLLED_THRESHOLD_PX},
    pages::{PagePreset, SiteConfig},
    popup::{BookingPopup, BookingRequest, ContactDetails, ContactField, PopupStatus},
};
pub use crate::transition::{
    config::{ScaleRange, TransitionConfig},
    progress::progress,
    scroll::{ScrollTransition, TransitionFrame},
    style::SectionStyle,
};
