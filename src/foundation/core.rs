pub use kurbo::{Affine, Rect, Vec2};

/// Bounding box of the transition's host container, relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRect {
    /// Distance from the viewport top to the container top, px. Negative once scrolled past.
    pub top: f64,
    /// Container height, px.
    pub height: f64,
}

impl ContainerRect {
    /// Create a rect from its viewport-relative top and height.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

impl From<Rect> for ContainerRect {
    fn from(r: Rect) -> Self {
        Self {
            top: r.y0,
            height: r.height(),
        }
    }
}

/// One geometry reading taken from the host on a scroll/resize/layout event.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSample {
    /// Document scroll offset, px.
    pub scroll_offset: f64,
    /// Container top relative to the viewport top, px (signed).
    pub container_top: f64,
    /// Container height, px.
    pub container_height: f64,
    /// Visible viewport height, px.
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Combine a container measurement with the current scroll offset and viewport height.
    pub fn new(scroll_offset: f64, container: ContainerRect, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            container_top: container.top,
            container_height: container.height,
            viewport_height,
        }
    }

    /// Build a sample from the container's document-space top.
    ///
    /// The viewport-relative top is `document_top - scroll_offset`, so progress grows
    /// with scroll while the layout stays fixed.
    pub fn from_document(
        document_top: f64,
        container_height: f64,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            scroll_offset,
            container_top: document_top - scroll_offset,
            container_height,
            viewport_height,
        }
    }

    /// The container part of this sample.
    pub fn container(&self) -> ContainerRect {
        ContainerRect {
            top: self.container_top,
            height: self.container_height,
        }
    }
}
