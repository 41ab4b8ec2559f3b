#![forbid(unsafe_code)]

//! Deterministic stand-ins for the host environment.
//!
//! [`RecordingTarget`] implements [`RenderTarget`] by recording what a DOM
//! overlay would show, and [`MemoryDocument`] implements [`GalleryDocument`]
//! over an in-memory tree with class-selector matching. Both let the state
//! machine and the scanner run without a browser.

use crate::image::ImageRef;
use crate::render::RenderTarget;
use crate::scanner::GalleryDocument;

/// What the overlay currently shows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub overlay_visible: bool,
    pub source: String,
    pub label: String,
    pub caption: String,
    pub nav_visible: bool,
    pub scroll_locked: bool,
}

/// One call made against the render target, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    OverlayVisible(bool),
    Image(String, String),
    Caption(String),
    NavVisible(bool),
    ScrollLocked(bool),
}

/// Render target that records instead of drawing.
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    presentation: Presentation,
    calls: Vec<RenderCall>,
}

impl RecordingTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    #[must_use]
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }
}

impl RenderTarget for RecordingTarget {
    fn set_overlay_visible(&mut self, visible: bool) {
        self.presentation.overlay_visible = visible;
        self.calls.push(RenderCall::OverlayVisible(visible));
    }

    fn set_image(&mut self, source: &str, label: &str) {
        self.presentation.source = source.to_string();
        self.presentation.label = label.to_string();
        self.calls
            .push(RenderCall::Image(source.to_string(), label.to_string()));
    }

    fn set_caption(&mut self, text: &str) {
        self.presentation.caption = text.to_string();
        self.calls.push(RenderCall::Caption(text.to_string()));
    }

    fn set_nav_visible(&mut self, visible: bool) {
        self.presentation.nav_visible = visible;
        self.calls.push(RenderCall::NavVisible(visible));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.presentation.scroll_locked = locked;
        self.calls.push(RenderCall::ScrollLocked(locked));
    }
}

// ---------------------------------------------------------------------------
// In-memory document
// ---------------------------------------------------------------------------

/// Image element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage {
    pub class: String,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub tabindex: Option<i32>,
    pub role: Option<String>,
}

impl MemoryImage {
    #[must_use]
    pub fn new(class: &str, src: &str, alt: &str) -> Self {
        Self {
            class: class.to_string(),
            src: Some(src.to_string()),
            alt: Some(alt.to_string()),
            ..Self::default()
        }
    }
}

/// Container element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    pub class: String,
    pub images: Vec<MemoryImage>,
}

/// Handle to a node of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryNode {
    pub container: usize,
    pub image: Option<usize>,
}

/// Flat two-level document: containers holding images, in document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub containers: Vec<MemoryContainer>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a container of class `class` holding `images`.
    #[must_use]
    pub fn with_container(mut self, class: &str, images: Vec<MemoryImage>) -> Self {
        self.containers.push(MemoryContainer {
            class: class.to_string(),
            images,
        });
        self
    }

    #[must_use]
    pub fn image(&self, node: MemoryNode) -> Option<&MemoryImage> {
        self.containers.get(node.container)?.images.get(node.image?)
    }
}

fn class_matches(selector: &str, class: &str) -> bool {
    let Some(wanted) = selector.strip_prefix('.') else {
        return false;
    };
    class.split_whitespace().any(|c| c == wanted)
}

impl GalleryDocument for MemoryDocument {
    type Element = MemoryNode;

    fn gallery_containers(&self, selector: &str) -> Vec<MemoryNode> {
        self.containers
            .iter()
            .enumerate()
            .filter(|(_, c)| class_matches(selector, &c.class))
            .map(|(container, _)| MemoryNode {
                container,
                image: None,
            })
            .collect()
    }

    fn container_images(&self, container: &MemoryNode, selector: &str) -> Vec<MemoryNode> {
        let Some(c) = self.containers.get(container.container) else {
            return Vec::new();
        };
        c.images
            .iter()
            .enumerate()
            .filter(|(_, img)| class_matches(selector, &img.class))
            .map(|(image, _)| MemoryNode {
                container: container.container,
                image: Some(image),
            })
            .collect()
    }

    fn read_image(&self, image: &MemoryNode) -> ImageRef {
        match self.image(*image) {
            Some(img) => ImageRef::new(
                img.src.clone().unwrap_or_default(),
                img.alt.clone().unwrap_or_default(),
            ),
            None => ImageRef::new("", ""),
        }
    }

    fn mark_interactive(&mut self, image: &MemoryNode) {
        let Some(index) = image.image else {
            return;
        };
        if let Some(img) = self
            .containers
            .get_mut(image.container)
            .and_then(|c| c.images.get_mut(index))
        {
            img.tabindex = Some(0);
            img.role = Some("button".to_string());
        }
    }
}
