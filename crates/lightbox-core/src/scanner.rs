#![forbid(unsafe_code)]

//! Gallery discovery.
//!
//! [`GalleryScanner::scan`] walks every gallery container in document order,
//! reads its images into a [`Gallery`], marks each image keyboard-focusable,
//! and returns one [`ActivationBinding`] per image. Attaching the pointer and
//! keyboard listeners for those bindings is the host's job; the bindings only
//! say *what* each activation opens.

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::controller::LightboxController;
use crate::image::{Gallery, GalleryId};
use crate::input::{LightboxKey, is_activation_key};
use crate::render::RenderTarget;

/// Read/annotate access to gallery markup.
pub trait GalleryDocument {
    /// Host element handle.
    type Element: Clone;

    /// Gallery containers matching `selector`, in document order.
    fn gallery_containers(&self, selector: &str) -> Vec<Self::Element>;

    /// Images of `container` matching `selector`, in document order.
    fn container_images(&self, container: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Source URI and alt text of `image`. Missing attributes read as empty.
    fn read_image(&self, image: &Self::Element) -> crate::image::ImageRef;

    /// Make `image` focusable (`tabindex=0`) and expose it as a button.
    fn mark_interactive(&mut self, image: &Self::Element);
}

/// One gallery image wired to open the lightbox at its position.
///
/// The host attaches two triggers per binding: pointer click and keyboard
/// activation (Enter/Space).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationBinding<E> {
    pub element: E,
    pub gallery: GalleryId,
    pub index: usize,
}

/// Result of scanning one document.
#[derive(Debug, Clone)]
pub struct ScannedPage<E> {
    galleries: Vec<Gallery>,
    bindings: Vec<ActivationBinding<E>>,
}

impl<E> Default for ScannedPage<E> {
    fn default() -> Self {
        Self {
            galleries: Vec::new(),
            bindings: Vec::new(),
        }
    }
}

impl<E> ScannedPage<E> {
    #[must_use]
    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    #[must_use]
    pub fn gallery(&self, id: GalleryId) -> Option<&Gallery> {
        self.galleries.get(id.0)
    }

    #[must_use]
    pub fn bindings(&self) -> &[ActivationBinding<E>] {
        &self.bindings
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.bindings.len()
    }

    /// Open gallery `id` at `index` (wrapped). Returns `false` for an unknown id.
    pub fn open<R: RenderTarget>(
        &self,
        id: GalleryId,
        index: i64,
        controller: &mut LightboxController<R>,
    ) -> bool {
        match self.gallery(id) {
            Some(gallery) => {
                controller.open(gallery, index);
                true
            }
            None => {
                debug!(gallery = %id, "open requested for unknown gallery");
                false
            }
        }
    }

    /// Pointer activation of binding `binding`.
    pub fn activate<R: RenderTarget>(
        &self,
        binding: usize,
        controller: &mut LightboxController<R>,
    ) -> bool {
        let Some(b) = self.bindings.get(binding) else {
            return false;
        };
        let index = i64::try_from(b.index).unwrap_or(i64::MAX);
        self.open(b.gallery, index, controller)
    }

    /// Keyboard activation of binding `binding`.
    ///
    /// Returns `true` when `key` is an activation key and the lightbox was
    /// opened, meaning the host should suppress the key's default action.
    pub fn activate_with_key<R: RenderTarget>(
        &self,
        binding: usize,
        key: &LightboxKey,
        controller: &mut LightboxController<R>,
    ) -> bool {
        is_activation_key(key) && self.activate(binding, controller)
    }
}

/// Discovers galleries according to a [`ScanConfig`].
#[derive(Debug, Clone, Default)]
pub struct GalleryScanner {
    config: ScanConfig,
}

impl GalleryScanner {
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `doc`. An empty document yields an empty page.
    pub fn scan<D: GalleryDocument>(&self, doc: &mut D) -> ScannedPage<D::Element> {
        let mut page = ScannedPage::default();
        let containers = doc.gallery_containers(&self.config.gallery_selector);

        for (position, container) in containers.iter().enumerate() {
            let id = GalleryId(position);
            let elements = doc.container_images(container, &self.config.image_selector);
            let images = elements.iter().map(|el| doc.read_image(el)).collect();

            for (index, element) in elements.into_iter().enumerate() {
                doc.mark_interactive(&element);
                page.bindings.push(ActivationBinding {
                    element,
                    gallery: id,
                    index,
                });
            }

            let gallery = Gallery::new(id, images);
            debug!(gallery = %id, images = gallery.len(), "scanned gallery");
            page.galleries.push(gallery);
        }

        info!(
            galleries = page.galleries.len(),
            images = page.bindings.len(),
            "gallery scan complete"
        );
        page
    }
}
