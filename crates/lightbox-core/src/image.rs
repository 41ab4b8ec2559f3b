#![forbid(unsafe_code)]

//! Gallery data model.

use std::rc::Rc;

/// One displayable image, read from page markup at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    source: String,
    alt_text: String,
}

impl ImageRef {
    #[must_use]
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Image URI.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Accessible label for the enlarged image.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.alt_text
    }

    /// Caption shown under the enlarged image (the alt text, verbatim).
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.alt_text
    }
}

/// Position of a gallery container in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GalleryId(pub usize);

impl core::fmt::Display for GalleryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "gallery#{}", self.0)
    }
}

/// Ordered images of one grid container.
///
/// Cloning is cheap and shares the underlying sequence, so the lightbox can
/// hold the gallery it was opened from without copying it.
#[derive(Debug, Clone)]
pub struct Gallery {
    id: GalleryId,
    images: Rc<[ImageRef]>,
}

impl Gallery {
    #[must_use]
    pub fn new(id: GalleryId, images: Vec<ImageRef>) -> Self {
        Self {
            id,
            images: images.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> GalleryId {
        self.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> + '_ {
        self.images.iter()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Whether both handles point at the same underlying sequence.
    #[must_use]
    pub fn shares_sequence(&self, other: &Gallery) -> bool {
        Rc::ptr_eq(&self.images, &other.images)
    }
}

impl PartialEq for Gallery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.images == other.images
    }
}

impl Eq for Gallery {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caption_and_label_are_alt_text() {
        let img = ImageRef::new("/a.jpg", "A sunset");
        assert_eq!(img.caption(), "A sunset");
        assert_eq!(img.label(), "A sunset");
        assert_eq!(img.source(), "/a.jpg");
    }

    #[test]
    fn clone_shares_sequence() {
        let g = Gallery::new(GalleryId(0), vec![ImageRef::new("a", "")]);
        let h = g.clone();
        assert!(g.shares_sequence(&h));

        let other = Gallery::new(GalleryId(0), vec![ImageRef::new("a", "")]);
        assert!(!g.shares_sequence(&other));
        assert_eq!(g, other);
    }

    #[test]
    fn gallery_id_display() {
        assert_eq!(GalleryId(3).to_string(), "gallery#3");
    }
}
