#![forbid(unsafe_code)]

//! Render-target contract between the controller and the host.

/// Presentation surface driven by [`LightboxController`](crate::LightboxController).
///
/// The overlay structure is inserted once when the concrete target is
/// constructed; after that the controller only toggles and fills it.
/// Implementations must not fail: a target that lost its elements should
/// degrade to a no-op rather than report back.
pub trait RenderTarget {
    /// Show or hide the whole overlay.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Point the enlarged image at `source` with accessible `label`.
    fn set_image(&mut self, source: &str, label: &str);

    fn set_caption(&mut self, text: &str);

    /// Show or hide both previous/next controls together.
    fn set_nav_visible(&mut self, visible: bool);

    /// Lock (or restore) page-level scrolling behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn set_overlay_visible(&mut self, visible: bool) {
        (**self).set_overlay_visible(visible);
    }

    fn set_image(&mut self, source: &str, label: &str) {
        (**self).set_image(source, label);
    }

    fn set_caption(&mut self, text: &str) {
        (**self).set_caption(text);
    }

    fn set_nav_visible(&mut self, visible: bool) {
        (**self).set_nav_visible(visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        (**self).set_scroll_locked(locked);
    }
}
