#![forbid(unsafe_code)]

//! Lightbox state machine.
//!
//! ```text
//!            open(gallery, i)            next / previous / show(i)
//!   Closed ───────────────────▶ Open ◀──────────────────────────┐
//!     ▲                          │ └─────────────────────────────┘
//!     └──────── close() ─────────┘      open(other, j) re-enters Open
//! ```
//!
//! The controller exclusively owns [`LightboxState`] and the [`RenderTarget`].
//! Every transition runs to completion inside one host callback, so no
//! locking is needed beyond `&mut self`.

use tracing::{debug, trace};

use crate::image::{Gallery, ImageRef};
use crate::input::{Command, KeyBindings, LightboxKey};
use crate::render::RenderTarget;
use crate::wrap::{step, wrap_index};

/// Pointer activation on one of the overlay's own elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    CloseButton,
    /// The dimmed area around the image content.
    Backdrop,
    PreviousButton,
    NextButton,
}

impl Trigger {
    #[must_use]
    pub const fn command(self) -> Command {
        match self {
            Self::CloseButton | Self::Backdrop => Command::Close,
            Self::PreviousButton => Command::Previous,
            Self::NextButton => Command::Next,
        }
    }
}

/// Session state of the single shared overlay.
///
/// `active` and `active_index` are left stale on close and overwritten by the
/// next open; they are only meaningful while `visible` is true.
#[derive(Debug, Clone, Default)]
pub struct LightboxState {
    visible: bool,
    active: Option<Gallery>,
    active_index: usize,
}

impl LightboxState {
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Gallery most recently opened, if any.
    #[must_use]
    pub fn active_sequence(&self) -> Option<&Gallery> {
        self.active.as_ref()
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }
}

/// Owns the lightbox session and drives its render target.
#[derive(Debug)]
pub struct LightboxController<R: RenderTarget> {
    state: LightboxState,
    target: R,
}

impl<R: RenderTarget> LightboxController<R> {
    /// Wrap a freshly mounted (hidden) render target.
    pub fn new(target: R) -> Self {
        Self {
            state: LightboxState::default(),
            target,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LightboxState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.visible
    }

    /// Index on display, `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.visible.then_some(self.state.active_index)
    }

    /// Image on display, `None` while closed.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        if !self.state.visible {
            return None;
        }
        self.state.active.as_ref()?.get(self.state.active_index)
    }

    #[must_use]
    pub const fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    /// Show `gallery` starting at `index` (any integer, wrapped).
    ///
    /// Opening while already open replaces the active gallery. An empty
    /// gallery has nothing to show and leaves the state untouched.
    pub fn open(&mut self, gallery: &Gallery, index: i64) {
        let Some(normalized) = wrap_index(index, gallery.len()) else {
            debug!(gallery = %gallery.id(), "ignoring open of empty gallery");
            return;
        };
        debug!(
            gallery = %gallery.id(),
            requested = index,
            index = normalized,
            len = gallery.len(),
            reopen = self.state.visible,
            "lightbox open"
        );
        self.state.active = Some(gallery.clone());
        self.state.visible = true;
        self.render(normalized);
        self.target.set_overlay_visible(true);
        self.target.set_scroll_locked(true);
    }

    /// Hide the overlay and restore page scrolling. No-op while closed.
    pub fn close(&mut self) {
        if !self.state.visible {
            return;
        }
        debug!(index = self.state.active_index, "lightbox close");
        self.state.visible = false;
        self.target.set_overlay_visible(false);
        self.target.set_scroll_locked(false);
    }

    pub fn next(&mut self) {
        self.advance(1);
    }

    pub fn previous(&mut self) {
        self.advance(-1);
    }

    /// Display position `index` of the active gallery (any integer, wrapped).
    ///
    /// Ignored while closed.
    pub fn show(&mut self, index: i64) {
        if !self.state.visible {
            return;
        }
        let len = self.active_len();
        if let Some(normalized) = wrap_index(index, len) {
            self.render(normalized);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Close => self.close(),
            Command::Previous => self.previous(),
            Command::Next => self.next(),
        }
    }

    pub fn handle_trigger(&mut self, trigger: Trigger) {
        self.apply(trigger.command());
    }

    /// Resolve a global key press against `keys`.
    ///
    /// Returns `true` when the key was consumed. Keys are only honoured while
    /// the overlay is open.
    pub fn handle_key(&mut self, key: &LightboxKey, keys: &KeyBindings) -> bool {
        if !self.state.visible {
            return false;
        }
        match keys.command_for(key) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    fn active_len(&self) -> usize {
        self.state.active.as_ref().map_or(0, Gallery::len)
    }

    fn advance(&mut self, delta: i64) {
        if !self.state.visible {
            trace!(delta, "navigation ignored while closed");
            return;
        }
        if let Some(index) = step(self.state.active_index, delta, self.active_len()) {
            self.render(index);
        }
    }

    /// Shared rendering routine; `index` is already normalized.
    fn render(&mut self, index: usize) {
        let Some(gallery) = self.state.active.as_ref() else {
            return;
        };
        let Some(image) = gallery.get(index) else {
            return;
        };
        trace!(gallery = %gallery.id(), index, source = image.source(), "lightbox render");
        self.target.set_image(image.source(), image.label());
        self.target.set_caption(image.caption());
        self.target.set_nav_visible(gallery.len() > 1);
        self.state.active_index = index;
    }
}
