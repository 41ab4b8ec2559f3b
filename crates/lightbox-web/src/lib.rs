#![forbid(unsafe_code)]

//! WASM frontend for the gallery lightbox.
//!
//! This crate is intentionally host-specific (web/WASM). It provides a
//! `wasm-bindgen` API surface that:
//! - mounts the single lightbox overlay into `document.body`,
//! - scans the page for gallery grids and binds pointer/keyboard activation,
//! - forwards global key presses and overlay clicks to the state machine,
//! - routes `tracing` output to the browser console.
//!
//! All state-machine logic lives in `lightbox-core`; this crate only binds it
//! to the DOM.

pub mod lifecycle;
pub mod options;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{GalleryViewer, install_lightbox};

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct GalleryViewer;

#[cfg(not(target_arch = "wasm32"))]
impl GalleryViewer {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
