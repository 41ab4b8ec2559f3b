#![forbid(unsafe_code)]

//! `lightbox-core` holds the host-agnostic parts of the gallery lightbox.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (DOM/JS) scans markup,
//!   delivers activation and key events, and renders through [`RenderTarget`].
//! - **Explicit ownership**: exactly one [`LightboxController`] is constructed
//!   at startup and handed to whatever wiring layer needs it. No globals.
//! - **Total operations**: indices are normalized by wraparound, never rejected.
//!
//! Nothing here binds to `wasm-bindgen`; `lightbox-web` wraps these building
//! blocks with a JS API.

pub mod config;
pub mod controller;
pub mod error;
pub mod image;
pub mod input;
pub mod render;
pub mod scanner;
pub mod wrap;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::{ControlLabels, LightboxConfig, ScanConfig};
pub use controller::{LightboxController, LightboxState, Trigger};
pub use error::LightboxError;
pub use image::{Gallery, GalleryId, ImageRef};
pub use input::{Command, KeyBindings, LightboxKey, is_activation_key, normalize_dom_key};
pub use render::RenderTarget;
pub use scanner::{ActivationBinding, GalleryDocument, GalleryScanner, ScannedPage};
pub use wrap::{step, wrap_index};
