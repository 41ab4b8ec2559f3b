#![forbid(unsafe_code)]

//! Host-provided lightbox options.
//!
//! Every field has a default matching the stock gallery markup, so an empty
//! options object (or none at all) yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::error::LightboxError;
use crate::input::KeyBindings;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Markup selectors consumed by [`GalleryScanner`](crate::GalleryScanner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// CSS selector for gallery containers.
    /// Default: `.image-gallery-grid`
    pub gallery_selector: String,

    /// CSS selector for images inside one container.
    /// Default: `.gallery-image`
    pub image_selector: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            gallery_selector: ".image-gallery-grid".to_string(),
            image_selector: ".gallery-image".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Accessible labels for the overlay's buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlLabels {
    pub close: String,
    pub previous: String,
    pub next: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            close: "Close lightbox".to_string(),
            previous: "Previous image".to_string(),
            next: "Next image".to_string(),
        }
    }
}

/// Full lightbox configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    #[serde(flatten)]
    pub scan: ScanConfig,

    /// Element id of the overlay root.
    /// Default: `lightbox`
    pub overlay_id: String,

    pub keys: KeyBindings,

    pub labels: ControlLabels,

    /// Minimum tracing level forwarded to the host console.
    /// Default: `info`
    pub log_level: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            overlay_id: "lightbox".to_string(),
            keys: KeyBindings::default(),
            labels: ControlLabels::default(),
            log_level: "info".to_string(),
        }
    }
}

impl LightboxConfig {
    /// Parse and validate a JSON options object.
    pub fn from_json_str(json: &str) -> Result<Self, LightboxError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LightboxError> {
        if self.scan.gallery_selector.trim().is_empty() {
            return Err(LightboxError::Config("gallerySelector must not be blank".into()));
        }
        if self.scan.image_selector.trim().is_empty() {
            return Err(LightboxError::Config("imageSelector must not be blank".into()));
        }
        if self.overlay_id.trim().is_empty() || self.overlay_id.contains(char::is_whitespace) {
            return Err(LightboxError::Config(format!(
                "overlayId must be a single non-blank token (got {:?})",
                self.overlay_id
            )));
        }
        if !self.keys.is_unambiguous() {
            return Err(LightboxError::Config(
                "keys.dismiss, keys.previous and keys.next must be distinct".into(),
            ));
        }
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(LightboxError::Config(format!(
                "logLevel must be one of {} (got {:?})",
                LOG_LEVELS.join("|"),
                self.log_level
            )));
        }
        Ok(())
    }
}
