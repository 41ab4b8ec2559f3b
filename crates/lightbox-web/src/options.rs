#![forbid(unsafe_code)]

//! Host options handling shared by the wasm entry points.
//!
//! The JS side passes an options object; the wasm layer stringifies it and
//! hands the JSON text here, so parsing stays testable on native targets.

use lightbox_core::{LightboxConfig, LightboxError};

/// Build a config from optional JSON text. `None`, `null` and `undefined`
/// (stringified as an empty string) all mean "use defaults".
pub fn config_from_json(json: Option<&str>) -> Result<LightboxConfig, LightboxError> {
    match json.map(str::trim) {
        None | Some("") | Some("null") | Some("undefined") => Ok(LightboxConfig::default()),
        Some(text) => LightboxConfig::from_json_str(text),
    }
}

/// Attributes that make a gallery image focusable and announce it as a button.
pub const INTERACTIVE_ATTRIBUTES: [(&str, &str); 2] = [("tabindex", "0"), ("role", "button")];

/// Whether mounting must wait for `DOMContentLoaded`, given
/// `document.readyState`. Only `"loading"` defers.
#[must_use]
pub fn defer_until_ready(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// CSS `display` value for an element shown as a block or hidden.
#[must_use]
pub const fn display_value(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// CSS `overflow` value for the page body.
#[must_use]
pub const fn body_overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_use_defaults() {
        for input in [None, Some(""), Some("null"), Some(" undefined ")] {
            assert_eq!(config_from_json(input), Ok(LightboxConfig::default()));
        }
    }

    #[test]
    fn options_are_parsed_and_validated() {
        let config = config_from_json(Some(r#"{"overlayId":"photo-viewer"}"#)).expect("config");
        assert_eq!(config.overlay_id, "photo-viewer");

        let err = config_from_json(Some(r#"{"overlayId":"two words"}"#)).unwrap_err();
        assert!(matches!(err, LightboxError::Config(_)));
    }

    #[test]
    fn only_loading_document_defers_mount() {
        assert!(defer_until_ready("loading"));
        assert!(!defer_until_ready("interactive"));
        assert!(!defer_until_ready("complete"));
    }

    #[test]
    fn gallery_images_become_focusable_buttons() {
        assert_eq!(INTERACTIVE_ATTRIBUTES, [("tabindex", "0"), ("role", "button")]);
    }

    #[test]
    fn style_values() {
        assert_eq!(display_value(true), "block");
        assert_eq!(display_value(false), "none");
        assert_eq!(body_overflow_value(true), "hidden");
        assert_eq!(body_overflow_value(false), "");
    }
}
