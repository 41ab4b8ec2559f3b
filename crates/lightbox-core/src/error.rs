#![forbid(unsafe_code)]

/// Initialization error for the lightbox.
///
/// Runtime transitions never fail; only configuration parsing and mounting
/// the overlay into the host document can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxError {
    /// Host options could not be parsed or failed validation.
    Config(String),
    /// A required host element (e.g. `body`) is not available yet.
    MissingElement(&'static str),
    /// The host rejected a DOM operation.
    Dom(String),
}

impl core::fmt::Display for LightboxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid lightbox config: {msg}"),
            Self::MissingElement(what) => write!(f, "missing host element: {what}"),
            Self::Dom(msg) => write!(f, "dom operation failed: {msg}"),
        }
    }
}

impl std::error::Error for LightboxError {}

impl From<serde_json::Error> for LightboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(feature = "wasm")]
impl From<LightboxError> for wasm_bindgen::JsValue {
    fn from(err: LightboxError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            LightboxError::MissingElement("body").to_string(),
            "missing host element: body"
        );
        assert_eq!(
            LightboxError::Config("bad".into()).to_string(),
            "invalid lightbox config: bad"
        );
    }
}
