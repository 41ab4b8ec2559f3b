#![forbid(unsafe_code)]

//! Install progress of a viewer.
//!
//! Mounting can happen synchronously from `install()` or later from the
//! `DOMContentLoaded` callback. Both paths report into one [`MountPhase`], so a
//! failed deferred mount is visible to JS and `install()` may be retried.

use lightbox_core::LightboxError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MountPhase {
    /// Nothing attempted yet, or torn down.
    #[default]
    Idle,
    /// Waiting for `DOMContentLoaded`.
    Deferred,
    Mounted,
    /// Last attempt failed with this message.
    Failed(String),
}

impl MountPhase {
    /// Whether `install()` should attempt a mount now.
    #[must_use]
    pub const fn accepts_install(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Record the outcome of a mount attempt and pass it through.
    pub fn settle<T>(&mut self, result: Result<T, LightboxError>) -> Result<T, LightboxError> {
        *self = match &result {
            Ok(_) => Self::Mounted,
            Err(err) => Self::Failed(err.to_string()),
        };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_viewer_installs() {
        let phase = MountPhase::default();
        assert!(phase.accepts_install());
        assert_eq!(phase.last_error(), None);
    }

    #[test]
    fn deferred_and_mounted_ignore_install() {
        assert!(!MountPhase::Deferred.accepts_install());
        assert!(!MountPhase::Mounted.accepts_install());
    }

    #[test]
    fn deferred_failure_is_kept_and_retryable() {
        let mut phase = MountPhase::Deferred;
        let outcome: Result<(), _> = phase.settle(Err(LightboxError::MissingElement("body")));
        assert_eq!(outcome, Err(LightboxError::MissingElement("body")));
        assert_eq!(phase.last_error(), Some("missing host element: body"));
        assert!(phase.accepts_install());

        assert_eq!(phase.settle(Ok(7)), Ok(7));
        assert_eq!(phase, MountPhase::Mounted);
        assert_eq!(phase.last_error(), None);
        assert!(!phase.accepts_install());
    }
}
