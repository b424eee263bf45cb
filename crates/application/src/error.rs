//! Application-level errors

use thiserror::Error;

/// Errors reported by a speech platform
///
/// These never reach callers of the guidance service; the speech driver
/// logs them and keeps the most recent one in its capability report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// Platform offers no speech synthesis
    #[error("Speech synthesis not supported: {0}")]
    NotSupported(String),

    /// Starting an utterance failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Cancelling the in-flight utterance failed
    #[error("Cancel failed: {0}")]
    CancelFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_supported_error_message() {
        let err = SpeechError::NotSupported("espeak-ng missing".to_string());
        assert_eq!(
            err.to_string(),
            "Speech synthesis not supported: espeak-ng missing"
        );
    }

    #[test]
    fn synthesis_failed_error_message() {
        let err = SpeechError::SynthesisFailed("broken pipe".to_string());
        assert_eq!(err.to_string(), "Synthesis failed: broken pipe");
    }

    #[test]
    fn cancel_failed_error_message() {
        let err = SpeechError::CancelFailed("no such process".to_string());
        assert_eq!(err.to_string(), "Cancel failed: no such process");
    }
}
