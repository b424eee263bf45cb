//! Speech output port - The single spoken-output channel of a session

use chrono::{DateTime, Utc};
use domain::{UtteranceConfig, UtteranceOptions};
#[cfg(test)]
use mockall::automock;

use crate::error::SpeechError;

/// A platform failure that was absorbed instead of propagated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechFailure {
    /// What went wrong
    pub error: SpeechError,
    /// When it happened
    pub occurred_at: DateTime<Utc>,
}

impl SpeechFailure {
    /// Record a failure that happened just now
    #[must_use]
    pub fn now(error: SpeechError) -> Self {
        Self {
            error,
            occurred_at: Utc::now(),
        }
    }
}

/// What the output channel can do and what last went wrong
///
/// Lets consuming UIs hide voice controls when speech is unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCapability {
    /// Whether the platform offers speech synthesis
    pub supported: bool,
    /// Most recent absorbed failure, cleared by the next successful utterance
    pub last_error: Option<SpeechFailure>,
}

impl SpeechCapability {
    /// Capability of a platform without speech synthesis
    #[must_use]
    pub const fn unsupported() -> Self {
        Self {
            supported: false,
            last_error: None,
        }
    }
}

/// Port for the session-wide speech output
///
/// Every method is infallible: speech is an enhancement, so failures are
/// logged and reported through [`SpeechOutput::capability`].
#[cfg_attr(test, automock)]
pub trait SpeechOutput: Send + Sync {
    /// Cancel anything in flight, then start speaking `text`
    fn speak(&self, text: &str);

    /// Cancel the in-flight utterance; safe when nothing is speaking
    fn stop(&self);

    /// Follow an enablement change; turning off stops speech at once
    fn toggle(&self, enabled: bool);

    /// Merge a partial settings update into the live configuration
    fn set_options(&self, options: UtteranceOptions);

    /// Snapshot of the live configuration
    fn options(&self) -> UtteranceConfig;

    /// Capability probe result and last absorbed failure
    fn capability(&self) -> SpeechCapability;
}
