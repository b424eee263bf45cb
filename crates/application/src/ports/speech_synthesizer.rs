//! Speech synthesizer port - The platform's text-to-speech capability

use domain::{Utterance, Voice};
#[cfg(test)]
use mockall::automock;

use crate::error::SpeechError;

/// Callback fired when the platform's voice list changes
pub type VoicesChangedListener = Box<dyn Fn() + Send + Sync>;

/// Port for a platform speech engine
///
/// The platform plays at most what it is told: starting an utterance while
/// another one is speaking is the caller's problem, so callers cancel first.
#[cfg_attr(test, automock)]
pub trait SpeechSynthesizer: Send + Sync {
    /// Check whether speech synthesis exists on this platform at all
    fn is_supported(&self) -> bool;

    /// Voices currently known to the platform
    ///
    /// May be empty until the platform has finished loading its list.
    fn voices(&self) -> Vec<Voice>;

    /// Start speaking an utterance
    ///
    /// Returns once the utterance is handed to the platform, not when it
    /// finishes playing.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the platform rejects the utterance.
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Cancel whatever is queued or speaking
    ///
    /// Must be a no-op when nothing is speaking.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if cancellation could not be requested.
    fn cancel(&self) -> Result<(), SpeechError>;

    /// Register a listener for voice list changes
    ///
    /// Listeners stay registered for the lifetime of the synthesizer.
    fn on_voices_changed(&self, listener: VoicesChangedListener);
}
