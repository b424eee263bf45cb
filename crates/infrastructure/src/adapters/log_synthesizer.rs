//! Dry-run synthesizer that logs instead of speaking

use application::{SpeechError, SpeechSynthesizer, VoicesChangedListener};
use domain::{Utterance, Voice, VoiceGender};
use parking_lot::Mutex;
use tracing::info;

/// Synthesizer that records utterances and writes them to the log
///
/// Used for `--dry-run` and on machines without a speech engine.
#[derive(Debug)]
pub struct LogSynthesizer {
    voices: Vec<Voice>,
    spoken: Mutex<Vec<Utterance>>,
}

impl Default for LogSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSynthesizer {
    /// Create a synthesizer offering a single English voice
    #[must_use]
    pub fn new() -> Self {
        Self {
            voices: vec![Voice::new("dry-run", "Dry run", "en").with_gender(VoiceGender::Neutral)],
            spoken: Mutex::new(Vec::new()),
        }
    }

    /// Utterances started so far, oldest first
    #[must_use]
    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken.lock().clone()
    }
}

impl SpeechSynthesizer for LogSynthesizer {
    fn is_supported(&self) -> bool {
        true
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        info!(
            text = %utterance.text,
            volume = utterance.config.volume(),
            pitch = utterance.config.pitch,
            rate = utterance.config.rate,
            "Dry-run utterance"
        );
        self.spoken.lock().push(utterance.clone());
        Ok(())
    }

    fn cancel(&self) -> Result<(), SpeechError> {
        Ok(())
    }

    fn on_voices_changed(&self, _listener: VoicesChangedListener) {}
}
