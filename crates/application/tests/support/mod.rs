//! Shared test doubles for application integration tests

use std::sync::Arc;

use application::{SpeechError, SpeechSynthesizer, VoicesChangedListener};
use domain::{Utterance, Voice};
use parking_lot::Mutex;

/// What the synthesizer was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum SynthEvent {
    Cancel,
    Speak { text: String, volume: f32 },
}

/// Synthesizer that records every call instead of producing audio
#[derive(Default)]
pub struct RecordingSynthesizer {
    events: Mutex<Vec<SynthEvent>>,
    voices: Mutex<Vec<Voice>>,
    listeners: Mutex<Vec<VoicesChangedListener>>,
    fail_speak: Mutex<Option<SpeechError>>,
}

impl RecordingSynthesizer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SynthEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    pub fn spoken(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SynthEvent::Speak { text, .. } => Some(text.clone()),
                SynthEvent::Cancel => None,
            })
            .collect()
    }

    pub fn fail_next_speak(&self, error: SpeechError) {
        *self.fail_speak.lock() = Some(error);
    }

    /// Replace the voice list and notify listeners, like a platform that
    /// finished loading late
    pub fn set_voices(&self, voices: Vec<Voice>) {
        *self.voices.lock() = voices;
        let listeners = self.listeners.lock();
        for listener in listeners.iter() {
            listener();
        }
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn is_supported(&self) -> bool {
        true
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.lock().clone()
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if let Some(error) = self.fail_speak.lock().take() {
            return Err(error);
        }
        self.events.lock().push(SynthEvent::Speak {
            text: utterance.text.clone(),
            volume: utterance.config.volume(),
        });
        Ok(())
    }

    fn cancel(&self) -> Result<(), SpeechError> {
        self.events.lock().push(SynthEvent::Cancel);
        Ok(())
    }

    fn on_voices_changed(&self, listener: VoicesChangedListener) {
        self.listeners.lock().push(listener);
    }
}
