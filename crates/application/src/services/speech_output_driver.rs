//! Speech output driver - Sole owner of the platform speech engine
//!
//! Holds the one live utterance configuration of a session and guarantees
//! that at most one utterance is active: every `speak` cancels whatever is
//! in flight before starting the next one. There is no queue.
//!
//! # Voice selection
//!
//! Platforms populate their voice list lazily. The driver selects a voice at
//! construction and registers a voices-changed listener that re-runs the
//! selection whenever the list changes, without touching speech in flight.
//!
//! # Unsupported platforms
//!
//! Support is probed once at construction. Without a speech engine every
//! operation is a silent no-op.

use std::fmt;
use std::sync::{Arc, Weak};

use domain::{Utterance, UtteranceConfig, UtteranceOptions, Voice, select_voice};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::VoiceSettings;
use crate::error::SpeechError;
use crate::ports::{SpeechCapability, SpeechFailure, SpeechOutput, SpeechSynthesizer};

/// Speech output backed by a platform synthesizer
pub struct SpeechOutputDriver {
    shared: Arc<DriverShared>,
}

struct DriverShared {
    /// `None` when the platform has no speech synthesis
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    preferred_language: String,
    config: RwLock<UtteranceConfig>,
    /// Held across cancel-then-start so the pair is atomic for all callers
    slot: Mutex<()>,
    last_error: Mutex<Option<SpeechFailure>>,
}

impl fmt::Debug for SpeechOutputDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechOutputDriver")
            .field("supported", &self.shared.synthesizer.is_some())
            .field("preferred_language", &self.shared.preferred_language)
            .field("config", &*self.shared.config.read())
            .finish_non_exhaustive()
    }
}

impl DriverShared {
    fn select_voice(&self) {
        let Some(synthesizer) = &self.synthesizer else {
            return;
        };

        let voices = synthesizer.voices();
        let selected = select_voice(&voices, &self.preferred_language);

        debug!(
            available = voices.len(),
            voice = selected.as_ref().map_or("<platform default>", |v| v.name.as_str()),
            "Selected speech voice"
        );

        self.config.write().voice = selected;
    }

    fn record(&self, error: SpeechError) {
        warn!(error = %error, "Speech platform failure absorbed");
        *self.last_error.lock() = Some(SpeechFailure::now(error));
    }

    fn cancel(&self, synthesizer: &dyn SpeechSynthesizer) {
        if let Err(e) = synthesizer.cancel() {
            self.record(e);
        }
    }
}

impl SpeechOutputDriver {
    /// Create a driver over a platform synthesizer
    ///
    /// Probes support once, selects an initial voice and subscribes to
    /// voice list changes.
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, settings: &VoiceSettings) -> Self {
        let supported = synthesizer.is_supported();
        if !supported {
            warn!("Speech synthesis not supported, voice guidance will stay silent");
        }

        let shared = Arc::new(DriverShared {
            synthesizer: supported.then_some(synthesizer),
            preferred_language: settings.preferred_language.clone(),
            config: RwLock::new(settings.utterance_config()),
            slot: Mutex::new(()),
            last_error: Mutex::new(None),
        });

        if let Some(synthesizer) = &shared.synthesizer {
            shared.select_voice();

            let weak: Weak<DriverShared> = Arc::downgrade(&shared);
            synthesizer.on_voices_changed(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    debug!("Platform voice list changed");
                    shared.select_voice();
                }
            }));

            info!(
                preferred_language = %shared.preferred_language,
                "Speech output driver ready"
            );
        }

        Self { shared }
    }

    /// Voices the platform currently offers
    #[must_use]
    pub fn available_voices(&self) -> Vec<Voice> {
        self.shared
            .synthesizer
            .as_ref()
            .map(|synthesizer| synthesizer.voices())
            .unwrap_or_default()
    }

    /// Voice utterances are currently spoken with
    #[must_use]
    pub fn current_voice(&self) -> Option<Voice> {
        self.shared.config.read().voice.clone()
    }

    /// Whether the platform offers speech synthesis
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.shared.synthesizer.is_some()
    }
}

impl SpeechOutput for SpeechOutputDriver {
    fn speak(&self, text: &str) {
        let Some(synthesizer) = &self.shared.synthesizer else {
            debug!("Speech unsupported, dropping utterance");
            return;
        };

        let _slot = self.shared.slot.lock();
        self.shared.cancel(synthesizer.as_ref());

        if text.trim().is_empty() {
            debug!("Empty utterance, nothing to start");
            return;
        }

        let utterance = Utterance::new(text, self.shared.config.read().clone());
        match synthesizer.speak(&utterance) {
            Ok(()) => {
                debug!(
                    text_len = text.len(),
                    volume = utterance.config.volume(),
                    "Utterance started"
                );
                *self.shared.last_error.lock() = None;
            },
            Err(e) => self.shared.record(e),
        }
    }

    fn stop(&self) {
        let Some(synthesizer) = &self.shared.synthesizer else {
            return;
        };

        let _slot = self.shared.slot.lock();
        self.shared.cancel(synthesizer.as_ref());
        debug!("Speech stopped");
    }

    /// The driver does not track enablement; `true` does nothing.
    fn toggle(&self, enabled: bool) {
        if !enabled {
            self.stop();
        }
    }

    fn set_options(&self, options: UtteranceOptions) {
        let mut config = self.shared.config.write();
        config.apply(options);
        debug!(
            volume = config.volume(),
            pitch = config.pitch,
            rate = config.rate,
            "Utterance options updated"
        );
    }

    fn options(&self) -> UtteranceConfig {
        self.shared.config.read().clone()
    }

    fn capability(&self) -> SpeechCapability {
        if self.shared.synthesizer.is_none() {
            return SpeechCapability::unsupported();
        }

        SpeechCapability {
            supported: true,
            last_error: self.shared.last_error.lock().clone(),
        }
    }
}
