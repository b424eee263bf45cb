//! Configuration for voice guidance

use domain::{DEFAULT_VOLUME, UtteranceConfig};
use serde::{Deserialize, Serialize};

/// Initial voice settings for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Whether voice guidance starts enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Initial volume (clamped to 0.0 - 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Initial pitch multiplier
    #[serde(default = "default_pitch")]
    pub pitch: f32,

    /// Initial rate multiplier
    #[serde(default = "default_rate")]
    pub rate: f32,

    /// Locale fragment voices are preferred in (e.g. "en")
    #[serde(default = "default_preferred_language")]
    pub preferred_language: String,
}

const fn default_enabled() -> bool {
    true
}

const fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

const fn default_pitch() -> f32 {
    1.0
}

const fn default_rate() -> f32 {
    1.0
}

fn default_preferred_language() -> String {
    "en".to_string()
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            volume: default_volume(),
            pitch: default_pitch(),
            rate: default_rate(),
            preferred_language: default_preferred_language(),
        }
    }
}

impl VoiceSettings {
    /// Utterance settings a new session starts with
    #[must_use]
    pub fn utterance_config(&self) -> UtteranceConfig {
        UtteranceConfig::new(self.pitch, self.rate, self.volume)
    }

    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns an error if pitch or rate is not a finite number or the
    /// preferred language is empty.
    pub fn validate(&self) -> Result<(), String> {
        if !self.pitch.is_finite() {
            return Err(format!("Pitch must be a finite number, got {}", self.pitch));
        }

        if !self.rate.is_finite() {
            return Err(format!("Rate must be a finite number, got {}", self.rate));
        }

        if self.preferred_language.trim().is_empty() {
            return Err("Preferred language must not be empty".to_string());
        }

        Ok(())
    }
}
