//! Utterance configuration
//!
//! The live settings every spoken utterance is produced with. Volume is
//! always kept in `[0, 1]`; pitch and rate are passed through unclamped and
//! left to the platform.

use serde::{Deserialize, Serialize};

use super::voice::Voice;

/// Default utterance volume
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Clamp a volume into `[0, 1]`
///
/// Returns `None` for NaN so callers can keep their current value.
#[must_use]
pub fn clamp_volume(volume: f32) -> Option<f32> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}

/// Settings applied to every utterance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtteranceConfig {
    /// Selected platform voice, `None` uses the platform default
    pub voice: Option<Voice>,
    /// Pitch multiplier (platform-defined range)
    pub pitch: f32,
    /// Rate multiplier (platform-defined range)
    pub rate: f32,
    /// Volume in `[0, 1]`
    volume: f32,
}

impl Default for UtteranceConfig {
    fn default() -> Self {
        Self {
            voice: None,
            pitch: 1.0,
            rate: 1.0,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl UtteranceConfig {
    /// Create a config without a voice; the volume is clamped
    #[must_use]
    pub fn new(pitch: f32, rate: f32, volume: f32) -> Self {
        let mut config = Self {
            pitch,
            rate,
            ..Self::default()
        };
        config.set_volume(volume);
        config
    }

    /// Current volume
    #[must_use]
    pub const fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the volume, clamped into `[0, 1]`; NaN is ignored
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(volume) = clamp_volume(volume) {
            self.volume = volume;
        }
    }

    /// Merge a partial update, leaving unset fields untouched
    pub fn apply(&mut self, options: UtteranceOptions) {
        if let Some(voice) = options.voice {
            self.voice = Some(voice);
        }
        if let Some(pitch) = options.pitch {
            self.pitch = pitch;
        }
        if let Some(rate) = options.rate {
            self.rate = rate;
        }
        if let Some(volume) = options.volume {
            self.set_volume(volume);
        }
    }
}

/// Partial update for [`UtteranceConfig`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtteranceOptions {
    /// New voice
    pub voice: Option<Voice>,
    /// New pitch
    pub pitch: Option<f32>,
    /// New rate
    pub rate: Option<f32>,
    /// New volume (clamped on apply)
    pub volume: Option<f32>,
}

impl UtteranceOptions {
    /// Options that only change the volume
    #[must_use]
    pub const fn volume(volume: f32) -> Self {
        Self {
            voice: None,
            pitch: None,
            rate: None,
            volume: Some(volume),
        }
    }

    /// Set the pitch
    #[must_use]
    pub const fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Set the rate
    #[must_use]
    pub const fn with_rate(mut self, rate: f32) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Set the voice
    #[must_use]
    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = Some(voice);
        self
    }
}

/// One unit of text handed to the speech platform
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// Settings snapshot taken when the utterance was started
    pub config: UtteranceConfig,
}

impl Utterance {
    /// Create an utterance from text and a settings snapshot
    #[must_use]
    pub fn new(text: impl Into<String>, config: UtteranceConfig) -> Self {
        Self {
            text: text.into(),
            config,
        }
    }
}
