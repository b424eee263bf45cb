//! Platform voices and voice selection

use serde::{Deserialize, Serialize};

/// A voice offered by the speech platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Identifier the platform uses to select the voice
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Locale tag, e.g. "en-US"
    pub lang: String,
    /// Voice gender (if known)
    #[serde(default)]
    pub gender: Option<VoiceGender>,
    /// Whether the platform marks this voice as its default
    #[serde(default)]
    pub default: bool,
}

impl Voice {
    /// Create a new voice
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lang: lang.into(),
            gender: None,
            default: false,
        }
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Check whether the locale contains a language fragment
    #[must_use]
    pub fn matches_language(&self, language: &str) -> bool {
        self.lang.to_lowercase().contains(&language.to_lowercase())
    }

    /// Check whether the platform reports this voice as female
    ///
    /// Either the gender metadata or the voice name has to say so.
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Some(VoiceGender::Female) || self.name.to_lowercase().contains("female")
    }
}

/// Voice gender classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    /// Male voice
    Male,
    /// Female voice
    Female,
    /// Neutral/androgynous voice
    Neutral,
}

/// Pick the voice to speak with
///
/// Priority: a female voice in `language`, any voice in `language`, the
/// first voice offered, nothing when the list is empty.
#[must_use]
pub fn select_voice(voices: &[Voice], language: &str) -> Option<Voice> {
    voices
        .iter()
        .find(|voice| voice.matches_language(language) && voice.is_female())
        .or_else(|| voices.iter().find(|voice| voice.matches_language(language)))
        .or_else(|| voices.first())
        .cloned()
}
