//! Speech backend selection

use std::sync::Arc;

use application::SpeechSynthesizer;
use infrastructure::{AppConfig, EspeakSynthesizer, LogSynthesizer};
use tracing::{debug, warn};

/// The synthesizer the CLI speaks through
pub enum SpeechBackend {
    Espeak(Arc<EspeakSynthesizer>),
    DryRun(Arc<LogSynthesizer>),
}

impl std::fmt::Debug for SpeechBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Espeak(synth) => f.debug_tuple("Espeak").field(synth).finish(),
            Self::DryRun(synth) => f.debug_tuple("DryRun").field(synth).finish(),
        }
    }
}

impl SpeechBackend {
    pub fn new(config: &AppConfig, dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun(Arc::new(LogSynthesizer::new()))
        } else {
            Self::Espeak(Arc::new(EspeakSynthesizer::new(&config.espeak)))
        }
    }

    pub fn synthesizer(&self) -> Arc<dyn SpeechSynthesizer> {
        match self {
            Self::Espeak(synth) => Arc::clone(synth) as Arc<dyn SpeechSynthesizer>,
            Self::DryRun(synth) => Arc::clone(synth) as Arc<dyn SpeechSynthesizer>,
        }
    }

    /// Re-read the platform voice list so listeners reselect their voice
    pub fn refresh_voices(&self) {
        let Self::Espeak(synth) = self else {
            return;
        };
        if !synth.is_supported() {
            return;
        }

        match synth.refresh_voices() {
            Ok(count) => debug!(count, "Voice list refreshed"),
            Err(e) => warn!(error = %e, "Could not refresh voices"),
        }
    }

    /// Let the last utterance play out, or print what would have been said
    pub fn finish(&self) -> anyhow::Result<()> {
        match self {
            Self::Espeak(synth) => synth.wait()?,
            Self::DryRun(synth) => {
                for utterance in synth.spoken() {
                    println!(
                        "🔈 [volume {:.2}] {}",
                        utterance.config.volume(),
                        utterance.text
                    );
                }
            },
        }
        Ok(())
    }
}
