//! espeak-ng speech synthesizer
//!
//! Speaks by spawning one `espeak-ng` process per utterance, feeding the
//! text on stdin. Cancelling kills that process, so the platform itself
//! never queues anything.
//!
//! # Argument mapping
//!
//! | Setting | espeak-ng flag | Mapping                         |
//! |---------|----------------|---------------------------------|
//! | volume  | `-a`           | `volume * 100`                  |
//! | pitch   | `-p`           | `pitch * 50`, clamped to 0..=99 |
//! | rate    | `-s`           | `rate * 175`, clamped to 80..=450 |
//! | voice   | `-v`           | voice id                        |

use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
};

use application::{SpeechError, SpeechSynthesizer, VoicesChangedListener};
use domain::{Utterance, UtteranceConfig, Voice, VoiceGender};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::config::EspeakConfig;

const BASE_PITCH: f32 = 50.0;
const BASE_RATE_WPM: f32 = 175.0;
const MIN_RATE_WPM: f32 = 80.0;
const MAX_RATE_WPM: f32 = 450.0;

/// Speech synthesizer backed by the `espeak-ng` command
pub struct EspeakSynthesizer {
    executable: PathBuf,
    supported: bool,
    child: Mutex<Option<Child>>,
    voices: RwLock<Vec<Voice>>,
    listeners: Mutex<Vec<VoicesChangedListener>>,
}

impl fmt::Debug for EspeakSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EspeakSynthesizer")
            .field("executable", &self.executable)
            .field("supported", &self.supported)
            .field("voices", &self.voices.read().len())
            .field("speaking", &self.child.lock().is_some())
            .finish_non_exhaustive()
    }
}

impl EspeakSynthesizer {
    /// Probe the configured executable and load its voice list
    pub fn new(config: &EspeakConfig) -> Self {
        let executable = config.executable.clone();
        let supported = probe(&executable);

        let voices = if supported {
            list_voices(&executable).unwrap_or_else(|e| {
                warn!(error = %e, "Could not read espeak-ng voices");
                Vec::new()
            })
        } else {
            warn!(executable = %executable.display(), "espeak-ng not available");
            Vec::new()
        };

        info!(
            executable = %executable.display(),
            supported,
            voices = voices.len(),
            "espeak-ng synthesizer initialized"
        );

        Self {
            executable,
            supported,
            child: Mutex::new(None),
            voices: RwLock::new(voices),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Re-read the voice list and notify voices-changed listeners
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::NotSupported` without espeak-ng, or
    /// `SpeechError::SynthesisFailed` if the list cannot be read.
    pub fn refresh_voices(&self) -> Result<usize, SpeechError> {
        if !self.supported {
            return Err(SpeechError::NotSupported(
                "espeak-ng is not installed".to_string(),
            ));
        }

        let voices = list_voices(&self.executable)?;
        let count = voices.len();
        *self.voices.write() = voices;

        for listener in self.listeners.lock().iter() {
            listener();
        }

        debug!(count, "espeak-ng voice list refreshed");
        Ok(count)
    }

    /// Block until the current utterance has finished playing
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::SynthesisFailed` if espeak-ng exited with an
    /// error.
    pub fn wait(&self) -> Result<(), SpeechError> {
        let Some(mut child) = self.child.lock().take() else {
            return Ok(());
        };

        let status = child
            .wait()
            .map_err(|e| SpeechError::SynthesisFailed(format!("Failed to wait for espeak-ng: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::SynthesisFailed(format!(
                "espeak-ng exited with status {status}"
            )))
        }
    }

    fn stop_child(child: &mut Child) -> Result<(), SpeechError> {
        let running = child
            .try_wait()
            .map_err(|e| SpeechError::CancelFailed(e.to_string()))?
            .is_none();

        if running {
            child
                .kill()
                .map_err(|e| SpeechError::CancelFailed(format!("Failed to kill espeak-ng: {e}")))?;
        }

        child
            .wait()
            .map_err(|e| SpeechError::CancelFailed(format!("Failed to reap espeak-ng: {e}")))?;
        Ok(())
    }
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn voices(&self) -> Vec<Voice> {
        self.voices.read().clone()
    }

    #[instrument(skip(self, utterance), fields(text_len = utterance.text.len()))]
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let mut slot = self.child.lock();
        if let Some(mut previous) = slot.take() {
            Self::stop_child(&mut previous)?;
        }

        let mut cmd = Command::new(&self.executable);
        cmd.args(espeak_args(&utterance.config))
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!("Running espeak-ng: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpeechError::NotSupported(format!(
                    "espeak-ng not found at '{}'",
                    self.executable.display()
                ))
            } else {
                SpeechError::SynthesisFailed(format!("Failed to run espeak-ng: {e}"))
            }
        })?;

        // Dropping stdin closes it so espeak-ng sees the end of the text
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(utterance.text.as_bytes()));

        if let Err(e) = written {
            // An unreaped child would outlive every later cancel
            if let Err(stop) = Self::stop_child(&mut child) {
                warn!(error = %stop, "Could not stop espeak-ng after a failed write");
            }
            return Err(SpeechError::SynthesisFailed(format!(
                "Failed to write to espeak-ng stdin: {e}"
            )));
        }

        *slot = Some(child);
        Ok(())
    }

    fn cancel(&self) -> Result<(), SpeechError> {
        let Some(mut child) = self.child.lock().take() else {
            return Ok(());
        };

        Self::stop_child(&mut child)?;
        debug!("espeak-ng utterance cancelled");
        Ok(())
    }

    fn on_voices_changed(&self, listener: VoicesChangedListener) {
        self.listeners.lock().push(listener);
    }
}

impl Drop for EspeakSynthesizer {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.get_mut().take() {
            let _ = Self::stop_child(&mut child);
        }
    }
}

/// Command line flags for an utterance configuration
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn espeak_args(config: &UtteranceConfig) -> Vec<String> {
    let amplitude = (config.volume() * 100.0).round() as u32;
    let pitch = (config.pitch * BASE_PITCH).round().clamp(0.0, 99.0) as u32;
    let rate = (config.rate * BASE_RATE_WPM)
        .round()
        .clamp(MIN_RATE_WPM, MAX_RATE_WPM) as u32;

    let mut args = vec![
        "-a".to_string(),
        amplitude.to_string(),
        "-p".to_string(),
        pitch.to_string(),
        "-s".to_string(),
        rate.to_string(),
    ];

    if let Some(voice) = &config.voice {
        args.push("-v".to_string());
        args.push(voice.id.clone());
    }

    args
}

/// Parse the table printed by `espeak-ng --voices`
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
/// ```
#[must_use]
pub fn parse_voice_list(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let _priority = columns.next()?;
            let language = columns.next()?;
            let age_gender = columns.next()?;
            let name = columns.next()?;

            let voice = Voice::new(language, name.replace('_', " "), language);
            Some(match parse_gender(age_gender) {
                Some(gender) => voice.with_gender(gender),
                None => voice,
            })
        })
        .collect()
}

fn parse_gender(age_gender: &str) -> Option<VoiceGender> {
    match age_gender.rsplit('/').next()? {
        "M" => Some(VoiceGender::Male),
        "F" => Some(VoiceGender::Female),
        "N" => Some(VoiceGender::Neutral),
        _ => None,
    }
}

fn probe(executable: &Path) -> bool {
    Command::new(executable)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn list_voices(executable: &Path) -> Result<Vec<Voice>, SpeechError> {
    let output = Command::new(executable)
        .arg("--voices")
        .stderr(Stdio::null())
        .output()
        .map_err(|e| SpeechError::SynthesisFailed(format!("Failed to list voices: {e}")))?;

    if !output.status.success() {
        return Err(SpeechError::SynthesisFailed(format!(
            "espeak-ng --voices exited with status {}",
            output.status
        )));
    }

    Ok(parse_voice_list(&String::from_utf8_lossy(&output.stdout)))
}
