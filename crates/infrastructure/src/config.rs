//! Application configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables such as `HR_GUIDANCE_VOICE__VOLUME=0.5`.

use std::path::{Path, PathBuf};

use application::VoiceSettings;
use domain::Breakpoints;
use serde::{Deserialize, Serialize};

use crate::error::InfrastructureError;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "hr-guidance";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "HR_GUIDANCE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial voice settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Viewport breakpoints for device classification
    #[serde(default)]
    pub responsive: Breakpoints,

    /// Guidance content configuration
    #[serde(default)]
    pub guidance: GuidanceSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// espeak-ng synthesizer configuration
    #[serde(default)]
    pub espeak: EspeakConfig,
}

/// Where guidance content comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidanceSettings {
    /// TOML file with `[modules.<key>]` tables replacing built-in bundles
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "info", "application=debug")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// espeak-ng configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EspeakConfig {
    /// Path or name of the espeak-ng executable
    #[serde(default = "default_espeak_executable")]
    pub executable: PathBuf,
}

fn default_espeak_executable() -> PathBuf {
    PathBuf::from("espeak-ng")
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            executable: default_espeak_executable(),
        }
    }
}

impl EspeakConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the executable is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.executable.as_os_str().is_empty() {
            return Err("espeak executable must not be empty".to_string());
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without `path`, `hr-guidance.toml` in the working directory is used
    /// if it exists. An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Config` if a source cannot be read and
    /// `InfrastructureError::Validation` if values are out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, InfrastructureError> {
        Self::load_with_environment(path, environment())
    }

    fn load_with_environment(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, InfrastructureError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .set_default("logging.level", default_log_level())?
            .set_default("espeak.executable", "espeak-ng")?
            .add_source(file)
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Validation` naming the first invalid value.
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        self.voice
            .validate()
            .and_then(|()| self.responsive.validate().map_err(|e| e.to_string()))
            .and_then(|()| self.espeak.validate())
            .map_err(InfrastructureError::Validation)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
