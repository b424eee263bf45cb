//! Voice guidance service - The shared entry point for spoken guidance
//!
//! Every screen and control talks to one instance of this service. It owns
//! the enabled/disabled switch and forwards to the speech output only while
//! enabled.
//!
//! # States
//!
//! - **Enabled**: `speak` reaches the speech output
//! - **Disabled**: `speak` is dropped; entering this state stops speech at once
//!
//! Calls made while disabled are not queued and never catch up.

use std::{fmt, sync::Arc};

use domain::{
    ContextualHelp, DeviceClass, GuidanceModule, UtteranceOptions, clamp_volume,
};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use super::contextual_help::{GENERIC_HELP, GENERIC_WELCOME, compose_contextual_help};
use super::guidance_catalog::GuidanceCatalog;
use crate::ports::{SpeechCapability, SpeechOutput};

/// Whether voice guidance is speaking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    /// Speech reaches the output
    Enabled,
    /// Speech is dropped
    Disabled,
}

impl VoiceState {
    const fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    /// The opposite state
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }

    /// Check if speech is enabled
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for VoiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Coordinator shared by all consumers of spoken guidance
pub struct VoiceGuidanceService {
    output: Arc<dyn SpeechOutput>,
    catalog: Arc<GuidanceCatalog>,
    state: Mutex<VoiceState>,
}

impl fmt::Debug for VoiceGuidanceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceGuidanceService")
            .field("state", &*self.state.lock())
            .field("modules", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl VoiceGuidanceService {
    /// Create a service that starts enabled
    pub fn new(output: Arc<dyn SpeechOutput>, catalog: Arc<GuidanceCatalog>) -> Self {
        Self::with_initial_state(output, catalog, true)
    }

    /// Create a service with an explicit initial state
    pub fn with_initial_state(
        output: Arc<dyn SpeechOutput>,
        catalog: Arc<GuidanceCatalog>,
        enabled: bool,
    ) -> Self {
        Self {
            output,
            catalog,
            state: Mutex::new(VoiceState::from_enabled(enabled)),
        }
    }

    /// Speak `text` verbatim if guidance is enabled
    ///
    /// The state lock is held across the check and the forward, so a
    /// concurrent disable either happens before (and the text is dropped) or
    /// after (and its stop cuts the text off).
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn speak(&self, text: &str) {
        let state = self.state.lock();
        if !state.is_enabled() {
            debug!("Voice guidance disabled, dropping utterance");
            return;
        }
        self.output.speak(text);
    }

    /// Flip between enabled and disabled, returning the new enabled flag
    ///
    /// Disabling stops any speech in progress immediately.
    pub fn toggle_voice(&self) -> bool {
        let mut state = self.state.lock();
        *state = state.toggled();
        self.output.toggle(state.is_enabled());

        info!(state = %*state, "Voice guidance toggled");
        state.is_enabled()
    }

    /// Stop the current utterance, whatever the state
    pub fn stop_speaking(&self) {
        self.output.stop();
    }

    /// Set the output volume, clamped into `[0, 1]`
    pub fn set_volume(&self, volume: f32) {
        match clamp_volume(volume) {
            Some(volume) => self.output.set_options(UtteranceOptions::volume(volume)),
            None => debug!("Ignoring non-numeric volume"),
        }
    }

    /// Current output volume
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.output.options().volume()
    }

    /// Check if guidance is enabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.lock().is_enabled()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> VoiceState {
        *self.state.lock()
    }

    /// Whether speech works on this platform and what last failed
    #[must_use]
    pub fn capability(&self) -> SpeechCapability {
        self.output.capability()
    }

    /// Guidance catalog backing this service
    #[must_use]
    pub fn catalog(&self) -> &GuidanceCatalog {
        &self.catalog
    }

    /// Help dialog payload for a module on a device
    #[must_use]
    pub fn contextual_help(&self, module: GuidanceModule, device: DeviceClass) -> ContextualHelp {
        compose_contextual_help(self.catalog.bundle(module), device)
    }

    /// Help dialog payload for a route on a device
    #[must_use]
    pub fn contextual_help_for_route(&self, route: &str, device: DeviceClass) -> ContextualHelp {
        self.contextual_help(GuidanceModule::from_route(route), device)
    }

    /// Help dialog payload for a module key; unknown keys get generic help
    #[must_use]
    pub fn contextual_help_for_key(&self, key: &str, device: DeviceClass) -> ContextualHelp {
        self.contextual_help(GuidanceModule::from_key(key).unwrap_or_default(), device)
    }

    /// Speak the module welcome followed by a device-specific navigation hint
    #[instrument(skip(self))]
    pub fn announce_module(&self, module: GuidanceModule, device: DeviceClass) {
        let welcome = self
            .catalog
            .bundle(module)
            .map_or(GENERIC_WELCOME, |bundle| bundle.welcome_message());

        self.speak(&format!("{welcome} {}", device.navigation_hint()));
    }

    /// Speak the full walkthrough of a module
    ///
    /// Modules without a bundle get the generic explanation instead.
    #[instrument(skip(self))]
    pub fn start_training(&self, module: GuidanceModule) {
        let guidance = self.catalog.compose_detailed_guidance(module);
        let text = if guidance.is_empty() {
            GENERIC_HELP.join(" ")
        } else {
            guidance
        };

        self.speak(&text);
    }
}
