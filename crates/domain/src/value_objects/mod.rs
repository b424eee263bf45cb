//! Value Objects - Immutable, identity-less domain primitives

mod device_class;
mod guidance_module;
mod utterance;
mod voice;

pub use device_class::{Breakpoints, DeviceClass};
pub use guidance_module::GuidanceModule;
pub use utterance::{DEFAULT_VOLUME, Utterance, UtteranceConfig, UtteranceOptions, clamp_volume};
pub use voice::{Voice, VoiceGender, select_voice};
