//! Application services - Voice guidance use cases

mod contextual_help;
mod guidance_catalog;
mod guidance_content;
mod responsive_context;
mod speech_output_driver;
mod voice_guidance_service;

pub use contextual_help::{
    GENERIC_HELP, GENERIC_HELP_TITLE, GENERIC_WELCOME, compose_contextual_help,
};
pub use guidance_catalog::{ACTIONS_LABEL, GuidanceCatalog, TIPS_LABEL};
pub use responsive_context::ResponsiveContextResolver;
pub use speech_output_driver::SpeechOutputDriver;
pub use voice_guidance_service::{VoiceGuidanceService, VoiceState};
