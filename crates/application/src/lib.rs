//! Application layer - Use cases and orchestration
//!
//! Contains the voice guidance coordinator, the speech output driver, the
//! guidance catalog and the port definitions that infrastructure adapters
//! implement.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;

pub use config::VoiceSettings;
pub use error::SpeechError;
pub use ports::*;
pub use services::*;
