//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod espeak_synthesizer;
mod log_synthesizer;

pub use espeak_synthesizer::{EspeakSynthesizer, espeak_args, parse_voice_list};
pub use log_synthesizer::LogSynthesizer;
