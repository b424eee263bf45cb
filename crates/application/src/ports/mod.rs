//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod speech_output;
mod speech_synthesizer;

#[cfg(test)]
pub use speech_output::MockSpeechOutput;
pub use speech_output::{SpeechCapability, SpeechFailure, SpeechOutput};
#[cfg(test)]
pub use speech_synthesizer::MockSpeechSynthesizer;
pub use speech_synthesizer::{SpeechSynthesizer, VoicesChangedListener};
