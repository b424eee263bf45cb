//! Domain entities - Authored guidance content and help payloads

mod contextual_help;
mod guidance_bundle;

pub use contextual_help::ContextualHelp;
pub use guidance_bundle::GuidanceBundle;
