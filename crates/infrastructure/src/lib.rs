//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and loads
//! configuration, guidance content overrides and logging.

pub mod adapters;
pub mod config;
pub mod error;
pub mod guidance_loader;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, EspeakConfig, GuidanceSettings, LoggingConfig};
pub use error::InfrastructureError;
pub use guidance_loader::{build_catalog, load_guidance_overrides, parse_guidance_overrides};
pub use telemetry::init_logging;
