//! Guidance content overrides loaded from TOML
//!
//! ```toml
//! [modules.payroll]
//! module_name = "Payroll"
//! welcome_message = "Welcome to payroll."
//! navigation_guide = "Payslips are listed below."
//! action_instructions = ["Select an employee.", "Run payroll."]
//! tips = ["Close attendance first."]
//! ```

use std::{collections::BTreeMap, path::Path};

use application::GuidanceCatalog;
use domain::{GuidanceBundle, GuidanceModule};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::GuidanceSettings;
use crate::error::InfrastructureError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuidanceFile {
    #[serde(default)]
    modules: BTreeMap<String, GuidanceBundle>,
}

/// Parse override bundles from TOML text
///
/// # Errors
///
/// Returns `InfrastructureError::TomlParse` for malformed TOML and
/// `InfrastructureError::Content` for unknown module keys.
pub fn parse_guidance_overrides(
    content: &str,
) -> Result<Vec<(GuidanceModule, GuidanceBundle)>, InfrastructureError> {
    let file: GuidanceFile = toml::from_str(content)?;

    file.modules
        .into_iter()
        .map(|(key, bundle)| {
            let module = key.parse::<GuidanceModule>()?;
            Ok::<_, InfrastructureError>((module, bundle))
        })
        .collect()
}

/// Read override bundles from a TOML file
///
/// # Errors
///
/// Returns `InfrastructureError::Io` if the file cannot be read, otherwise
/// the errors of [`parse_guidance_overrides`].
pub fn load_guidance_overrides(
    path: &Path,
) -> Result<Vec<(GuidanceModule, GuidanceBundle)>, InfrastructureError> {
    let content = std::fs::read_to_string(path).map_err(|source| InfrastructureError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let overrides = parse_guidance_overrides(&content)?;
    debug!(path = %path.display(), count = overrides.len(), "Loaded guidance overrides");
    Ok(overrides)
}

/// Build the guidance catalog for the configured content
///
/// # Errors
///
/// Returns an error if the override file cannot be loaded or one of its
/// bundles is rejected.
pub fn build_catalog(settings: &GuidanceSettings) -> Result<GuidanceCatalog, InfrastructureError> {
    let Some(path) = &settings.content_file else {
        return Ok(GuidanceCatalog::builtin());
    };

    let overrides = load_guidance_overrides(path)?;
    let catalog = GuidanceCatalog::with_overrides(overrides)?;
    info!(path = %path.display(), "Guidance content overrides applied");
    Ok(catalog)
}
