//! Guidance catalog - Lookup of authored guidance per module
//!
//! A flat module to bundle map built once at construction and read-only
//! afterwards. Lookups are partial on purpose: a module without a bundle
//! returns `None` so callers can tell "no specific guidance" apart from
//! generic guidance and pick their own fallback.

use std::collections::HashMap;

use domain::{DomainError, GuidanceBundle, GuidanceModule};
use tracing::{debug, info};

use super::guidance_content::builtin_bundles;

/// Label spoken before the action instructions
pub const ACTIONS_LABEL: &str = "Available actions:";
/// Label spoken before the tips
pub const TIPS_LABEL: &str = "Tips:";

/// Read-only guidance lookup
#[derive(Debug, Clone)]
pub struct GuidanceCatalog {
    bundles: HashMap<GuidanceModule, GuidanceBundle>,
}

impl Default for GuidanceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GuidanceCatalog {
    /// Catalog with the content shipped in the application
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            bundles: builtin_bundles().into_iter().collect(),
        }
    }

    /// Built-in catalog with some bundles replaced
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuidance` if an override targets the
    /// `general` module or a bundle misses required texts.
    pub fn with_overrides<I>(overrides: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (GuidanceModule, GuidanceBundle)>,
    {
        let mut catalog = Self::builtin();

        for (module, bundle) in overrides {
            if module.is_general() {
                return Err(DomainError::InvalidGuidance(
                    "the general module uses generic help and cannot carry a bundle".to_string(),
                ));
            }
            bundle.validate()?;

            debug!(module = %module, "Overriding built-in guidance");
            catalog.bundles.insert(module, bundle);
        }

        info!(modules = catalog.bundles.len(), "Guidance catalog ready");
        Ok(catalog)
    }

    /// Bundle for a module, `None` when the module has no specific guidance
    #[must_use]
    pub fn bundle(&self, module: GuidanceModule) -> Option<&GuidanceBundle> {
        self.bundles.get(&module)
    }

    /// Bundle for a module key; unknown keys have no bundle
    #[must_use]
    pub fn bundle_for_key(&self, key: &str) -> Option<&GuidanceBundle> {
        GuidanceModule::from_key(key).and_then(|module| self.bundle(module))
    }

    /// Compose the full spoken walkthrough of a module
    ///
    /// Welcome, navigation guide, the actions label, every action, the tips
    /// label and every tip, joined by single spaces. Empty when the module
    /// has no bundle.
    #[must_use]
    pub fn compose_detailed_guidance(&self, module: GuidanceModule) -> String {
        let Some(bundle) = self.bundle(module) else {
            return String::new();
        };

        let mut parts: Vec<&str> = vec![bundle.welcome_message(), bundle.navigation_guide()];
        parts.push(ACTIONS_LABEL);
        parts.extend(bundle.action_instructions().iter().map(String::as_str));
        parts.push(TIPS_LABEL);
        parts.extend(bundle.tips().iter().map(String::as_str));

        parts.join(" ")
    }

    /// [`Self::compose_detailed_guidance`] for a module key
    #[must_use]
    pub fn compose_detailed_guidance_for_key(&self, key: &str) -> String {
        GuidanceModule::from_key(key)
            .map(|module| self.compose_detailed_guidance(module))
            .unwrap_or_default()
    }

    /// Modules that have a bundle, in navigation order
    #[must_use]
    pub fn modules(&self) -> Vec<GuidanceModule> {
        let mut modules: Vec<GuidanceModule> = self.bundles.keys().copied().collect();
        modules.sort();
        modules
    }

    /// Number of bundles
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Check if the catalog has no bundles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_payroll() -> GuidanceBundle {
        GuidanceBundle::new("Payroll", "Hello payroll.", "Payslips below.")
            .with_actions(["Step one.", "Step two."])
            .with_tips(["Tip one."])
    }

    #[test]
    fn builtin_covers_routed_modules() {
        let catalog = GuidanceCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.bundle(GuidanceModule::Attendance).is_some());
        assert!(catalog.bundle(GuidanceModule::General).is_none());
    }

    #[test]
    fn unknown_key_has_no_bundle() {
        let catalog = GuidanceCatalog::builtin();
        assert!(catalog.bundle_for_key("nonexistent-module").is_none());
        assert!(catalog.bundle_for_key("general").is_none());
        assert_eq!(
            catalog.bundle_for_key("dashboard").unwrap().module_name(),
            "Dashboard"
        );
    }

    #[test]
    fn detailed_guidance_order() {
        let catalog =
            GuidanceCatalog::with_overrides([(GuidanceModule::Payroll, custom_payroll())])
                .unwrap();

        let text = catalog.compose_detailed_guidance(GuidanceModule::Payroll);
        assert_eq!(
            text,
            "Hello payroll. Payslips below. Available actions: Step one. Step two. Tips: Tip one."
        );
    }

    #[test]
    fn detailed_guidance_substrings_appear_in_order() {
        let catalog = GuidanceCatalog::builtin();
        let bundle = catalog.bundle(GuidanceModule::Recruitment).unwrap();
        let text = catalog.compose_detailed_guidance(GuidanceModule::Recruitment);

        let mut expected: Vec<&str> = vec![bundle.welcome_message(), bundle.navigation_guide()];
        expected.push(ACTIONS_LABEL);
        expected.extend(bundle.action_instructions().iter().map(String::as_str));
        expected.push(TIPS_LABEL);
        expected.extend(bundle.tips().iter().map(String::as_str));

        let mut cursor = 0;
        for part in expected {
            let found = text[cursor..].find(part).unwrap();
            cursor += found + part.len();
        }
        assert_eq!(cursor, text.len());
    }

    #[test]
    fn detailed_guidance_empty_for_unmapped() {
        let catalog = GuidanceCatalog::builtin();
        assert!(
            catalog
                .compose_detailed_guidance(GuidanceModule::General)
                .is_empty()
        );
        assert!(
            catalog
                .compose_detailed_guidance_for_key("nonexistent-module")
                .is_empty()
        );
    }

    #[test]
    fn overrides_replace_only_their_module() {
        let builtin = GuidanceCatalog::builtin();
        let catalog =
            GuidanceCatalog::with_overrides([(GuidanceModule::Payroll, custom_payroll())])
                .unwrap();

        assert_eq!(
            catalog
                .bundle(GuidanceModule::Payroll)
                .unwrap()
                .welcome_message(),
            "Hello payroll."
        );
        assert_eq!(
            catalog.bundle(GuidanceModule::Reports),
            builtin.bundle(GuidanceModule::Reports)
        );
    }

    #[test]
    fn general_override_is_rejected() {
        let err = GuidanceCatalog::with_overrides([(GuidanceModule::General, custom_payroll())])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidGuidance(_)));
    }

    #[test]
    fn incomplete_override_is_rejected() {
        let err = GuidanceCatalog::with_overrides([(
            GuidanceModule::Reports,
            GuidanceBundle::new("Reports", "", "Nav"),
        )])
        .unwrap_err();
        assert!(err.to_string().contains("welcome_message"));
    }

    #[test]
    fn modules_are_sorted_in_navigation_order() {
        let modules = GuidanceCatalog::builtin().modules();
        assert_eq!(modules.first(), Some(&GuidanceModule::Dashboard));
        assert_eq!(modules.last(), Some(&GuidanceModule::Helpdesk));
    }
}
