//! Guidance bundle - The authored spoken content for one module

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Spoken guidance for one application module
///
/// Immutable once built. All sequences keep their authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceBundle {
    module_name: String,
    welcome_message: String,
    navigation_guide: String,
    #[serde(default)]
    action_instructions: Vec<String>,
    #[serde(default)]
    tips: Vec<String>,
    #[serde(default)]
    shortcuts: Vec<String>,
    #[serde(default)]
    common_tasks: Vec<String>,
}

impl GuidanceBundle {
    /// Create a bundle with the required texts and empty lists
    #[must_use]
    pub fn new(
        module_name: impl Into<String>,
        welcome_message: impl Into<String>,
        navigation_guide: impl Into<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            welcome_message: welcome_message.into(),
            navigation_guide: navigation_guide.into(),
            action_instructions: Vec::new(),
            tips: Vec::new(),
            shortcuts: Vec::new(),
            common_tasks: Vec::new(),
        }
    }

    /// Set the ordered action instructions
    #[must_use]
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_instructions = actions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ordered tips
    #[must_use]
    pub fn with_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips = tips.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ordered keyboard shortcuts
    #[must_use]
    pub fn with_shortcuts<I, S>(mut self, shortcuts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shortcuts = shortcuts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the ordered common tasks
    #[must_use]
    pub fn with_common_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_tasks = tasks.into_iter().map(Into::into).collect();
        self
    }

    /// Display name of the module
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Greeting spoken when the module opens
    #[must_use]
    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    /// Summary of how the module is laid out
    #[must_use]
    pub fn navigation_guide(&self) -> &str {
        &self.navigation_guide
    }

    /// Step-by-step instructions
    #[must_use]
    pub fn action_instructions(&self) -> &[String] {
        &self.action_instructions
    }

    /// Usage tips
    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Keyboard shortcuts
    #[must_use]
    pub fn shortcuts(&self) -> &[String] {
        &self.shortcuts
    }

    /// Frequently performed tasks
    #[must_use]
    pub fn common_tasks(&self) -> &[String] {
        &self.common_tasks
    }

    /// Validate that the required texts are present
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuidance` if the module name, welcome
    /// message or navigation guide is blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("module_name", &self.module_name),
            ("welcome_message", &self.welcome_message),
            ("navigation_guide", &self.navigation_guide),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidGuidance(format!(
                    "{field} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> GuidanceBundle {
        GuidanceBundle::new("Payroll", "Welcome to payroll.", "Payslips are listed by month.")
            .with_actions(["Open a payslip.", "Run payroll."])
            .with_tips(["Check deductions first."])
            .with_shortcuts(["Press R to run payroll."])
            .with_common_tasks(["Download a payslip."])
    }

    #[test]
    fn builder_keeps_order() {
        let bundle = bundle();
        assert_eq!(bundle.module_name(), "Payroll");
        assert_eq!(
            bundle.action_instructions(),
            ["Open a payslip.", "Run payroll."]
        );
        assert_eq!(bundle.tips().len(), 1);
        assert_eq!(bundle.shortcuts()[0], "Press R to run payroll.");
        assert_eq!(bundle.common_tasks()[0], "Download a payslip.");
    }

    #[test]
    fn new_bundle_has_empty_lists() {
        let bundle = GuidanceBundle::new("A", "B", "C");
        assert!(bundle.action_instructions().is_empty());
        assert!(bundle.tips().is_empty());
        assert!(bundle.shortcuts().is_empty());
        assert!(bundle.common_tasks().is_empty());
    }

    #[test]
    fn validate_accepts_complete_bundle() {
        assert!(bundle().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_welcome() {
        let err = GuidanceBundle::new("Payroll", "  ", "Nav")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid guidance content: welcome_message must not be empty"
        );
    }

    #[test]
    fn deserializes_with_optional_lists() {
        let bundle: GuidanceBundle = serde_json::from_str(
            r#"{
                "module_name": "Reports",
                "welcome_message": "Welcome to reports.",
                "navigation_guide": "Reports are grouped by category.",
                "tips": ["Filter before exporting."]
            }"#,
        )
        .unwrap();

        assert_eq!(bundle.module_name(), "Reports");
        assert!(bundle.action_instructions().is_empty());
        assert_eq!(bundle.tips(), ["Filter before exporting."]);
    }
}
