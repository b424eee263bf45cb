//! Guidance module - Identifies the application module guidance is given for

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Application module that spoken guidance can be looked up for
///
/// Derived from the active route. Routes without a dedicated module resolve
/// to [`GuidanceModule::General`], which never carries a guidance bundle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GuidanceModule {
    /// Landing dashboard with key HR metrics
    Dashboard,
    /// Organization structure and departments
    Organization,
    /// Employee directory
    Employees,
    /// Job openings and candidates
    Recruitment,
    /// Attendance and leave
    Attendance,
    /// Salaries and payslips
    Payroll,
    /// Performance reviews and goals
    Performance,
    /// Training courses
    Learning,
    /// Analytics and exports
    Reports,
    /// Support tickets
    Helpdesk,
    /// Fallback for every route without dedicated guidance
    #[default]
    General,
}

/// Route to module table, matched exactly
const ROUTES: [(&str, GuidanceModule); 10] = [
    ("/", GuidanceModule::Dashboard),
    ("/organization", GuidanceModule::Organization),
    ("/employees", GuidanceModule::Employees),
    ("/recruitment", GuidanceModule::Recruitment),
    ("/attendance", GuidanceModule::Attendance),
    ("/payroll", GuidanceModule::Payroll),
    ("/performance", GuidanceModule::Performance),
    ("/learning", GuidanceModule::Learning),
    ("/reports", GuidanceModule::Reports),
    ("/helpdesk", GuidanceModule::Helpdesk),
];

impl GuidanceModule {
    /// Resolve the module for a route path
    ///
    /// Only exact matches count; every other path is `General`.
    #[must_use]
    pub fn from_route(path: &str) -> Self {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map_or(Self::General, |(_, module)| *module)
    }

    /// Parse a module key, returning `None` for unknown keys
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|module| module.key() == key)
    }

    /// Stable lookup key used in configuration and logs
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Organization => "organization",
            Self::Employees => "employees",
            Self::Recruitment => "recruitment",
            Self::Attendance => "attendance",
            Self::Payroll => "payroll",
            Self::Performance => "performance",
            Self::Learning => "learning",
            Self::Reports => "reports",
            Self::Helpdesk => "helpdesk",
            Self::General => "general",
        }
    }

    /// Route that leads to this module, if any
    #[must_use]
    pub fn route(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, module)| module == self)
            .map(|(route, _)| *route)
    }

    /// Whether this is the catch-all module
    #[must_use]
    pub const fn is_general(&self) -> bool {
        matches!(self, Self::General)
    }

    /// All modules, in navigation order with `General` last
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::Dashboard,
            Self::Organization,
            Self::Employees,
            Self::Recruitment,
            Self::Attendance,
            Self::Payroll,
            Self::Performance,
            Self::Learning,
            Self::Reports,
            Self::Helpdesk,
            Self::General,
        ]
    }
}

impl fmt::Display for GuidanceModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for GuidanceModule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| DomainError::UnknownModule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_route_is_dashboard() {
        assert_eq!(GuidanceModule::from_route("/"), GuidanceModule::Dashboard);
    }

    #[test]
    fn known_routes_resolve() {
        assert_eq!(
            GuidanceModule::from_route("/attendance"),
            GuidanceModule::Attendance
        );
        assert_eq!(
            GuidanceModule::from_route("/recruitment"),
            GuidanceModule::Recruitment
        );
        assert_eq!(
            GuidanceModule::from_route("/helpdesk"),
            GuidanceModule::Helpdesk
        );
    }

    #[test]
    fn unmapped_routes_fall_back_to_general() {
        assert_eq!(
            GuidanceModule::from_route("/calendar"),
            GuidanceModule::General
        );
        assert_eq!(GuidanceModule::from_route(""), GuidanceModule::General);
        assert_eq!(
            GuidanceModule::from_route("/employees/"),
            GuidanceModule::General
        );
    }

    #[test]
    fn every_routed_module_round_trips_through_its_route() {
        for module in GuidanceModule::all() {
            if let Some(route) = module.route() {
                assert_eq!(GuidanceModule::from_route(route), module);
            } else {
                assert!(module.is_general());
            }
        }
    }

    #[test]
    fn from_key_is_partial() {
        assert_eq!(
            GuidanceModule::from_key("payroll"),
            Some(GuidanceModule::Payroll)
        );
        assert_eq!(
            GuidanceModule::from_key("general"),
            Some(GuidanceModule::General)
        );
        assert_eq!(GuidanceModule::from_key("nonexistent-module"), None);
        assert_eq!(GuidanceModule::from_key("Payroll"), None);
    }

    #[test]
    fn from_str_reports_unknown_key() {
        let err = "calendar".parse::<GuidanceModule>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown guidance module: calendar");
    }

    #[test]
    fn display_uses_key() {
        assert_eq!(GuidanceModule::Learning.to_string(), "learning");
    }

    #[test]
    fn default_is_general() {
        assert_eq!(GuidanceModule::default(), GuidanceModule::General);
    }
}
