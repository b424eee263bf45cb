//! Device class value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Coarse viewport-derived device category
///
/// Used to adapt spoken phrasing, not layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Narrow viewport, touch first
    Mobile,
    /// Medium viewport
    Tablet,
    /// Wide viewport with pointer and keyboard
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }

    /// Spoken hint on how to navigate between modules on this device
    #[must_use]
    pub const fn navigation_hint(&self) -> &'static str {
        match self {
            Self::Mobile => {
                "Tap the menu button at the top of the screen to open the module list."
            },
            Self::Tablet => "Use the collapsible sidebar on the left to switch between modules.",
            Self::Desktop => {
                "Use the sidebar on the left or the keyboard shortcuts to switch between modules."
            },
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Viewport width breakpoints in CSS pixels
///
/// Widths below `tablet` are mobile, widths below `desktop` are tablet,
/// everything else is desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// First width treated as a tablet
    #[serde(default = "default_tablet")]
    pub tablet: u32,
    /// First width treated as a desktop
    #[serde(default = "default_desktop")]
    pub desktop: u32,
}

const fn default_tablet() -> u32 {
    768
}

const fn default_desktop() -> u32 {
    1024
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: default_tablet(),
            desktop: default_desktop(),
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width
    #[must_use]
    pub const fn classify(&self, width: u32) -> DeviceClass {
        if width < self.tablet {
            DeviceClass::Mobile
        } else if width < self.desktop {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Validate the breakpoints
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the tablet breakpoint is not
    /// below the desktop one.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tablet >= self.desktop {
            return Err(DomainError::ValidationError(format!(
                "Tablet breakpoint ({}) must be below desktop breakpoint ({})",
                self.tablet, self.desktop
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.tablet, 768);
        assert_eq!(bp.desktop, 1024);
        assert!(bp.validate().is_ok());
    }

    #[test]
    fn classify_boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(0), DeviceClass::Mobile);
        assert_eq!(bp.classify(767), DeviceClass::Mobile);
        assert_eq!(bp.classify(768), DeviceClass::Tablet);
        assert_eq!(bp.classify(1023), DeviceClass::Tablet);
        assert_eq!(bp.classify(1024), DeviceClass::Desktop);
        assert_eq!(bp.classify(3840), DeviceClass::Desktop);
    }

    #[test]
    fn inverted_breakpoints_are_invalid() {
        let bp = Breakpoints {
            tablet: 1024,
            desktop: 768,
        };
        let err = bp.validate().unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationError(ref msg) if msg.contains("must be below")
        ));

        let equal = Breakpoints {
            tablet: 800,
            desktop: 800,
        };
        assert!(equal.validate().is_err());
    }

    #[test]
    fn breakpoints_deserialize_with_defaults() {
        let bp: Breakpoints = serde_json::from_str(r#"{"tablet": 600}"#).unwrap();
        assert_eq!(bp.tablet, 600);
        assert_eq!(bp.desktop, 1024);
    }

    #[test]
    fn labels_and_display() {
        assert_eq!(DeviceClass::Mobile.to_string(), "Mobile");
        assert_eq!(DeviceClass::Tablet.label(), "Tablet");
        assert_eq!(DeviceClass::default(), DeviceClass::Desktop);
    }

    #[test]
    fn navigation_hints_differ_per_device() {
        assert!(DeviceClass::Mobile.navigation_hint().contains("Tap"));
        assert_ne!(
            DeviceClass::Tablet.navigation_hint(),
            DeviceClass::Desktop.navigation_hint()
        );
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(
            tablet in 1u32..2000u32,
            gap in 1u32..2000u32,
            a in 0u32..5000u32,
            b in 0u32..5000u32
        ) {
            let bp = Breakpoints { tablet, desktop: tablet + gap };
            let rank = |class: DeviceClass| match class {
                DeviceClass::Mobile => 0,
                DeviceClass::Tablet => 1,
                DeviceClass::Desktop => 2,
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(bp.classify(lo)) <= rank(bp.classify(hi)));
        }
    }
}
