//! Contextual help composition for the help dialog

use domain::{ContextualHelp, DeviceClass, GuidanceBundle};

/// Title used when a module has no bundle
pub const GENERIC_HELP_TITLE: &str = "Voice Guidance Help";

/// Greeting spoken for modules without a bundle
pub const GENERIC_WELCOME: &str = "Welcome to the HR management system.";

/// How voice guidance works, shown when a module has no bundle
pub const GENERIC_HELP: [&str; 8] = [
    "Voice guidance reads out instructions for the screen you are on.",
    "Use the microphone button to switch voice guidance on or off.",
    "Use the volume slider to make the voice louder or quieter.",
    "Use the stop button to silence the current announcement immediately.",
    "Training mode walks you through every action of the current module.",
    "Open this help dialog at any time to hear tips for the current screen.",
    "New announcements replace the one that is playing, they never queue up.",
    "Voice guidance runs entirely on this device and nothing is recorded.",
];

/// Build the help payload for a module on a device
///
/// With a bundle the content is welcome, navigation guide, then labelled
/// actions, tips, shortcuts and common tasks, followed by one line naming
/// the device class. Without a bundle it is exactly [`GENERIC_HELP`].
#[must_use]
pub fn compose_contextual_help(
    bundle: Option<&GuidanceBundle>,
    device: DeviceClass,
) -> ContextualHelp {
    let Some(bundle) = bundle else {
        return ContextualHelp::new(
            GENERIC_HELP_TITLE,
            GENERIC_HELP.iter().map(ToString::to_string).collect(),
        );
    };

    let sections: [(&str, &[String]); 4] = [
        ("Detailed actions:", bundle.action_instructions()),
        ("Tips:", bundle.tips()),
        ("Shortcuts:", bundle.shortcuts()),
        ("Common tasks:", bundle.common_tasks()),
    ];

    let mut content = vec![
        bundle.welcome_message().to_string(),
        bundle.navigation_guide().to_string(),
    ];
    for (label, lines) in sections {
        content.push(label.to_string());
        content.extend(lines.iter().cloned());
    }
    content.push(format!("Current device: {}", device.label()));

    ContextualHelp::new(format!("{} Guide", bundle.module_name()), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> GuidanceBundle {
        GuidanceBundle::new("Attendance", "Welcome.", "Nav.")
            .with_actions(["Act 1.", "Act 2."])
            .with_tips(["Tip 1."])
            .with_shortcuts(["Short 1."])
            .with_common_tasks(["Task 1."])
    }

    #[test]
    fn generic_help_has_eight_lines() {
        let help = compose_contextual_help(None, DeviceClass::Desktop);
        assert_eq!(help.title, GENERIC_HELP_TITLE);
        assert_eq!(help.content.len(), 8);
        assert_eq!(help.content, GENERIC_HELP);
    }

    #[test]
    fn generic_help_ignores_device() {
        assert_eq!(
            compose_contextual_help(None, DeviceClass::Mobile),
            compose_contextual_help(None, DeviceClass::Desktop)
        );
    }

    #[test]
    fn bundle_help_order() {
        let help = compose_contextual_help(Some(&bundle()), DeviceClass::Tablet);
        assert_eq!(help.title, "Attendance Guide");
        assert_eq!(
            help.content,
            [
                "Welcome.",
                "Nav.",
                "Detailed actions:",
                "Act 1.",
                "Act 2.",
                "Tips:",
                "Tip 1.",
                "Shortcuts:",
                "Short 1.",
                "Common tasks:",
                "Task 1.",
                "Current device: Tablet",
            ]
        );
    }

    #[test]
    fn device_line_is_trailing() {
        let help = compose_contextual_help(Some(&bundle()), DeviceClass::Mobile);
        assert_eq!(help.content.last().unwrap(), "Current device: Mobile");
        assert!(
            help.content[..help.content.len() - 1]
                .iter()
                .all(|line| !line.contains("Mobile"))
        );
    }
}
