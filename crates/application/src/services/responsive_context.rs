//! Responsive context - Device class derived from the viewport

use domain::{Breakpoints, DeviceClass};
use tokio::sync::watch;
use tracing::debug;

/// Answers "which device class is this?" from the latest viewport width
///
/// Feed every resize or orientation change into [`Self::update_viewport`];
/// subscribers only wake up when the class actually changes. The watch
/// channel holds the only copy of the class, so [`Self::resolve`] and
/// subscribers always agree.
#[derive(Debug)]
pub struct ResponsiveContextResolver {
    breakpoints: Breakpoints,
    device: watch::Sender<DeviceClass>,
}

impl ResponsiveContextResolver {
    /// Create a resolver for the viewport width seen on first mount
    #[must_use]
    pub fn new(breakpoints: Breakpoints, initial_width: u32) -> Self {
        let (device, _) = watch::channel(breakpoints.classify(initial_width));
        Self {
            breakpoints,
            device,
        }
    }

    /// Device class for the current viewport
    #[must_use]
    pub fn resolve(&self) -> DeviceClass {
        *self.device.borrow()
    }

    /// Record a new viewport width and return the resulting class
    pub fn update_viewport(&self, width: u32) -> DeviceClass {
        let class = self.breakpoints.classify(width);

        let changed = self.device.send_if_modified(|current| {
            if *current == class {
                false
            } else {
                *current = class;
                true
            }
        });

        if changed {
            debug!(width, device = %class, "Device class changed");
        }

        class
    }

    /// Receiver that observes device class changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DeviceClass> {
        self.device.subscribe()
    }

    /// Breakpoints in use
    #[must_use]
    pub const fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }
}
