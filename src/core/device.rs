//! Device capabilities injected into the overlay.
//!
//! The overlay never inspects the runtime environment itself. The shell
//! builds a [`DeviceProfile`] each frame (from the window size, touch input,
//! or the user's override) and passes it down, so every layout and hover
//! decision is a pure function of the profile.

use serde::{Deserialize, Serialize};

use crate::util::constants::MOBILE_BREAKPOINT_PX;

/// Broad layout class of the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFactor {
    Desktop,
    Mobile,
}

/// Which container hosts the review overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Side sheet anchored to the right edge.
    Sheet,
    /// Bottom drawer.
    Drawer,
}

/// Capabilities the overlay branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub form_factor: FormFactor,
    /// Primary input is touch: hover never happens, so hover-revealed
    /// controls start visible.
    pub touch_primary: bool,
}

/// User preference persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceOverride {
    /// Derive the profile from the window.
    #[default]
    Auto,
    Desktop,
    Mobile,
}

impl DeviceOverride {
    pub const ALL: [DeviceOverride; 3] = [
        DeviceOverride::Auto,
        DeviceOverride::Desktop,
        DeviceOverride::Mobile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeviceOverride::Auto => "Auto",
            DeviceOverride::Desktop => "Desktop",
            DeviceOverride::Mobile => "Mobile",
        }
    }
}

impl DeviceProfile {
    /// Mouse-driven desktop window.
    pub const DESKTOP: DeviceProfile = DeviceProfile {
        form_factor: FormFactor::Desktop,
        touch_primary: false,
    };

    /// Touch-driven phone-sized window.
    pub const MOBILE: DeviceProfile = DeviceProfile {
        form_factor: FormFactor::Mobile,
        touch_primary: true,
    };

    /// Build a profile from the observed window state and the user override.
    ///
    /// `Auto` treats windows narrower than [`MOBILE_BREAKPOINT_PX`] as mobile;
    /// touch input seen this session marks the profile touch-primary.
    pub fn resolve(preference: DeviceOverride, window_width: f32, touch_seen: bool) -> Self {
        match preference {
            DeviceOverride::Desktop => Self::DESKTOP,
            DeviceOverride::Mobile => Self::MOBILE,
            DeviceOverride::Auto => DeviceProfile {
                form_factor: if window_width < MOBILE_BREAKPOINT_PX {
                    FormFactor::Mobile
                } else {
                    FormFactor::Desktop
                },
                touch_primary: touch_seen,
            },
        }
    }

    pub fn is_desktop(self) -> bool {
        self.form_factor == FormFactor::Desktop
    }

    /// Sheet on desktop, drawer everywhere else.
    pub fn overlay_kind(self) -> OverlayKind {
        match self.form_factor {
            FormFactor::Desktop => OverlayKind::Sheet,
            FormFactor::Mobile => OverlayKind::Drawer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_narrow_window_is_mobile() {
        let p = DeviceProfile::resolve(DeviceOverride::Auto, 400.0, false);
        assert_eq!(p.form_factor, FormFactor::Mobile);
        assert!(!p.touch_primary);
        assert_eq!(p.overlay_kind(), OverlayKind::Drawer);
    }

    #[test]
    fn test_auto_wide_window_is_desktop() {
        let p = DeviceProfile::resolve(DeviceOverride::Auto, 1280.0, true);
        assert!(p.is_desktop());
        assert!(p.touch_primary);
        assert_eq!(p.overlay_kind(), OverlayKind::Sheet);
    }

    #[test]
    fn test_override_ignores_window() {
        assert_eq!(
            DeviceProfile::resolve(DeviceOverride::Mobile, 1920.0, false),
            DeviceProfile::MOBILE
        );
        assert_eq!(
            DeviceProfile::resolve(DeviceOverride::Desktop, 300.0, true),
            DeviceProfile::DESKTOP
        );
    }
}
