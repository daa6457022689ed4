//! Controller configuration.

/// Window-level protections applied once when the controller is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowProtection {
    /// Block screenshots and screen recording of the app window.
    pub secure_surface: bool,
    /// Keep the display awake while the app is in front.
    pub keep_screen_on: bool,
}

impl WindowProtection {
    /// No protections.
    pub const NONE: Self = Self { secure_surface: false, keep_screen_on: false };
}

impl Default for WindowProtection {
    fn default() -> Self {
        Self { secure_surface: true, keep_screen_on: true }
    }
}

/// Kiosk controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KioskConfig {
    /// Protections applied at construction.
    pub window_protection: WindowProtection,
    /// Request foreground immediately when the exclusive lock is unsupported
    /// or denied during activation.
    pub foreground_fallback: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self { window_protection: WindowProtection::default(), foreground_fallback: true }
    }
}
