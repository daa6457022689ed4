//! Platform-agnostic input events.
//!
//! The host translates its native key codes into [`KeyClass`] before handing
//! them to the controller. Only the classes listed in [`RESTRICTED_CLASSES`]
//! are ever blocked, and the classes in [`EXEMPT_CLASSES`] are never blocked.

/// Classes that are consumed while the controller is active.
pub const RESTRICTED_CLASSES: [KeyClass; 7] = [
    KeyClass::Back,
    KeyClass::Home,
    KeyClass::AppSwitch,
    KeyClass::Menu,
    KeyClass::Power,
    KeyClass::VolumeUp,
    KeyClass::VolumeDown,
];

/// Classes that always pass through, whatever the activation state.
///
/// Reserved for call handling. Must stay disjoint from
/// [`RESTRICTED_CLASSES`].
pub const EXEMPT_CLASSES: [KeyClass; 2] = [KeyClass::IncomingCall, KeyClass::EndCall];

/// Input category of a key event.
///
/// Classification is the host's job. A native code that means back, home or
/// any other restricted key must arrive as its named class; passed through
/// raw as [`KeyClass::Other`] it is never blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// Back navigation.
    Back,
    /// Home / launcher.
    Home,
    /// Recent apps / task switcher.
    AppSwitch,
    /// Menu key.
    Menu,
    /// Power button.
    Power,
    /// Volume up.
    VolumeUp,
    /// Volume down.
    VolumeDown,
    /// Answer an incoming call.
    IncomingCall,
    /// Hang up.
    EndCall,
    /// A platform key code with no named class. Never restricted, even if
    /// the code is the native value of a restricted key.
    Other(u16),
}

impl KeyClass {
    /// Whether this class is blocked while active.
    pub fn is_restricted(self) -> bool {
        RESTRICTED_CLASSES.contains(&self)
    }

    /// Whether this class is reserved for call handling.
    pub fn is_exempt(self) -> bool {
        EXEMPT_CLASSES.contains(&self)
    }
}

/// Phase of a physical key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    /// Key pressed.
    Down,
    /// Key released.
    Up,
}

/// A single key event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    /// What the key does.
    pub class: KeyClass,
    /// Press or release.
    pub phase: KeyPhase,
}

impl InputEvent {
    /// Key press of `class`.
    pub fn down(class: KeyClass) -> Self {
        Self { class, phase: KeyPhase::Down }
    }

    /// Key release of `class`.
    pub fn up(class: KeyClass) -> Self {
        Self { class, phase: KeyPhase::Up }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exempt_and_restricted_are_disjoint() {
        for class in EXEMPT_CLASSES {
            assert!(!class.is_restricted(), "{class:?} is both exempt and restricted");
        }
        for class in RESTRICTED_CLASSES {
            assert!(!class.is_exempt(), "{class:?} is both restricted and exempt");
        }
    }

    #[test]
    fn other_keys_are_neither() {
        let key = KeyClass::Other(24);
        assert!(!key.is_restricted());
        assert!(!key.is_exempt());
    }
}
