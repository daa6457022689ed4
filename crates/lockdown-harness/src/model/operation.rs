//! Operations for model-based testing.
//!
//! Operations represent everything the host can do to the controller, plus
//! platform-side changes the controller has to tolerate. They are generated
//! by proptest or the fuzzer and applied to both the model and the real
//! controller.

use arbitrary::Arbitrary;
use lockdown_core::{Decision, InputEvent, KeyClass, KeyPhase, LifecycleSignal};

use crate::Capability;

/// Key choice with a small space for unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum KeyChoice {
    /// Back navigation.
    Back,
    /// Home.
    Home,
    /// Task switcher.
    AppSwitch,
    /// Menu.
    Menu,
    /// Power.
    Power,
    /// Volume up.
    VolumeUp,
    /// Volume down.
    VolumeDown,
    /// Answer call.
    IncomingCall,
    /// Hang up.
    EndCall,
    /// Unknown platform key.
    Other(u8),
}

impl From<KeyChoice> for KeyClass {
    fn from(choice: KeyChoice) -> Self {
        match choice {
            KeyChoice::Back => Self::Back,
            KeyChoice::Home => Self::Home,
            KeyChoice::AppSwitch => Self::AppSwitch,
            KeyChoice::Menu => Self::Menu,
            KeyChoice::Power => Self::Power,
            KeyChoice::VolumeUp => Self::VolumeUp,
            KeyChoice::VolumeDown => Self::VolumeDown,
            KeyChoice::IncomingCall => Self::IncomingCall,
            KeyChoice::EndCall => Self::EndCall,
            KeyChoice::Other(code) => Self::Other(u16::from(code)),
        }
    }
}

/// Operations that can be applied to the system.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Caller toggles kiosk mode.
    SetActive(bool),

    /// Host delivers a key event.
    Key {
        /// Which key.
        key: KeyChoice,
        /// Release instead of press.
        release: bool,
    },

    /// Host reports the app is about to lose the foreground.
    Lifecycle {
        /// User-initiated leave instead of pause.
        user_leaving: bool,
    },

    /// Platform drops the exclusive lock on its own.
    RevokeLock,

    /// Platform changes how it answers lock requests.
    SetCapability(Capability),
}

impl Operation {
    /// Input event for a `Key` operation.
    pub fn input_event(key: KeyChoice, release: bool) -> InputEvent {
        let phase = if release { KeyPhase::Up } else { KeyPhase::Down };
        InputEvent { class: key.into(), phase }
    }

    /// Lifecycle signal for a `Lifecycle` operation.
    pub fn lifecycle_signal(user_leaving: bool) -> LifecycleSignal {
        if user_leaving { LifecycleSignal::UserLeaving } else { LifecycleSignal::Paused }
    }
}

/// Observable outcome of a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Command acknowledged. The resulting state is `active`.
    Accepted {
        /// State after the command.
        active: bool,
    },
    /// Policy decision for a key event.
    Decision(Decision),
    /// Number of re-foreground requests issued for a lifecycle signal.
    ForegroundRequests(usize),
    /// Platform-side change with nothing to observe.
    Platform,
}
