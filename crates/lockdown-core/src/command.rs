//! Command channel requests.
//!
//! The embedding application talks to the controller through named method
//! calls. [`MethodCall::decode`] turns one into a [`Command`] or explains why
//! it cannot.

use crate::CommandError;

/// Method name that toggles kiosk mode.
pub const SET_ACTIVE_METHOD: &str = "setKioskActive";

/// Older name for [`SET_ACTIVE_METHOD`], still sent by existing host apps.
pub const LEGACY_SET_ACTIVE_METHOD: &str = "setDetoxActive";

/// Decoded command for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate (`true`) or deactivate (`false`) kiosk mode.
    SetActive(bool),
}

/// Raw method call as delivered by the host channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    /// Method name.
    pub method: String,
    /// Boolean argument, if the caller supplied one.
    pub argument: Option<bool>,
}

impl MethodCall {
    /// Create a method call.
    pub fn new(method: impl Into<String>, argument: Option<bool>) -> Self {
        Self { method: method.into(), argument }
    }

    /// Call that sets kiosk mode on or off.
    pub fn set_active(active: bool) -> Self {
        Self::new(SET_ACTIVE_METHOD, Some(active))
    }

    /// Decode into a [`Command`].
    ///
    /// # Errors
    ///
    /// - `CommandError::NotImplemented` for an unknown method name
    /// - `CommandError::InvalidArgument` if the boolean argument is missing
    pub fn decode(&self) -> Result<Command, CommandError> {
        if self.method != SET_ACTIVE_METHOD && self.method != LEGACY_SET_ACTIVE_METHOD {
            return Err(CommandError::NotImplemented { method: self.method.clone() });
        }

        match self.argument {
            Some(active) => Ok(Command::SetActive(active)),
            None => Err(CommandError::InvalidArgument {
                method: self.method.clone(),
                expected: "boolean",
            }),
        }
    }
}
