//! Error types for command-channel delivery.
//!
//! These describe a call that never reached the controller. Failures of the
//! restriction itself are not errors; see [`crate::AdapterResult`].

use thiserror::Error;

/// A method call that could not be decoded into a [`crate::Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No command with this method name.
    #[error("method not implemented: {method}")]
    NotImplemented {
        /// Method name the caller used
        method: String,
    },

    /// The method exists but its argument has the wrong shape.
    #[error("invalid argument for {method}: expected {expected}")]
    InvalidArgument {
        /// Method name the caller used
        method: String,
        /// Description of the expected argument
        expected: &'static str,
    },
}

impl CommandError {
    /// Method name of the rejected call.
    pub fn method(&self) -> &str {
        match self {
            Self::NotImplemented { method } | Self::InvalidArgument { method, .. } => method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_method() {
        let err = CommandError::NotImplemented { method: "reboot".to_string() };
        assert_eq!(err.to_string(), "method not implemented: reboot");
        assert_eq!(err.method(), "reboot");
    }
}
