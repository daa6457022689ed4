//! Channel error types.

use lockdown_core::CommandError;
use thiserror::Error;

/// Errors on the tokio command channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The dispatch loop is no longer running.
    #[error("kiosk runtime has shut down")]
    Closed,

    /// The dispatch loop dropped the request without replying.
    #[error("kiosk runtime dropped the reply")]
    ReplyDropped,

    /// The driver was asked to reply with no request outstanding.
    #[error("no pending request to reply to")]
    NoPendingRequest,

    /// The reply did not match the kind of request.
    #[error("unexpected response kind for {0}")]
    UnexpectedResponse(&'static str),

    /// The method call could not be delivered to the controller.
    #[error("call rejected: {0}")]
    Rejected(#[from] CommandError),
}
