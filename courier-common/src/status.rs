//! Delivery status vocabulary shared by the status-event and checkpoint
//! channels.

use serde::{Deserialize, Serialize};

/// Outcome of one delivery attempt as reported on the status-event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Success,
    /// The attempt is still in flight; a later report will settle it.
    Pending,
    /// Failed, but a retry may succeed.
    Retriable,
    /// Failed permanently.
    Fail,
}

impl MessageStatus {
    /// Whether the sender may usefully retry.
    #[must_use]
    pub const fn can_retry(self) -> bool {
        matches!(self, Self::Pending | Self::Retriable)
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Coarse reason attached to failed status events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusReason {
    /// Nothing more specific applies.
    GenericError,
    /// The event's content shape or media kind cannot be bridged.
    Unsupported,
    /// The event aged out before or during handling.
    TooOld,
}

/// The pipeline stage a checkpoint refers to.
///
/// The tracking core only ever reports [`CheckpointStep::Remote`]; the
/// earlier steps belong to the receive pipeline feeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckpointStep {
    /// Event accepted by the bridge and queued for its portal.
    Bridge,
    /// Event payload decrypted.
    Decrypted,
    /// Hand-off to the remote network.
    Remote,
}

/// Attempt outcome as recorded on the external checkpoint channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckpointStatus {
    Success,
    WillRetry,
    PermFailure,
    Unsupported,
    Timeout,
}

impl CheckpointStatus {
    /// Map a status-event classification onto the checkpoint vocabulary.
    #[must_use]
    pub const fn from_classification(reason: StatusReason, status: MessageStatus) -> Self {
        match status {
            MessageStatus::Success => Self::Success,
            MessageStatus::Pending => Self::WillRetry,
            MessageStatus::Retriable | MessageStatus::Fail => match reason {
                StatusReason::Unsupported => Self::Unsupported,
                StatusReason::TooOld => Self::Timeout,
                StatusReason::GenericError => {
                    if status.can_retry() {
                        Self::WillRetry
                    } else {
                        Self::PermFailure
                    }
                }
            },
        }
    }
}
