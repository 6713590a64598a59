//! Mapping from relay errors to externally-visible status codes.
//!
//! Classification is a pure function of the error value; it is recomputed on
//! every report and carries no identity. The `certain` flag distinguishes
//! failures known to be final from ones that might resolve on their own, and
//! `notify_user` suppresses notices for conditions the user cannot act on
//! while still recording them on the machine-readable channel.

use courier_common::{MessageStatus, RelayError, StatusReason};

/// How one failed (or slow) attempt is presented externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Coarse reason for the status-event channel.
    pub reason: StatusReason,
    /// Status code for the status-event channel.
    pub status: MessageStatus,
    /// Whether the outcome is known to be final.
    pub certain: bool,
    /// Whether a user-visible notice should be published.
    pub notify_user: bool,
    /// Extra human-readable explanation for the status event, when the
    /// error's own text is not suitable on its own.
    pub message: Option<String>,
}

/// Classify a relay error into its externally-visible status tuple.
///
/// Matching is exhaustive over the closed taxonomy; unclassified conditions
/// (the last arm) are treated as retriable and uncertain so transient faults
/// are surfaced without being declared permanent.
#[must_use]
pub fn classify(error: &RelayError) -> Classification {
    match error {
        RelayError::UnexpectedContentType(_) | RelayError::UnknownMessageType => Classification {
            reason: StatusReason::Unsupported,
            status: MessageStatus::Fail,
            certain: true,
            notify_user: true,
            message: None,
        },
        RelayError::NoticeRelayDisabled => Classification {
            reason: StatusReason::Unsupported,
            status: MessageStatus::Fail,
            certain: true,
            notify_user: false,
            message: None,
        },
        RelayError::UnsupportedMedia(_) => Classification {
            reason: StatusReason::Unsupported,
            status: MessageStatus::Fail,
            certain: true,
            notify_user: true,
            message: Some(error.to_string()),
        },
        RelayError::StaleBeforeHandling => Classification {
            reason: StatusReason::TooOld,
            status: MessageStatus::Retriable,
            certain: true,
            notify_user: true,
            message: Some(
                "the message was too old when it reached the bridge, so it was not handled"
                    .to_string(),
            ),
        },
        RelayError::DeadlineExceeded => Classification {
            reason: StatusReason::TooOld,
            status: MessageStatus::Retriable,
            certain: false,
            notify_user: true,
            message: Some("handling the message took too long and was cancelled".to_string()),
        },
        RelayError::TakingLong => Classification {
            reason: StatusReason::TooOld,
            status: MessageStatus::Pending,
            certain: false,
            notify_user: true,
            message: Some(error.to_string()),
        },
        RelayError::TargetNotFound
        | RelayError::TargetIsFake
        | RelayError::ReactionEntryNotFound
        | RelayError::ReactionTargetNotFound
        | RelayError::ReactionSentBySomeoneElse
        | RelayError::DmSentByOtherUser => Classification {
            reason: StatusReason::GenericError,
            status: MessageStatus::Fail,
            certain: true,
            notify_user: false,
            message: None,
        },
        RelayError::NotLoggedIn
        | RelayError::UnexpectedRelation
        | RelayError::MediaDownloadFailed(_)
        | RelayError::MediaUploadFailed(_)
        | RelayError::UnknownEmoji(_)
        | RelayError::Transport(_)
        | RelayError::Other(_) => Classification {
            reason: StatusReason::GenericError,
            status: MessageStatus::Retriable,
            certain: false,
            notify_user: true,
            message: None,
        },
    }
}
