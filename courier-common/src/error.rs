//! Error taxonomy for relay outcomes.
//!
//! The relay pipeline reports the failure of every attempt as a
//! [`RelayError`]. Keeping the taxonomy a closed enumeration lets the status
//! classifier match exhaustively, so adding a condition without deciding how
//! it is reported is a compile error rather than a silent fallthrough.

use thiserror::Error;

/// Failure conditions produced while translating and forwarding one event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The parsed message content had a shape the converter does not know.
    #[error("unexpected parsed content type {0}")]
    UnexpectedContentType(String),

    /// The message type is not one the bridge can relay.
    #[error("unknown message type")]
    UnknownMessageType,

    /// Relaying notice-type messages is turned off by configuration.
    #[error("relaying notice messages is disabled")]
    NoticeRelayDisabled,

    /// The attached media kind cannot be represented on the remote network.
    #[error("unsupported media type {0}")]
    UnsupportedMedia(String),

    /// The message sat in the portal queue past its handling deadline and
    /// was never picked up.
    #[error("message timed out before handling was started")]
    StaleBeforeHandling,

    /// Handling started but was cancelled when the processing deadline
    /// elapsed.
    #[error("processing deadline exceeded")]
    DeadlineExceeded,

    /// Handling is still running; the attempt is slow but not dead.
    #[error("relaying the message is taking longer than usual")]
    TakingLong,

    /// The event a reply, edit or redaction points at does not exist on the
    /// remote side.
    #[error("target event not found")]
    TargetNotFound,

    /// The target is a synthetic event with no remote counterpart.
    #[error("target is a fake event")]
    TargetIsFake,

    /// No bookkeeping row exists for the reaction being removed.
    #[error("reaction database entry not found")]
    ReactionEntryNotFound,

    /// The message a reaction points at is not known to the bridge.
    #[error("reaction target message not found")]
    ReactionTargetNotFound,

    /// The reaction being removed belongs to a different user.
    #[error("target reaction was sent by someone else")]
    ReactionSentBySomeoneElse,

    /// The redaction targets the other party's message in a direct chat.
    #[error("target message was sent by the other user in a DM")]
    DmSentByOtherUser,

    /// The user has no authenticated session on the remote network.
    #[error("user is not logged in to the remote network")]
    NotLoggedIn,

    /// The event carries a relation type the bridge does not handle.
    #[error("unexpected relation type")]
    UnexpectedRelation,

    /// Fetching media from the source surface failed.
    #[error("failed to download media: {0}")]
    MediaDownloadFailed(String),

    /// Pushing media to the remote network failed.
    #[error("failed to upload media to the remote network: {0}")]
    MediaUploadFailed(String),

    /// An emoji in a reaction has no remote equivalent.
    #[error("unknown emoji {0}")]
    UnknownEmoji(String),

    /// The transport layer failed while talking to the remote network.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Anything the pipeline could not attribute to a known condition.
    #[error("{0}")]
    Other(String),
}

/// Cancellation of an in-flight attempt arrives as an error value through
/// the same reporting path, not as a separate control channel.
impl From<tokio::time::error::Elapsed> for RelayError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::DeadlineExceeded
    }
}

/// Errors surfaced by the transport collaborator.
///
/// The tracking core never propagates these; they are logged and the
/// side channel that failed is simply skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The chat server rejected or failed the request.
    #[error("request to the chat server failed: {0}")]
    Request(String),

    /// The request did not complete in time.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The acting user is not joined to the target room.
    #[error("the acting user is not in room {0}")]
    NotInRoom(String),
}
