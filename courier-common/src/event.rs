//! Source event model consumed by the delivery trackers.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, RoomId, UserId};

/// The kind of source event being relayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Message,
    Reaction,
    /// Removal of an earlier event; carries the id of the event it removes.
    Redaction { redacts: EventId },
}

impl EventKind {
    /// Short noun used in log lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Reaction => "reaction",
            Self::Redaction { .. } => "redaction",
        }
    }
}

/// One event received from the source surface, as seen by the
/// delivery-tracking core.
///
/// The core never looks at the event body; it only needs identity,
/// correlation and enough shape information to describe the event in logs
/// and checkpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub id: EventId,
    pub room: RoomId,
    pub sender: UserId,
    pub kind: EventKind,
    /// Set when this event is a client-initiated retry of an earlier send;
    /// points at the original event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_of: Option<EventId>,
}

impl MessageEvent {
    /// The event id downstream consumers should correlate status to: the
    /// original send when this event is a retry, otherwise this event.
    #[must_use]
    pub fn original_id(&self) -> &EventId {
        self.retry_of.as_ref().unwrap_or(&self.id)
    }

    /// Human-readable description for log lines.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            EventKind::Redaction { redacts } => format!("{} of {redacts}", self.id),
            EventKind::Message | EventKind::Reaction => self.id.to_string(),
        }
    }
}
