//! Wire content bodies sent through the transport collaborator.

use serde::{Deserialize, Serialize};

use crate::{
    id::EventId,
    status::{MessageStatus, StatusReason},
};

/// Relation types used when correlating events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Loose correlation to another event.
    Reference,
    /// In-place replacement of another event.
    Replace,
}

/// Correlation of one event to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub rel_type: RelationType,
    pub event_id: EventId,
}

impl Relation {
    /// A reference relation pointing at `event_id`.
    #[must_use]
    pub const fn reference(event_id: EventId) -> Self {
        Self {
            rel_type: RelationType::Reference,
            event_id,
        }
    }
}

/// A user-visible notice message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeContent {
    pub body: String,

    /// In-place edit of an earlier notice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<Relation>,

    /// Send as a reply to this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EventId>,
}

impl NoticeContent {
    #[must_use]
    pub const fn new(body: String) -> Self {
        Self {
            body,
            edit: None,
            reply_to: None,
        }
    }

    /// Turn this notice into an in-place edit of `event_id`.
    pub fn set_edit(&mut self, event_id: EventId) {
        self.edit = Some(Relation {
            rel_type: RelationType::Replace,
            event_id,
        });
    }

    /// Send this notice as a reply to `event_id`.
    pub fn set_reply(&mut self, event_id: EventId) {
        self.reply_to = Some(event_id);
    }
}

/// Machine-readable delivery status, correlated to the original send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusContent {
    /// Key identifying this bridge on the status-event channel.
    pub network: String,

    /// Reference relation pointing at the original send.
    pub relates_to: Relation,

    /// The most recent retry attempt, omitted when no retry has happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_retry: Option<EventId>,

    pub status: MessageStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<StatusReason>,

    /// Raw error text of the failed attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable explanation from the classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Legacy flag: true iff `status` is `Success`.
    pub success: bool,

    /// Legacy flag: whether the sender may retry. Omitted on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_retry: Option<bool>,
}

impl StatusContent {
    /// A success status correlated to `original`.
    #[must_use]
    pub fn success(network: String, original: EventId) -> Self {
        Self {
            network,
            relates_to: Relation::reference(original),
            last_retry: None,
            status: MessageStatus::Success,
            reason: None,
            error: None,
            message: None,
            success: false,
            can_retry: None,
        }
    }

    /// Derive the legacy boolean fields consumed by older clients from the
    /// structured status.
    pub fn fill_legacy_booleans(&mut self) {
        self.success = self.status.is_success();
        self.can_retry = if self.status.is_success() {
            None
        } else {
            Some(self.status.can_retry())
        };
    }
}
