//! Traits the delivery-tracking core consumes from the transport layer.
//!
//! The bridge framework owns the actual chat-protocol client; this crate
//! only specifies the narrow surface the tracking core calls. All methods
//! are best-effort from the core's point of view: a failure here is logged
//! by the caller and never escalated past it.

use async_trait::async_trait;

use crate::{
    content::{NoticeContent, StatusContent},
    error::{RelayError, TransportError},
    event::MessageEvent,
    id::{EventId, RoomId},
    status::{CheckpointStatus, CheckpointStep},
};

/// An actor able to send events into a room on the destination surface.
///
/// Two implementations matter to the tracking core: the room's own ghost
/// actor, which posts user-visible content, and the administrative bridge
/// account, which handles receipts and status events in encrypted rooms.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a user-visible notice; returns the id of the created event.
    async fn send_notice(
        &self,
        room: &RoomId,
        content: NoticeContent,
    ) -> Result<EventId, TransportError>;

    /// Emit a machine-readable delivery-status event.
    async fn send_status(
        &self,
        room: &RoomId,
        content: StatusContent,
    ) -> Result<(), TransportError>;

    /// Mark `event` as read on the destination surface.
    async fn mark_read(&self, room: &RoomId, event: &EventId) -> Result<(), TransportError>;

    /// Retract a previously sent event; returns the id of the redaction.
    async fn redact(
        &self,
        room: &RoomId,
        event: &EventId,
        reason: &str,
    ) -> Result<EventId, TransportError>;
}

/// External progress-tracking sink recording the outcome of each delivery
/// stage for observability.
///
/// Sinks own their delivery entirely; the methods are fire-and-forget so
/// checkpointing can never fail or slow the relay path.
pub trait CheckpointSink: Send + Sync {
    /// Record the outcome of one failed attempt at `step`.
    fn checkpoint(
        &self,
        event: &MessageEvent,
        step: CheckpointStep,
        error: &RelayError,
        status: CheckpointStatus,
        retry_num: u32,
    );

    /// Record a successful attempt at `step`.
    fn success_checkpoint(&self, event: &MessageEvent, step: CheckpointStep, retry_num: u32);
}
