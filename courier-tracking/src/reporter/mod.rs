//! Outcome publishers for one bridged room.
//!
//! An [`OutcomeReporter`] fans a delivery outcome out to the independent
//! reporting channels:
//! - a user-visible error notice
//! - a machine-readable status event
//! - a best-effort delivery receipt
//!
//! All three are informational; failures to publish are logged and
//! swallowed, never propagated to the relay path.

mod notice;
mod receipt;
mod status;

use std::sync::Arc;

use courier_common::{CheckpointSink, Messenger, RoomId, TrackingConfig};

/// Publishes delivery outcomes for a single bridged room.
///
/// Holds the two sending identities: the room's own `messenger` actor, which
/// posts user-visible content, and the administrative `admin` actor, which
/// sends receipts and takes over status events in encrypted rooms (it is not
/// joined to unencrypted direct chats).
#[derive(Clone)]
pub struct OutcomeReporter {
    pub(crate) room: RoomId,
    pub(crate) encrypted: bool,
    /// Key identifying this bridge on the status-event channel.
    pub(crate) network: String,
    pub(crate) messenger: Arc<dyn Messenger>,
    pub(crate) admin: Arc<dyn Messenger>,
    pub(crate) checkpoints: Arc<dyn CheckpointSink>,
    pub(crate) config: TrackingConfig,
}

impl OutcomeReporter {
    #[must_use]
    pub fn new(
        room: RoomId,
        encrypted: bool,
        network: String,
        messenger: Arc<dyn Messenger>,
        admin: Arc<dyn Messenger>,
        checkpoints: Arc<dyn CheckpointSink>,
        config: TrackingConfig,
    ) -> Self {
        Self {
            room,
            encrypted,
            network,
            messenger,
            admin,
            checkpoints,
            config,
        }
    }

    /// The room this reporter publishes into.
    #[must_use]
    pub const fn room(&self) -> &RoomId {
        &self.room
    }
}
