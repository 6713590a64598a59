//! Machine-readable status event publishing.

use courier_common::{EventId, RelayError, StatusContent};
use tracing::warn;

use crate::{classify, reporter::OutcomeReporter};

impl OutcomeReporter {
    /// Emit a delivery-status event correlated to `original`.
    ///
    /// `last_attempt` is collapsed away when it equals `original`, meaning
    /// no retry has happened yet. In encrypted rooms the administrative
    /// actor sends the event; elsewhere the room actor does, because the
    /// administrative account is absent from unencrypted direct chats.
    pub async fn send_status_event(
        &self,
        original: &EventId,
        last_attempt: &EventId,
        error: Option<&RelayError>,
    ) {
        if !self.config.message_status_events {
            return;
        }

        let mut content = StatusContent::success(self.network.clone(), original.clone());
        content.last_retry = (last_attempt != original).then(|| last_attempt.clone());
        if let Some(error) = error {
            let classification = classify(error);
            content.status = classification.status;
            content.reason = Some(classification.reason);
            content.message = classification.message;
            content.error = Some(error.to_string());
        }
        content.fill_legacy_booleans();

        let sender = if self.encrypted {
            &self.admin
        } else {
            &self.messenger
        };
        if let Err(send_error) = sender.send_status(&self.room, content).await {
            warn!(
                room = %self.room,
                event_id = %original,
                error = %send_error,
                "Failed to send message status event"
            );
        }
    }
}
