//! User-visible error notice publishing.

use courier_common::{EventId, MessageEvent, NoticeContent, RelayError};
use tracing::warn;

use crate::reporter::OutcomeReporter;

/// Warning sign prefixed to every notice body.
const WARNING_SIGN: char = '\u{26a0}';

impl OutcomeReporter {
    /// Publish or update the user-facing warning for a failed relay.
    ///
    /// Returns the id of the notice event, or `None` when notices are
    /// disabled or the transport rejected the send. Passing an `existing` id
    /// turns the call into an in-place edit, which keeps a single live
    /// notice per logical message; otherwise the notice is sent as a reply
    /// to the failed event.
    pub async fn send_error_notice(
        &self,
        event: &MessageEvent,
        error: &RelayError,
        certain: bool,
        existing: Option<EventId>,
    ) -> Option<EventId> {
        if !self.config.message_error_notices {
            return None;
        }

        let body = if matches!(error, RelayError::TakingLong) {
            format!("{WARNING_SIGN} Bridging your message is taking longer than usual")
        } else {
            let qualifier = if certain { "was not" } else { "may not have been" };
            format!("{WARNING_SIGN} Your message {qualifier} bridged: {error}")
        };

        let mut content = NoticeContent::new(body);
        if let Some(existing) = existing {
            content.set_edit(existing);
        } else {
            content.set_reply(event.id.clone());
        }

        match self.messenger.send_notice(&self.room, content).await {
            Ok(notice_id) => Some(notice_id),
            Err(send_error) => {
                warn!(
                    room = %self.room,
                    event_id = %event.id,
                    error = %send_error,
                    "Failed to send relay error notice"
                );
                None
            }
        }
    }
}
