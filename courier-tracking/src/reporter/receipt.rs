//! Best-effort delivery receipts.

use courier_common::EventId;
use tracing::debug;

use crate::reporter::OutcomeReporter;

impl OutcomeReporter {
    /// Mark `event` as read on the destination surface.
    ///
    /// Purely informational; failure is logged at low severity and
    /// swallowed.
    pub async fn send_delivery_receipt(&self, event: &EventId) {
        if !self.config.delivery_receipts {
            return;
        }
        if let Err(error) = self.admin.mark_read(&self.room, event).await {
            debug!(
                room = %self.room,
                event_id = %event,
                error = %error,
                "Failed to send delivery receipt"
            );
        }
    }
}
