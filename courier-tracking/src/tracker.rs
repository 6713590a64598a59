//! Per-message retry accounting and outcome fan-out.

use courier_common::{CheckpointStatus, CheckpointStep, EventId, MessageEvent, RelayError};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::{classify, reporter::OutcomeReporter, timings::MessageTimings};

#[derive(Debug, Default)]
struct TrackerState {
    retry_num: u32,
    notice: Option<EventId>,
    completed: bool,
    timings: MessageTimings,
}

/// Serialises outcome reporting for one logical message.
///
/// One instance is created when a message enters processing and dropped once
/// no further retries are expected. Attempts racing in from concurrent retry
/// flows are serialised by the internal lock, which is deliberately held
/// across all downstream publisher I/O so notices, status events and
/// checkpoints for one message can never interleave. Retry volume is human
/// messaging cadence, so the coarse critical section costs nothing in
/// practice.
///
/// Callers that do not track a message hold no tracker at all
/// (`Option<Arc<DeliveryTracker>>`); absence simply means no bookkeeping.
#[derive(Debug, Default)]
pub struct DeliveryTracker {
    state: Mutex<TrackerState>,
}

impl DeliveryTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports so far: the attempt counter threaded through
    /// checkpoints.
    pub async fn retry_num(&self) -> u32 {
        self.state.lock().await.retry_num
    }

    /// Id of the outstanding error notice, if one is live.
    pub async fn notice(&self) -> Option<EventId> {
        self.state.lock().await.notice.clone()
    }

    /// Record stage duration measurements for this message.
    pub async fn update_timings(&self, update: impl FnOnce(&mut MessageTimings)) {
        update(&mut self.state.lock().await.timings);
    }

    /// Report the outcome of one delivery attempt.
    ///
    /// The sole entry point of the subsystem: classifies the outcome, fans
    /// out to the checkpoint sink and the notice, status-event and receipt
    /// publishers, and updates the retry accounting. A report with
    /// `completed = false` arriving after a completing report is dropped
    /// without side effects, so a final outcome is never downgraded by a
    /// stray late attempt.
    pub async fn report(
        &self,
        reporter: &OutcomeReporter,
        event: &MessageEvent,
        outcome: Result<(), RelayError>,
        stage: &str,
        completed: bool,
    ) {
        let mut state = self.state.lock().await;
        if !completed && state.completed {
            debug!(event_id = %event.id, stage, "Dropping stray report after final outcome");
            return;
        }

        let original = event.original_id().clone();
        match &outcome {
            Err(relay_error) => {
                // "Ignoring" reports are expected noise, keep them quiet.
                if stage.eq_ignore_ascii_case("ignoring") {
                    debug!(
                        stage,
                        kind = event.kind.name(),
                        event = %event.describe(),
                        sender = %event.sender,
                        error = %relay_error,
                        "Skipping event"
                    );
                } else {
                    error!(
                        stage,
                        kind = event.kind.name(),
                        event = %event.describe(),
                        sender = %event.sender,
                        error = %relay_error,
                        "Failed to relay event"
                    );
                }

                let classification = classify(relay_error);
                let checkpoint_status = CheckpointStatus::from_classification(
                    classification.reason,
                    classification.status,
                );
                reporter.checkpoints.checkpoint(
                    event,
                    CheckpointStep::Remote,
                    relay_error,
                    checkpoint_status,
                    state.retry_num,
                );
                if classification.notify_user {
                    let existing = state.notice.clone();
                    let published = reporter
                        .send_error_notice(event, relay_error, classification.certain, existing)
                        .await;
                    if state.notice.is_none() {
                        state.notice = published;
                    }
                }
                reporter
                    .send_status_event(&original, &event.id, Some(relay_error))
                    .await;
            }
            Ok(()) => {
                debug!(kind = event.kind.name(), event = %event.describe(), "Relayed event");
                reporter
                    .checkpoints
                    .success_checkpoint(event, CheckpointStep::Remote, state.retry_num);
                reporter.send_delivery_receipt(&event.id).await;
                reporter.send_status_event(&original, &event.id, None).await;
                if let Some(notice) = state.notice.take() {
                    // The warning is stale now that an attempt went through.
                    if let Err(redact_error) = reporter
                        .messenger
                        .redact(&reporter.room, &notice, "error resolved")
                        .await
                    {
                        debug!(
                            room = %reporter.room,
                            notice_id = %notice,
                            error = %redact_error,
                            "Failed to redact resolved error notice"
                        );
                    }
                }
            }
        }

        state.retry_num += 1;
        state.completed = state.completed || completed;

        debug!(event_id = %event.id, timings = %state.timings, "Message timings");
    }
}
