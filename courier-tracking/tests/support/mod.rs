//! In-memory transport doubles for exercising the outcome publishers.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU32, Ordering},
};

use async_trait::async_trait;
use courier_common::{
    CheckpointSink, CheckpointStatus, CheckpointStep, EventId, EventKind, MessageEvent, Messenger,
    NoticeContent, RelayError, RoomId, StatusContent, TrackingConfig, TransportError, UserId,
};
use courier_tracking::OutcomeReporter;
use parking_lot::Mutex;

/// One call observed by the mock transport, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Notice {
        actor: &'static str,
        content: NoticeContent,
    },
    Status {
        actor: &'static str,
        content: StatusContent,
    },
    MarkRead {
        actor: &'static str,
        event: EventId,
    },
    Redact {
        actor: &'static str,
        event: EventId,
        reason: String,
    },
}

/// Shared transport state: the ordered call log, an id counter and a
/// failure switch.
#[derive(Default)]
pub struct Transcript {
    calls: Mutex<Vec<TransportCall>>,
    next_id: AtomicU32,
    fail_sends: AtomicBool,
}

impl Transcript {
    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().clone()
    }

    pub fn notices(&self) -> Vec<NoticeContent> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Notice { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<(&'static str, StatusContent)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Status { actor, content } => Some((actor, content)),
                _ => None,
            })
            .collect()
    }

    pub fn redactions(&self) -> Vec<(EventId, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Redact { event, reason, .. } => Some((event, reason)),
                _ => None,
            })
            .collect()
    }

    pub fn read_markers(&self) -> Vec<EventId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::MarkRead { event, .. } => Some(event),
                _ => None,
            })
            .collect()
    }

    /// Make every subsequent transport call fail.
    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: TransportCall) -> Result<(), TransportError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TransportError::Request("mock transport failure".to_string()));
        }
        self.calls.lock().push(call);
        Ok(())
    }

    fn fresh_id(&self, prefix: &str) -> EventId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        EventId::from(format!("${prefix}-{n}"))
    }
}

/// A [`Messenger`] that records every call into the shared [`Transcript`].
pub struct MockMessenger {
    actor: &'static str,
    transcript: Arc<Transcript>,
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn send_notice(
        &self,
        _room: &RoomId,
        content: NoticeContent,
    ) -> Result<EventId, TransportError> {
        self.transcript.record(TransportCall::Notice {
            actor: self.actor,
            content,
        })?;
        Ok(self.transcript.fresh_id("notice"))
    }

    async fn send_status(
        &self,
        _room: &RoomId,
        content: StatusContent,
    ) -> Result<(), TransportError> {
        self.transcript.record(TransportCall::Status {
            actor: self.actor,
            content,
        })
    }

    async fn mark_read(&self, _room: &RoomId, event: &EventId) -> Result<(), TransportError> {
        self.transcript.record(TransportCall::MarkRead {
            actor: self.actor,
            event: event.clone(),
        })
    }

    async fn redact(
        &self,
        _room: &RoomId,
        event: &EventId,
        reason: &str,
    ) -> Result<EventId, TransportError> {
        self.transcript.record(TransportCall::Redact {
            actor: self.actor,
            event: event.clone(),
            reason: reason.to_string(),
        })?;
        Ok(self.transcript.fresh_id("redaction"))
    }
}

/// One checkpoint observed by the mock sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointCall {
    pub event: EventId,
    pub step: CheckpointStep,
    pub status: CheckpointStatus,
    pub error: Option<String>,
    pub retry_num: u32,
}

#[derive(Default)]
pub struct MockCheckpoints {
    calls: Mutex<Vec<CheckpointCall>>,
}

impl MockCheckpoints {
    pub fn calls(&self) -> Vec<CheckpointCall> {
        self.calls.lock().clone()
    }
}

impl CheckpointSink for MockCheckpoints {
    fn checkpoint(
        &self,
        event: &MessageEvent,
        step: CheckpointStep,
        error: &RelayError,
        status: CheckpointStatus,
        retry_num: u32,
    ) {
        self.calls.lock().push(CheckpointCall {
            event: event.id.clone(),
            step,
            status,
            error: Some(error.to_string()),
            retry_num,
        });
    }

    fn success_checkpoint(&self, event: &MessageEvent, step: CheckpointStep, retry_num: u32) {
        self.calls.lock().push(CheckpointCall {
            event: event.id.clone(),
            step,
            status: CheckpointStatus::Success,
            error: None,
            retry_num,
        });
    }
}

/// A reporter wired to in-memory doubles, plus handles to inspect them.
pub struct Harness {
    pub transcript: Arc<Transcript>,
    pub checkpoints: Arc<MockCheckpoints>,
    pub reporter: OutcomeReporter,
}

impl Harness {
    pub fn new(config: TrackingConfig, encrypted: bool) -> Self {
        let transcript = Arc::new(Transcript::default());
        let checkpoints = Arc::new(MockCheckpoints::default());
        let messenger = Arc::new(MockMessenger {
            actor: "ghost",
            transcript: Arc::clone(&transcript),
        });
        let admin = Arc::new(MockMessenger {
            actor: "admin",
            transcript: Arc::clone(&transcript),
        });
        let reporter = OutcomeReporter::new(
            RoomId::from("!portal:example.org"),
            encrypted,
            "courier/remote".to_string(),
            messenger,
            admin,
            Arc::clone(&checkpoints) as Arc<dyn CheckpointSink>,
            config,
        );
        Self {
            transcript,
            checkpoints,
            reporter,
        }
    }
}

/// All three reporting channels switched on.
pub fn all_channels() -> TrackingConfig {
    TrackingConfig {
        message_error_notices: true,
        message_status_events: true,
        delivery_receipts: true,
    }
}

pub fn message_event(id: &str) -> MessageEvent {
    MessageEvent {
        id: EventId::from(id),
        room: RoomId::from("!portal:example.org"),
        sender: UserId::from("@alice:example.org"),
        kind: EventKind::Message,
        retry_of: None,
    }
}
