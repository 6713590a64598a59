//! Delivery-status tracking for events relayed through the courier bridge
//!
//! This crate decides how the outcome of one relay attempt is classified and
//! reported:
//! - Map failures onto the closed status taxonomy
//! - Publish user-visible error notices, machine-readable status events and
//!   best-effort delivery receipts
//! - Keep per-message retry accounting consistent across concurrent attempts
//! - Record and render per-stage timing measurements

mod classify;
mod reporter;
mod timings;
mod tracker;

pub use classify::{Classification, classify};
// Re-export common vocabulary so callers rarely need courier-common directly
pub use courier_common::{
    CheckpointStatus, CheckpointStep, EventId, MessageEvent, MessageStatus, RelayError,
    StatusReason, TrackingConfig,
};
pub use reporter::OutcomeReporter;
pub use timings::{MessageTimings, nice_round};
pub use tracker::DeliveryTracker;
