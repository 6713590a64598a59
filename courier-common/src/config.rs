//! Configuration consumed by the delivery-tracking core.

use serde::{Deserialize, Serialize};

/// Boolean switches for the delivery-status side channels.
///
/// Each flag disables one reporting channel entirely; the primary relay path
/// is unaffected by any combination of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Send user-visible warning notices when a relay fails.
    ///
    /// Default: true
    #[serde(default = "defaults::message_error_notices")]
    pub message_error_notices: bool,

    /// Emit machine-readable delivery-status events.
    ///
    /// Default: false
    #[serde(default = "defaults::message_status_events")]
    pub message_status_events: bool,

    /// Mark successfully relayed events as read.
    ///
    /// Default: false
    #[serde(default = "defaults::delivery_receipts")]
    pub delivery_receipts: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            message_error_notices: defaults::message_error_notices(),
            message_status_events: defaults::message_status_events(),
            delivery_receipts: defaults::delivery_receipts(),
        }
    }
}

mod defaults {
    pub const fn message_error_notices() -> bool {
        true
    }

    pub const fn message_status_events() -> bool {
        false
    }

    pub const fn delivery_receipts() -> bool {
        false
    }
}
