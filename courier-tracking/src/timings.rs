//! Per-message timing measurements.

use std::{fmt, time::Duration};

/// Durations of each stage of one message's trip through the bridge.
///
/// Receive-side fields cover homeserver to portal queue; send-side fields
/// cover portal to remote network. Fields start at zero and are filled in by
/// the pipeline as stages complete. Rendering rounds for readability but
/// never mutates the stored values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageTimings {
    pub init_receive: Duration,
    pub decrypt: Duration,
    pub implicit_rr: Duration,
    pub portal_queue: Duration,
    pub total_receive: Duration,

    pub preproc: Duration,
    pub convert: Duration,
    pub total_send: Duration,
}

impl fmt::Display for MessageTimings {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "receive: {:?}, decrypt: {:?}, implicit rr: {:?}, queue: {:?}, total receive: {:?} | preprocess: {:?}, convert: {:?}, total send: {:?}",
            nice_round(self.init_receive),
            nice_round(self.decrypt),
            nice_round(self.implicit_rr),
            nice_round(self.portal_queue),
            nice_round(self.total_receive),
            nice_round(self.preproc),
            nice_round(self.convert),
            nice_round(self.total_send),
        )
    }
}

/// Round a duration to a resolution appropriate to its magnitude:
/// sub-millisecond values unrounded, sub-second values to 100µs, anything
/// larger to 1ms.
#[must_use]
pub fn nice_round(duration: Duration) -> Duration {
    if duration < Duration::from_millis(1) {
        duration
    } else if duration < Duration::from_secs(1) {
        round_to(duration, Duration::from_micros(100))
    } else {
        round_to(duration, Duration::from_millis(1))
    }
}

fn round_to(duration: Duration, resolution: Duration) -> Duration {
    let step = resolution.as_nanos();
    let rounded = (duration.as_nanos() + step / 2) / step * step;
    Duration::from_nanos(u64::try_from(rounded).unwrap_or(u64::MAX))
}
