use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// The system wall clock, in milliseconds since the Unix epoch.
///
/// Follows external clock adjustments (NTP, manual changes).
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<i64> for SystemClock {
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_millis() as i64,
            // Clock set before 1970
            Err(before) => -(before.duration().as_millis() as i64),
        }
    }
}
