//! System-clock access.
//!
//! The one thin OS wrapper in this crate: everything else is pure
//! computation. The wall clock is read once and converted through the
//! crate's own epoch math, so the result is independent of the host's
//! timezone state.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::date::{precision, DateTime};

/// The current UTC wall-clock time, with the mask set down to nanoseconds.
pub fn now() -> DateTime {
    let (seconds, subsec_nanos) = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() as i64, elapsed.subsec_nanos()),
        // Clock set before 1970: borrow a second so the nanosecond part
        // stays non-negative.
        Err(err) => {
            let before = err.duration();
            let mut seconds = -(before.as_secs() as i64);
            let mut nanos = 0u32;
            if before.subsec_nanos() > 0 {
                seconds -= 1;
                nanos = 1_000_000_000 - before.subsec_nanos();
            }
            (seconds, nanos)
        }
    };

    let mut dt = DateTime::from_unix_seconds(seconds);
    dt.millisecond = (subsec_nanos / 1_000_000) as i16;
    dt.microsecond = (subsec_nanos / 1_000 % 1_000) as i16;
    dt.nanosecond = (subsec_nanos % 1_000) as i16;
    dt.precision_mask |= precision::MILLI | precision::MICRO | precision::NANO;
    dt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_valid_and_fully_masked() {
        let dt = now();
        assert!(dt.validate());
        assert!(dt.has(
            precision::CIVIL_DATE
                | precision::CLOCK_TIME
                | precision::MILLI
                | precision::MICRO
                | precision::NANO
        ));
        assert_eq!(dt.tz_offset_minutes, 0);
        assert_ne!(dt.weekday, -1);
    }

    #[test]
    fn now_roundtrips_through_unix_seconds() {
        let dt = now();
        let back = DateTime::from_unix_seconds(dt.to_unix_seconds());
        assert_eq!(
            (back.year, back.month, back.day, back.hour, back.minute, back.second),
            (dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second)
        );
    }
}
