//! Comment throttle window math.
//!
//! The enforcement itself is a single conditional INSERT in the comment
//! repository; this module only computes the "wait N more seconds"
//! figure shown to a throttled user.

use crate::types::Timestamp;

/// A user may post one comment per this many seconds.
pub const COMMENT_WINDOW_SECS: i64 = 60;

/// Seconds remaining in the throttle window after a comment at
/// `last_comment_at`, observed at `now`.
///
/// Returns `None` when the window has already elapsed. The remainder is
/// the ceiling of the leftover milliseconds, so a submission one second
/// before the window closes reports "1 second left", never "0".
pub fn seconds_left(last_comment_at: Timestamp, now: Timestamp) -> Option<i64> {
    let elapsed_ms = (now - last_comment_at).num_milliseconds();
    let window_ms = COMMENT_WINDOW_SECS * 1000;
    if elapsed_ms >= window_ms {
        return None;
    }
    let remaining_ms = window_ms - elapsed_ms;
    Some((remaining_ms as u64).div_ceil(1000) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_one_second_left_at_59s() {
        let last = Utc::now();
        let now = last + Duration::seconds(59);
        assert_eq!(seconds_left(last, now), Some(1));
    }

    #[test]
    fn test_allowed_at_61s() {
        let last = Utc::now();
        let now = last + Duration::seconds(61);
        assert_eq!(seconds_left(last, now), None);
    }

    #[test]
    fn test_boundary_exactly_60s_is_allowed() {
        let last = Utc::now();
        let now = last + Duration::seconds(60);
        assert_eq!(seconds_left(last, now), None);
    }

    #[test]
    fn test_millisecond_remainder_rounds_up() {
        let last = Utc::now();
        let now = last + Duration::milliseconds(58_500);
        assert_eq!(seconds_left(last, now), Some(2), "1500ms left rounds to 2");
    }

    #[test]
    fn test_immediate_resubmission() {
        let last = Utc::now();
        assert_eq!(seconds_left(last, last), Some(COMMENT_WINDOW_SECS));
    }
}
