//! Time and timestamp helpers.

use chrono::{DateTime, Duration, Utc};

/// UTC timestamp used for `created_at`, `next_due_at`, completion times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return midnight UTC of the next day.
///
/// Chores due before this threshold count as "due today" in list views.
#[must_use]
pub fn start_of_tomorrow() -> Timestamp {
    let tomorrow = Utc::now().date_naive() + Duration::days(1);
    tomorrow
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_place_start_of_tomorrow_after_now() {
        let threshold = start_of_tomorrow();
        assert!(threshold > now());
    }

    #[test]
    fn should_place_start_of_tomorrow_at_midnight() {
        use chrono::Timelike;
        let threshold = start_of_tomorrow();
        assert_eq!(threshold.hour(), 0);
        assert_eq!(threshold.minute(), 0);
        assert_eq!(threshold.second(), 0);
    }
}
