use chrono::Utc;

use crate::entities::{Attendance, AttendanceStatus};

/// Which side of the working day a clock event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockDirection {
    In,
    Out,
}

/// Build the Attendance document for a clock event. The date is always the
/// current UTC date; the time defaults to the current UTC `HH:MM`. Every call
/// produces a fresh record, so a check-in and a check-out on the same day are
/// two documents.
pub fn clock_event(user_id: &str, direction: ClockDirection, time: Option<String>) -> Attendance {
    let now = Utc::now();
    let stamp = time.unwrap_or_else(|| now.format("%H:%M").to_string());

    let (check_in, check_out) = match direction {
        ClockDirection::In => (Some(stamp), None),
        ClockDirection::Out => (None, Some(stamp)),
    };

    Attendance {
        user_id: user_id.to_string(),
        date: now.date_naive(),
        status: AttendanceStatus::Present,
        check_in,
        check_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_sets_only_the_in_stamp() {
        let record = clock_event("user-000001", ClockDirection::In, Some("09:05".to_string()));
        assert_eq!(record.user_id, "user-000001");
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.check_in.as_deref(), Some("09:05"));
        assert_eq!(record.check_out, None);
        assert_eq!(record.date, Utc::now().date_naive());
    }

    #[test]
    fn check_out_sets_only_the_out_stamp() {
        let record = clock_event("user-000001", ClockDirection::Out, Some("17:40".to_string()));
        assert_eq!(record.check_in, None);
        assert_eq!(record.check_out.as_deref(), Some("17:40"));
    }

    #[test]
    fn missing_time_defaults_to_hh_mm() {
        let record = clock_event("user-000001", ClockDirection::In, None);
        let stamp = record.check_in.expect("default stamp present");
        assert_eq!(stamp.len(), 5);
        assert_eq!(stamp.as_bytes()[2], b':');
    }
}
