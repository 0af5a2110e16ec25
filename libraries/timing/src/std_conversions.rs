use crate::{TimeSpec, TimeVal, TimeValue, NSEC_PER_SEC};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

impl<const SCALE: i64> TimeValue<SCALE> {
    fn from_total_nanos(total: i128) -> Self {
        let sec = total.div_euclid(NSEC_PER_SEC as i128) as i64;
        let nsec = total.rem_euclid(NSEC_PER_SEC as i128) as i64;
        Self::new_unchecked(sec, nsec / (NSEC_PER_SEC / SCALE))
    }
}

// Split into seconds and nanoseconds so totals past u64::MAX nanoseconds
// (about 584 years) keep their value.
fn duration_from_nanos(nanos: u128) -> Duration {
    let per_sec = NSEC_PER_SEC as u128;
    Duration::new((nanos / per_sec) as u64, (nanos % per_sec) as u32)
}

// SystemTime conversions
impl<const SCALE: i64> From<SystemTime> for TimeValue<SCALE> {
    #[inline]
    fn from(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Self::from_total_nanos(duration.as_nanos() as i128),
            // Before UNIX_EPOCH, still normalized so tv_frac ∈ [0, SCALE)
            Err(e) => Self::from_total_nanos(-(e.duration().as_nanos() as i128)),
        }
    }
}

/// # Panics
/// Panics if the value lies outside the range `SystemTime` can represent on
/// this platform.
impl<const SCALE: i64> From<TimeValue<SCALE>> for SystemTime {
    #[inline]
    fn from(value: TimeValue<SCALE>) -> Self {
        let total = value.total_nanoseconds();
        let offset = duration_from_nanos(total.unsigned_abs());
        if total >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        }
    }
}

// Duration conversions
impl<const SCALE: i64> From<Duration> for TimeValue<SCALE> {
    #[inline]
    fn from(duration: Duration) -> Self {
        Self::from_total_nanos(duration.as_nanos() as i128)
    }
}

impl TryFrom<TimeSpec> for Duration {
    type Error = &'static str;

    #[inline]
    fn try_from(timespec: TimeSpec) -> Result<Self, Self::Error> {
        let total = timespec.total_nanoseconds();
        if total < 0 {
            return Err("Cannot convert negative TimeSpec to Duration");
        }
        Ok(duration_from_nanos(total as u128))
    }
}

impl TryFrom<TimeVal> for Duration {
    type Error = &'static str;

    #[inline]
    fn try_from(timeval: TimeVal) -> Result<Self, Self::Error> {
        let total = timeval.total_microseconds();
        if total < 0 {
            return Err("Cannot convert negative TimeVal to Duration");
        }
        Ok(duration_from_nanos(total as u128 * 1_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn test_systemtime_to_timespec() {
        let now = UNIX_EPOCH + Duration::from_secs(1234567890) + Duration::from_nanos(123456789);
        let ts = TimeSpec::from(now);
        assert_eq!(ts.tv_sec, 1234567890);

        // On Windows, SystemTime precision is limited to ~100ns intervals (system tick resolution)
        #[cfg(windows)]
        assert!((ts.tv_frac - 123456789).abs() <= 100);

        #[cfg(not(windows))]
        assert_eq!(ts.tv_frac, 123456789);
    }

    #[test]
    fn test_systemtime_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let ts = TimeSpec::from(before);
        assert_eq!(ts.as_pair(), (-2, 500_000_000));

        let tv = TimeVal::from(before);
        assert_eq!(tv.as_pair(), (-2, 500_000));

        assert_eq!(SystemTime::from(ts), before);
    }

    #[test]
    fn test_timespec_to_systemtime() {
        let ts = TimeSpec::new(1234567890, 123456789);
        let system_time = SystemTime::from(ts);
        let expected =
            UNIX_EPOCH + Duration::from_secs(1234567890) + Duration::from_nanos(123456789);
        assert_eq!(system_time, expected);
    }

    #[test]
    fn test_duration_to_timespec() {
        let duration = Duration::from_secs(123) + Duration::from_nanos(456789000);
        let ts = TimeSpec::from(duration);
        assert_eq!(ts.as_pair(), (123, 456789000));

        let tv = TimeVal::from(duration);
        assert_eq!(tv.as_pair(), (123, 456789));
    }

    #[test]
    fn test_systemtime_far_from_epoch() {
        // 600 years does not fit in u64 nanoseconds
        let secs = 600 * 365 * 86_400;
        let ts = TimeSpec::new(secs, 123);
        let later = SystemTime::from(ts);
        assert_eq!(
            later.duration_since(UNIX_EPOCH).unwrap(),
            Duration::new(secs as u64, 123)
        );
        assert_eq!(TimeSpec::from(later), ts);

        let earlier = SystemTime::from(TimeVal::new(-secs, 500_000));
        assert_eq!(
            UNIX_EPOCH.duration_since(earlier).unwrap(),
            Duration::new(secs as u64 - 1, 500_000_000)
        );
        assert_eq!(TimeVal::from(earlier), TimeVal::new(-secs, 500_000));
    }

    #[test]
    fn test_large_values_to_duration() {
        let secs = 600 * 365 * 86_400;
        let duration = Duration::try_from(TimeSpec::new(secs, 7)).unwrap();
        assert_eq!(duration, Duration::new(secs as u64, 7));

        let duration = Duration::try_from(TimeVal::new(secs, 7)).unwrap();
        assert_eq!(duration, Duration::new(secs as u64, 7_000));
    }

    #[test]
    fn test_timespec_to_duration() {
        let ts = TimeSpec::new(123, 456789000);
        let duration = Duration::try_from(ts).unwrap();
        assert_eq!(duration.as_secs(), 123);
        assert_eq!(duration.subsec_nanos(), 456789000);
    }

    #[test]
    fn test_timeval_to_duration() {
        let tv = TimeVal::new(2, 250_000);
        let duration = Duration::try_from(tv).unwrap();
        assert_eq!(duration.as_secs(), 2);
        assert_eq!(duration.subsec_micros(), 250_000);
    }

    #[test]
    fn test_negative_to_duration_fails() {
        assert!(Duration::try_from(TimeSpec::new(-123, 0)).is_err());
        assert!(Duration::try_from(TimeVal::new(0, -1)).is_err());
    }
}
