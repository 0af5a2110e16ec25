use std::io;

use crate::{ClockId, IClockSource};

/// Reads the host clocks through `clock_gettime(2)`.
///
/// # Examples
/// ```
/// use timing::{SystemClock, TimeSpec};
///
/// let start = TimeSpec::now_monotonic(&SystemClock).unwrap();
/// let end = TimeSpec::now_monotonic(&SystemClock).unwrap();
/// assert!(end >= start);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl SystemClock {
    fn clock_id(clock: ClockId) -> io::Result<libc::clockid_t> {
        match clock {
            ClockId::Realtime => Ok(libc::CLOCK_REALTIME),
            ClockId::Monotonic => Ok(libc::CLOCK_MONOTONIC),
            #[cfg(any(target_os = "linux", target_os = "android"))]
            ClockId::MonotonicRaw => Ok(libc::CLOCK_MONOTONIC_RAW),
            #[cfg(not(any(target_os = "linux", target_os = "android")))]
            ClockId::MonotonicRaw => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "CLOCK_MONOTONIC_RAW is not available on this platform",
            )),
        }
    }
}

impl IClockSource for SystemClock {
    type Error = io::Error;

    fn read(&self, clock: ClockId) -> io::Result<(i64, i64)> {
        let id = Self::clock_id(clock)?;
        // SAFETY: timespec is plain old data, all-zero is a valid value.
        let mut ts: libc::timespec = unsafe { core::mem::zeroed() };

        // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
        let rc = unsafe { libc::clock_gettime(id, &mut ts) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok((ts.tv_sec as i64, ts.tv_nsec as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::SystemClock;
    use crate::{ClockId, IClockSource, TimeSpec, TimeVal};

    #[test]
    fn test_realtime_is_after_epoch() {
        let now = TimeSpec::now(&SystemClock).unwrap();
        assert!(now.is_normalized());
        assert!(now.tv_sec > 1_600_000_000);
    }

    #[test]
    fn test_monotonic_does_not_go_back() {
        let a = TimeVal::now_monotonic(&SystemClock).unwrap();
        let b = TimeVal::now_monotonic(&SystemClock).unwrap();
        assert!(b >= a);
        assert!(!(b - a).is_negative());
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    #[test]
    fn test_monotonic_raw() {
        let (_, nsec) = SystemClock.read(ClockId::MonotonicRaw).unwrap();
        assert!((0..1_000_000_000).contains(&nsec));
    }
}
