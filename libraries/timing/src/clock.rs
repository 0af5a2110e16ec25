use crate::{arith, TimeSpec, TimeVal};

/// Which clock a source should read, mirroring the POSIX clock ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClockId {
    /// Wall-clock time, may jump when the system time is set
    Realtime,
    /// Monotonic time, subject to NTP rate adjustment
    Monotonic,
    /// Monotonic time without NTP adjustment
    MonotonicRaw,
}

/// A source of raw `(seconds, nanoseconds)` readings.
///
/// Readings are not trusted to be normalized; the `now*` constructors on
/// [`TimeSpec`] and [`TimeVal`] normalize whatever the source returns.
pub trait IClockSource {
    type Error;

    fn read(&self, clock: ClockId) -> Result<(i64, i64), Self::Error>;
}

fn read_raw<S: IClockSource + ?Sized>(
    source: &S,
    clock: ClockId,
) -> Result<(i64, i64), S::Error> {
    source.read(clock).map_err(|e| {
        log::warn!("Failed to read {clock:?} clock");
        e
    })
}

fn read_timespec<S: IClockSource + ?Sized>(
    source: &S,
    clock: ClockId,
) -> Result<TimeSpec, S::Error> {
    let (sec, nsec) = read_raw(source, clock)?;

    let ts = TimeSpec::new(sec, nsec);
    if ts.as_pair() != (sec, nsec) {
        log::trace!("{clock:?} clock returned ({sec}, {nsec}), normalized to {ts}");
    }

    Ok(ts)
}

// Goes through the raw converting constructor, so a reading gives the same
// TimeVal as `TimeVal::from_raw_timespec` on the same pair.
fn read_timeval<S: IClockSource + ?Sized>(
    source: &S,
    clock: ClockId,
) -> Result<TimeVal, S::Error> {
    let (sec, nsec) = read_raw(source, clock)?;

    let tv = TimeVal::from_raw_timespec(sec, nsec);
    if !arith::in_range(nsec, TimeSpec::SCALE) {
        log::trace!("{clock:?} clock returned ({sec}, {nsec}), normalized to {tv}");
    }

    Ok(tv)
}

impl TimeSpec {
    /// Wall-clock "now", see [`ClockId::Realtime`].
    ///
    /// # Errors
    /// Returns the source's error unchanged when the read fails.
    pub fn now<S: IClockSource + ?Sized>(source: &S) -> Result<TimeSpec, S::Error> {
        read_timespec(source, ClockId::Realtime)
    }

    /// Monotonic "now", see [`ClockId::Monotonic`].
    pub fn now_monotonic<S: IClockSource + ?Sized>(source: &S) -> Result<TimeSpec, S::Error> {
        read_timespec(source, ClockId::Monotonic)
    }

    /// Raw monotonic "now", see [`ClockId::MonotonicRaw`].
    pub fn now_monotonic_raw<S: IClockSource + ?Sized>(source: &S) -> Result<TimeSpec, S::Error> {
        read_timespec(source, ClockId::MonotonicRaw)
    }
}

impl TimeVal {
    /// Wall-clock "now" at microsecond resolution.
    ///
    /// The source is read at nanosecond resolution and truncated.
    pub fn now<S: IClockSource + ?Sized>(source: &S) -> Result<TimeVal, S::Error> {
        read_timeval(source, ClockId::Realtime)
    }

    pub fn now_monotonic<S: IClockSource + ?Sized>(source: &S) -> Result<TimeVal, S::Error> {
        read_timeval(source, ClockId::Monotonic)
    }

    pub fn now_monotonic_raw<S: IClockSource + ?Sized>(source: &S) -> Result<TimeVal, S::Error> {
        read_timeval(source, ClockId::MonotonicRaw)
    }
}
