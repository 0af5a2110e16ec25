use crate::{TimeSpec, TimeVal};

const NSEC_PER_USEC: i64 = 1_000;

impl TimeSpec {
    /// Convert this TimeSpec to a TimeVal.
    ///
    /// Note: This conversion drops the sub-microsecond remainder. `self` must
    /// be normalized; use `TimeVal::from` for values that may not be.
    ///
    /// # Examples
    /// ```
    /// use timing::TimeSpec;
    /// let tv = TimeSpec::new(33, 999).to_timeval();
    /// assert_eq!(tv.tv_sec, 33);
    /// assert_eq!(tv.tv_frac, 0);
    /// ```
    #[inline]
    pub const fn to_timeval(&self) -> TimeVal {
        TimeVal::new_unchecked(self.tv_sec, self.tv_frac / NSEC_PER_USEC)
    }

    /// Build a TimeSpec from raw `timeval` fields that may be out of range.
    ///
    /// # Examples
    /// ```
    /// use timing::TimeSpec;
    /// let ts = TimeSpec::from_raw_timeval(33, -1);
    /// assert_eq!(ts, TimeSpec::new(32, 999_999_000));
    /// ```
    #[inline]
    pub const fn from_raw_timeval(sec: i64, usec: i64) -> TimeSpec {
        TimeSpec::new(sec, usec * NSEC_PER_USEC)
    }
}

impl TimeVal {
    /// Convert this TimeVal to a TimeSpec. Exact for normalized input.
    ///
    /// # Examples
    /// ```
    /// use timing::TimeVal;
    /// let ts = TimeVal::new(12, 1).to_timespec();
    /// assert_eq!(ts.tv_sec, 12);
    /// assert_eq!(ts.tv_frac, 1_000);
    /// ```
    #[inline]
    pub const fn to_timespec(&self) -> TimeSpec {
        TimeSpec::new_unchecked(self.tv_sec, self.tv_frac * NSEC_PER_USEC)
    }

    /// Build a TimeVal from raw `timespec` fields that may be out of range.
    ///
    /// The nanoseconds are divided down to microseconds first, truncating
    /// towards zero, and the result is then normalized. A raw `(33, -999)`
    /// therefore becomes `(33, 0)`, not `(32, 999_999)`.
    #[inline]
    pub const fn from_raw_timespec(sec: i64, nsec: i64) -> TimeVal {
        TimeVal::new(sec, nsec / NSEC_PER_USEC)
    }
}

impl From<TimeVal> for TimeSpec {
    #[inline]
    fn from(tv: TimeVal) -> Self {
        TimeSpec::from_raw_timeval(tv.tv_sec, tv.tv_frac)
    }
}

impl From<TimeSpec> for TimeVal {
    #[inline]
    fn from(ts: TimeSpec) -> Self {
        TimeVal::from_raw_timespec(ts.tv_sec, ts.tv_frac)
    }
}
