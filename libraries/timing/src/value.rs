use core::{cmp::Ordering, fmt};

use crate::{arith, MSEC_PER_SEC, NSEC_PER_SEC, USEC_PER_SEC};

/// A time value split into whole seconds and a sub-second fraction.
///
/// `SCALE` is the number of fractional units per second. The crate only
/// instantiates it as [`TimeSpec`] (nanoseconds) and [`TimeVal`]
/// (microseconds); other scales must divide `NSEC_PER_SEC` and be a multiple
/// of `MSEC_PER_SEC`.
///
/// A value is *normalized* when `0 <= tv_frac < SCALE`. All constructors except
/// [`TimeValue::new_unchecked`] produce normalized values, and the arithmetic
/// operators expect normalized operands.
///
/// The struct is `#[repr(C)]`, so `TimeSpec` and `TimeVal` share the layout of
/// the POSIX `timespec` and `timeval` structures on 64-bit targets.
///
/// # Examples
///
/// ```
/// use timing::TimeSpec;
///
/// let ts = TimeSpec::new(1, 1_500_000_000);
/// assert_eq!(ts, TimeSpec::new(2, 500_000_000));
///
/// let sum = ts + TimeSpec::from_millis(500);
/// assert_eq!(sum, TimeSpec::from_secs(3));
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeValue<const SCALE: i64> {
    /// Whole seconds, negative for values before the reference point
    pub tv_sec: i64,
    /// Fractional units, `0..SCALE` once normalized
    pub tv_frac: i64,
}

/// Nanosecond resolution, the counterpart of POSIX `timespec`.
pub type TimeSpec = TimeValue<NSEC_PER_SEC>;

/// Microsecond resolution, the counterpart of POSIX `timeval`.
pub type TimeVal = TimeValue<USEC_PER_SEC>;

impl<const SCALE: i64> TimeValue<SCALE> {
    /// Fractional units per second.
    pub const SCALE: i64 = SCALE;

    /// The zero value, `(0, 0)`.
    pub const ZERO: Self = Self::new_unchecked(0, 0);

    /// Create a value from possibly unnormalized fields.
    ///
    /// `frac` may be negative or exceed `SCALE` by any amount; the excess or
    /// deficit is moved into the seconds field.
    ///
    /// # Examples
    /// ```
    /// use timing::TimeSpec;
    ///
    /// let ts = TimeSpec::new(10, -2_147_483_647);
    /// assert_eq!(ts.tv_sec, 7);
    /// assert_eq!(ts.tv_frac, 852_516_353);
    /// ```
    #[inline]
    pub const fn new(sec: i64, frac: i64) -> Self {
        let (sec, frac) = arith::normalize(sec, frac, SCALE);
        Self::new_unchecked(sec, frac)
    }

    /// Create a value from seconds and a fraction the caller believes is in range.
    ///
    /// The fields still go through normalization, which leaves in-range input
    /// untouched.
    #[inline]
    pub const fn from_parts(sec: i64, frac: i64) -> Self {
        Self::new(sec, frac)
    }

    /// Store the fields as given, without normalization.
    ///
    /// The result may violate the range invariant. Call
    /// [`normalize`](Self::normalize) before doing arithmetic with it.
    #[inline]
    pub const fn new_unchecked(sec: i64, frac: i64) -> Self {
        Self {
            tv_sec: sec,
            tv_frac: frac,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// A whole number of seconds.
    #[inline]
    pub const fn from_secs(sec: i64) -> Self {
        Self::new_unchecked(sec, 0)
    }

    /// Create a value from a millisecond count.
    ///
    /// # Examples
    /// ```
    /// use timing::{TimeSpec, TimeVal};
    ///
    /// assert_eq!(TimeSpec::from_millis(99_999), TimeSpec::new(99, 999_000_000));
    /// assert_eq!(TimeVal::from_millis(1), TimeVal::new(0, 1_000));
    /// ```
    #[inline]
    pub const fn from_millis(ms: u32) -> Self {
        let sec = (ms / MSEC_PER_SEC as u32) as i64;
        let frac = (ms % MSEC_PER_SEC as u32) as i64 * (SCALE / MSEC_PER_SEC);
        Self::new_unchecked(sec, frac)
    }

    /// Create a value from clock ticks and frequency.
    ///
    /// Negative tick counts round towards negative infinity, so the result is
    /// always normalized.
    ///
    /// # Panics
    /// Panics if `freq` is zero.
    ///
    /// # Examples
    /// ```
    /// use timing::TimeVal;
    /// // 1_500_000 ticks at 1 MHz
    /// let tv = TimeVal::from_ticks(1_500_000, 1_000_000);
    /// assert_eq!(tv, TimeVal::new(1, 500_000));
    /// ```
    pub fn from_ticks(ticks: i64, freq: u64) -> Self {
        assert!(freq > 0, "freq must be > 0");
        let f = freq as i128;
        let ticks = ticks as i128;
        let sec = ticks.div_euclid(f) as i64;
        let frac = (ticks.rem_euclid(f) * SCALE as i128 / f) as i64;
        Self::new_unchecked(sec, frac)
    }

    /// Bring the fraction back into `[0, SCALE)` in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub const fn normalized(self) -> Self {
        Self::new(self.tv_sec, self.tv_frac)
    }

    #[inline]
    pub const fn is_normalized(&self) -> bool {
        arith::in_range(self.tv_frac, SCALE)
    }

    #[inline]
    pub const fn as_pair(&self) -> (i64, i64) {
        (self.tv_sec, self.tv_frac)
    }

    /// Three-way comparison of two normalized values.
    #[inline]
    pub const fn compare(&self, other: &Self) -> Ordering {
        arith::compare(self.as_pair(), other.as_pair())
    }

    /// Get the total time as seconds (with fractional part).
    ///
    /// # Examples
    /// ```
    /// use timing::TimeSpec;
    /// let ts = TimeSpec::new(2, 500_000_000);
    /// assert_eq!(ts.as_secs_f64(), 2.5);
    /// ```
    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.tv_sec as f64 + self.tv_frac as f64 / SCALE as f64
    }

    /// Total nanoseconds. Computed in `i128` so it cannot overflow.
    #[inline]
    pub const fn total_nanoseconds(&self) -> i128 {
        self.tv_sec as i128 * NSEC_PER_SEC as i128
            + self.tv_frac as i128 * (NSEC_PER_SEC / SCALE) as i128
    }

    /// Total microseconds, sub-microsecond remainder rounded down.
    #[inline]
    pub const fn total_microseconds(&self) -> i128 {
        self.total_nanoseconds().div_euclid(1_000)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.tv_sec == 0 && self.tv_frac == 0
    }

    /// Whether a normalized value lies before zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.tv_sec < 0
    }

    const fn unit_label() -> &'static str {
        match SCALE {
            NSEC_PER_SEC => "nsec",
            USEC_PER_SEC => "usec",
            _ => "frac",
        }
    }
}

impl<const SCALE: i64> Default for TimeValue<SCALE> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const SCALE: i64> core::ops::Add for TimeValue<SCALE> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert!(self.is_normalized() && rhs.is_normalized());
        let (sec, frac) = arith::carry_add(self.as_pair(), rhs.as_pair(), SCALE);
        Self::new_unchecked(sec, frac)
    }
}

impl<const SCALE: i64> core::ops::AddAssign for TimeValue<SCALE> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const SCALE: i64> core::ops::Sub for TimeValue<SCALE> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        debug_assert!(self.is_normalized() && rhs.is_normalized());
        let (sec, frac) = arith::borrow_sub(self.as_pair(), rhs.as_pair(), SCALE);
        Self::new_unchecked(sec, frac)
    }
}

impl<const SCALE: i64> core::ops::SubAssign for TimeValue<SCALE> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const SCALE: i64> Ord for TimeValue<SCALE> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const SCALE: i64> PartialOrd for TimeValue<SCALE> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const SCALE: i64> fmt::Display for TimeValue<SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} sec, {} {})",
            self.tv_sec,
            self.tv_frac,
            Self::unit_label()
        )
    }
}
