//! Carry and borrow arithmetic over raw `(sec, frac)` pairs.
//!
//! Every operation on [`TimeValue`](crate::TimeValue) funnels through the
//! functions here, so the nanosecond and microsecond variants share a single
//! implementation. `scale` is always the number of sub-units per second and
//! must be positive.

use core::cmp::Ordering;

/// Fold any fractional count into `[0, scale)`, moving whole seconds into `sec`.
///
/// Uses floor division, so a fraction that is off by many seconds in either
/// direction is corrected in one step.
#[inline]
pub const fn normalize(sec: i64, frac: i64, scale: i64) -> (i64, i64) {
    (sec + frac.div_euclid(scale), frac.rem_euclid(scale))
}

/// Same contract as [`normalize`], one second at a time.
///
/// Runs in time proportional to `|frac| / scale`. Only worth calling when the
/// input is known to be at most a few units off.
pub const fn normalize_stepwise(mut sec: i64, mut frac: i64, scale: i64) -> (i64, i64) {
    while frac >= scale {
        sec += 1;
        frac -= scale;
    }
    while frac < 0 {
        sec -= 1;
        frac += scale;
    }
    (sec, frac)
}

/// `a + b` with a single carry. Both operands must already be normalized.
#[inline]
pub const fn carry_add(a: (i64, i64), b: (i64, i64), scale: i64) -> (i64, i64) {
    let mut sec = a.0 + b.0;
    let mut frac = a.1 + b.1;
    if frac >= scale {
        sec += 1;
        frac -= scale;
    }
    (sec, frac)
}

/// `a - b` with a single borrow. Both operands must already be normalized.
///
/// The seconds field of the result goes negative when `a < b`.
#[inline]
pub const fn borrow_sub(a: (i64, i64), b: (i64, i64), scale: i64) -> (i64, i64) {
    let mut sec = a.0 - b.0;
    let mut frac = a.1 - b.1;
    if frac < 0 {
        sec -= 1;
        frac += scale;
    }
    (sec, frac)
}

/// Three-way comparison of two normalized pairs: seconds first, then fraction.
#[inline]
pub const fn compare(a: (i64, i64), b: (i64, i64)) -> Ordering {
    if a.0 < b.0 {
        Ordering::Less
    } else if a.0 > b.0 {
        Ordering::Greater
    } else if a.1 < b.1 {
        Ordering::Less
    } else if a.1 > b.1 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Whether `frac` already lies in `[0, scale)`, i.e. the pair is normalized.
#[inline]
pub const fn in_range(frac: i64, scale: i64) -> bool {
    frac >= 0 && frac < scale
}
