//! # Timing Library
//!
//! Normalized two-field time values for system programming: whole seconds
//! plus a sub-second fraction, kept in the range `[0, SCALE)` by every
//! constructor and arithmetic operation.
//!
//! - [`TimeSpec`]: POSIX-compatible time structure with nanosecond precision
//! - [`TimeVal`]: POSIX-compatible time structure with microsecond precision
//!
//! Both are instantiations of [`TimeValue`], so they share one implementation
//! of normalization, carry/borrow arithmetic and comparison.
//!
//! ## Examples
//!
//! ```
//! use timing::{TimeSpec, TimeVal};
//!
//! // Out-of-range fractions are folded into the seconds field
//! let ts = TimeSpec::new(10, -1);
//! assert_eq!((ts.tv_sec, ts.tv_frac), (9, 999_999_999));
//!
//! // Arithmetic carries and borrows across the second boundary
//! let sum = TimeSpec::new(1, 999_999_999) + TimeSpec::new(1, 2);
//! assert_eq!(sum, TimeSpec::new(3, 1));
//!
//! // Convert between resolutions
//! let tv: TimeVal = sum.to_timeval();
//! assert_eq!(tv.to_timespec(), TimeSpec::new(3, 0));
//! ```
//!
//! ## Reading the clock
//!
//! "Now" is read through an [`IClockSource`], which keeps the arithmetic
//! independent of any real time source. With the `std` feature on unix targets,
//! [`SystemClock`] reads the host clocks.
//!
//! ## Feature Flags
//!
//! - `std`: Enables conversions to/from `SystemTime` and `Duration`, and `SystemClock`
//! - `no_std`: Default feature for no-std environments

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod arith;

mod value;
pub use value::{TimeSpec, TimeVal, TimeValue};

mod conversions;

mod clock;
pub use clock::{ClockId, IClockSource};

/// Number of nanoseconds in one second
pub const NSEC_PER_SEC: i64 = 1_000_000_000;
/// Number of microseconds in one second
pub const USEC_PER_SEC: i64 = 1_000_000;
/// Number of milliseconds in one second
pub const MSEC_PER_SEC: i64 = 1_000;

// Standard library conversions (only when std feature is enabled)
#[cfg(feature = "std")]
mod std_conversions;

#[cfg(all(feature = "std", unix))]
mod system_clock;
#[cfg(all(feature = "std", unix))]
pub use system_clock::SystemClock;
