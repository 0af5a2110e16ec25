use test_utilities::clock::TestClock;
use timing::{ClockId, TimeSpec, TimeVal};

const EIO: i32 = 5;

#[test]
fn test_now_reads_requested_clock() {
    let clock = TestClock::new()
        .with_reading(ClockId::Realtime, 1_700_000_000, 5)
        .with_reading(ClockId::Monotonic, 42, 6)
        .with_reading(ClockId::MonotonicRaw, 43, 7);

    assert_eq!(TimeSpec::now(&clock), Ok(TimeSpec::new(1_700_000_000, 5)));
    assert_eq!(TimeSpec::now_monotonic(&clock), Ok(TimeSpec::new(42, 6)));
    assert_eq!(TimeSpec::now_monotonic_raw(&clock), Ok(TimeSpec::new(43, 7)));
    assert_eq!(clock.reads(), 3);
}

#[test]
fn test_unnormalized_readings_are_normalized() {
    let clock = TestClock::new()
        .with_reading(ClockId::Monotonic, 10, 2_147_483_647)
        .with_reading(ClockId::Monotonic, 10, -2_147_483_647);

    let first = TimeSpec::now_monotonic(&clock).unwrap();
    assert_eq!(first.as_pair(), (12, 147_483_647));

    let second = TimeSpec::now_monotonic(&clock).unwrap();
    assert_eq!(second.as_pair(), (7, 852_516_353));
    assert!(second < first);

    let elapsed = first - second;
    assert_eq!(elapsed.as_pair(), (4, 294_967_294));
}

#[test]
fn test_timeval_now_truncates_nanoseconds() {
    let clock = TestClock::new()
        .with_reading(ClockId::Realtime, 33, 999)
        .with_reading(ClockId::Realtime, 12, 1_999_999_999);

    assert_eq!(TimeVal::now(&clock).unwrap().as_pair(), (33, 0));
    assert_eq!(TimeVal::now(&clock).unwrap().as_pair(), (13, 999_999));
}

#[test]
fn test_failed_read_is_propagated() {
    let clock = TestClock::new()
        .with_failure(ClockId::Realtime, EIO)
        .with_reading(ClockId::Realtime, 1, 0);

    assert_eq!(TimeSpec::now(&clock), Err(EIO));
    assert_eq!(TimeVal::now(&clock), Ok(TimeVal::new(1, 0)));
}

#[test]
fn test_unscripted_clock_fails() {
    let clock = TestClock::new().with_reading(ClockId::Realtime, 1, 0);

    assert!(TimeSpec::now_monotonic_raw(&clock).is_err());
    // The last reading is repeated once the script runs out
    assert_eq!(TimeSpec::now(&clock), Ok(TimeSpec::from_secs(1)));
    assert_eq!(TimeSpec::now(&clock), Ok(TimeSpec::from_secs(1)));
}

#[test]
fn test_clock_source_as_trait_object() {
    let clock = TestClock::new().with_reading(ClockId::Realtime, 5, 500_000_000);
    let source: &dyn timing::IClockSource<Error = i32> = &clock;

    assert_eq!(TimeSpec::now(source), Ok(TimeSpec::new(5, 500_000_000)));
}
