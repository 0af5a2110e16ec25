use hermit_sync::SpinMutex;
use std::{
    collections::{HashMap, VecDeque},
    sync::atomic::{AtomicUsize, Ordering},
};
use timing::{ClockId, IClockSource};

/// A clock source that replays scripted readings.
///
/// Each [`ClockId`] has its own queue. A read pops the next scripted entry for
/// that clock; once the queue runs dry the last reading is repeated. Reading a
/// clock that was never scripted fails with `EINVAL`, like `clock_gettime`
/// does for an unknown clock id.
pub struct TestClock {
    queues: SpinMutex<HashMap<ClockId, VecDeque<Result<(i64, i64), i32>>>>,
    last: SpinMutex<HashMap<ClockId, (i64, i64)>>,
    reads: AtomicUsize,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            queues: SpinMutex::new(HashMap::new()),
            last: SpinMutex::new(HashMap::new()),
            reads: AtomicUsize::new(0),
        }
    }

    /// Queue a raw `(sec, nsec)` reading. The pair is returned as is, even when
    /// it is not normalized.
    pub fn with_reading(self, clock: ClockId, sec: i64, nsec: i64) -> Self {
        self.push(clock, Ok((sec, nsec)));
        self
    }

    /// Queue a failed read reporting `errno`.
    pub fn with_failure(self, clock: ClockId, errno: i32) -> Self {
        self.push(clock, Err(errno));
        self
    }

    pub fn push(&self, clock: ClockId, reading: Result<(i64, i64), i32>) {
        self.queues
            .lock()
            .entry(clock)
            .or_default()
            .push_back(reading);
    }

    /// Number of reads served so far, failed ones included.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl IClockSource for TestClock {
    type Error = i32;

    fn read(&self, clock: ClockId) -> Result<(i64, i64), i32> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        let next = self
            .queues
            .lock()
            .get_mut(&clock)
            .and_then(|queue| queue.pop_front());

        match next {
            Some(Ok(reading)) => {
                self.last.lock().insert(clock, reading);
                Ok(reading)
            }
            Some(Err(errno)) => Err(errno),
            None => self.last.lock().get(&clock).copied().ok_or_else(|| {
                log::debug!("TestClock: no reading scripted for {clock:?}");
                libc::EINVAL
            }),
        }
    }
}
