//! Wall-clock timing of arbitrary calls

use std::time::{Duration, Instant};

/// Result of a timed call together with how long it took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in whole milliseconds
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Run `task` between two monotonic clock readings.
///
/// A panic inside `task` unwinds through this call untouched.
pub fn measure_execution_time<T>(task: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = task();
    let elapsed = start.elapsed();
    log::debug!("task finished in {} ms", elapsed.as_millis());
    Timed { value, elapsed }
}

/// Fallible variant of [`measure_execution_time`].
///
/// An error from `task` is returned as is and no measurement is reported.
pub fn try_measure_execution_time<T, E>(task: impl FnOnce() -> Result<T, E>) -> Result<Timed<T>, E> {
    let start = Instant::now();
    let value = task()?;
    let elapsed = start.elapsed();
    log::debug!("task finished in {} ms", elapsed.as_millis());
    Ok(Timed { value, elapsed })
}
