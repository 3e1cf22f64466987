//! Wall-clock timing for arbitrary operations.

use std::time::{Duration, Instant};

/// Runs `operation` once and returns how long it took
pub fn time<F>(operation: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    operation();
    start.elapsed()
}

/// Runs `operation` once and returns its output together with the elapsed time
pub fn timed<T, F>(operation: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = operation();
    (output, start.elapsed())
}

/// Converts a duration to fractional milliseconds for reports
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
