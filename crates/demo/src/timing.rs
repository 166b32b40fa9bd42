//! Wall-clock timing of individual catalog calls.

use std::time::{Duration, Instant};

/// Run `f`, returning its value and how long it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

/// Run `f` and log its duration under `step`.
pub fn timed<T>(step: &str, f: impl FnOnce() -> T) -> T {
    let (value, elapsed) = measure(f);
    tracing::info!(
        step,
        elapsed_us = elapsed.as_micros() as u64,
        "step finished"
    );
    value
}
