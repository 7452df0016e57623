//! Wall-Clock Timing
//!
//! A thin monotonic timer plus the `measure` primitive every trial goes
//! through. `std::time::Instant` is nanosecond-granular on all supported
//! platforms, well below the microsecond resolution the reports need.

use std::time::Duration;

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for a single timed region
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: std::time::Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed wall-clock time
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

// ─── Measurement ─────────────────────────────────────────────────────────────

/// Label and elapsed time of one timed region.
///
/// Measurements are produced in run order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    label: String,
    elapsed: Duration,
}

impl Measurement {
    /// Create a measurement from a label and an elapsed duration
    pub fn new(label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            elapsed,
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Elapsed wall-clock time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Time a single invocation of `f`.
///
/// The clock is sampled immediately before and immediately after the call;
/// nothing else happens inside the timed region. The closure's result goes
/// through `black_box` so the work cannot be discarded.
#[inline]
pub fn measure<T, F>(label: impl Into<String>, f: F) -> Measurement
where
    F: FnOnce() -> T,
{
    let label = label.into();

    let timer = Timer::start();
    let _ = std::hint::black_box(f());
    let elapsed = timer.stop();

    Measurement::new(label, elapsed)
}
