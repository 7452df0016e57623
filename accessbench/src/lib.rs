#![warn(missing_docs)]
//! # AccessBench
//!
//! Single-shot micro-benchmarks of memory access idioms:
//! - **Storage**: inline stack arrays, boxed heap arrays and pre-sized `Vec`s
//! - **Addressing**: bounds-checked indexing, raw pointer offsets and iterators
//! - **Order**: sequential sweeps and uniformly random indices
//!
//! Each suite allocates its buffers, writes them, reads them back and prints
//! one line per trial in the order the trials ran.
//!
//! ## Quick Start
//!
//! ```ignore
//! use accessbench::{RunConfig, Suite};
//!
//! fn main() -> anyhow::Result<()> {
//!     accessbench::run(Suite::VectorVsArray, &RunConfig::default())
//! }
//! ```
//!
//! ## Custom Drivers
//!
//! ```ignore
//! use accessbench::prelude::*;
//!
//! let mut runner = Runner::new(SeededSource::from_clock());
//! let mut buffer = HeapBuffer::allocate(1 << 20)?;
//! runner.run(&Trial::write("fill", Strategy::Offset, Order::Sequential), &mut buffer)?;
//! runner.run(&Trial::read("scan", Strategy::Offset, Order::Random), &mut buffer)?;
//! ```

mod config;
pub mod suites;

use anyhow::Context;
use tracing::info;

pub use config::{INDEX_VS_POINTER_LEN, RunConfig, VECTOR_VS_ARRAY_LEN};
pub use suites::Suite;

// Re-export core types
pub use accessbench_core::{
    Access, BenchError, Buffer, GrowableBuffer, HeapBuffer, Measurement, Mode, Order, RunOutcome,
    Runner, SeededSource, SequenceSource, Sink, StackBuffer, Storage, Strategy, Timer, Trial,
    ValueSource, measure, run_access, run_trial,
};

// Re-export reporting
pub use accessbench_report::{OutputFormat, Report, format_millis, format_report, write_report};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Buffer, GrowableBuffer, HeapBuffer, Order, Runner, SeededSource, StackBuffer, Strategy,
        Suite, Trial,
    };
}

/// Run `suite` and print its report to stdout.
///
/// Nothing is printed unless every trial succeeds: an allocation failure or
/// a broken buffer invariant is returned as an error before the report is
/// written.
pub fn run(suite: Suite, config: &RunConfig) -> anyhow::Result<()> {
    init_logging(&config.log_filter);

    let source = SeededSource::from_clock();
    info!(suite = suite.name(), seed = source.seed(), "starting run");

    let report = collect(suite, source, config.stack_size)?;
    let format = config.format.unwrap_or(suite.default_format());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&report, format, &mut out).context("Failed to write report")?;

    Ok(())
}

/// Run `suite` on a dedicated driver thread and return its report.
///
/// The thread exists only to provide a stack big enough for the suite's
/// stack arrays; the caller blocks until it finishes, so trials still run
/// strictly one after another.
pub fn collect<S>(suite: Suite, source: S, stack_size: usize) -> anyhow::Result<Report>
where
    S: ValueSource + Send + 'static,
{
    let driver = std::thread::Builder::new()
        .name(format!("{}-driver", suite.name()))
        .stack_size(stack_size)
        .spawn(move || -> Result<RunOutcome, BenchError> {
            let mut runner = Runner::new(source);
            suite.execute(&mut runner)?;
            Ok(runner.finish())
        })
        .context("Failed to spawn driver thread")?;

    let outcome = driver
        .join()
        .map_err(|_| anyhow::anyhow!("{} driver thread panicked", suite.name()))?
        .with_context(|| format!("{} suite failed", suite.name()))?;

    info!(
        suite = suite.name(),
        trials = outcome.measurements.len(),
        reads = outcome.reads,
        checksum = outcome.checksum,
        "run complete"
    );
    Ok(Report::from(outcome))
}

/// Diagnostics go to stderr so stdout carries nothing but the report.
fn init_logging(filter: &str) {
    // A subscriber installed earlier in the process stays in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
