//! Trials and the Trial Runner
//!
//! A `Trial` is a label plus the passes to time together. The `Runner` owns
//! everything trials share (the value source, the read sink and the ordered
//! measurements), checks buffer invariants around each trial and keeps the
//! clock around the passes alone.

use crate::access::{Access, Mode, Order, Sink, Strategy, run_access};
use crate::buffer::Buffer;
use crate::error::BenchError;
use crate::measure::{Measurement, measure};
use crate::source::ValueSource;
use tracing::debug;

/// Labeled unit of timed work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    label: String,
    accesses: Vec<Access>,
}

impl Trial {
    /// Trial running the given passes in order under one timer
    pub fn new(label: impl Into<String>, accesses: Vec<Access>) -> Self {
        Self {
            label: label.into(),
            accesses,
        }
    }

    /// Single write pass
    pub fn write(label: impl Into<String>, strategy: Strategy, order: Order) -> Self {
        Self::new(label, vec![Access::new(strategy, order, Mode::Write)])
    }

    /// Single read pass
    pub fn read(label: impl Into<String>, strategy: Strategy, order: Order) -> Self {
        Self::new(label, vec![Access::new(strategy, order, Mode::Read)])
    }

    /// Sequential write pass followed by a sequential read pass, timed together
    pub fn write_then_read(label: impl Into<String>, strategy: Strategy) -> Self {
        Self::new(
            label,
            vec![
                Access::new(strategy, Order::Sequential, Mode::Write),
                Access::new(strategy, Order::Sequential, Mode::Read),
            ],
        )
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Passes, in execution order
    pub fn accesses(&self) -> &[Access] {
        &self.accesses
    }

    fn writes(&self) -> bool {
        self.accesses.iter().any(|a| a.mode == Mode::Write)
    }

    fn populates(&self) -> bool {
        self.accesses.iter().any(Access::populates)
    }

    /// First read pass that would run before the buffer is fully written
    fn reads_unpopulated(&self, mut populated: bool) -> bool {
        for access in &self.accesses {
            if access.mode == Mode::Read && !populated {
                return true;
            }
            populated |= access.populates();
        }
        false
    }
}

/// Time every pass of `trial` over `slots`.
///
/// Only the passes sit between the two clock samples; checks, logging and
/// bookkeeping are the caller's business.
pub fn run_trial<S>(
    trial: &Trial,
    slots: &mut [i32],
    source: &mut S,
    sink: &mut Sink,
) -> Measurement
where
    S: ValueSource + ?Sized,
{
    let accesses = trial.accesses();
    measure(trial.label(), || {
        for &access in accesses {
            run_access(slots, access, source, sink);
        }
    })
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Measurements in run order
    pub measurements: Vec<Measurement>,
    /// Wrapping sum of every value read during the run
    pub checksum: i64,
    /// Total number of reads during the run
    pub reads: u64,
}

/// Sequential trial runner.
///
/// Trials run one at a time, in the order `run` is called, and their
/// measurements are kept in that order.
pub struct Runner<S> {
    source: S,
    sink: Sink,
    measurements: Vec<Measurement>,
}

impl<S: ValueSource> Runner<S> {
    /// Create a runner drawing values and indices from `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            sink: Sink::new(),
            measurements: Vec::new(),
        }
    }

    /// Run `trial` against `buffer` and record its measurement.
    ///
    /// Fails before the clock starts if the trial would read slots no
    /// sequential write has populated, and after the trial if a write pass
    /// broke the buffer's storage invariants.
    pub fn run<B>(&mut self, trial: &Trial, buffer: &mut B) -> Result<Measurement, BenchError>
    where
        B: Buffer + ?Sized,
    {
        if trial.reads_unpopulated(buffer.is_populated()) {
            return Err(BenchError::ReadBeforeWrite {
                label: trial.label().to_string(),
            });
        }

        let measurement = run_trial(trial, buffer.slots_mut(), &mut self.source, &mut self.sink);

        if trial.populates() {
            buffer.mark_populated();
        }
        if trial.writes() {
            buffer.verify()?;
        }

        debug!(
            "{} [{} x{}]: {:.3} ms",
            measurement.label(),
            buffer.storage(),
            buffer.len(),
            measurement.elapsed_ms()
        );
        self.measurements.push(measurement.clone());
        Ok(measurement)
    }

    /// Measurements recorded so far, in run order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Sink shared by every read pass
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Value source shared by every trial
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Finalize and return the run's results
    pub fn finish(self) -> RunOutcome {
        RunOutcome {
            measurements: self.measurements,
            checksum: std::hint::black_box(self.sink.checksum()),
            reads: self.sink.reads(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{GrowableBuffer, HeapBuffer, StackBuffer, Storage};
    use crate::source::{SeededSource, SequenceSource};

    #[test]
    fn test_write_then_read_round_trip() {
        let mut runner = Runner::new(SequenceSource::new(|k| (k as i32) * 7 - 3));
        let mut buffer = HeapBuffer::allocate(32).unwrap();

        runner
            .run(&Trial::write("write", Strategy::Index, Order::Sequential), &mut buffer)
            .unwrap();
        runner
            .run(&Trial::read("read", Strategy::Index, Order::Sequential), &mut buffer)
            .unwrap();

        for (i, &v) in buffer.slots().iter().enumerate() {
            assert_eq!(v, (i as i32) * 7 - 3);
        }
        let expected: i64 = (0..32).map(|i| i64::from(i * 7 - 3)).sum();
        assert_eq!(runner.sink().checksum(), expected);
    }

    #[test]
    fn test_read_before_write_rejected() {
        let mut runner = Runner::new(SeededSource::with_seed(1));
        let mut buffer = StackBuffer::<8>::new();

        let err = runner
            .run(&Trial::read("early read", Strategy::Index, Order::Sequential), &mut buffer)
            .unwrap_err();

        assert!(matches!(err, BenchError::ReadBeforeWrite { ref label } if label == "early read"));
        assert!(runner.measurements().is_empty());
    }

    #[test]
    fn test_random_write_does_not_populate() {
        let mut runner = Runner::new(SeededSource::with_seed(1));
        let mut buffer = HeapBuffer::allocate(8).unwrap();

        runner
            .run(&Trial::write("scatter", Strategy::Index, Order::Random), &mut buffer)
            .unwrap();

        assert!(!buffer.is_populated());
        assert!(
            runner
                .run(&Trial::read("read", Strategy::Index, Order::Random), &mut buffer)
                .is_err()
        );
    }

    #[test]
    fn test_write_then_read_trial_on_fresh_buffer() {
        let mut runner = Runner::new(SeededSource::with_seed(9));
        let mut buffer = StackBuffer::<64>::new();

        let m = runner
            .run(&Trial::write_then_read("both", Strategy::Offset), &mut buffer)
            .unwrap();

        assert_eq!(m.label(), "both");
        assert!(buffer.is_populated());
        assert_eq!(runner.sink().reads(), 64);
    }

    #[test]
    fn test_growable_capacity_stable_across_trials() {
        let mut runner = Runner::new(SeededSource::with_seed(5));
        let mut buffer = GrowableBuffer::allocate(100).unwrap();

        for _ in 0..3 {
            runner
                .run(&Trial::write("w", Strategy::Cursor, Order::Sequential), &mut buffer)
                .unwrap();
            runner
                .run(&Trial::write("rw", Strategy::Index, Order::Random), &mut buffer)
                .unwrap();
            runner
                .run(&Trial::read("r", Strategy::Cursor, Order::Random), &mut buffer)
                .unwrap();
        }

        assert_eq!(buffer.capacity(), 100);
        assert_eq!(runner.measurements().len(), 9);
    }

    /// Heap slots whose capacity check always fails
    struct DriftingBuffer {
        slots: Vec<i32>,
        populated: bool,
    }

    impl Buffer for DriftingBuffer {
        fn storage(&self) -> Storage {
            Storage::Growable
        }

        fn slots(&self) -> &[i32] {
            &self.slots
        }

        fn slots_mut(&mut self) -> &mut [i32] {
            &mut self.slots
        }

        fn is_populated(&self) -> bool {
            self.populated
        }

        fn mark_populated(&mut self) {
            self.populated = true;
        }

        fn verify(&self) -> Result<(), BenchError> {
            Err(BenchError::CapacityDrift {
                expected: self.slots.len(),
                actual: self.slots.len() * 2,
            })
        }
    }

    #[test]
    fn test_capacity_drift_after_write_is_an_error() {
        let mut runner = Runner::new(SeededSource::with_seed(6));
        let mut buffer = DriftingBuffer {
            slots: vec![0; 16],
            populated: false,
        };

        let err = runner
            .run(&Trial::write("write", Strategy::Index, Order::Sequential), &mut buffer)
            .unwrap_err();

        assert!(matches!(
            err,
            BenchError::CapacityDrift {
                expected: 16,
                actual: 32
            }
        ));
        assert!(runner.measurements().is_empty());
    }

    #[test]
    fn test_read_only_trial_skips_capacity_check() {
        let mut runner = Runner::new(SeededSource::with_seed(6));
        let mut buffer = DriftingBuffer {
            slots: vec![1; 16],
            populated: true,
        };

        runner
            .run(&Trial::read("read", Strategy::Cursor, Order::Sequential), &mut buffer)
            .unwrap();

        assert_eq!(runner.measurements().len(), 1);
        assert_eq!(runner.sink().checksum(), 16);
    }

    #[test]
    fn test_measurements_in_run_order() {
        let mut runner = Runner::new(SeededSource::with_seed(2));
        let mut buffer = HeapBuffer::allocate(16).unwrap();

        for label in ["T1", "T2", "T3"] {
            runner
                .run(&Trial::write(label, Strategy::Index, Order::Sequential), &mut buffer)
                .unwrap();
        }

        let labels: Vec<&str> = runner.measurements().iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_single_slot_measurement_is_valid() {
        let mut runner = Runner::new(SeededSource::with_seed(4));
        let mut buffer = StackBuffer::<1>::new();

        let m = runner
            .run(&Trial::write_then_read("one", Strategy::Cursor), &mut buffer)
            .unwrap();

        assert!(m.elapsed_ms() >= 0.0);
        assert!(m.elapsed_ms().is_finite());
    }

    #[test]
    fn test_finish_reports_checksum() {
        let mut runner = Runner::new(SequenceSource::new(|_| 2));
        let mut buffer = HeapBuffer::allocate(10).unwrap();

        runner
            .run(&Trial::write_then_read("both", Strategy::Index), &mut buffer)
            .unwrap();

        let outcome = runner.finish();
        assert_eq!(outcome.measurements.len(), 1);
        assert_eq!(outcome.checksum, 20);
        assert_eq!(outcome.reads, 10);
    }
}
