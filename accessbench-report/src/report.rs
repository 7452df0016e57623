//! Report Data Structures

use accessbench_core::{Measurement, RunOutcome};

/// Measurements of one run, in run order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    /// Build a report from measurements already in run order
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }

    /// Measurements, in run order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Number of measurements
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the report has no measurements
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

impl From<Vec<Measurement>> for Report {
    fn from(measurements: Vec<Measurement>) -> Self {
        Self::new(measurements)
    }
}

impl From<RunOutcome> for Report {
    fn from(outcome: RunOutcome) -> Self {
        Self::new(outcome.measurements)
    }
}
