//! Harness Errors

use crate::buffer::Storage;
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that abort a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    /// A buffer could not be allocated
    #[error("Failed to allocate {len} slots of {storage} storage: {source}")]
    Allocation {
        /// Storage strategy that was requested
        storage: Storage,
        /// Requested number of slots
        len: usize,
        /// Allocator failure
        #[source]
        source: TryReserveError,
    },

    /// A growable buffer reallocated between passes
    #[error("Growable buffer capacity changed: expected {expected}, found {actual}")]
    CapacityDrift {
        /// Capacity recorded at construction
        expected: usize,
        /// Capacity found after the write pass
        actual: usize,
    },

    /// A trial would read slots that were never written
    #[error("Trial '{label}' reads a buffer that no sequential write has populated")]
    ReadBeforeWrite {
        /// Label of the offending trial
        label: String,
    },
}
