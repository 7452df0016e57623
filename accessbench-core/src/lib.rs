#![warn(missing_docs)]
//! AccessBench Core - Trial Runtime
//!
//! This crate provides everything a benchmark driver needs to time memory
//! access idioms:
//! - `measure` / `Timer` for single-shot wall-clock timing
//! - `StackBuffer`, `HeapBuffer` and `GrowableBuffer` storage strategies
//! - Index, offset and cursor access over sequential or random orders
//! - `Runner` for executing trials in order and collecting measurements

mod access;
mod buffer;
mod error;
mod measure;
mod source;
mod trial;

pub use access::{Access, Mode, Order, Sink, Strategy, run_access};
pub use buffer::{Buffer, GrowableBuffer, HeapBuffer, StackBuffer, Storage};
pub use error::BenchError;
pub use measure::{Measurement, Timer, measure};
pub use source::{SeededSource, SequenceSource, ValueSource};
pub use trial::{RunOutcome, Runner, Trial, run_trial};
