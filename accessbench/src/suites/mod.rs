//! Benchmark Suites
//!
//! Each suite is a fixed driver: it allocates its buffers in a fixed order,
//! runs a fixed list of trials against them and drops each buffer once its
//! trials are done. Buffer lengths are const generics so the binaries use
//! the build-time constants and tests can use small arrays.

mod index_vs_pointer;
mod vector_vs_array;

pub use index_vs_pointer::index_vs_pointer;
pub use vector_vs_array::{access_trials, vector_vs_array};

use crate::config::{INDEX_VS_POINTER_LEN, VECTOR_VS_ARRAY_LEN};
use accessbench_core::{BenchError, Runner, ValueSource};
use accessbench_report::OutputFormat;

/// The benchmark programs this crate ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    /// Stack array, heap array and `Vec` (by index and by iterator)
    VectorVsArray,
    /// `a[i]` against `*(a + i)` on stack and heap arrays
    IndexVsPointer,
}

impl Suite {
    /// Binary / display name
    pub fn name(self) -> &'static str {
        match self {
            Suite::VectorVsArray => "vector_vs_array",
            Suite::IndexVsPointer => "index_vs_pointer",
        }
    }

    /// Slots per buffer
    pub const fn buffer_len(self) -> usize {
        match self {
            Suite::VectorVsArray => VECTOR_VS_ARRAY_LEN,
            Suite::IndexVsPointer => INDEX_VS_POINTER_LEN,
        }
    }

    /// Report format the suite prints unless configured otherwise
    pub fn default_format(self) -> OutputFormat {
        match self {
            Suite::VectorVsArray => OutputFormat::Human,
            Suite::IndexVsPointer => OutputFormat::Tab,
        }
    }

    /// Run every trial of the suite at its build-time buffer length
    pub fn execute<S: ValueSource>(self, runner: &mut Runner<S>) -> Result<(), BenchError> {
        match self {
            Suite::VectorVsArray => {
                vector_vs_array::<{ Suite::VectorVsArray.buffer_len() }, S>(runner)
            }
            Suite::IndexVsPointer => {
                index_vs_pointer::<{ Suite::IndexVsPointer.buffer_len() }, S>(runner)
            }
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_metadata() {
        assert_eq!(Suite::VectorVsArray.name(), "vector_vs_array");
        assert_eq!(Suite::IndexVsPointer.to_string(), "index_vs_pointer");
        assert_eq!(Suite::VectorVsArray.buffer_len(), 1_000_000);
        assert_eq!(Suite::IndexVsPointer.buffer_len(), 2_000_000);
        assert_eq!(Suite::IndexVsPointer.default_format(), OutputFormat::Tab);
    }
}
