//! Run Configuration
//!
//! Nothing is read from the command line, the environment or a file: buffer
//! lengths are build-time constants and the remaining knobs live in
//! `RunConfig`, whose defaults are what the binaries use.

use crate::suites::Suite;
use accessbench_report::OutputFormat;

/// Slots per buffer in the vector-vs-array suite
pub const VECTOR_VS_ARRAY_LEN: usize = 1_000_000;

/// Slots per buffer in the index-vs-pointer suite
pub const INDEX_VS_POINTER_LEN: usize = 2_000_000;

/// Settings for one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Report format; `None` uses the suite's own format
    pub format: Option<OutputFormat>,
    /// Stack size of the driver thread in bytes
    pub stack_size: usize,
    /// `tracing` filter directive for diagnostics on stderr
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: None,
            stack_size: default_stack_size(),
            log_filter: default_log_filter(),
        }
    }
}

/// Unoptimized builds may keep several copies of a stack array alive across
/// frames, so leave room for four of the largest plus 8 MiB of ordinary stack.
fn default_stack_size() -> usize {
    let slots = Suite::VectorVsArray.buffer_len().max(Suite::IndexVsPointer.buffer_len());
    let largest = slots * std::mem::size_of::<i32>();
    4 * largest + 8 * 1024 * 1024
}

fn default_log_filter() -> String {
    "accessbench=warn,accessbench_core=warn".to_string()
}
