//! `a[i]` vs. `*(a + i)` on stack and heap arrays.
//!
//! Prints one `<label>\t<elapsed>` line per trial; each trial is a full
//! write pass followed by a full read pass.
//!
//! Run with:
//!   cargo run --release --bin index_vs_pointer

use accessbench::{RunConfig, Suite};

fn main() -> anyhow::Result<()> {
    accessbench::run(Suite::IndexVsPointer, &RunConfig::default())
}
