//! Stack array vs. heap array vs. `Vec`, by index and by iterator.
//!
//! Prints one `<label> : <elapsed> ms` line per trial.
//!
//! Run with:
//!   cargo run --release --bin vector_vs_array

use accessbench::{RunConfig, Suite};

fn main() -> anyhow::Result<()> {
    accessbench::run(Suite::VectorVsArray, &RunConfig::default())
}
