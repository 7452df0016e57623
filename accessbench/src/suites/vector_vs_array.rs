//! Stack array vs. heap array vs. `Vec`.
//!
//! Every container is the same length and is never resized, so the
//! comparison is access cost only. The two vectors are separate instances:
//! one is driven by index, the other by iterator.

use accessbench_core::{
    BenchError, Buffer, GrowableBuffer, HeapBuffer, Order, Runner, StackBuffer, Strategy, Trial,
    ValueSource,
};

/// Run the suite with `N` slots per buffer.
///
/// Trial order: stack array, heap array, vector by index, vector by
/// iterator; each gets a write, a sequential read and a random read.
pub fn vector_vs_array<const N: usize, S: ValueSource>(
    runner: &mut Runner<S>,
) -> Result<(), BenchError> {
    stack_array::<N, S>(runner)?;

    let mut dynamic = HeapBuffer::allocate(N)?;
    access_trials(runner, &mut dynamic, "dynamic array", Strategy::Index)?;
    drop(dynamic);

    let mut vector = GrowableBuffer::allocate(N)?;
    access_trials(runner, &mut vector, "vector using indices", Strategy::Index)?;
    drop(vector);

    let mut vector = GrowableBuffer::allocate(N)?;
    access_trials(runner, &mut vector, "vector using iterators", Strategy::Cursor)?;

    Ok(())
}

// Own frame, so the array is released before the heap buffers are allocated.
#[inline(never)]
fn stack_array<const N: usize, S: ValueSource>(runner: &mut Runner<S>) -> Result<(), BenchError> {
    let mut array = StackBuffer::<N>::new();
    access_trials(runner, &mut array, "array", Strategy::Index)
}

/// Write, sequential read and random read of `buffer` through `strategy`.
///
/// Labels read "Time taken to write to {subject}." and so on.
pub fn access_trials<B, S>(
    runner: &mut Runner<S>,
    buffer: &mut B,
    subject: &str,
    strategy: Strategy,
) -> Result<(), BenchError>
where
    B: Buffer + ?Sized,
    S: ValueSource,
{
    let trials = [
        Trial::write(
            format!("Time taken to write to {subject}."),
            strategy,
            Order::Sequential,
        ),
        Trial::read(
            format!("Time taken to read from {subject}."),
            strategy,
            Order::Sequential,
        ),
        Trial::read(
            format!("Time taken to read randomly from {subject}."),
            strategy,
            Order::Random,
        ),
    ];

    for trial in &trials {
        runner.run(trial, buffer)?;
    }
    Ok(())
}
