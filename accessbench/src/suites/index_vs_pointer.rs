//! `a[i]` vs. `*(a + i)`.
//!
//! Each trial writes every slot and then reads every slot back, timed as
//! one. Every trial gets its own freshly allocated buffer.

use accessbench_core::{
    BenchError, Buffer, HeapBuffer, Runner, StackBuffer, Strategy, Trial, ValueSource,
};

/// Run the suite with `N` slots per buffer.
pub fn index_vs_pointer<const N: usize, S: ValueSource>(
    runner: &mut Runner<S>,
) -> Result<(), BenchError> {
    stack_trial::<N, S>(runner, "array[index]", Strategy::Index)?;
    stack_trial::<N, S>(runner, "*(array + index)", Strategy::Offset)?;
    heap_trial(runner, N, "pointer[index]", Strategy::Index)?;
    heap_trial(runner, N, "*(pointer + index)", Strategy::Offset)?;
    Ok(())
}

#[inline(never)]
fn stack_trial<const N: usize, S: ValueSource>(
    runner: &mut Runner<S>,
    label: &str,
    strategy: Strategy,
) -> Result<(), BenchError> {
    let mut array = StackBuffer::<N>::new();
    write_then_read(runner, &mut array, label, strategy)
}

fn heap_trial<S: ValueSource>(
    runner: &mut Runner<S>,
    len: usize,
    label: &str,
    strategy: Strategy,
) -> Result<(), BenchError> {
    let mut pointer = HeapBuffer::allocate(len)?;
    write_then_read(runner, &mut pointer, label, strategy)
}

fn write_then_read<B, S>(
    runner: &mut Runner<S>,
    buffer: &mut B,
    label: &str,
    strategy: Strategy,
) -> Result<(), BenchError>
where
    B: Buffer + ?Sized,
    S: ValueSource,
{
    runner.run(&Trial::write_then_read(label, strategy), buffer)?;
    Ok(())
}
