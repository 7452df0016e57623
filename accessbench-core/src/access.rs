//! Access Strategies
//!
//! A pass visits a slice exactly `len` times. What varies between passes is
//! the addressing mechanism (`Strategy`), the visiting order (`Order`) and
//! whether slots are written or read (`Mode`). Every strategy is equivalent
//! in what it touches, and only the way each slot is reached differs.

use crate::source::ValueSource;
use std::hint::black_box;

/// Addressing mechanism used to reach a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bounds-checked indexing: `slots[i]`
    Index,
    /// Raw pointer offset from the base address: `*base.add(i)`
    Offset,
    /// Slice iterator advanced one step at a time
    Cursor,
}

/// Order in which slots are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// `0, 1, ..., len - 1`
    Sequential,
    /// `len` independent uniform draws from `[0, len)`, repeats allowed
    Random,
}

impl Order {
    /// Index visited at `step` of a `len`-step pass.
    ///
    /// # Panics
    /// If the source returns a random index outside `[0, len)`.
    #[inline(always)]
    pub fn index_at<S>(self, step: usize, len: usize, source: &mut S) -> usize
    where
        S: ValueSource + ?Sized,
    {
        match self {
            Order::Sequential => step,
            Order::Random => random_index(len, source),
        }
    }
}

/// Whether a pass stores into or loads from the visited slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Store a freshly drawn value
    Write,
    /// Load the value into the sink
    Read,
}

/// One pass over a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Access {
    /// Addressing mechanism
    pub strategy: Strategy,
    /// Visiting order
    pub order: Order,
    /// Write or read
    pub mode: Mode,
}

impl Access {
    /// Create an access description
    pub const fn new(strategy: Strategy, order: Order, mode: Mode) -> Self {
        Self {
            strategy,
            order,
            mode,
        }
    }

    /// Whether this pass writes every slot exactly once
    pub fn populates(&self) -> bool {
        self.mode == Mode::Write && self.order == Order::Sequential
    }
}

/// Observer for read passes.
///
/// Every value read goes through `black_box` and into a wrapping checksum,
/// so reads cannot be optimized away even though nothing branches on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sink {
    checksum: i64,
    reads: u64,
}

impl Sink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one read value
    #[inline(always)]
    pub fn absorb(&mut self, value: i32) {
        self.checksum = self.checksum.wrapping_add(i64::from(black_box(value)));
        self.reads += 1;
    }

    /// Wrapping sum of every value read
    pub fn checksum(&self) -> i64 {
        self.checksum
    }

    /// Number of values read
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

/// Run one pass of `access` over `slots`.
#[inline]
pub fn run_access<S>(slots: &mut [i32], access: Access, source: &mut S, sink: &mut Sink)
where
    S: ValueSource + ?Sized,
{
    match access.mode {
        Mode::Write => write_pass(slots, access.strategy, access.order, source),
        Mode::Read => read_pass(slots, access.strategy, access.order, source, sink),
    }
}

#[inline(always)]
fn random_index<S>(len: usize, source: &mut S) -> usize
where
    S: ValueSource + ?Sized,
{
    let index = source.pick_index(len);
    assert!(index < len, "random index {index} out of range for length {len}");
    index
}

#[allow(clippy::needless_range_loop)]
fn write_pass<S>(slots: &mut [i32], strategy: Strategy, order: Order, source: &mut S)
where
    S: ValueSource + ?Sized,
{
    let len = slots.len();

    match (strategy, order) {
        (Strategy::Index, Order::Sequential) => {
            for i in 0..len {
                slots[i] = source.next_value();
            }
        }
        (Strategy::Index, Order::Random) => {
            for step in 0..len {
                let i = order.index_at(step, len, source);
                slots[i] = source.next_value();
            }
        }
        (Strategy::Offset, Order::Sequential) => {
            let base = slots.as_mut_ptr();
            for i in 0..len {
                // SAFETY: i < len, so base + i stays inside the slice.
                unsafe { *base.add(i) = source.next_value() };
            }
        }
        (Strategy::Offset, Order::Random) => {
            let base = slots.as_mut_ptr();
            for step in 0..len {
                let i = order.index_at(step, len, source);
                // SAFETY: index_at guarantees i < len.
                unsafe { *base.add(i) = source.next_value() };
            }
        }
        (Strategy::Cursor, Order::Sequential) => {
            for slot in slots.iter_mut() {
                *slot = source.next_value();
            }
        }
        (Strategy::Cursor, Order::Random) => {
            for step in 0..len {
                let i = order.index_at(step, len, source);
                if let Some(slot) = slots.iter_mut().nth(i) {
                    *slot = source.next_value();
                }
            }
        }
    }
}

#[allow(clippy::needless_range_loop)]
fn read_pass<S>(slots: &[i32], strategy: Strategy, order: Order, source: &mut S, sink: &mut Sink)
where
    S: ValueSource + ?Sized,
{
    let len = slots.len();

    match (strategy, order) {
        (Strategy::Index, Order::Sequential) => {
            for i in 0..len {
                sink.absorb(slots[i]);
            }
        }
        (Strategy::Index, Order::Random) => {
            for step in 0..len {
                let i = order.index_at(step, len, source);
                sink.absorb(slots[i]);
            }
        }
        (Strategy::Offset, Order::Sequential) => {
            let base = slots.as_ptr();
            for i in 0..len {
                // SAFETY: i < len, so base + i stays inside the slice.
                sink.absorb(unsafe { *base.add(i) });
            }
        }
        (Strategy::Offset, Order::Random) => {
            let base = slots.as_ptr();
            for step in 0..len {
                let i = order.index_at(step, len, source);
                // SAFETY: index_at guarantees i < len.
                sink.absorb(unsafe { *base.add(i) });
            }
        }
        (Strategy::Cursor, Order::Sequential) => {
            for value in slots.iter() {
                sink.absorb(*value);
            }
        }
        (Strategy::Cursor, Order::Random) => {
            for step in 0..len {
                let i = order.index_at(step, len, source);
                if let Some(value) = slots.iter().nth(i) {
                    sink.absorb(*value);
                }
            }
        }
    }
}
