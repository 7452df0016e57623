//! Buffers Under Test
//!
//! Three storage strategies for a fixed-length run of `i32` slots:
//! - `StackBuffer<N>`: an inline array, its length fixed at compile time
//! - `HeapBuffer`: a boxed slice allocated once at run time
//! - `GrowableBuffer`: a `Vec` pre-sized to its final length
//!
//! None of them ever grows or shrinks after construction. Each one remembers
//! whether a full sequential write pass has populated it, so the runner can
//! refuse to time reads of never-written memory.

use crate::error::BenchError;
use std::fmt;
use tracing::info;

/// Storage strategy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Inline fixed-size array
    Stack,
    /// Boxed slice on the heap
    Heap,
    /// Pre-sized `Vec`
    Growable,
}

impl Storage {
    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Storage::Stack => "stack",
            Storage::Heap => "heap",
            Storage::Growable => "growable",
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-length integer storage a trial can read and write.
pub trait Buffer {
    /// Which storage strategy backs this buffer
    fn storage(&self) -> Storage;

    /// All slots, in index order
    fn slots(&self) -> &[i32];

    /// All slots, mutably
    fn slots_mut(&mut self) -> &mut [i32];

    /// Whether a full sequential write pass has run over every slot
    fn is_populated(&self) -> bool;

    /// Record that every slot has been written
    fn mark_populated(&mut self);

    /// Number of slots
    fn len(&self) -> usize {
        self.slots().len()
    }

    /// Whether the buffer has no slots
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check storage invariants after a write pass.
    ///
    /// Only growable storage has anything to check.
    fn verify(&self) -> Result<(), BenchError> {
        Ok(())
    }
}

// ─── Stack ───────────────────────────────────────────────────────────────────

/// Inline array of `N` slots.
///
/// Lives wherever its owner lives; on the driver thread that is the stack,
/// so `N` is bounded by the driver's stack size.
pub struct StackBuffer<const N: usize> {
    slots: [i32; N],
    populated: bool,
}

impl<const N: usize> StackBuffer<N> {
    /// Create a zero-filled array
    pub fn new() -> Self {
        info!("allocating {} slots of {} storage", N, Storage::Stack);
        Self {
            slots: [0; N],
            populated: false,
        }
    }
}

impl<const N: usize> Default for StackBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Buffer for StackBuffer<N> {
    fn storage(&self) -> Storage {
        Storage::Stack
    }

    fn slots(&self) -> &[i32] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [i32] {
        &mut self.slots
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn mark_populated(&mut self) {
        self.populated = true;
    }
}

// ─── Heap ────────────────────────────────────────────────────────────────────

/// Boxed slice allocated once at run time.
pub struct HeapBuffer {
    slots: Box<[i32]>,
    populated: bool,
}

impl HeapBuffer {
    /// Allocate `len` zero-filled slots.
    ///
    /// Running out of memory is reported as `BenchError::Allocation` instead
    /// of aborting inside the allocator.
    pub fn allocate(len: usize) -> Result<Self, BenchError> {
        info!("allocating {} slots of {} storage", len, Storage::Heap);
        let slots = reserve_zeroed(Storage::Heap, len)?.into_boxed_slice();
        Ok(Self {
            slots,
            populated: false,
        })
    }
}

impl Buffer for HeapBuffer {
    fn storage(&self) -> Storage {
        Storage::Heap
    }

    fn slots(&self) -> &[i32] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [i32] {
        &mut self.slots
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn mark_populated(&mut self) {
        self.populated = true;
    }
}

// ─── Growable ────────────────────────────────────────────────────────────────

/// `Vec` pre-sized to its final length.
///
/// Capacity is recorded at construction and re-checked by `verify`; a
/// reallocation between passes would put growth cost into the timings.
pub struct GrowableBuffer {
    slots: Vec<i32>,
    reserved: usize,
    populated: bool,
}

impl GrowableBuffer {
    /// Allocate a vector of `len` zero-filled slots with capacity `len`.
    pub fn allocate(len: usize) -> Result<Self, BenchError> {
        info!("allocating {} slots of {} storage", len, Storage::Growable);
        let slots = reserve_zeroed(Storage::Growable, len)?;
        let reserved = slots.capacity();
        Ok(Self {
            slots,
            reserved,
            populated: false,
        })
    }

    /// Current capacity of the underlying vector
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl Buffer for GrowableBuffer {
    fn storage(&self) -> Storage {
        Storage::Growable
    }

    fn slots(&self) -> &[i32] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [i32] {
        &mut self.slots
    }

    fn is_populated(&self) -> bool {
        self.populated
    }

    fn mark_populated(&mut self) {
        self.populated = true;
    }

    fn verify(&self) -> Result<(), BenchError> {
        let actual = self.slots.capacity();
        if actual != self.reserved || self.slots.len() != self.reserved {
            return Err(BenchError::CapacityDrift {
                expected: self.reserved,
                actual,
            });
        }
        Ok(())
    }
}

fn reserve_zeroed(storage: Storage, len: usize) -> Result<Vec<i32>, BenchError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(len)
        .map_err(|source| BenchError::Allocation {
            storage,
            len,
            source,
        })?;
    slots.resize(len, 0);
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_buffer_len() {
        let buf = StackBuffer::<16>::new();
        assert_eq!(buf.len(), 16);
        assert_eq!(buf.storage(), Storage::Stack);
        assert!(!buf.is_populated());
    }

    #[test]
    fn test_heap_buffer_len() {
        let buf = HeapBuffer::allocate(1000).unwrap();
        assert_eq!(buf.len(), 1000);
        assert_eq!(buf.storage(), Storage::Heap);
        assert!(buf.slots().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_growable_capacity_matches_len() {
        let buf = GrowableBuffer::allocate(1000).unwrap();
        assert_eq!(buf.len(), 1000);
        assert_eq!(buf.capacity(), 1000);
        assert!(buf.verify().is_ok());
    }

    #[test]
    fn test_growable_detects_drift() {
        let mut buf = GrowableBuffer::allocate(8).unwrap();
        buf.slots.push(1);

        match buf.verify() {
            Err(BenchError::CapacityDrift { expected, actual }) => {
                assert_eq!(expected, 8);
                assert!(actual > 8);
            }
            other => panic!("expected capacity drift, got {:?}", other),
        }
    }

    #[test]
    fn test_allocation_failure_is_an_error() {
        let err = HeapBuffer::allocate(usize::MAX).err().unwrap();
        assert!(matches!(
            err,
            BenchError::Allocation {
                storage: Storage::Heap,
                len: usize::MAX,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_buffers() {
        assert!(HeapBuffer::allocate(0).unwrap().is_empty());
        assert!(GrowableBuffer::allocate(0).unwrap().verify().is_ok());
        assert!(StackBuffer::<0>::new().is_empty());
    }

    #[test]
    fn test_mark_populated() {
        let mut buf = HeapBuffer::allocate(4).unwrap();
        buf.mark_populated();
        assert!(buf.is_populated());
    }
}
