//! The arena entity, allocation engine, and lifecycle operations.
//!
//! An [`Arena`] owns one contiguous aligned buffer and a bump cursor.
//! Allocation advances the cursor past any alignment padding; there is
//! no per-region free, and [`Arena::free_all`] wipes contents without
//! rewinding the cursor.

use crate::align::{align_forward, is_power_of_two};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw::AlignedBuffer;
use crate::region::Region;

/// A fixed-capacity bump arena.
///
/// Regions are carved from the front of a single buffer by advancing a
/// cursor. Every successful allocation is zero-filled, aligned to the
/// requested power-of-two boundary, and disjoint from every other
/// region the arena has handed out. A failed allocation leaves the
/// arena exactly as it was.
///
/// The arena is single-threaded by construction: it is neither `Send`
/// nor `Sync`, so sharing one across threads is a compile error rather
/// than a data race.
pub struct Arena {
    /// Backing storage, exclusively owned. The base address is a
    /// multiple of the configured alignment.
    buffer: AlignedBuffer,
    /// Bump cursor: byte offset of the next unused position.
    /// Monotonically non-decreasing; not even `free_all` rewinds it.
    offset: usize,
}

impl Arena {
    /// Create an arena with the default configuration
    /// (1600 bytes, base aligned to twice the pointer width).
    pub fn new() -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an arena from an explicit configuration.
    ///
    /// The backing buffer is acquired zero-initialised with the
    /// configured base alignment and the cursor starts at zero.
    ///
    /// # Panics
    ///
    /// Panics if `config.alignment` is not a power of two.
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        assert!(
            is_power_of_two(config.alignment),
            "alignment {} is not a power of two",
            config.alignment
        );
        let buffer = AlignedBuffer::zeroed(config.capacity, config.alignment).ok_or(
            ArenaError::AllocationFailed {
                capacity: config.capacity,
            },
        )?;
        Ok(Self { buffer, offset: 0 })
    }

    /// Allocate `size` bytes at the arena's default alignment.
    ///
    /// Convenience wrapper over [`Arena::alloc_align`] using the
    /// alignment the arena was configured with.
    pub fn alloc(&mut self, size: usize) -> Result<Region, ArenaError> {
        let alignment = self.buffer.align();
        self.alloc_align(size, alignment)
    }

    /// Allocate `size` bytes aligned to `alignment`.
    ///
    /// The region starts at the first `alignment`-multiple address at or
    /// past the cursor; the cursor advances past the padding and the
    /// region, and the region's bytes are zeroed before it is returned.
    /// A zero-size request succeeds and consumes only the padding.
    ///
    /// Returns [`ArenaError::CapacityExhausted`] — with the cursor
    /// untouched — when padding plus `size` exceeds the remaining space.
    ///
    /// # Panics
    ///
    /// Panics if `alignment` is not a power of two.
    pub fn alloc_align(&mut self, size: usize, alignment: usize) -> Result<Region, ArenaError> {
        let base = self.buffer.base_addr();
        // `base + offset` stays within one live allocation, so it cannot
        // overflow the address space.
        let candidate = align_forward(base + self.offset, alignment);
        let padded = candidate - base;

        // Compare padding plus size against capacity; the subtraction
        // form wraps for oversize requests.
        match padded.checked_add(size) {
            Some(end) if end <= self.capacity() => {
                self.offset = end;
                self.buffer.as_mut_slice()[padded..end].fill(0);
                Ok(Region::new(padded, size))
            }
            _ => Err(ArenaError::CapacityExhausted {
                requested: size,
                capacity: self.capacity(),
            }),
        }
    }

    /// Zero every byte of the backing buffer.
    ///
    /// The bump cursor is **not** rewound: space handed out before the
    /// call is wiped but stays consumed, [`Arena::remaining`] is
    /// unchanged, and repeated wipe-then-allocate cycles still exhaust
    /// the arena at the original fill level. This makes `free_all` a
    /// content wipe, not a reset; callers wanting a fresh arena must
    /// construct one.
    pub fn free_all(&mut self) {
        self.buffer.as_mut_slice().fill(0);
    }

    /// Bytes of an allocated region.
    ///
    /// # Panics
    ///
    /// Panics if `region` does not lie within this arena's buffer.
    pub fn slice(&self, region: Region) -> &[u8] {
        &self.buffer.as_slice()[region.offset..region.offset + region.len]
    }

    /// Mutable bytes of an allocated region.
    ///
    /// # Panics
    ///
    /// Panics if `region` does not lie within this arena's buffer.
    pub fn slice_mut(&mut self, region: Region) -> &mut [u8] {
        &mut self.buffer.as_mut_slice()[region.offset..region.offset + region.len]
    }

    /// Bytes consumed so far, alignment padding included.
    pub fn used(&self) -> usize {
        self.offset
    }

    /// Total capacity in bytes, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes left between the cursor and the end of the buffer.
    ///
    /// An incoming request may still fail with less padding-free space
    /// than this suggests; the figure ignores the alignment of the next
    /// request.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset
    }

    /// The base alignment the arena was configured with.
    pub fn alignment(&self) -> usize {
        self.buffer.align()
    }

    /// Base address of the backing buffer as an integer.
    ///
    /// Exposed for alignment verification and foreign-memory interop;
    /// this is not a borrowable pointer.
    pub fn base_addr(&self) -> usize {
        self.buffer.base_addr()
    }
}
