//! Arena configuration parameters.

/// Configuration for a fixed-capacity arena.
///
/// Values are immutable once the arena is constructed. Nothing here is
/// process-global: arenas with different capacities and alignments can
/// coexist freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total capacity of the backing buffer in bytes.
    ///
    /// Fixed for the arena's lifetime — a full arena never grows.
    pub capacity: usize,

    /// Base alignment of the backing buffer, and the default alignment
    /// used by [`Arena::alloc`](crate::Arena::alloc).
    ///
    /// Must be a power of two.
    pub alignment: usize,
}

impl ArenaConfig {
    /// Default backing buffer capacity in bytes.
    pub const DEFAULT_CAPACITY: usize = 1600;

    /// Default alignment: twice the pointer width, leaving headroom for
    /// platforms whose widest loads (SIMD, 128-bit) exceed pointer
    /// alignment.
    pub const DEFAULT_ALIGNMENT: usize = 2 * std::mem::size_of::<usize>();

    /// Create a config with the given capacity and the default alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alignment: Self::DEFAULT_ALIGNMENT,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
