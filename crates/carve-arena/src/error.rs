//! Arena error types.

use std::error::Error;
use std::fmt;

/// Errors surfaced by arena construction and allocation.
///
/// Exhaustion is the expected steady-state failure of a fixed-capacity
/// arena and is always recoverable. Precondition violations — a
/// non-power-of-two alignment, zero where a positive value is required —
/// are programmer errors and panic instead of appearing here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The request, including alignment padding, does not fit in the
    /// arena's remaining space. The arena is left untouched.
    CapacityExhausted {
        /// Number of bytes requested, excluding alignment padding.
        requested: usize,
        /// Total capacity of the arena in bytes.
        capacity: usize,
    },
    /// The host allocator could not provide the backing buffer.
    AllocationFailed {
        /// Requested buffer capacity in bytes.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exhausted: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::AllocationFailed { capacity } => {
                write!(f, "backing buffer of {capacity} bytes could not be allocated")
            }
        }
    }
}

impl Error for ArenaError {}
