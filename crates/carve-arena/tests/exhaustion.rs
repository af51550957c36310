//! Integration test: capacity exhaustion behaviour.
//!
//! Pins the failure contract end to end: oversize requests are rejected
//! without touching the cursor, a near-capacity request still fits, and
//! the leftover tail correctly refuses requests it cannot hold.

use carve_arena::{Arena, ArenaError};

#[test]
fn oversize_then_near_capacity_then_tail_overflow() {
    let mut arena = Arena::new().unwrap();
    let capacity = arena.capacity();

    // Larger than the whole arena: rejected regardless of fill level.
    let err = arena.alloc_align(capacity + 1, 8).unwrap_err();
    assert!(matches!(
        err,
        ArenaError::CapacityExhausted { requested, .. } if requested == capacity + 1
    ));
    assert_eq!(arena.used(), 0);

    // Nearly the whole arena: fits.
    let big = arena.alloc_align(capacity - 100, 8).unwrap();
    assert_eq!(big.len(), capacity - 100);

    // More than the remaining tail: rejected, cursor unchanged.
    let used = arena.used();
    assert!(arena.alloc_align(50, 8).is_err());
    assert_eq!(arena.used(), used);
}

#[test]
fn failures_never_move_the_cursor() {
    let mut arena = Arena::new().unwrap();
    arena.alloc_align(1500, 8).unwrap();
    let used = arena.used();

    for size in [200, 1000, usize::MAX] {
        assert!(arena.alloc_align(size, 8).is_err());
        assert_eq!(arena.used(), used);
    }

    // The tail is still usable after any number of failures.
    assert!(arena.alloc_align(64, 8).is_ok());
}

#[test]
fn padding_counts_against_capacity() {
    let mut arena = Arena::new().unwrap();
    let capacity = arena.capacity();

    // Leave exactly 15 bytes, misaligned for a 16-byte request.
    arena.alloc_align(capacity - 15, 1).unwrap();
    let err = arena.alloc_align(15, 16).unwrap_err();
    assert!(matches!(err, ArenaError::CapacityExhausted { .. }));

    // An unaligned request of the same size still fits.
    assert!(arena.alloc_align(15, 1).is_ok());
    assert_eq!(arena.remaining(), 0);
}
