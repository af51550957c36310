//! Carve quickstart — a walkthrough of the whole arena API.
//!
//! Demonstrates:
//!   1. Creating arenas (default and custom config)
//!   2. Aligned allocation and region handles
//!   3. Reading and writing region bytes
//!   4. Exhaustion as a recoverable error
//!   5. The `free_all` wipe (contents zeroed, cursor retained)
//!
//! Run with:
//!   cargo run --example quickstart

use carve_arena::{Arena, ArenaConfig, ArenaError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Carve quickstart ===\n");

    // 1. Default arena: 1600 bytes, base aligned to twice pointer width.
    let mut arena = Arena::new()?;
    println!(
        "arena: {} bytes, base alignment {}, base address {:#x}",
        arena.capacity(),
        arena.alignment(),
        arena.base_addr(),
    );

    // 2. Carve a few differently-aligned regions.
    let header = arena.alloc_align(64, 8)?;
    let payload = arena.alloc_align(32, 4)?;
    let tail = arena.alloc_align(16, 2)?;
    println!(
        "carved {header}, {payload}, {tail} — used {}/{}",
        arena.used(),
        arena.capacity(),
    );

    // 3. Write into a region and read it back through the handle.
    arena.slice_mut(payload)[..4].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    println!("payload starts {:02x?}", &arena.slice(payload)[..4]);

    // 4. Exhaustion is an error value, not a panic.
    match arena.alloc(arena.capacity() + 1) {
        Err(ArenaError::CapacityExhausted {
            requested,
            capacity,
        }) => println!("oversize request rejected: {requested} > {capacity}"),
        other => println!("unexpected: {other:?}"),
    }

    // 5. Wipe contents. The cursor stays put — remaining() is unchanged.
    let used_before = arena.used();
    arena.free_all();
    println!(
        "after free_all: payload bytes {:02x?}, used {} (was {}), remaining {}",
        &arena.slice(payload)[..4],
        arena.used(),
        used_before,
        arena.remaining(),
    );

    // 6. A small custom arena for scratch work.
    let mut scratch = Arena::with_config(ArenaConfig {
        capacity: 64,
        alignment: 16,
    })?;
    let a = scratch.alloc(24)?;
    let b = scratch.alloc(24)?;
    println!(
        "\nscratch arena: {a} and {b} carved, {} bytes left",
        scratch.remaining(),
    );
    if let Err(err) = scratch.alloc(24) {
        println!("third request fails as expected: {err}");
    }

    println!("\nDone.");
    Ok(())
}
