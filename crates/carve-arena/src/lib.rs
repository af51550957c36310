//! Fixed-capacity bump arena allocation.
//!
//! An [`Arena`] owns a single contiguous, aligned byte buffer and carves
//! zero-initialised regions out of it by advancing a bump cursor. There
//! is no per-region free and no growth: when the buffer is exhausted,
//! allocation returns [`ArenaError::CapacityExhausted`] and the caller
//! decides what to do next.
//!
//! # Architecture
//!
//! ```text
//! Arena (entity + allocation engine, arena.rs)
//! ├── AlignedBuffer (raw.rs — owned aligned storage, the only unsafe)
//! ├── ArenaConfig (capacity + base alignment, defaults 1600 B / 2×usize)
//! ├── Region (offset + length handle — no raw pointers in the API)
//! └── align (is_power_of_two / align_forward arithmetic)
//! ```
//!
//! # Guarantees
//!
//! Every successful allocation is zero-filled at the moment it is
//! returned, starts at an address that is a multiple of the requested
//! power-of-two alignment, and is disjoint from every other region the
//! arena has handed out. A failed allocation leaves the arena unchanged.
//!
//! # Failure model
//!
//! Exhaustion is an expected outcome and comes back as a value.
//! Precondition violations — a non-power-of-two alignment, zero where a
//! positive value is required, address overflow while aligning — are
//! programmer errors and panic.
//!
//! # The `free_all` quirk
//!
//! [`Arena::free_all`] zeroes the buffer's contents but does **not**
//! rewind the bump cursor: wiped space stays consumed, and repeated
//! wipe-then-allocate cycles exhaust the arena at the original fill
//! level. See the method docs before reaching for it as a reset.
//!
//! # Safety
//!
//! `unsafe` is confined to `raw.rs`, which wraps the aligned backing
//! allocation; every unsafe operation there carries a `// SAFETY:`
//! comment. The raw pointer inside makes `Arena` neither `Send` nor
//! `Sync`, so single-threaded ownership is enforced at compile time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod align;
pub mod arena;
pub mod config;
pub mod error;
mod raw;
pub mod region;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use region::Region;
