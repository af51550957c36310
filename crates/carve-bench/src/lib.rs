//! Benchmark profiles and utilities for the Carve arena allocator.
//!
//! Provides pre-built allocation patterns shared by the criterion
//! benches:
//!
//! - [`standard_config`]: the default 1600-byte arena
//! - [`large_config`]: a 1 MB arena for churn benchmarks
//! - [`mixed_alignment_pattern`]: a (size, alignment) request mix that
//!   exercises the padding paths

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use carve_arena::ArenaConfig;

/// Config matching the default arena: 1600 bytes, pointer-pair aligned.
pub fn standard_config() -> ArenaConfig {
    ArenaConfig::default()
}

/// A 1 MB arena for benchmarks that need many allocations per iteration.
pub fn large_config() -> ArenaConfig {
    ArenaConfig::new(1 << 20)
}

/// A request mix covering the common alignment classes.
///
/// Sizes and alignments are chosen so the whole pattern fits the default
/// arena with room to spare; repeating it against a [`large_config`]
/// arena produces realistic padding churn.
pub fn mixed_alignment_pattern() -> Vec<(usize, usize)> {
    vec![
        (64, 8),
        (32, 4),
        (16, 2),
        (1, 16),
        (128, 8),
        (7, 1),
        (24, 8),
    ]
}
