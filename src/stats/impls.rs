//! Statistics implementation blocks.

/// Counter updates and snapshots on `StatsAtomics`.
pub mod stats_atomics;
