//! Octavia compactor — the ring-numeral digit engine.
//!
//! Stages:
//! 1. Normalizer (raw text → canonical base-8 digits, with carries)
//! 2. Rewrite primitive (the compaction rule and the ultra two-hop rule)
//! 3. Policies — Canonical, Minimal, Compact, Ultra
//! 4. Pipeline — one policy, or all of them side by side
//!
//! Every policy preserves the represented value.

pub mod normalizer;
pub mod pipeline;
pub mod policy;
pub mod rewrite;

pub use normalizer::normalize;
pub use pipeline::{RingPipeline, RingResult, Selection};
pub use policy::{apply, canonical, compact, minimal, ultra, Policy, Rewrite};

#[cfg(test)]
mod tests;
