//! Ring policies — canonical digits to ring counts.

use crate::rewrite::Rewriter;
use oct_core::{CanonicalDigits, OctaviaError, RingCounts};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ring-count policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Literal base-8 digits, no rewriting.
    Canonical,
    /// One compaction step at the leftmost eligible pair.
    Minimal,
    /// Compaction to a fixpoint.
    Compact,
    /// Compaction interleaved with two-hop borrows, to a fixpoint.
    Ultra,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Self::Canonical, Self::Minimal, Self::Compact, Self::Ultra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Minimal => "minimal",
            Self::Compact => "compact",
            Self::Ultra => "ultra",
        }
    }

    /// Human-readable view name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Canonical => "Canonical (literal base-8)",
            Self::Minimal => "Minimal (single step)",
            Self::Compact => "Compact (preferred)",
            Self::Ultra => "Ultra (extended)",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = OctaviaError;

    /// Accepts the policy name or its label, case-insensitively
    /// (`"compact"`, `"Compact (preferred)"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.split_whitespace().next().unwrap_or("").to_ascii_lowercase();
        match key.as_str() {
            "canonical" => Ok(Self::Canonical),
            "minimal" => Ok(Self::Minimal),
            "compact" => Ok(Self::Compact),
            "ultra" => Ok(Self::Ultra),
            _ => Err(OctaviaError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Output of one policy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub counts: RingCounts,
    /// Number of rule firings applied.
    pub rewrites: usize,
}

/// Identity view.
pub fn canonical(digits: &CanonicalDigits) -> RingCounts {
    RingCounts::from_rewritten(digits.digits().to_vec())
}

/// Fire the compaction rule once, at the leftmost eligible pair.
pub fn minimal(digits: &CanonicalDigits) -> RingCounts {
    run_minimal(digits).into_ring_counts()
}

/// Fire the compaction rule until no `(>= 1, 0)` pair remains.
pub fn compact(digits: &CanonicalDigits) -> RingCounts {
    run_compact(digits).into_ring_counts()
}

/// Compact, then alternate ultra borrows with re-compaction until neither
/// rule can fire.
pub fn ultra(digits: &CanonicalDigits) -> RingCounts {
    run_ultra(digits).into_ring_counts()
}

/// Apply `policy` and report how many rewrites it took.
pub fn apply(policy: Policy, digits: &CanonicalDigits) -> Rewrite {
    let w = match policy {
        Policy::Canonical => Rewriter::new(digits.digits()),
        Policy::Minimal => run_minimal(digits),
        Policy::Compact => run_compact(digits),
        Policy::Ultra => run_ultra(digits),
    };
    Rewrite { rewrites: w.firings(), counts: w.into_ring_counts() }
}

fn run_minimal(digits: &CanonicalDigits) -> Rewriter {
    let mut w = Rewriter::new(digits.digits());
    if let Some(outer) = w.leftmost_pair() {
        w.borrow(outer);
        w.strip_leading_zero_once();
    }
    w
}

fn run_compact(digits: &CanonicalDigits) -> Rewriter {
    let mut w = Rewriter::new(digits.digits());
    let passes = w.compact_to_fixpoint();
    tracing::trace!(passes, firings = w.firings(), rings = w.digits().len(), "compaction fixpoint");
    w
}

fn run_ultra(digits: &CanonicalDigits) -> Rewriter {
    let mut w = Rewriter::new(digits.digits());
    let mut rounds = 0;
    loop {
        w.compact_to_fixpoint();
        let Some(outer) = w.innermost_triple() else { break };
        w.borrow_across(outer);
        w.strip_leading_zeros();
        rounds += 1;
    }
    tracing::trace!(rounds, firings = w.firings(), "ultra fixpoint");
    w
}
