//! Policy selector — dispatches one policy, or fans out to all of them.

use crate::normalizer;
use crate::policy::{self, Policy};
use oct_core::{CanonicalDigits, OctaviaError, RingCounts};
use serde::Serialize;
use std::str::FromStr;

/// Which policies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(Policy),
    /// Every policy side by side, in [`Policy::ALL`] order.
    All,
}

impl Selection {
    pub fn policies(&self) -> Vec<Policy> {
        match self {
            Self::Single(p) => vec![*p],
            Self::All => Policy::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = OctaviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Single)
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(Policy::Compact)
    }
}

impl From<Policy> for Selection {
    fn from(policy: Policy) -> Self {
        Self::Single(policy)
    }
}

/// One policy's view of a number.
#[derive(Debug, Clone, Serialize)]
pub struct RingResult {
    pub policy: Policy,
    pub canonical: CanonicalDigits,
    pub counts: RingCounts,
    pub rewrites: usize,
}

impl RingResult {
    /// True when the policy left the canonical digits as they were.
    pub fn is_unchanged(&self) -> bool {
        self.counts.counts() == self.canonical.digits()
    }
}

/// The ring pipeline.
#[derive(Debug, Clone)]
pub struct RingPipeline {
    pub selection: Selection,
}

impl RingPipeline {
    pub fn new(selection: impl Into<Selection>) -> Self {
        Self { selection: selection.into() }
    }

    pub fn all() -> Self {
        Self::new(Selection::All)
    }

    /// Run the selected policies over canonical digits.
    pub fn run(&self, digits: &CanonicalDigits) -> Vec<RingResult> {
        self.selection
            .policies()
            .into_iter()
            .map(|policy| {
                let rewrite = policy::apply(policy, digits);
                tracing::debug!(
                    policy = policy.as_str(),
                    canonical = %digits,
                    counts = %rewrite.counts,
                    rewrites = rewrite.rewrites,
                    "applied ring policy"
                );
                RingResult {
                    policy,
                    canonical: digits.clone(),
                    counts: rewrite.counts,
                    rewrites: rewrite.rewrites,
                }
            })
            .collect()
    }

    /// Normalize raw digit text, then run.
    pub fn run_raw(&self, raw: &str) -> (CanonicalDigits, Vec<RingResult>) {
        let digits = normalizer::normalize(raw);
        let results = self.run(&digits);
        (digits, results)
    }
}

impl Default for RingPipeline {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}
