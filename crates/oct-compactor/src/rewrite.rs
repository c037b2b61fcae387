//! Rewrite primitive shared by the Minimal, Compact and Ultra policies.
//!
//! Compaction rule: for adjacent places `(outer, inner)` with
//! `outer >= 1` and `inner == 0`, take one unit from `outer` and set
//! `inner` to 8. One unit at `8^(p+1)` equals eight units at `8^p`, so the
//! value is unchanged.
//!
//! Ultra rule: for a triple `(outer, mid, inner)` with `outer >= 1`,
//! `mid == 8` and `inner == 0`, take one unit from `outer` and set
//! `inner` to 8, leaving `mid` untouched.

use oct_core::{RingCounts, FULL_RING};

/// Whether `(outer, inner)` at `outer` can fire the compaction rule.
fn pair_fires(digits: &[u8], outer: usize) -> bool {
    digits[outer] >= 1 && digits[outer + 1] == 0
}

fn triple_fires(digits: &[u8], outer: usize) -> bool {
    digits[outer] >= 1 && digits[outer + 1] == FULL_RING && digits[outer + 2] == 0
}

/// True if some adjacent pair `(>= 1, 0)` remains.
pub fn has_compaction_site(digits: &[u8]) -> bool {
    (0..digits.len().saturating_sub(1)).any(|i| pair_fires(digits, i))
}

/// True if some triple `(>= 1, 8, 0)` remains.
pub fn has_ultra_site(digits: &[u8]) -> bool {
    (0..digits.len().saturating_sub(2)).any(|i| triple_fires(digits, i))
}

/// Working buffer for one policy run. Counts rule firings.
#[derive(Debug, Clone)]
pub(crate) struct Rewriter {
    digits: Vec<u8>,
    firings: usize,
}

impl Rewriter {
    pub fn new(digits: &[u8]) -> Self {
        Self { digits: digits.to_vec(), firings: 0 }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn firings(&self) -> usize {
        self.firings
    }

    /// Fire the compaction rule at `outer`. Caller checks eligibility.
    pub fn borrow(&mut self, outer: usize) {
        self.digits[outer] -= 1;
        self.digits[outer + 1] = FULL_RING;
        self.firings += 1;
    }

    /// Fire the ultra rule at `outer`. Caller checks eligibility.
    pub fn borrow_across(&mut self, outer: usize) {
        self.digits[outer] -= 1;
        self.digits[outer + 2] = FULL_RING;
        self.firings += 1;
    }

    /// Drop a single leading zero, never the last digit.
    pub fn strip_leading_zero_once(&mut self) -> bool {
        if self.digits.len() > 1 && self.digits[0] == 0 {
            self.digits.remove(0);
            true
        } else {
            false
        }
    }

    /// Drop leading zeros until the leading digit is nonzero or one remains.
    pub fn strip_leading_zeros(&mut self) -> bool {
        let mut stripped = false;
        while self.strip_leading_zero_once() {
            stripped = true;
        }
        stripped
    }

    /// Leftmost (most-significant) eligible compaction pair.
    pub fn leftmost_pair(&self) -> Option<usize> {
        (0..self.digits.len().saturating_sub(1)).find(|&i| pair_fires(&self.digits, i))
    }

    /// Innermost eligible ultra triple.
    pub fn innermost_triple(&self) -> Option<usize> {
        (0..self.digits.len().saturating_sub(2))
            .rev()
            .find(|&i| triple_fires(&self.digits, i))
    }

    /// One compaction pass, inner pairs first, then strip leading zeros.
    /// A firing may empty its outer place, which the next pair out sees in
    /// the same pass. Returns whether anything changed.
    pub fn compact_pass(&mut self) -> bool {
        let mut changed = false;
        for outer in (0..self.digits.len().saturating_sub(1)).rev() {
            if pair_fires(&self.digits, outer) {
                self.borrow(outer);
                changed = true;
            }
        }
        if self.strip_leading_zeros() {
            changed = true;
        }
        changed
    }

    /// Run compaction passes until one changes nothing. Returns the number
    /// of passes that made progress.
    pub fn compact_to_fixpoint(&mut self) -> usize {
        let mut passes = 0;
        while self.compact_pass() {
            passes += 1;
        }
        passes
    }

    pub fn into_ring_counts(self) -> RingCounts {
        RingCounts::from_rewritten(self.digits)
    }
}
