//! Base-8 digit sequences, most-significant digit first.
//!
//! Two forms exist and are kept apart by type:
//! - [`CanonicalDigits`]: every digit in `0..=7`, the literal base-8 form.
//! - [`RingCounts`]: every count in `0..=8`, produced by a compaction policy.
//!   An `8` is a fully traced ring.
//!
//! Both carry the same value function `Σ d[i] * 8^(L-1-i)`.

use crate::error::{OctaviaError, Result};
use serde::Serialize;
use std::fmt;

/// Number base of a ring numeral.
pub const RADIX: u8 = 8;

/// Ring count of a fully traced octagon.
pub const FULL_RING: u8 = 8;

fn checked_value(digits: &[u8]) -> Result<u128> {
    digits.iter().try_fold(0u128, |acc, &d| {
        acc.checked_mul(RADIX as u128)
            .and_then(|v| v.checked_add(d as u128))
            .ok_or_else(|| OctaviaError::ValueOverflow { len: digits.len() })
    })
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for d in digits {
        write!(f, "{d}")?;
    }
    Ok(())
}

/// Literal base-8 digits: each in `0..=7`, no leading zero unless the
/// sequence is exactly `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalDigits(Vec<u8>);

impl CanonicalDigits {
    /// Validate an already-split digit vector.
    pub fn new(digits: Vec<u8>) -> Result<Self> {
        if digits.is_empty() {
            return Err(OctaviaError::InvalidDigits("empty digit sequence".into()));
        }
        if let Some(d) = digits.iter().find(|&&d| d >= RADIX) {
            return Err(OctaviaError::InvalidDigits(format!("digit {d} is not below {RADIX}")));
        }
        if digits.len() > 1 && digits[0] == 0 {
            return Err(OctaviaError::InvalidDigits("superfluous leading zero".into()));
        }
        Ok(Self(digits))
    }

    /// The single-digit sequence `[0]`.
    pub fn zero() -> Self {
        Self(vec![0])
    }

    pub fn from_u64(n: u64) -> Self {
        Self::from_u128(n as u128)
    }

    pub fn from_u128(n: u128) -> Self {
        Self(format!("{n:o}").bytes().map(|b| b - b'0').collect())
    }

    /// Caller guarantees the canonical invariant (digits in range, leading
    /// zero stripped). Used by the normalizer after carry propagation.
    pub fn from_normalized(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d < RADIX));
        debug_assert!(digits.len() == 1 || digits[0] != 0);
        Self(digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    pub fn value(&self) -> Result<u128> {
        checked_value(&self.0)
    }

    /// The canonical octal string, e.g. `"101"` for 65.
    pub fn to_octal_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CanonicalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl AsRef<[u8]> for CanonicalDigits {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Per-ring counts outer→inner: `0` is a dot, `1..=7` that many edges,
/// `8` a full ring. No leading zero unless the sequence is exactly `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RingCounts(Vec<u8>);

impl RingCounts {
    /// Wrap the output of a rewrite. The rewrite engine upholds the
    /// ring-count invariant; it is only checked in debug builds.
    pub fn from_rewritten(counts: Vec<u8>) -> Self {
        debug_assert!(!counts.is_empty());
        debug_assert!(counts.iter().all(|&c| c <= FULL_RING));
        debug_assert!(counts.len() == 1 || counts[0] != 0);
        Self(counts)
    }

    pub fn counts(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    /// Number of fully traced rings.
    pub fn full_rings(&self) -> usize {
        self.0.iter().filter(|&&c| c == FULL_RING).count()
    }

    pub fn value(&self) -> Result<u128> {
        checked_value(&self.0)
    }
}

impl fmt::Display for RingCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl AsRef<[u8]> for RingCounts {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
