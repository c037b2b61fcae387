//! Digit normalizer — raw text to canonical base-8 digits by carry propagation.

use oct_core::{CanonicalDigits, RingCounts, RADIX};
use regex::Regex;
use std::sync::LazyLock;

static RE_NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]+").unwrap());

/// Keep only the ASCII digit characters of `raw`.
pub fn digit_chars(raw: &str) -> String {
    RE_NON_DIGIT.replace_all(raw, "").into_owned()
}

/// Normalize free text into canonical base-8 digits.
///
/// Each digit character is a unit count at its place; `8` and `9` carry
/// into the next place out. Text without digits normalizes to `[0]`.
pub fn normalize(raw: &str) -> CanonicalDigits {
    let digits: Vec<u32> = digit_chars(raw).bytes().map(|b| u32::from(b - b'0')).collect();
    carry(&digits)
}

/// Propagate carries through per-place unit counts (most-significant
/// first) and strip leading zeros.
pub fn carry(digits: &[u32]) -> CanonicalDigits {
    if digits.is_empty() {
        return CanonicalDigits::zero();
    }
    let radix = u32::from(RADIX);
    let mut d = digits.to_vec();

    let mut i = d.len();
    while i > 0 {
        let pos = i - 1;
        if d[pos] >= radix {
            let carry = d[pos] / radix;
            d[pos] %= radix;
            if pos == 0 {
                // New outer place; step back onto it in case it overflows too.
                d.insert(0, carry);
                i += 1;
            } else {
                d[pos - 1] += carry;
            }
        }
        i -= 1;
    }

    let leading = d.iter().take(d.len() - 1).take_while(|&&x| x == 0).count();
    CanonicalDigits::from_normalized(d[leading..].iter().map(|&x| x as u8).collect())
}

/// Canonical digits representing the same value as `counts`.
pub fn canonicalize(counts: &RingCounts) -> CanonicalDigits {
    let digits: Vec<u32> = counts.counts().iter().map(|&c| u32::from(c)).collect();
    carry(&digits)
}
