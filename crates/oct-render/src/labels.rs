//! Ring labels, captions and export file names.

use oct_core::{RingCounts, FULL_RING, RADIX};
use serde::Serialize;
use std::fmt::Display;

/// One ring as listed next to a drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingRow {
    pub name: String,
    pub count: u8,
    pub description: String,
}

fn ring_name(power: usize) -> String {
    u32::try_from(power)
        .ok()
        .and_then(|p| u128::from(RADIX).checked_pow(p))
        .map(|v| format!("{v}s ring"))
        .unwrap_or_else(|| format!("8^{power} ring"))
}

/// Ring names outer→inner, e.g. `["64s ring", "8s ring", "1s ring"]`.
pub fn ring_names(len: usize) -> Vec<String> {
    (0..len).rev().map(ring_name).collect()
}

pub fn describe(count: u8) -> String {
    match count {
        0 => "dot".to_string(),
        FULL_RING => "full ring (8 segments)".to_string(),
        n => format!("{n} segment(s)"),
    }
}

pub fn ring_rows(counts: &RingCounts) -> Vec<RingRow> {
    ring_names(counts.len())
        .into_iter()
        .zip(counts.counts())
        .map(|(name, &count)| RingRow { name, count, description: describe(count) })
        .collect()
}

pub fn caption(octal: &str, value: impl Display) -> String {
    format!("Octal Number {octal} = Integer Number {value}")
}

/// `octavia_<octal>_<value>[_<policy>]`
pub fn file_stem(octal: &str, value: impl Display, policy: Option<&str>) -> String {
    match policy {
        Some(p) => format!("octavia_{octal}_{value}_{p}"),
        None => format!("octavia_{octal}_{value}"),
    }
}

pub fn file_name(octal: &str, value: impl Display, policy: Option<&str>, ext: &str) -> String {
    format!("{}.{ext}", file_stem(octal, value, policy))
}
