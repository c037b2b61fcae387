//! Octavia renderer — draws ring counts as concentric octagons.
//!
//! Each place value is a ring: a dot for 0, that many edges (from the top,
//! counter-clockwise) for 1–7, and a fully traced octagon for 8.

pub mod geometry;
pub mod labels;
pub mod svg;

pub use labels::{caption, describe, file_name, file_stem, ring_names, ring_rows, RingRow};
pub use svg::render_svg;
