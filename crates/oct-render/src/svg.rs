//! SVG drawing of ring counts.

use crate::geometry::{edges_from_top, midpoint, octagon_vertices, ring_radius, Point};
use oct_core::{RenderConfig, RingCounts, FULL_RING};

/// Blank border around the outermost ring, in drawing units.
const MARGIN: f64 = 0.3;
/// Space reserved under the rings for the caption, in drawing units.
const CAPTION_HEIGHT: f64 = 0.8;

/// Draw `counts` outer→inner as concentric octagons.
///
/// Every ring gets a faint guide octagon. A zero count is a dot on the
/// midpoint of the top edge; otherwise `count` edges are traced from the
/// top edge counter-clockwise. `[0]` draws just the 1s ring and its dot.
pub fn render_svg(counts: &RingCounts, config: &RenderConfig, caption: Option<&str>) -> String {
    let rings = counts.len().max(1);
    let half = (ring_radius(config, rings - 1) + MARGIN) * config.scale;
    let width = 2.0 * half;
    let height = width + if caption.is_some() { CAPTION_HEIGHT * config.scale } else { 0.0 };
    let to_svg = |p: Point| (half + p.x * config.scale, half - p.y * config.scale);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.1}\" height=\"{height:.1}\" viewBox=\"0 0 {width:.1} {height:.1}\">\n"
    );

    for (idx, &count) in counts.counts().iter().enumerate() {
        let power = counts.len() - 1 - idx;
        let vertices = octagon_vertices(ring_radius(config, power));

        let points = vertices
            .iter()
            .map(|&v| {
                let (x, y) = to_svg(v);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "  <polygon points=\"{points}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{w}\" stroke-opacity=\"{a}\"/>\n",
            color = escape_xml(&config.guide_color),
            w = config.guide_width,
            a = config.guide_alpha,
        ));

        let edges = edges_from_top(&vertices);
        if count == 0 {
            let (top_from, top_to) = edges[0];
            let (cx, cy) = to_svg(midpoint(top_from, top_to));
            svg.push_str(&format!(
                "  <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{color}\"/>\n",
                r = config.dot_radius * config.scale,
                color = escape_xml(&config.dot_color),
            ));
            continue;
        }
        for &(p, q) in edges.iter().take(usize::from(count.min(FULL_RING))) {
            let (x1, y1) = to_svg(p);
            let (x2, y2) = to_svg(q);
            svg.push_str(&format!(
                "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"{w}\" stroke-linecap=\"round\"/>\n",
                color = escape_xml(&config.segment_color),
                w = config.segment_width,
            ));
        }
    }

    if let Some(text) = caption {
        svg.push_str(&format!(
            "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"{size:.1}\">{text}</text>\n",
            x = half,
            y = width + CAPTION_HEIGHT * config.scale / 2.0,
            size = 0.2 * config.scale,
            text = escape_xml(text),
        ));
    }

    svg.push_str("</svg>\n");
    tracing::trace!(rings = counts.len(), bytes = svg.len(), "rendered svg");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
