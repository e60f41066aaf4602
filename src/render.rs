use crate::island::Island;
use crate::math::segment_2d::Segment;

/// Renders an island and its runway as an SVG document.
///
/// The island outline is drawn in red and the runway in green, with a
/// caption underneath giving the vertex count, runway length and endpoint
/// locations. The y axis is flipped so the drawing follows graphing rather
/// than screen conventions. The drawing height preserves the island's
/// aspect ratio for the requested width.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_svg(island: &Island, runway: &Segment, width: u32) -> String {
    let bounds = island.bounds();
    let w = f64::from(width);
    let h = (bounds.height() / bounds.width() * w).round();
    let map_x = |x: f64| (x - bounds.min.x) / bounds.width() * w;
    let map_y = |y: f64| h - (y - bounds.min.y) / bounds.height() * h;
    // line thickness scales with the image size
    let stroke = (h / 125.0).floor().max(1.0);

    let mut points = String::new();
    for v in island.vertices() {
        points.push_str(&format!("{:.2},{:.2} ", map_x(v.x), map_y(v.y)));
    }

    let caption = format!(
        "n = {} Length = {} ({},{}) to ({},{})",
        island.vertex_count(),
        format_coord(runway.length()),
        format_coord(runway.a.x),
        format_coord(runway.a.y),
        format_coord(runway.b.x),
        format_coord(runway.b.y),
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        width + 1,
        h as u32 + 20
    ));
    svg.push_str(&format!(
        "  <polygon points=\"{}\" fill=\"none\" stroke=\"red\" stroke-width=\"{stroke}\"/>\n",
        points.trim_end()
    ));
    svg.push_str(&format!(
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"green\" stroke-width=\"{stroke}\"/>\n",
        map_x(runway.a.x),
        map_y(runway.a.y),
        map_x(runway.b.x),
        map_y(runway.b.y),
    ));
    svg.push_str(&format!(
        "  <text x=\"5\" y=\"{}\" fill=\"green\" font-size=\"11\">{caption}</text>\n",
        h as u32 + 14
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Rounds to at most 6 decimal places for the caption.
fn format_coord(value: f64) -> String {
    ((value * 1e6).round() / 1e6).to_string()
}
