use crate::{config::Config, foundation::core::Polyline};

/// Serialize `path` as SVG path data: `M <x0> <y0> L <x1> <y1> ...`.
///
/// Coordinates are rounded to the nearest integer and space-separated, in
/// vertex order. Paths with fewer than 2 points serialize to the empty
/// string.
pub fn path_data(path: &Polyline) -> String {
    let points = path.points();
    if points.len() < 2 {
        return String::new();
    }

    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("M {} {}", p.x.round() as i64, p.y.round() as i64));
        } else {
            out.push_str(&format!(" L {} {}", p.x.round() as i64, p.y.round() as i64));
        }
    }
    out
}

/// Wrap [`path_data`] in the declarative CSS animation snippet.
///
/// The template is a fixed contract: a 2-second `offset-path` animation named
/// `move`, the configured easing identifier verbatim, and `infinite` or
/// `forwards` depending on the loop setting. Deterministic for identical
/// inputs.
pub fn css_snippet(path: &Polyline, config: &Config) -> String {
    let data = path_data(path);
    let iteration = if config.looped { "infinite" } else { "forwards" };
    format!(
        ".element {{\n  offset-path: path(\n    \"{data}\"\n  );\n  animation: move 2s {easing} {iteration};\n}}",
        easing = config.easing.css_name(),
    )
}
