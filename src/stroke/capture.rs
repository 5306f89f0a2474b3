use crate::foundation::core::{Point, Polyline};

/// Minimum Euclidean distance (in canvas units) a pointer sample must travel
/// from the last accepted vertex before it extends the stroke.
///
/// This is a deliberate lossy simplification of the raw pointer stream, not a
/// fidelity-preserving filter, and it is fixed rather than configurable.
pub const MIN_POINT_SPACING: f64 = 10.0;

/// Start a new one-point stroke at `p`, replacing whatever was drawn before.
pub fn begin_stroke(p: Point) -> Polyline {
    Polyline::from_points(vec![p])
}

/// Offer a pointer sample to the stroke.
///
/// The point is appended only if it is farther than [`MIN_POINT_SPACING`]
/// from the last vertex; closer samples are dropped. Returns whether the
/// point was accepted. An empty stroke accepts any point.
pub fn extend_stroke(path: &mut Polyline, p: Point) -> bool {
    let Some(last) = path.last() else {
        path.push(p);
        return true;
    };
    if last.distance(p) > MIN_POINT_SPACING {
        path.push(p);
        return true;
    }
    false
}
