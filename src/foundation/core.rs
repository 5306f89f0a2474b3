use crate::foundation::error::{TracelineError, TracelineResult};

pub use kurbo::{Point, Vec2};

/// Rendering-surface dimensions in pixels.
///
/// Purely presentational: resizing the surface never rescales or otherwise
/// touches path coordinates (they stay in the canvas space they were drawn
/// in), it only forces a redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> TracelineResult<Self> {
        if width == 0 || height == 0 {
            return Err(TracelineError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// An ordered sequence of 2D points connected by straight segments.
///
/// Insertion order is significant: it defines traversal direction and segment
/// adjacency. A polyline of length 0 or 1 has no defined direction and
/// degenerates to a single-point "animation". Polylines are replaced
/// wholesale when a new stroke begins and mutated only by append.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Empty polyline ("nothing drawn yet").
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a polyline from existing points, in order.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no points have been captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest valid vertex index, or `None` for an empty polyline.
    pub fn max_index(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Vertex at `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<Point> {
        self.0.get(idx).copied()
    }

    /// All vertices in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Append a vertex at the end.
    pub fn push(&mut self, p: Point) {
        self.0.push(p);
    }
}
