use crate::foundation::core::Polyline;

/// Cumulative arc length per vertex of a polyline.
///
/// Entry `i` is the Euclidean length of the polyline from vertex 0 to vertex
/// `i`; entry 0 is always `0.0` and the sequence is non-decreasing. For
/// polylines shorter than 2 points the table is the single entry `[0.0]`.
///
/// The table is derived data. Paths stay short (low hundreds of vertices at
/// most), so it is rebuilt on demand rather than cached or incrementally
/// maintained.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable(Vec<f64>);

impl DistanceTable {
    /// Build the cumulative table for `path`. Pure, O(n).
    pub fn build(path: &Polyline) -> Self {
        let points = path.points();
        if points.len() < 2 {
            return Self(vec![0.0]);
        }

        let mut cumulative = Vec::with_capacity(points.len());
        cumulative.push(0.0);
        let mut total = 0.0;
        for pair in points.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }
        Self(cumulative)
    }

    /// Number of entries (equals the vertex count for paths with >= 2
    /// points).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Tables always hold at least the leading zero entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cumulative distance at vertex `idx`, if in range.
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied()
    }

    /// Total arc length of the polyline.
    pub fn total(&self) -> f64 {
        *self.0.last().unwrap_or(&0.0)
    }

    /// All cumulative entries in vertex order.
    pub fn entries(&self) -> &[f64] {
        &self.0
    }

    /// Index `i` of the first segment with
    /// `table[i] <= target <= table[i + 1]`, scanning from the start so ties
    /// resolve to the earliest qualifying segment. Falls back to the last
    /// segment when nothing brackets `target` (out-of-range input).
    pub fn segment_for(&self, target: f64) -> usize {
        let last_segment = self.0.len().saturating_sub(2);
        for i in 0..self.0.len().saturating_sub(1) {
            if self.0[i] <= target && target <= self.0[i + 1] {
                return i;
            }
        }
        last_segment
    }
}
