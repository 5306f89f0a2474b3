use crate::{
    config::Config,
    foundation::core::{Point, Polyline},
    stroke::arclen::DistanceTable,
};

/// Arc-length-correct position on `path` at animation cursor `progress`.
///
/// `progress` is in vertex-index units (`0.0 ..= len - 1`), the raw cursor
/// the driver advances. The query normalizes it, applies the configured
/// easing, converts the eased time into a distance along the polyline and
/// interpolates inside the bracketing segment, so marker speed is visually
/// uniform across unevenly spaced vertices.
///
/// Degenerate inputs never fail:
/// - empty path: the origin
/// - single-point path, or all points coincident: the first point
/// - `progress` outside `[0, len - 1]`: clamped
///
/// The returned point always lies on the polyline. Pure: identical inputs
/// give identical output, and the distance table is rebuilt per call (paths
/// are short; see [`DistanceTable`]).
pub fn sample_position(path: &Polyline, progress: f64, config: &Config) -> Point {
    let Some(max_idx) = path.max_index() else {
        return Point::ZERO;
    };
    let Some(first) = path.first() else {
        return Point::ZERO;
    };
    if max_idx == 0 {
        return first;
    }

    let distances = DistanceTable::build(path);
    let total = distances.total();
    if total == 0.0 {
        return first;
    }

    let raw_t = progress.clamp(0.0, max_idx as f64) / max_idx as f64;
    let eased_t = config.easing.apply(raw_t);
    let target = eased_t * total;

    let seg = distances.segment_for(target);
    if seg >= max_idx {
        return path.last().unwrap_or(first);
    }

    let (Some(start), Some(end)) = (path.get(seg), path.get(seg + 1)) else {
        return path.last().unwrap_or(first);
    };
    let (Some(seg_start), Some(seg_end)) = (distances.get(seg), distances.get(seg + 1)) else {
        return path.last().unwrap_or(first);
    };

    let seg_len = seg_end - seg_start;
    // Coincident points: hold the segment start instead of dividing by zero.
    let fraction = if seg_len > 0.0 {
        (target - seg_start) / seg_len
    } else {
        0.0
    };

    Point::new(
        start.x + (end.x - start.x) * fraction,
        start.y + (end.y - start.y) * fraction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ease::Ease;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::from_points(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn cfg(easing: Ease) -> Config {
        Config {
            easing,
            ..Config::default()
        }
    }

    #[test]
    fn degenerate_paths() {
        let cfg = cfg(Ease::Linear);
        assert_eq!(sample_position(&Polyline::new(), 0.5, &cfg), Point::ZERO);
        assert_eq!(
            sample_position(&line(&[(7.0, 8.0)]), 0.5, &cfg),
            Point::new(7.0, 8.0)
        );
        // All points coincide: zero total length.
        assert_eq!(
            sample_position(&line(&[(3.0, 3.0), (3.0, 3.0)]), 0.7, &cfg),
            Point::new(3.0, 3.0)
        );
    }

    #[test]
    fn endpoints_are_exact_for_linear() {
        let path = line(&[(0.0, 0.0), (40.0, 30.0), (40.0, 90.0)]);
        let cfg = cfg(Ease::Linear);
        assert_eq!(sample_position(&path, 0.0, &cfg), Point::new(0.0, 0.0));
        assert_eq!(sample_position(&path, 2.0, &cfg), Point::new(40.0, 90.0));
    }

    #[test]
    fn right_angle_scenario_hits_vertex() {
        // Path [{0,0},{100,0},{100,100}], linear, progress 1.0:
        // rawT = 0.5, target = 100, exactly at the corner vertex.
        let path = line(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        assert_eq!(
            sample_position(&path, 1.0, &cfg(Ease::Linear)),
            Point::new(100.0, 0.0)
        );
    }

    #[test]
    fn right_angle_scenario_mid_segment() {
        // Same path, progress 0.5: rawT = 0.25, target = 50, halfway along
        // the first segment.
        let path = line(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
        assert_eq!(
            sample_position(&path, 0.5, &cfg(Ease::Linear)),
            Point::new(50.0, 0.0)
        );
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let path = line(&[(0.0, 0.0), (100.0, 0.0)]);
        let cfg = cfg(Ease::Linear);
        assert_eq!(sample_position(&path, -3.0, &cfg), Point::new(0.0, 0.0));
        assert_eq!(sample_position(&path, 99.0, &cfg), Point::new(100.0, 0.0));
    }

    #[test]
    fn sampling_is_idempotent() {
        let path = line(&[(0.0, 0.0), (60.0, 25.0), (10.0, 80.0)]);
        let cfg = cfg(Ease::EaseInOut);
        let a = sample_position(&path, 1.3, &cfg);
        let b = sample_position(&path, 1.3, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn output_lies_within_a_bracketing_segment() {
        let path = line(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)]);
        let cfg = cfg(Ease::EaseOut);
        for step in 0..=30 {
            let progress = 3.0 * f64::from(step) / 30.0;
            let p = sample_position(&path, progress, &cfg);
            let on_some_segment = path.points().windows(2).any(|seg| {
                let (a, b) = (seg[0], seg[1]);
                let len = a.distance(b);
                if len == 0.0 {
                    return p == a;
                }
                // p must equal a + fraction * (b - a) with fraction in [0,1].
                let fraction = ((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / (len * len);
                let reconstructed = Point::new(
                    a.x + (b.x - a.x) * fraction,
                    a.y + (b.y - a.y) * fraction,
                );
                (-1e-9..=1.0 + 1e-9).contains(&fraction)
                    && reconstructed.distance(p) < 1e-9
            });
            assert!(on_some_segment, "progress {progress} left the polyline");
        }
    }

    #[test]
    fn target_distance_is_monotone_for_all_easings() {
        let path = line(&[(0.0, 0.0), (30.0, 40.0), (30.0, 140.0), (90.0, 140.0)]);
        let table = DistanceTable::build(&path);
        let total = table.total();
        let max_idx = path.max_index().unwrap() as f64;
        for easing in Ease::ALL {
            let mut prev = -1.0;
            for step in 0..=50 {
                let progress = max_idx * f64::from(step) / 50.0;
                let target = easing.apply(progress / max_idx) * total;
                assert!(target >= prev);
                prev = target;
            }
        }
    }

    #[test]
    fn coincident_interior_points_hold_position() {
        let path = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        // Target distance exactly at the duplicated vertex resolves to the
        // earliest qualifying segment and stays on the polyline.
        let p = sample_position(&path, 1.5, &cfg(Ease::Linear));
        assert_eq!(p, Point::new(10.0, 0.0));
    }
}
