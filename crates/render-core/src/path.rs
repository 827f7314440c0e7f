//! Approximation of curved primitives with the path operators PDF offers.

use pdfsmith_types::Point;

/// Control-point offset ratio for a quarter circle drawn as one cubic Bezier.
pub const KAPPA: f32 = 0.552_284_8;

/// Degrees of sweep covered by each group of arc segments.
const ARC_QUADRANT_DEGREES: f32 = 90.0;
/// Straight segments emitted per started quadrant of sweep.
const ARC_SEGMENTS_PER_QUADRANT: usize = 4;
/// Sweeps beyond one full turn only retrace the circle.
const MAX_SWEEP_DEGREES: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// A closed ellipse as four cubic Beziers, one per quadrant, running
/// counter-clockwise from `(cx + rx, cy)`.
///
/// The axis points `(cx ± rx, cy)` and `(cx, cy ± ry)` are exact segment
/// endpoints.
pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Vec<PathSegment> {
    let (ox, oy) = (KAPPA * rx, KAPPA * ry);
    let right = Point::new(cx + rx, cy);
    let top = Point::new(cx, cy + ry);
    let left = Point::new(cx - rx, cy);
    let bottom = Point::new(cx, cy - ry);

    vec![
        PathSegment::MoveTo(right),
        PathSegment::CurveTo {
            c1: Point::new(cx + rx, cy + oy),
            c2: Point::new(cx + ox, cy + ry),
            to: top,
        },
        PathSegment::CurveTo {
            c1: Point::new(cx - ox, cy + ry),
            c2: Point::new(cx - rx, cy + oy),
            to: left,
        },
        PathSegment::CurveTo {
            c1: Point::new(cx - rx, cy - oy),
            c2: Point::new(cx - ox, cy - ry),
            to: bottom,
        },
        PathSegment::CurveTo {
            c1: Point::new(cx + ox, cy - ry),
            c2: Point::new(cx + rx, cy - oy),
            to: right,
        },
        PathSegment::Close,
    ]
}

pub fn circle(cx: f32, cy: f32, r: f32) -> Vec<PathSegment> {
    ellipse(cx, cy, r, r)
}

fn clamp_sweep(sweep_degrees: f32) -> f32 {
    sweep_degrees.clamp(-MAX_SWEEP_DEGREES, MAX_SWEEP_DEGREES)
}

/// Number of straight segments used for an arc of the given sweep, at most
/// 16 for a full turn.
pub fn arc_segment_count(sweep_degrees: f32) -> usize {
    let quadrants = (clamp_sweep(sweep_degrees).abs() / ARC_QUADRANT_DEGREES).ceil() as usize;
    (quadrants * ARC_SEGMENTS_PER_QUADRANT).max(1)
}

/// A circular arc as straight chords.
///
/// Angles are in degrees, counter-clockwise from the positive x axis; a
/// negative sweep runs clockwise. Each returned pair is one chord. Sweeps
/// are clamped to one full turn in either direction.
pub fn arc_segments(cx: f32, cy: f32, r: f32, start_degrees: f32, sweep_degrees: f32) -> Vec<(Point, Point)> {
    let sweep_degrees = clamp_sweep(sweep_degrees);
    let count = arc_segment_count(sweep_degrees);
    let step = sweep_degrees / count as f32;
    let point_at = |degrees: f32| {
        let radians = degrees.to_radians();
        Point::new(cx + r * radians.cos(), cy + r * radians.sin())
    };

    (0..count)
        .map(|i| {
            let from = start_degrees + step * i as f32;
            (point_at(from), point_at(from + step))
        })
        .collect()
}

/// A closed polygon through `points`; fewer than two points yield no path.
pub fn polygon(points: &[Point]) -> Vec<PathSegment> {
    let [first, rest @ ..] = points else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }
    let mut segments = Vec::with_capacity(points.len() + 1);
    segments.push(PathSegment::MoveTo(*first));
    segments.extend(rest.iter().copied().map(PathSegment::LineTo));
    segments.push(PathSegment::Close);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(path: &[PathSegment]) -> Vec<Point> {
        path.iter()
            .filter_map(|segment| match segment {
                PathSegment::CurveTo { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn circle_endpoints_are_exact_axis_points() {
        for (cx, cy, r) in [(0.0, 0.0, 1.0), (120.5, 300.25, 42.0), (-10.0, 7.0, 0.001), (300.0, 400.0, 1e4)] {
            let path = circle(cx, cy, r);
            assert_eq!(path[0], PathSegment::MoveTo(Point::new(cx + r, cy)));
            assert_eq!(
                endpoints(&path),
                vec![
                    Point::new(cx, cy + r),
                    Point::new(cx - r, cy),
                    Point::new(cx, cy - r),
                    Point::new(cx + r, cy),
                ]
            );
            assert_eq!(path.last(), Some(&PathSegment::Close));
        }
    }

    #[test]
    fn ellipse_control_points_use_kappa() {
        let path = ellipse(0.0, 0.0, 10.0, 5.0);
        let PathSegment::CurveTo { c1, c2, .. } = path[1] else {
            panic!("expected a curve");
        };
        assert_eq!(c1, Point::new(10.0, KAPPA * 5.0));
        assert_eq!(c2, Point::new(KAPPA * 10.0, 5.0));
    }

    #[test]
    fn arc_segment_count_rounds_up_per_quadrant() {
        assert_eq!(arc_segment_count(0.0), 1);
        assert_eq!(arc_segment_count(45.0), 4);
        assert_eq!(arc_segment_count(90.0), 4);
        assert_eq!(arc_segment_count(91.0), 8);
        assert_eq!(arc_segment_count(-180.0), 8);
        assert_eq!(arc_segment_count(360.0), 16);
    }

    #[test]
    fn huge_sweeps_are_capped_at_one_turn() {
        assert_eq!(arc_segment_count(1.0e20), 16);
        assert_eq!(arc_segment_count(-7200.0), 16);
        assert_eq!(arc_segment_count(f32::INFINITY), 16);

        let chords = arc_segments(100.0, 100.0, 10.0, 0.0, 1.0e20);
        assert_eq!(chords.len(), 16);
        let (_, end) = chords[15];
        assert!((end.x - 110.0).abs() < 1e-3 && (end.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn arc_chords_are_contiguous_and_on_the_circle() {
        let chords = arc_segments(50.0, 50.0, 20.0, 0.0, 90.0);
        assert_eq!(chords.len(), 4);
        for pair in chords.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        let (first, _) = chords[0];
        let (_, last) = chords[3];
        assert!((first.x - 70.0).abs() < 1e-4 && (first.y - 50.0).abs() < 1e-4);
        assert!((last.x - 50.0).abs() < 1e-3 && (last.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn negative_sweep_runs_clockwise() {
        let chords = arc_segments(0.0, 0.0, 10.0, 0.0, -90.0);
        let (_, end) = chords[chords.len() - 1];
        assert!((end.y + 10.0).abs() < 1e-3);
    }

    #[test]
    fn polygon_needs_two_points() {
        assert!(polygon(&[]).is_empty());
        assert!(polygon(&[Point::new(1.0, 1.0)]).is_empty());
        let triangle = polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)]);
        assert_eq!(triangle.len(), 4);
        assert_eq!(triangle[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(triangle[3], PathSegment::Close);
    }
}
