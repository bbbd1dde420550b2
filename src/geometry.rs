//! Cubic Bézier flattening.
//!
//! Every `CurveTo` is replaced by a polyline via adaptive subdivision until
//! the distance from the chord midpoint to the curve's true midpoint falls
//! below [`FLATTEN_TOLERANCE`]. Curves are always flattened before they reach
//! the stroke transformer, so this is the only curve-approximation strategy
//! needed anywhere in the pipeline.

use crate::path::{Path, Verb};
use crate::Point;

/// Maximum allowed distance, in surface units, between a chord's midpoint
/// and the curve's true midpoint before a cubic segment is subdivided
/// further.
pub const FLATTEN_TOLERANCE: f64 = 0.1;

/// A recursion depth cap. At this depth the chord/curve distance test has
/// long since been satisfied for any sane input; it exists only to bound
/// pathological curves (e.g. control points at infinity) instead of hanging.
const MAX_RECURSION_DEPTH: u32 = 24;

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Appends the flattened polyline for one cubic segment to `out`,
/// *excluding* the start point (the caller already holds it as the current
/// point) and including the end point.
fn flatten_cubic_into(p0: Point, p1: Point, p2: Point, p3: Point, out: &mut Vec<Point>, depth: u32) {
    let mid_chord = p0.lerp(p3, 0.5);
    let mid_curve = cubic_point(p0, p1, p2, p3, 0.5);

    let flat_enough = mid_chord.distance_to(mid_curve) <= FLATTEN_TOLERANCE;

    if flat_enough || depth >= MAX_RECURSION_DEPTH {
        out.push(p3);
        return;
    }

    // De Casteljau split at t=0.5.
    let p01 = p0.lerp(p1, 0.5);
    let p12 = p1.lerp(p2, 0.5);
    let p23 = p2.lerp(p3, 0.5);
    let p012 = p01.lerp(p12, 0.5);
    let p123 = p12.lerp(p23, 0.5);
    let p0123 = p012.lerp(p123, 0.5);

    flatten_cubic_into(p0, p01, p012, p0123, out, depth + 1);
    flatten_cubic_into(p0123, p123, p23, p3, out, depth + 1);
}

/// Returns a copy of `path` with every `CurveTo` replaced by `LineTo`
/// segments approximating it. `MoveTo`/`LineTo`/`ClosePath` pass through
/// unchanged. Endpoints are preserved exactly.
pub fn flatten(path: &Path) -> Path {
    let mut verbs = Vec::with_capacity(path.verbs.len());
    let mut points = Vec::with_capacity(path.points.len());
    let mut current = Point::zero();

    let mut point_index = 0;
    for &verb in &path.verbs {
        match verb {
            Verb::Move => {
                let p = path.points[point_index];
                point_index += 1;
                verbs.push(Verb::Move);
                points.push(p);
                current = p;
            }
            Verb::Line => {
                let p = path.points[point_index];
                point_index += 1;
                verbs.push(Verb::Line);
                points.push(p);
                current = p;
            }
            Verb::Cubic => {
                let c1 = path.points[point_index];
                let c2 = path.points[point_index + 1];
                let end = path.points[point_index + 2];
                point_index += 3;

                let mut flattened = Vec::new();
                flatten_cubic_into(current, c1, c2, end, &mut flattened, 0);
                for p in flattened {
                    verbs.push(Verb::Line);
                    points.push(p);
                }
                current = end;
            }
            Verb::Close => {
                verbs.push(Verb::Close);
            }
        }
    }

    Path { verbs, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathBuilder;

    #[test]
    fn flattening_preserves_endpoints() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.curve_to(10.0, 0.0, 10.0, 10.0, 0.0, 10.0);
        let path = pb.finish().unwrap();

        let flat = flatten(&path);
        assert_eq!(flat.points.first().copied(), Some(Point::new(0.0, 0.0)));
        assert_eq!(flat.points.last().copied(), Some(Point::new(0.0, 10.0)));
        // A curvy cubic needs more than one line segment to approximate it.
        assert!(flat.points.len() > 2);
    }

    #[test]
    fn straight_cubic_flattens_to_one_segment() {
        // Control points colinear with the endpoints: already flat.
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.curve_to(5.0, 0.0, 10.0, 0.0, 15.0, 0.0);
        let path = pb.finish().unwrap();

        let flat = flatten(&path);
        assert_eq!(flat.points.len(), 2);
        assert_eq!(flat.points[1], Point::new(15.0, 0.0));
    }
}
