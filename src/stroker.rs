//! The stroke transformer.
//!
//! Converts a flattened polyline plus thickness/join/miter-limit/cap into
//! one or more closed, fillable polygons. The overall shape of the
//! algorithm — walk each subpath once, track an inner and an outer offset
//! contour, join them at the ends — is the familiar one from Skia-lineage
//! stroke ports, but the per-vertex math here is the closed-form "face"
//! model: offset rectangles around each segment, intersected pairwise at
//! each vertex, rather than quadrant-based tangent bookkeeping.

use crate::path::{Path, Verb};
use crate::Point;

use arrayvec::ArrayVec;
use std::f64::consts::PI;
use std::iter::FromIterator;

/// Upper bound on the points a single join or cap can contribute: a miter or
/// bevel needs at most 2, and a round one adds at most `ceil(PI / ROUND_STEP)
/// - 1` intermediate arc points (7, at the current step size) to that same
/// 2 — 16 leaves headroom without tying the bound to `ROUND_STEP` exactly.
const MAX_JOIN_POINTS: usize = 16;

/// How two stroked segments are joined at a shared vertex.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum JoinMode {
    Miter,
    Round,
    Bevel,
}

/// How an open stroked path is terminated at its endpoints.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CapMode {
    Butt,
    Square,
    Round,
}

/// Stroke parameters.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct StrokeProps {
    /// Stroke width in surface units. Must be > 0 for a visible result.
    pub thickness: f64,
    pub join: JoinMode,
    /// Maximum ratio of miter length to half-thickness before a miter join
    /// falls back to a bevel.
    pub miter_limit: f64,
    pub cap: CapMode,
}

impl Default for StrokeProps {
    fn default() -> Self {
        StrokeProps {
            thickness: 1.0,
            join: JoinMode::Miter,
            miter_limit: 4.0,
            cap: CapMode::Butt,
        }
    }
}

/// Radians per round-join/cap line segment. ~22.5 degrees keeps circles
/// visually smooth without generating an unbounded number of points for
/// thick strokes.
const ROUND_STEP: f64 = PI / 8.0;

/// Converts a (already-flattened, curve-free) path into the stroked outline
/// polygon(s), ready to hand to the filler with [`crate::FillRule::NonZero`].
///
/// Returns `None` when every subpath is degenerate — e.g. a single-point
/// subpath, or a subpath with zero length throughout.
pub fn stroke(flattened: &Path, props: &StrokeProps) -> Option<Path> {
    if props.thickness <= 0.0 {
        log::warn!("stroke thickness must be positive, got {}", props.thickness);
        return None;
    }

    let mut verbs = Vec::new();
    let mut points = Vec::new();
    let mut any = false;

    for subpath in flattened.subpaths() {
        for ring in stroke_subpath(&subpath.points, subpath.closed, props) {
            if ring.len() < 3 {
                continue;
            }
            any = true;
            verbs.push(Verb::Move);
            points.push(ring[0]);
            for p in &ring[1..] {
                verbs.push(Verb::Line);
                points.push(*p);
            }
            verbs.push(Verb::Close);
        }
    }

    if !any {
        None
    } else {
        Some(Path { verbs, points })
    }
}

/// Removes consecutive duplicate points (zero-length segments); if `closed`,
/// also drops a final point that duplicates the first.
fn dedup_vertices(points: &[Point], closed: bool) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last().map_or(true, |&last| last != p) {
            out.push(p);
        }
    }
    if closed && out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

fn unit_normal_ccw(p0: Point, p1: Point) -> Option<Point> {
    p1.sub(p0).normalized().map(|d| d.perp_ccw())
}

/// Returns the intersection of two lines given as point + direction. `None`
/// for parallel (or anti-parallel) lines — parallel faces degenerate to
/// the shared offset point, handled by the caller.
fn line_intersect(p1: Point, d1: Point, p2: Point, d2: Point) -> Option<Point> {
    let denom = d1.cross(d2);
    if denom.abs() < 1e-9 {
        return None;
    }
    let diff = p2.sub(p1);
    let t = diff.cross(d2) / denom;
    Some(p1.add(d1.scale(t)))
}

/// Rotates vector `v` by `angle` radians.
fn rotate(v: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    Point::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Intermediate points (exclusive of `from`/`to`) of an arc around `center`,
/// starting at offset vector `from` and ending at offset vector `to`,
/// sweeping through whichever rotation direction passes closest to
/// `bulge_dir`. Used for both round joins (sweep < π) and round caps
/// (sweep == π, where `from`/`to` alone don't disambiguate direction).
fn arc_points(center: Point, from: Point, to: Point, bulge_dir: Point) -> ArrayVec<Point, MAX_JOIN_POINTS> {
    // `rotate(v, t)` turns `v` by `+t` using the standard (x cos - y sin, x
    // sin + y cos) matrix; matching that direction with `atan2(x, y)` (angle
    // measured from +y toward +x) means the delta needed to carry `from` to
    // `to` is `angle(from) - angle(to)`, not the other way around — verified
    // by hand: `from = (1,0)`, `to = (0,1)` needs `t = PI/2`, and
    // `atan2(1,0) - atan2(0,1) = PI/2 - 0`.
    let total = {
        let a = from.x.atan2(from.y);
        let b = to.x.atan2(to.y);
        let mut d = a - b;
        while d <= -PI {
            d += 2.0 * PI;
        }
        while d > PI {
            d -= 2.0 * PI;
        }
        d
    };

    // Disambiguate a ~180 degree sweep (where +total and -total are both
    // valid short paths) using which side actually bulges outward.
    let mut total = total;
    if (total.abs() - PI).abs() < 1e-6 {
        let probe = rotate(from, total / 2.0);
        if probe.dot(bulge_dir) < 0.0 {
            total = -total;
        }
    }

    let steps = (total.abs() / ROUND_STEP).ceil().max(1.0) as usize;
    let mut out = ArrayVec::new();
    for i in 1..steps {
        let t = total * (i as f64) / (steps as f64);
        // `steps` is capped by `total.abs() <= PI`, so this never overflows
        // `MAX_JOIN_POINTS`.
        let _ = out.try_push(center.add(rotate(from, t)));
    }
    out
}

/// The two join points computed at one interior vertex: the outer side may
/// expand to several points (bevel: 2, round: an arc), the inner side is
/// always exactly one point.
struct Join {
    outer: ArrayVec<Point, MAX_JOIN_POINTS>,
    inner: Point,
}

#[allow(clippy::too_many_arguments)]
fn compute_join(v: Point, n_prev: Point, n_next: Point, half_t: f64, props: &StrokeProps) -> Join {
    let outer_from = v.add(n_prev.scale(half_t));
    let outer_to = v.add(n_next.scale(half_t));
    let inner_from = v.sub(n_prev.scale(half_t));
    let inner_to = v.sub(n_next.scale(half_t));

    let inner = line_intersect(inner_from, n_prev.perp_cw(), inner_to, n_next.perp_cw())
        .unwrap_or(inner_from);

    let outer = match line_intersect(outer_from, n_prev.perp_cw(), outer_to, n_next.perp_cw()) {
        None => ArrayVec::from_iter([outer_from]),
        Some(miter_point) => {
            let miter_len = v.distance_to(miter_point);
            let ratio = miter_len / half_t;

            match props.join {
                JoinMode::Miter if ratio <= props.miter_limit => ArrayVec::from_iter([miter_point]),
                JoinMode::Miter | JoinMode::Bevel => ArrayVec::from_iter([outer_from, outer_to]),
                JoinMode::Round => {
                    let bulge_dir = v.sub(inner);
                    let mid = arc_points(
                        v,
                        outer_from.sub(v),
                        outer_to.sub(v),
                        bulge_dir,
                    );
                    let mut pts = ArrayVec::new();
                    pts.push(outer_from);
                    pts.extend(mid);
                    pts.push(outer_to);
                    pts
                }
            }
        }
    };

    Join { outer, inner }
}

/// Cap points at a path endpoint: `anchor` is the vertex, `tangent` points
/// *outward* along the path direction (away from the stroke body), `ccw`/`cw`
/// are the two face-offset points at that endpoint.
fn cap_points(anchor: Point, tangent: Point, ccw: Point, cw: Point, mode: CapMode) -> ArrayVec<Point, MAX_JOIN_POINTS> {
    match mode {
        CapMode::Butt => ArrayVec::from_iter([ccw, cw]),
        CapMode::Square => {
            let half_t = ccw.distance_to(cw) / 2.0;
            let ext = tangent.scale(half_t);
            ArrayVec::from_iter([ccw.add(ext), cw.add(ext)])
        }
        CapMode::Round => {
            let mut pts = ArrayVec::new();
            pts.push(ccw);
            pts.extend(arc_points(anchor, ccw.sub(anchor), cw.sub(anchor), tangent));
            pts.push(cw);
            pts
        }
    }
}

fn stroke_subpath(points: &[Point], closed: bool, props: &StrokeProps) -> Vec<Vec<Point>> {
    let half_t = props.thickness / 2.0;
    let verts = dedup_vertices(points, closed);

    if verts.len() < 2 {
        // A single point (or a closed subpath collapsing to one point, e.g.
        // e.g. "M 10,10 Z" with thickness: nothing to stroke.
        log::warn!("degenerate subpath with no length, skipping");
        return Vec::new();
    }

    let n = verts.len();
    let segment_count = if closed { n } else { n - 1 };

    // Per-segment ccw unit normals; `None` for a (should-not-happen-after
    // dedup, but kept defensive) zero-length segment.
    let normals: Vec<Point> = (0..segment_count)
        .map(|i| {
            let a = verts[i];
            let b = verts[(i + 1) % n];
            unit_normal_ccw(a, b).unwrap_or(Point::zero())
        })
        .collect();

    if closed {
        let mut outer_ring = Vec::new();
        let mut inner_ring = Vec::new();

        for i in 0..n {
            let n_prev = normals[(i + n - 1) % n];
            let n_next = normals[i];
            let join = compute_join(verts[i], n_prev, n_next, half_t, props);
            outer_ring.extend(join.outer);
            inner_ring.push(join.inner);
        }

        inner_ring.reverse();
        vec![outer_ring, inner_ring]
    } else {
        let mut outer = Vec::new();
        let mut inner = Vec::new();

        for i in 1..n - 1 {
            let n_prev = normals[i - 1];
            let n_next = normals[i];
            let join = compute_join(verts[i], n_prev, n_next, half_t, props);
            outer.extend(join.outer);
            inner.push(join.inner);
        }

        let start_tangent = verts[0].sub(verts[1]).normalized().unwrap_or(Point::zero());
        let start_ccw = verts[0].add(normals[0].scale(half_t));
        let start_cw = verts[0].sub(normals[0].scale(half_t));
        let start_cap = cap_points(verts[0], start_tangent, start_ccw, start_cw, props.cap);

        let end_tangent = verts[n - 1]
            .sub(verts[n - 2])
            .normalized()
            .unwrap_or(Point::zero());
        let end_ccw = verts[n - 1].add(normals[segment_count - 1].scale(half_t));
        let end_cw = verts[n - 1].sub(normals[segment_count - 1].scale(half_t));
        let end_cap = cap_points(verts[n - 1], end_tangent, end_ccw, end_cw, props.cap);

        // Assemble the ring: start_cap.ccw, outer joins,
        // end_cap.ccw..cw, reversed inner joins, start_cap.cw. The start
        // cap's two anchor points (`p0_ccw`, `p0_cw`) land at the very
        // start and very end of this list — they're adjacent only once the
        // polygon closes — so any intermediate cap geometry (a round cap's
        // arc) is appended after `p0_cw`, riding along that closing edge.
        // `cap_points` returns the arc ccw -> cw, but traversed at this point
        // in the ring it needs to run cw -> ccw (the mirror of `end_cap`'s
        // ccw -> cw, which is walked in its natural order); otherwise the
        // implicit closing edge back to `ring[0]` crosses the one leading
        // into `start_cap.last()`, bowtie-ing the polygon.
        let mut ring = Vec::new();
        ring.push(start_cap[0]);
        ring.extend(outer);
        ring.extend(end_cap.iter().copied());
        inner.reverse();
        ring.extend(inner);
        ring.push(*start_cap.last().unwrap());
        if start_cap.len() > 2 {
            ring.extend(start_cap[1..start_cap.len() - 1].iter().rev().copied());
        }
        vec![ring]
    }
}
