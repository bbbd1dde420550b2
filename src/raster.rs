//! The antialiased polygon filler.
//!
//! Walks a clipped bounding box, resolves each pixel's coverage, composites
//! through the pattern — a scanline rasterizer in spirit, but with a
//! deliberately simple coverage test: a regular supersampling grid resolved
//! by [`Alpha8::average`], rather than an analytic-area edge-list scan
//! converter.

use crate::color::{attenuate, Alpha8, Pixel, PixelFormat};
use crate::path::Path;
use crate::pattern::Pattern;
use crate::surface::Surface;
use crate::Point;

/// How a self-intersecting or multi-subpath polygon decides "inside".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FillRule {
    /// Inside wherever the signed edge-crossing count is nonzero.
    NonZero,
    /// Inside wherever the raw edge-crossing count is odd.
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::NonZero
    }
}

/// Whether edge pixels are supersampled or tested once at the pixel center.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AntiAliasMode {
    None,
    Default,
}

impl Default for AntiAliasMode {
    fn default() -> Self {
        AntiAliasMode::Default
    }
}

/// Side length of the regular supersampling grid used by [`AntiAliasMode::Default`]
/// — 16 samples per pixel.
const SUPERSAMPLE_GRID: usize = 4;

/// Fills `path` into `surface`, sampling color from `pattern`.
///
/// `path` is flattened internally (the filler never sees a curve directly)
/// and every subpath is treated as implicitly closed for the
/// purposes of the inside test, whether or not it ends in an explicit
/// `ClosePath` (the usual vector-fill convention: an open subpath's missing
/// closing edge is drawn as if present, only the *stroke* cares about
/// open-vs-closed).
pub fn fill<P: Pattern + ?Sized>(
    surface: &mut Surface,
    path: &Path,
    fill_rule: FillRule,
    aa: AntiAliasMode,
    pattern: &P,
) {
    let flattened = crate::geometry::flatten(path);
    let edges = collect_edges(&flattened);
    if edges.is_empty() {
        return;
    }

    let (min, max) = match bounding_box(&edges) {
        Some(b) => b,
        None => return,
    };

    let x0 = (min.x.floor() as i64).max(0);
    let y0 = (min.y.floor() as i64).max(0);
    let x1 = (max.x.ceil() as i64).min(surface.width() as i64);
    let y1 = (max.y.ceil() as i64).min(surface.height() as i64);

    for y in y0..y1 {
        for x in x0..x1 {
            let coverage = match aa {
                AntiAliasMode::None => {
                    let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                    if point_in_polygon(&edges, center, fill_rule) {
                        255
                    } else {
                        0
                    }
                }
                AntiAliasMode::Default => sample_coverage(&edges, x, y, fill_rule),
            };

            if coverage == 0 {
                continue;
            }

            let color = pattern.sample(x as f64 + 0.5, y as f64 + 0.5);
            let rgba = color
                .cast_to(PixelFormat::Rgba)
                .as_rgba()
                .expect("cast_to(Rgba) always returns the Rgba variant");
            let attenuated = attenuate(rgba, coverage);
            surface.blend_pixel(x, y, Pixel::Rgba(attenuated));
        }
    }
}

/// Every edge of every subpath, each subpath's closing edge included
/// unconditionally.
fn collect_edges(path: &Path) -> Vec<(Point, Point)> {
    let mut edges = Vec::new();
    for sub in path.subpaths() {
        if sub.points.len() < 2 {
            continue;
        }
        for w in sub.points.windows(2) {
            edges.push((w[0], w[1]));
        }
        edges.push((*sub.points.last().unwrap(), sub.points[0]));
    }
    edges
}

fn bounding_box(edges: &[(Point, Point)]) -> Option<(Point, Point)> {
    if edges.is_empty() {
        return None;
    }
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(a, b) in edges {
        for p in [a, b] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
    }
    Some((min, max))
}

/// Ray-casts a horizontal ray from `p` to `+x`, counting edge crossings.
///
/// An edge's y-range is treated as `[min, max)` — one endpoint included, the
/// other excluded — so a vertex that lies exactly on the ray is attributed to
/// only one of its two adjacent edges, never both or neither.
fn point_in_polygon(edges: &[(Point, Point)], p: Point, rule: FillRule) -> bool {
    let mut winding: i32 = 0;
    let mut crossings: u32 = 0;

    for &(a, b) in edges {
        let a_above = a.y > p.y;
        let b_above = b.y > p.y;
        if a_above == b_above {
            continue;
        }

        let t = (p.y - a.y) / (b.y - a.y);
        let x_at_y = a.x + t * (b.x - a.x);
        if x_at_y > p.x {
            crossings += 1;
            winding += if b.y > a.y { 1 } else { -1 };
        }
    }

    match rule {
        FillRule::NonZero => winding != 0,
        FillRule::EvenOdd => crossings % 2 == 1,
    }
}

fn sample_coverage(edges: &[(Point, Point)], x: i64, y: i64, rule: FillRule) -> u8 {
    let mut samples = [Alpha8::TRANSPARENT; SUPERSAMPLE_GRID * SUPERSAMPLE_GRID];
    let step = 1.0 / SUPERSAMPLE_GRID as f64;

    let mut i = 0;
    for sy in 0..SUPERSAMPLE_GRID {
        for sx in 0..SUPERSAMPLE_GRID {
            let px = x as f64 + (sx as f64 + 0.5) * step;
            let py = y as f64 + (sy as f64 + 0.5) * step;
            samples[i] = if point_in_polygon(edges, Point::new(px, py), rule) {
                Alpha8::OPAQUE
            } else {
                Alpha8::TRANSPARENT
            };
            i += 1;
        }
    }

    Alpha8::average(&samples).a
}
