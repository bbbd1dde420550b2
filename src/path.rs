//! The path node model and its builder.
//!
//! Internally a [`Path`] stores verbs and points in parallel arrays — cheaper
//! to walk than a `Vec<PathNode>` of tagged, differently-sized variants.
//! [`Path::nodes`] reconstructs the tagged node view for callers that want
//! it.

use crate::Point;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Verb {
    Move,
    Line,
    Cubic,
    Close,
}

/// A single drawing command.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathNode {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, end: Point },
    ClosePath,
}

/// A sequence of path nodes.
///
/// # Invariants
///
/// - Every non-empty subpath begins with a `MoveTo`.
/// - Well-formedness (no `LineTo`/`CurveTo`/`ClosePath` before the first
///   `MoveTo` of a subpath) is enforced by [`PathBuilder`] at construction
///   time, not by `Path` itself.
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    pub(crate) verbs: Vec<Verb>,
    pub(crate) points: Vec<Point>,
}

impl Path {
    /// Returns true if the path has no verbs at all.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Returns an iterator over the path's nodes.
    ///
    /// After every `ClosePath` an implicit `MoveTo(last_move)` is yielded, so
    /// the "current point" stays well-defined for any consumer walking the
    /// node stream — unless the following verb is already a real `Move`, in
    /// which case the real one is used instead of duplicating it.
    pub fn nodes(&self) -> PathNodes<'_> {
        PathNodes {
            path: self,
            verb_index: 0,
            point_index: 0,
            last_move_to: Point::zero(),
            pending_close_move: false,
            unread_move: None,
        }
    }

    /// Iterates one [`PathNode::MoveTo`]-delimited subpath at a time, each as
    /// a flat polyline (curves must already be flattened via
    /// [`crate::geometry::flatten`]).
    pub(crate) fn subpaths(&self) -> Subpaths<'_> {
        Subpaths { nodes: self.nodes() }
    }
}

/// One subpath: its vertices and whether it ended in `ClosePath`.
pub(crate) struct Subpath {
    pub points: Vec<Point>,
    pub closed: bool,
}

pub(crate) struct Subpaths<'a> {
    nodes: PathNodes<'a>,
}

impl<'a> Iterator for Subpaths<'a> {
    type Item = Subpath;

    fn next(&mut self) -> Option<Subpath> {
        let mut points = Vec::new();
        let mut closed = false;
        let mut started = false;

        loop {
            let node = match self.nodes.next() {
                Some(n) => n,
                None => break,
            };

            match node {
                PathNode::MoveTo(p) => {
                    if started {
                        // Next subpath begins; rewind isn't possible on a
                        // plain iterator, so we stash it for the next call.
                        self.nodes.unread_move = Some(p);
                        break;
                    }
                    points.push(p);
                    started = true;
                }
                PathNode::LineTo(p) => points.push(p),
                PathNode::CurveTo { end, .. } => {
                    debug_assert!(
                        false,
                        "curves must be flattened before subpath iteration"
                    );
                    points.push(end);
                }
                PathNode::ClosePath => {
                    closed = true;
                    break;
                }
            }
        }

        if !started {
            None
        } else {
            Some(Subpath { points, closed })
        }
    }
}

/// An iterator over a [`Path`]'s nodes.
#[derive(Clone)]
pub struct PathNodes<'a> {
    path: &'a Path,
    verb_index: usize,
    point_index: usize,
    last_move_to: Point,
    pending_close_move: bool,
    /// A `MoveTo` `Subpaths` peeked but didn't consume, pushed back for the
    /// next subpath to pick up.
    unread_move: Option<Point>,
}

impl<'a> Iterator for PathNodes<'a> {
    type Item = PathNode;

    fn next(&mut self) -> Option<PathNode> {
        if let Some(p) = self.unread_move.take() {
            self.last_move_to = p;
            return Some(PathNode::MoveTo(p));
        }

        if self.pending_close_move {
            self.pending_close_move = false;
            // Skip the synthetic Move if the next real verb is already Move.
            if self.path.verbs.get(self.verb_index) != Some(&Verb::Move) {
                return Some(PathNode::MoveTo(self.last_move_to));
            }
        }

        let verb = *self.path.verbs.get(self.verb_index)?;
        self.verb_index += 1;

        match verb {
            Verb::Move => {
                let p = self.path.points[self.point_index];
                self.point_index += 1;
                self.last_move_to = p;
                Some(PathNode::MoveTo(p))
            }
            Verb::Line => {
                let p = self.path.points[self.point_index];
                self.point_index += 1;
                Some(PathNode::LineTo(p))
            }
            Verb::Cubic => {
                let c1 = self.path.points[self.point_index];
                let c2 = self.path.points[self.point_index + 1];
                let end = self.path.points[self.point_index + 2];
                self.point_index += 3;
                Some(PathNode::CurveTo { c1, c2, end })
            }
            Verb::Close => {
                self.pending_close_move = true;
                Some(PathNode::ClosePath)
            }
        }
    }
}

/// A path builder.
///
/// Enforces well-formedness at construction: calling [`PathBuilder::line_to`],
/// [`PathBuilder::curve_to`] or [`PathBuilder::close`] without a preceding
/// [`PathBuilder::move_to`] is a programming error and trips a debug
/// assertion, rather than silently injecting one.
#[allow(missing_debug_implementations)]
pub struct PathBuilder {
    verbs: Vec<Verb>,
    points: Vec<Point>,
    has_current_point: bool,
    last_move_to: Point,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        PathBuilder {
            verbs: Vec::new(),
            points: Vec::new(),
            has_current_point: false,
            last_move_to: Point::zero(),
        }
    }

    /// Creates a new builder with a pre-allocated capacity.
    pub fn with_capacity(verbs_capacity: usize, points_capacity: usize) -> Self {
        PathBuilder {
            verbs: Vec::with_capacity(verbs_capacity),
            points: Vec::with_capacity(points_capacity),
            has_current_point: false,
            last_move_to: Point::zero(),
        }
    }

    /// Begins a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.verbs.push(Verb::Move);
        self.points.push(Point::new(x, y));
        self.has_current_point = true;
        self.last_move_to = Point::new(x, y);
    }

    /// Adds a straight line segment from the current point to `(x, y)`.
    ///
    /// # Panics (debug builds only)
    ///
    /// Panics if called before any `move_to`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        debug_assert!(self.has_current_point, "line_to before move_to");
        self.verbs.push(Verb::Line);
        self.points.push(Point::new(x, y));
    }

    /// Adds a cubic Bézier segment from the current point to `(x, y)`.
    ///
    /// # Panics (debug builds only)
    ///
    /// Panics if called before any `move_to`.
    pub fn curve_to(&mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) {
        debug_assert!(self.has_current_point, "curve_to before move_to");
        self.verbs.push(Verb::Cubic);
        self.points.push(Point::new(cx1, cy1));
        self.points.push(Point::new(cx2, cy2));
        self.points.push(Point::new(x, y));
    }

    /// Closes the current subpath back to its `move_to` point.
    ///
    /// # Panics (debug builds only)
    ///
    /// Panics if called before any `move_to`.
    pub fn close(&mut self) {
        debug_assert!(self.has_current_point, "close before move_to");
        if self.verbs.last() != Some(&Verb::Close) {
            self.verbs.push(Verb::Close);
        }
        // The node model's implicit trailing MoveTo keeps the current point
        // defined; mirror that here so a subsequent line_to without an
        // explicit move_to has somewhere well-formed to start.
        self.has_current_point = true;
    }

    /// Releases the builder's storage. A no-op beyond normal `Drop` — kept
    /// for parity with the rest of the public path-construction API.
    pub fn deinit(self) {}

    /// Consumes the builder and returns the finished path.
    ///
    /// Returns `None` for an empty path (no verbs at all).
    pub fn finish(self) -> Option<Path> {
        if self.verbs.is_empty() {
            return None;
        }

        Some(Path {
            verbs: self.verbs,
            points: self.points,
        })
    }
}
