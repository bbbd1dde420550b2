//! Fill and stroke entry points.
//!
//! The actual drawing logic lives as `Surface::fill_path`/`stroke_path`. The
//! [`Context`] struct is the thin orchestrator on top of them: it bundles a
//! surface borrow, a pattern borrow and an antialias mode so repeated calls
//! don't have to thread the same three arguments through every call site. It
//! owns nothing long-lived beyond those borrows.

use crate::geometry::flatten;
use crate::path::Path;
use crate::pattern::Pattern;
use crate::raster::{self, AntiAliasMode, FillRule};
use crate::stroker::{self, StrokeProps};
use crate::surface::Surface;

/// Borrows a surface and a pattern for a sequence of `fill`/`stroke` calls.
///
/// Equivalent to calling [`Surface::fill_path`]/[`Surface::stroke_path`]
/// directly with the same three arguments repeated; `Context` exists purely
/// so callers (in particular the SVG front-end, which fills then strokes the
/// same shape with two different patterns) don't have to.
#[allow(missing_debug_implementations)]
pub struct Context<'a, P: Pattern + ?Sized> {
    /// The surface `fill`/`stroke` draw into.
    pub surface: &'a mut Surface,
    /// The source color sampled for every covered pixel.
    pub pattern: &'a P,
    /// Whether `fill`/`stroke` supersample edge pixels.
    pub anti_aliasing_mode: AntiAliasMode,
}

impl<'a, P: Pattern + ?Sized> Context<'a, P> {
    /// Borrows `surface` and `pattern` for a run of drawing calls.
    pub fn new(surface: &'a mut Surface, pattern: &'a P, anti_aliasing_mode: AntiAliasMode) -> Self {
        Context { surface, pattern, anti_aliasing_mode }
    }

    /// Fills `path`, resolving self-intersections and subpath overlap per
    /// `fill_rule`.
    pub fn fill(&mut self, path: &Path, fill_rule: FillRule) {
        self.surface.fill_path(path, fill_rule, self.anti_aliasing_mode, self.pattern);
    }

    /// Strokes `path` per `props`, then fills the resulting outline with
    /// [`FillRule::NonZero`].
    ///
    /// Returns `None` when the stroke produced nothing visible, matching
    /// [`Surface::stroke_path`].
    pub fn stroke(&mut self, path: &Path, props: &StrokeProps) -> Option<()> {
        self.surface.stroke_path(path, props, self.anti_aliasing_mode, self.pattern)
    }
}

impl Surface {
    /// Fills `path` with `pattern`, using `fill_rule` to resolve
    /// self-intersections and multi-subpath overlap.
    pub fn fill_path<P: Pattern + ?Sized>(
        &mut self,
        path: &Path,
        fill_rule: FillRule,
        anti_alias: AntiAliasMode,
        pattern: &P,
    ) {
        raster::fill(self, path, fill_rule, anti_alias, pattern);
    }

    /// Strokes `path` per `props` and fills the resulting outline with
    /// `pattern`.
    ///
    /// Returns `None` when the stroke produced nothing visible — every
    /// subpath was degenerate — in which case the surface is left untouched.
    pub fn stroke_path<P: Pattern + ?Sized>(
        &mut self,
        path: &Path,
        props: &StrokeProps,
        anti_alias: AntiAliasMode,
        pattern: &P,
    ) -> Option<()> {
        let flattened = flatten(path);
        let outline = stroker::stroke(&flattened, props)?;
        raster::fill(self, &outline, FillRule::NonZero, anti_alias, pattern);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Pixel, Rgba};
    use crate::pattern::OpaquePattern;
    use crate::{PathBuilder, PixelFormat};

    #[test]
    fn stroke_path_of_a_single_point_touches_nothing() {
        let mut pb = PathBuilder::new();
        pb.move_to(10.0, 10.0);
        pb.close();
        let path = pb.finish().unwrap();

        let mut surface = Surface::new(PixelFormat::Rgba, 20, 20).unwrap();
        let pattern = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
        let props = StrokeProps::default();

        assert!(surface.stroke_path(&path, &props, AntiAliasMode::None, &pattern).is_none());
        assert_eq!(surface.pixel(10, 10), Pixel::Rgba(Rgba::TRANSPARENT));
    }

    #[test]
    fn stroke_path_of_a_segment_paints_a_band() {
        let mut pb = PathBuilder::new();
        pb.move_to(5.0, 10.0);
        pb.line_to(15.0, 10.0);
        let path = pb.finish().unwrap();

        let mut surface = Surface::new(PixelFormat::Rgba, 20, 20).unwrap();
        let pattern = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
        let props = StrokeProps { thickness: 4.0, ..StrokeProps::default() };

        surface.stroke_path(&path, &props, AntiAliasMode::None, &pattern).unwrap();
        assert_eq!(surface.pixel(10, 10), Pixel::Rgba(Rgba::WHITE));
        assert_eq!(surface.pixel(10, 2), Pixel::Rgba(Rgba::TRANSPARENT));
    }

    #[test]
    fn context_fill_matches_direct_surface_call() {
        let mut pb = PathBuilder::new();
        pb.move_to(0.0, 0.0);
        pb.line_to(10.0, 0.0);
        pb.line_to(10.0, 10.0);
        pb.line_to(0.0, 10.0);
        pb.close();
        let path = pb.finish().unwrap();

        let pattern = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
        let mut surface = Surface::new(PixelFormat::Rgba, 20, 20).unwrap();
        let mut ctx = Context::new(&mut surface, &pattern, AntiAliasMode::None);
        ctx.fill(&path, crate::FillRule::NonZero);

        assert_eq!(surface.pixel(5, 5), Pixel::Rgba(Rgba::WHITE));
        assert_eq!(surface.pixel(15, 15), Pixel::Rgba(Rgba::TRANSPARENT));
    }

    #[test]
    fn context_stroke_reports_degenerate_subpaths() {
        let mut pb = PathBuilder::new();
        pb.move_to(1.0, 1.0);
        pb.close();
        let path = pb.finish().unwrap();

        let pattern = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
        let mut surface = Surface::new(PixelFormat::Rgba, 10, 10).unwrap();
        let mut ctx = Context::new(&mut surface, &pattern, AntiAliasMode::None);
        assert!(ctx.stroke(&path, &StrokeProps::default()).is_none());
    }
}
