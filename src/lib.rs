/*!
A small 2D vector graphics rasterizer: path nodes, a stroke transformer, an
antialiased polygon filler, Porter-Duff compositing, and pixel surfaces in
three formats. An optional minimal SVG front-end reads `<path>` fill/stroke
attributes into the same pipeline.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

mod color;
mod color_names;
mod context;
mod geometry;
mod path;
mod pattern;
mod point;
mod raster;
mod stroker;
mod surface;

#[cfg(feature = "svg")]
pub mod svg;

pub use color::{multiply, demultiply, attenuate, Alpha8, Pixel, PixelFormat, Rgb, Rgba};
pub use context::Context;
pub use geometry::flatten;
pub use path::{Path, PathBuilder, PathNode};
pub use pattern::{OpaquePattern, Pattern};
pub use point::Point;
pub use raster::{fill, AntiAliasMode, FillRule};
pub use stroker::{stroke, CapMode, JoinMode, StrokeProps};
pub use surface::Surface;

/// Errors produced by fallible operations across the crate.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A [`Pixel`] accessor (`as_rgb`/`as_rgba`/`as_alpha8`) was called on a
    /// pixel of a different variant. Use [`Pixel::cast_to`] to convert
    /// instead of asserting a particular variant.
    InvalidPixelFormat,
    /// [`Surface::encode_png`](surface::Surface::encode_png) was called on an
    /// `Alpha8` surface, which has no color channels to encode.
    #[cfg(feature = "png-format")]
    UnsupportedPngFormat,
    /// The `png` crate failed to encode or write the image.
    #[cfg(feature = "png-format")]
    PngEncoding,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPixelFormat => write!(f, "pixel is not of the requested format"),
            #[cfg(feature = "png-format")]
            Error::UnsupportedPngFormat => write!(f, "this pixel format cannot be encoded as PNG"),
            #[cfg(feature = "png-format")]
            Error::PngEncoding => write!(f, "PNG encoding failed"),
        }
    }
}

impl std::error::Error for Error {}
