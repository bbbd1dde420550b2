//! Rectangular pixel buffers.
//!
//! A single owned, zero-initialized, row-major buffer, bounds-checked on
//! every access, parameterized at runtime over [`PixelFormat`] so any of the
//! three supported pixel types can back a surface.

use crate::color::{Alpha8, Pixel, PixelFormat, Rgb, Rgba};

enum Buffer {
    Rgb(Vec<Rgb>),
    Rgba(Vec<Rgba>),
    Alpha8(Vec<Alpha8>),
}

/// An owning, rectangular pixel buffer of one fixed format.
///
/// Allocated zero-initialized: transparent black for `Rgba`/`Alpha8`, solid
/// black for `Rgb` (which has no alpha channel to be transparent in).
/// Out-of-bounds reads return that same zero pixel; out-of-bounds writes are
/// silently ignored — the filler never emits coordinates outside its clipped
/// bounding box, so this is purely a defensive contract for direct callers
/// of [`Surface::set_pixel`].
#[allow(missing_debug_implementations)]
pub struct Surface {
    width: u32,
    height: u32,
    buffer: Buffer,
}

impl Surface {
    /// Allocates a new, zero-initialized surface. Returns `None` for a zero
    /// width or height.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Option<Surface> {
        if width == 0 || height == 0 {
            return None;
        }

        let len = (width as usize) * (height as usize);
        let buffer = match format {
            PixelFormat::Rgb => Buffer::Rgb(vec![Rgb::BLACK; len]),
            PixelFormat::Rgba => Buffer::Rgba(vec![Rgba::TRANSPARENT; len]),
            PixelFormat::Alpha8 => Buffer::Alpha8(vec![Alpha8::TRANSPARENT; len]),
        };

        Some(Surface { width, height, buffer })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        match &self.buffer {
            Buffer::Rgb(_) => PixelFormat::Rgb,
            Buffer::Rgba(_) => PixelFormat::Rgba,
            Buffer::Alpha8(_) => PixelFormat::Alpha8,
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    /// Reads the pixel at `(x, y)`. Out-of-bounds coordinates return the
    /// surface's zero pixel.
    pub fn pixel(&self, x: i64, y: i64) -> Pixel {
        match self.index(x, y) {
            None => self.zero_pixel(),
            Some(i) => match &self.buffer {
                Buffer::Rgb(b) => Pixel::Rgb(b[i]),
                Buffer::Rgba(b) => Pixel::Rgba(b[i]),
                Buffer::Alpha8(b) => Pixel::Alpha8(b[i]),
            },
        }
    }

    fn zero_pixel(&self) -> Pixel {
        match self.format() {
            PixelFormat::Rgb => Pixel::Rgb(Rgb::BLACK),
            PixelFormat::Rgba => Pixel::Rgba(Rgba::TRANSPARENT),
            PixelFormat::Alpha8 => Pixel::Alpha8(Alpha8::TRANSPARENT),
        }
    }

    /// Writes a pixel, cast to the surface's format if needed. Out-of-bounds
    /// writes are silently clipped.
    pub fn set_pixel(&mut self, x: i64, y: i64, value: Pixel) {
        let i = match self.index(x, y) {
            Some(i) => i,
            None => return,
        };

        let value = value.cast_to(self.format());
        match (&mut self.buffer, value) {
            (Buffer::Rgb(b), Pixel::Rgb(p)) => b[i] = p,
            (Buffer::Rgba(b), Pixel::Rgba(p)) => b[i] = p,
            (Buffer::Alpha8(b), Pixel::Alpha8(p)) => b[i] = p,
            _ => unreachable!("cast_to always returns the target format"),
        }
    }

    /// Blends `src` onto the pixel at `(x, y)` via `src_over`. This is the
    /// compositor's sole write path: the filler never emits coordinates
    /// outside the surface rect, so out-of-bounds here is only reachable from
    /// misbehaving callers and is simply clipped.
    ///
    /// Both pixels are promoted to `Rgba` for the blend — an RGB destination
    /// has no alpha channel of its own but still needs one internally to
    /// receive a partially-covered `src` correctly — and the result is cast
    /// back down to this surface's format.
    pub fn blend_pixel(&mut self, x: i64, y: i64, src: Pixel) {
        let i = match self.index(x, y) {
            Some(i) => i,
            None => return,
        };

        use crate::color::SrcOver;
        let dst_rgba = self.pixel(x, y).cast_to(PixelFormat::Rgba).as_rgba().unwrap();
        let src_rgba = src.cast_to(PixelFormat::Rgba).as_rgba().unwrap();
        let out = Pixel::Rgba(dst_rgba.src_over(src_rgba)).cast_to(self.format());

        match (&mut self.buffer, out) {
            (Buffer::Rgb(b), Pixel::Rgb(p)) => b[i] = p,
            (Buffer::Rgba(b), Pixel::Rgba(p)) => b[i] = p,
            (Buffer::Alpha8(b), Pixel::Alpha8(p)) => b[i] = p,
            _ => unreachable!("cast_to always returns the target format"),
        }
    }

    /// Views the buffer as raw bytes, row-major, `bytes_per_pixel()` wide per
    /// pixel. Mirrors `Pixmap::data()` (`src/pixmap.rs`), but over whichever
    /// format this surface actually holds rather than always RGBA.
    pub fn data(&self) -> &[u8] {
        match &self.buffer {
            Buffer::Rgb(b) => bytemuck::cast_slice(b),
            Buffer::Rgba(b) => bytemuck::cast_slice(b),
            Buffer::Alpha8(b) => bytemuck::cast_slice(b),
        }
    }

    /// Number of bytes one pixel occupies in [`Surface::data`].
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format() {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
            PixelFormat::Alpha8 => 1,
        }
    }

    /// Encodes this surface as PNG data.
    ///
    /// Premultiplied `Rgba` pixels are demultiplied to straight alpha first,
    /// same as `Pixmap::encode_png` (`src/pixmap.rs`); `Alpha8` surfaces have
    /// no color to encode and are rejected.
    #[cfg(feature = "png-format")]
    pub fn encode_png(&self) -> Result<Vec<u8>, crate::Error> {
        let (width, height) = (self.width, self.height);
        let mut rgba_bytes = Vec::with_capacity(width as usize * height as usize * 4);

        match &self.buffer {
            Buffer::Rgb(b) => {
                for p in b {
                    rgba_bytes.extend_from_slice(&[p.r, p.g, p.b, 255]);
                }
            }
            Buffer::Rgba(b) => {
                for p in b {
                    let (r, g, b, a) = crate::color::demultiply(*p);
                    rgba_bytes.extend_from_slice(&[r, g, b, a]);
                }
            }
            Buffer::Alpha8(_) => return Err(crate::Error::UnsupportedPngFormat),
        }

        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, width, height);
            encoder.set_color(png::ColorType::RGBA);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|_| crate::Error::PngEncoding)?;
            writer
                .write_image_data(&rgba_bytes)
                .map_err(|_| crate::Error::PngEncoding)?;
        }

        Ok(data)
    }

    /// Encodes and writes this surface to `path` as a PNG file.
    #[cfg(feature = "png-format")]
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), crate::Error> {
        let data = self.encode_png()?;
        std::fs::write(path, data).map_err(|_| crate::Error::PngEncoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert!(Surface::new(PixelFormat::Rgba, 0, 10).is_none());
        assert!(Surface::new(PixelFormat::Rgba, 10, 0).is_none());
    }

    #[test]
    fn new_surface_is_zeroed() {
        let s = Surface::new(PixelFormat::Rgba, 4, 4).unwrap();
        assert_eq!(s.pixel(0, 0), Pixel::Rgba(Rgba::TRANSPARENT));
    }

    #[test]
    fn out_of_bounds_read_is_defined_and_write_is_clipped() {
        let mut s = Surface::new(PixelFormat::Rgb, 4, 4).unwrap();
        assert_eq!(s.pixel(-1, 0), Pixel::Rgb(Rgb::BLACK));
        assert_eq!(s.pixel(100, 100), Pixel::Rgb(Rgb::BLACK));

        s.set_pixel(-1, -1, Pixel::Rgb(Rgb::WHITE));
        s.set_pixel(100, 100, Pixel::Rgb(Rgb::WHITE));
        // Nothing in-bounds was touched.
        assert_eq!(s.pixel(0, 0), Pixel::Rgb(Rgb::BLACK));
    }

    #[test]
    fn blend_pixel_partial_coverage_onto_rgb_surface() {
        // An RGB surface stores no alpha of its own, but `blend_pixel` must
        // still let a half-transparent source partially show the black
        // background through — the whole point of promoting to Rgba first.
        let mut s = Surface::new(PixelFormat::Rgb, 1, 1).unwrap();
        s.blend_pixel(0, 0, Pixel::Rgba(Rgba::from_clamped(1.0, 1.0, 1.0, 0.5)));
        match s.pixel(0, 0) {
            Pixel::Rgb(p) => assert!(p.r > 100 && p.r < 155),
            _ => unreachable!(),
        }
    }

    #[test]
    fn blend_pixel_onto_alpha8_surface_only_tracks_alpha() {
        let mut s = Surface::new(PixelFormat::Alpha8, 1, 1).unwrap();
        s.blend_pixel(0, 0, Pixel::Rgba(Rgba::from_clamped(1.0, 0.0, 0.0, 0.5)));
        assert_eq!(s.pixel(0, 0), Pixel::Alpha8(Alpha8 { a: 127 }));
    }
}
