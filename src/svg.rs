//! A minimal SVG `<path>` front-end.
//!
//! Reads just enough of SVG 1.1 to turn `<path d="...">` elements into
//! [`crate::Path`]s plus their `fill`/`stroke`/`stroke-width` paint: no CSS
//! cascade, no `<style>` blocks, no other element types (`<rect>`, `<circle>`,
//! `<use>`, …). Built on `roxmltree`'s usual usage style — a single
//! `Document::parse` call, then walking `descendants()`.
//!
//! Malformed or unsupported attributes are logged via [`log::warn!`] and
//! skipped rather than aborting the whole document: permissive on parse,
//! strict on compositing.

use crate::color::{Pixel, Rgba};
use crate::path::{Path, PathBuilder};
use crate::stroker::StrokeProps;

/// One `<path>` element's drawable geometry and paint.
#[derive(Clone, Debug)]
pub struct Shape {
    pub path: Path,
    /// `None` when `fill="none"` or the attribute is absent.
    pub fill: Option<Pixel>,
    /// `None` when there's no `stroke` attribute (or it's `"none"`).
    pub stroke: Option<Pixel>,
    pub stroke_props: StrokeProps,
}

/// The result of parsing one SVG document.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub shapes: Vec<Shape>,
}

/// Parses `text` as an SVG document, extracting every `<path>` element.
///
/// Unknown elements, attributes this front-end doesn't understand, and
/// malformed `d`/color values are logged and skipped — only a completely
/// unparseable XML document fails outright.
pub fn parse(text: &str) -> Result<Document, roxmltree::Error> {
    let xml = roxmltree::Document::parse(text)?;
    let mut shapes = Vec::new();

    for node in xml.descendants() {
        if !node.is_element() || node.tag_name().name() != "path" {
            continue;
        }

        let d = match node.attribute("d") {
            Some(d) => d,
            None => {
                log::warn!("<path> with no `d` attribute, skipping");
                continue;
            }
        };

        let path = match parse_path_data(d) {
            Some(p) => p,
            None => {
                log::warn!("unparseable path data, skipping: {d}");
                continue;
            }
        };

        let fill = match node.attribute("fill") {
            None => Some(Pixel::Rgba(Rgba::BLACK)), // SVG default.
            Some("none") => None,
            Some(v) => parse_color(v).map(Pixel::Rgba),
        };

        let stroke = match node.attribute("stroke") {
            None | Some("none") => None,
            Some(v) => parse_color(v).map(Pixel::Rgba),
        };

        let mut stroke_props = StrokeProps::default();
        if let Some(w) = node.attribute("stroke-width") {
            match w.parse::<f64>() {
                Ok(v) if v > 0.0 => stroke_props.thickness = v,
                _ => log::warn!("invalid stroke-width, using default: {w}"),
            }
        }

        shapes.push(Shape { path, fill, stroke, stroke_props });
    }

    Ok(Document { shapes })
}

/// Parses a CSS2 color: a `#rrggbb`/`#rgb` hex literal or a named color.
/// Anything else (e.g. `rgb(...)`, CSS variables) is unsupported and logged.
fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex_color(hex).or_else(|| {
            log::warn!("invalid hex color: {value}");
            None
        });
    }

    crate::Rgb::from_name(value).map(|rgb| Rgba {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        a: 255,
    }).or_else(|| {
        log::warn!("unrecognized color: {value}");
        None
    })
}

fn parse_hex_color(hex: &str) -> Option<Rgba> {
    fn channel(s: &str) -> Option<u8> {
        u8::from_str_radix(s, 16).ok()
    }

    match hex.len() {
        6 => Some(Rgba {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
            a: 255,
        }),
        3 => {
            let double = |c: char| -> Option<u8> { channel(&format!("{c}{c}")) };
            let mut chars = hex.chars();
            Some(Rgba {
                r: double(chars.next()?)?,
                g: double(chars.next()?)?,
                b: double(chars.next()?)?,
                a: 255,
            })
        }
        _ => None,
    }
}

/// A minimal SVG path-data lexer/interpreter.
///
/// Supports `M`/`m`, `L`/`l`, `C`/`c`, `Z`/`z`, with implicit repetition of
/// the previous command for bare coordinate pairs (per the SVG 1.1 grammar) —
/// enough to round-trip the shapes the stroker/filler pipeline actually
/// cares about. Arcs (`A`/`a`), quadratics (`Q`/`q`/`T`/`t`) and shorthand
/// cubics (`S`/`s`) aren't implemented; encountering one aborts the whole
/// path rather than silently drawing something else.
fn parse_path_data(d: &str) -> Option<Path> {
    let mut tokens = PathDataTokens::new(d);
    let mut pb = PathBuilder::new();

    let mut current = (0.0f64, 0.0f64);
    let mut subpath_start = (0.0f64, 0.0f64);
    let mut has_subpath = false;
    let mut command = None;

    loop {
        let cmd = match tokens.peek_command() {
            Some(c) => {
                command = Some(c);
                tokens.consume_command();
                c
            }
            None => match command {
                Some(c) if tokens.peek_number().is_some() => c,
                _ => break,
            },
        };

        match cmd {
            'M' | 'm' => {
                let (x, y) = tokens.pair()?;
                let (x, y) = if cmd == 'm' && has_subpath {
                    (current.0 + x, current.1 + y)
                } else {
                    (x, y)
                };
                pb.move_to(x, y);
                current = (x, y);
                subpath_start = (x, y);
                has_subpath = true;
                // A bare coordinate pair after the initial M/m is an
                // implicit LineTo (SVG 1.1 §8.3.2).
                command = Some(if cmd == 'm' { 'l' } else { 'L' });
            }
            'L' | 'l' => {
                let (x, y) = tokens.pair()?;
                let (x, y) = if cmd == 'l' {
                    (current.0 + x, current.1 + y)
                } else {
                    (x, y)
                };
                pb.line_to(x, y);
                current = (x, y);
            }
            'C' | 'c' => {
                let (x1, y1) = tokens.pair()?;
                let (x2, y2) = tokens.pair()?;
                let (x, y) = tokens.pair()?;
                let rel = cmd == 'c';
                let off = |px: f64, py: f64| if rel { (current.0 + px, current.1 + py) } else { (px, py) };
                let (x1, y1) = off(x1, y1);
                let (x2, y2) = off(x2, y2);
                let (x, y) = off(x, y);
                pb.curve_to(x1, y1, x2, y2, x, y);
                current = (x, y);
            }
            'Z' | 'z' => {
                pb.close();
                current = subpath_start;
                command = None;
            }
            _ => {
                log::warn!("unsupported path command: {cmd}");
                return None;
            }
        }
    }

    pb.finish()
}

struct PathDataTokens<'a> {
    rest: &'a str,
}

impl<'a> PathDataTokens<'a> {
    fn new(d: &'a str) -> Self {
        PathDataTokens { rest: d }
    }

    fn skip_separators(&mut self) {
        self.rest = self.rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
    }

    fn peek_command(&mut self) -> Option<char> {
        self.skip_separators();
        self.rest.chars().next().filter(|c| c.is_ascii_alphabetic())
    }

    fn consume_command(&mut self) {
        self.skip_separators();
        let mut chars = self.rest.chars();
        chars.next();
        self.rest = chars.as_str();
    }

    fn peek_number(&mut self) -> Option<()> {
        self.skip_separators();
        let c = self.rest.chars().next()?;
        if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' {
            Some(())
        } else {
            None
        }
    }

    fn number(&mut self) -> Option<f64> {
        self.skip_separators();
        let mut end = 0;
        let mut seen_digit = false;
        let mut seen_dot = false;
        let mut seen_exp = false;
        let bytes = self.rest.as_bytes();

        for (i, &b) in bytes.iter().enumerate() {
            let c = b as char;
            if (c == '-' || c == '+') && (i == 0 || bytes[i - 1] as char == 'e' || bytes[i - 1] as char == 'E') {
                end = i + 1;
            } else if c.is_ascii_digit() {
                seen_digit = true;
                end = i + 1;
            } else if c == '.' && !seen_dot && !seen_exp {
                seen_dot = true;
                end = i + 1;
            } else if (c == 'e' || c == 'E') && seen_digit && !seen_exp {
                seen_exp = true;
                end = i + 1;
            } else {
                break;
            }
        }

        if !seen_digit || end == 0 {
            return None;
        }

        let (num, rest) = self.rest.split_at(end);
        let value = num.parse().ok()?;
        self.rest = rest;
        Some(value)
    }

    fn pair(&mut self) -> Option<(f64, f64)> {
        let x = self.number()?;
        let y = self.number()?;
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_path_with_fill_and_stroke() {
        let svg = r#"<svg><path d="M0,0 L10,0 L10,10 Z" fill="#ff0000" stroke="blue" stroke-width="2"/></svg>"#;
        let doc = parse(svg).unwrap();
        assert_eq!(doc.shapes.len(), 1);
        let shape = &doc.shapes[0];
        assert_eq!(shape.fill, Some(Pixel::Rgba(Rgba { r: 255, g: 0, b: 0, a: 255 })));
        assert_eq!(shape.stroke, Some(Pixel::Rgba(Rgba { r: 0, g: 0, b: 255, a: 255 })));
        assert_eq!(shape.stroke_props.thickness, 2.0);
    }

    #[test]
    fn fill_none_is_unpainted() {
        let svg = r#"<svg><path d="M0,0 L10,0 Z" fill="none"/></svg>"#;
        let doc = parse(svg).unwrap();
        assert_eq!(doc.shapes[0].fill, None);
    }

    #[test]
    fn relative_commands_accumulate_from_the_current_point() {
        let svg = r#"<svg><path d="M10,10 l5,5 l-5,0 z"/></svg>"#;
        let doc = parse(svg).unwrap();
        let path = &doc.shapes[0].path;
        assert_eq!(path.nodes().count(), 5); // Move, Line, Line, Close, implicit Move.
    }

    #[test]
    fn unsupported_command_drops_the_shape() {
        let svg = r#"<svg><path d="M0,0 A5,5 0 0 1 10,10"/></svg>"#;
        let doc = parse(svg).unwrap();
        assert!(doc.shapes.is_empty());
    }

    #[test]
    fn missing_d_attribute_is_skipped() {
        let svg = r#"<svg><path fill="red"/></svg>"#;
        let doc = parse(svg).unwrap();
        assert!(doc.shapes.is_empty());
    }
}
