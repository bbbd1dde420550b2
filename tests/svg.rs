#![cfg(feature = "svg")]

use vecrast::svg;
use vecrast::{AntiAliasMode, FillRule, Pixel, PixelFormat, Rgba, Surface};

#[test]
fn parses_fill_and_stroke_and_draws_them() {
    let document = svg::parse(
        r#"<svg width="100" height="100">
            <path d="M10,10 L90,10 L90,90 L10,90 Z" fill="#00ff00" stroke="black" stroke-width="3"/>
        </svg>"#,
    )
    .unwrap();

    assert_eq!(document.shapes.len(), 1);
    let shape = &document.shapes[0];
    assert_eq!(shape.fill, Some(Pixel::Rgba(Rgba { r: 0, g: 255, b: 0, a: 255 })));
    assert_eq!(shape.stroke, Some(Pixel::Rgba(Rgba::BLACK)));

    let mut surface = Surface::new(PixelFormat::Rgba, 100, 100).unwrap();
    if let Some(fill) = shape.fill {
        let pattern = vecrast::OpaquePattern::new(fill);
        surface.fill_path(&shape.path, FillRule::NonZero, AntiAliasMode::None, &pattern);
    }
    assert_eq!(surface.pixel(50, 50), Pixel::Rgba(Rgba { r: 0, g: 255, b: 0, a: 255 }));
}

#[test]
fn malformed_document_is_an_error() {
    assert!(svg::parse("<svg><path d=\"M0,0\" unterminated").is_err());
}

#[test]
fn well_formed_document_with_no_paths_has_no_shapes() {
    let document = svg::parse(r#"<svg width="10" height="10"></svg>"#).unwrap();
    assert!(document.shapes.is_empty());
}
