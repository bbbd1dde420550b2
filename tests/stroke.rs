use vecrast::{AntiAliasMode, CapMode, JoinMode, OpaquePattern, PathBuilder, Pixel, PixelFormat, Rgba, StrokeProps, Surface};

#[test]
fn stroked_square_end_to_end() {
    let mut pb = PathBuilder::new();
    pb.move_to(50.0, 50.0);
    pb.line_to(150.0, 50.0);
    pb.line_to(150.0, 150.0);
    pb.line_to(50.0, 150.0);
    pb.close();
    let path = pb.finish().unwrap();

    let mut surface = Surface::new(PixelFormat::Rgba, 200, 200).unwrap();
    let white = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
    let props = StrokeProps { thickness: 10.0, join: JoinMode::Miter, ..StrokeProps::default() };

    surface.stroke_path(&path, &props, AntiAliasMode::None, &white).unwrap();

    // On the top edge (y = 50), painted.
    assert_eq!(surface.pixel(100, 50), Pixel::Rgba(Rgba::WHITE));
    // Well inside the square's interior, untouched.
    assert_eq!(surface.pixel(100, 100), Pixel::Rgba(Rgba::TRANSPARENT));
    // Outside the square entirely.
    assert_eq!(surface.pixel(10, 10), Pixel::Rgba(Rgba::TRANSPARENT));
}

#[test]
fn open_path_cap_styles_differ_at_endpoints() {
    let mut pb = PathBuilder::new();
    pb.move_to(20.0, 50.0);
    pb.line_to(80.0, 50.0);
    let path = pb.finish().unwrap();

    let white = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
    let butt = StrokeProps { thickness: 10.0, cap: CapMode::Butt, ..StrokeProps::default() };
    let square = StrokeProps { thickness: 10.0, cap: CapMode::Square, ..StrokeProps::default() };

    let mut butt_surface = Surface::new(PixelFormat::Rgba, 100, 100).unwrap();
    butt_surface.stroke_path(&path, &butt, AntiAliasMode::None, &white).unwrap();

    let mut square_surface = Surface::new(PixelFormat::Rgba, 100, 100).unwrap();
    square_surface.stroke_path(&path, &square, AntiAliasMode::None, &white).unwrap();

    // A square cap extends half the thickness past the endpoint; a butt cap
    // stops exactly at it.
    assert_eq!(butt_surface.pixel(17, 50), Pixel::Rgba(Rgba::TRANSPARENT));
    assert_eq!(square_surface.pixel(17, 50), Pixel::Rgba(Rgba::WHITE));
}

#[test]
fn zero_thickness_strokes_nothing() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(10.0, 0.0);
    let path = pb.finish().unwrap();

    let mut surface = Surface::new(PixelFormat::Rgba, 20, 20).unwrap();
    let white = OpaquePattern::new(Pixel::Rgba(Rgba::WHITE));
    let props = StrokeProps { thickness: 0.0, ..StrokeProps::default() };

    assert!(surface.stroke_path(&path, &props, AntiAliasMode::None, &white).is_none());
}
