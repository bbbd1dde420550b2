use vecrast::{AntiAliasMode, FillRule, OpaquePattern, PathBuilder, Pixel, PixelFormat, Rgb, Surface};

#[test]
fn triangle_fill_end_to_end() {
    let mut pb = PathBuilder::new();
    pb.move_to(50.0, 50.0);
    pb.line_to(550.0, 50.0);
    pb.line_to(300.0, 350.0);
    pb.close();
    let path = pb.finish().unwrap();

    let mut surface = Surface::new(PixelFormat::Rgb, 600, 400).unwrap();
    let red = OpaquePattern::new(Pixel::Rgb(Rgb { r: 255, g: 0, b: 0 }));
    surface.fill_path(&path, FillRule::NonZero, AntiAliasMode::None, &red);

    assert_eq!(surface.pixel(100, 100), Pixel::Rgb(Rgb { r: 255, g: 0, b: 0 }));
    assert_eq!(surface.pixel(0, 0), Pixel::Rgb(Rgb::BLACK));
    assert_eq!(surface.pixel(550, 340), Pixel::Rgb(Rgb::BLACK));
}

#[test]
fn even_odd_hollows_out_self_overlap_nonzero_does_not() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(20.0, 0.0);
    pb.line_to(20.0, 20.0);
    pb.line_to(0.0, 20.0);
    pb.close();
    pb.move_to(10.0, 10.0);
    pb.line_to(30.0, 10.0);
    pb.line_to(30.0, 30.0);
    pb.line_to(10.0, 30.0);
    pb.close();
    let path = pb.finish().unwrap();

    let white = OpaquePattern::new(Pixel::Rgb(Rgb::WHITE));

    let mut nonzero = Surface::new(PixelFormat::Rgb, 40, 40).unwrap();
    nonzero.fill_path(&path, FillRule::NonZero, AntiAliasMode::None, &white);
    assert_eq!(nonzero.pixel(15, 15), Pixel::Rgb(Rgb::WHITE));

    let mut even_odd = Surface::new(PixelFormat::Rgb, 40, 40).unwrap();
    even_odd.fill_path(&path, FillRule::EvenOdd, AntiAliasMode::None, &white);
    assert_eq!(even_odd.pixel(15, 15), Pixel::Rgb(Rgb::BLACK));
}

#[test]
fn filling_an_empty_path_touches_nothing() {
    let path = {
        let pb = PathBuilder::new();
        pb.finish()
    };
    assert!(path.is_none());
}

#[test]
fn open_subpath_is_implicitly_closed_for_filling() {
    // No explicit `close()`: the filler still treats this as a triangle.
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(20.0, 0.0);
    pb.line_to(10.0, 20.0);
    let path = pb.finish().unwrap();

    let mut surface = Surface::new(PixelFormat::Rgb, 20, 20).unwrap();
    let white = OpaquePattern::new(Pixel::Rgb(Rgb::WHITE));
    surface.fill_path(&path, FillRule::NonZero, AntiAliasMode::None, &white);

    assert_eq!(surface.pixel(10, 5), Pixel::Rgb(Rgb::WHITE));
}
