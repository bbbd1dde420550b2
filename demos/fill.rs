use vecrast::{AntiAliasMode, FillRule, OpaquePattern, Pixel, PixelFormat, Rgba, Surface};

fn main() {
    env_logger::init();

    let color1 = OpaquePattern::new(Pixel::Rgba(Rgba::from_clamped(50.0 / 255.0, 127.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0)));
    let color2 = OpaquePattern::new(Pixel::Rgba(Rgba::from_clamped(220.0 / 255.0, 140.0 / 255.0, 75.0 / 255.0, 180.0 / 255.0)));

    let path1 = {
        let mut pb = vecrast::PathBuilder::new();
        pb.move_to(60.0, 60.0);
        pb.line_to(160.0, 940.0);
        pb.curve_to(380.0, 840.0, 660.0, 800.0, 940.0, 800.0);
        pb.curve_to(740.0, 460.0, 440.0, 160.0, 60.0, 60.0);
        pb.close();
        pb.finish().unwrap()
    };

    let path2 = {
        let mut pb = vecrast::PathBuilder::new();
        pb.move_to(940.0, 60.0);
        pb.line_to(840.0, 940.0);
        pb.curve_to(620.0, 840.0, 340.0, 800.0, 60.0, 800.0);
        pb.curve_to(260.0, 460.0, 560.0, 160.0, 940.0, 60.0);
        pb.close();
        pb.finish().unwrap()
    };

    let mut surface = Surface::new(PixelFormat::Rgba, 1000, 1000).unwrap();
    surface.fill_path(&path1, FillRule::NonZero, AntiAliasMode::Default, &color1);
    surface.fill_path(&path2, FillRule::NonZero, AntiAliasMode::Default, &color2);
    surface.save_png("image.png").unwrap();
}
