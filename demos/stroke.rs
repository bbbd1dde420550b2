use vecrast::{AntiAliasMode, CapMode, JoinMode, OpaquePattern, Pixel, PixelFormat, Rgba, StrokeProps, Surface};

// Based on https://fiddle.skia.org/c/@compose_path

fn main() {
    env_logger::init();

    let mut surface = Surface::new(PixelFormat::Rgba, 500, 500).unwrap();

    let now = std::time::Instant::now();

    let color = OpaquePattern::new(Pixel::Rgba(Rgba::from_clamped(0.0, 127.0 / 255.0, 0.0, 200.0 / 255.0)));

    let path = {
        let mut pb = vecrast::PathBuilder::new();
        const RADIUS: f64 = 250.0;
        const CENTER: f64 = 250.0;
        pb.move_to(CENTER + RADIUS, CENTER);
        for i in 1..8 {
            let a = 2.6927937 * i as f64;
            pb.line_to(CENTER + RADIUS * a.cos(), CENTER + RADIUS * a.sin());
        }
        pb.finish().unwrap()
    };

    let props = StrokeProps {
        thickness: 6.0,
        join: JoinMode::Round,
        cap: CapMode::Round,
        ..StrokeProps::default()
    };

    surface.stroke_path(&path, &props, AntiAliasMode::Default, &color);

    println!("Rendered in {:.2}ms", now.elapsed().as_micros() as f64 / 1000.0);

    surface.save_png("image.png").unwrap();
}
