// This file is an example of how to use the `raster_kit` library.
// It draws into an in-memory image and logs what it finds; nothing is written
// to disk.

use image::{Rgba, RgbaImage};
use log::info;
use raster_kit::{Circle, Color, Kernel, Line, Point, Polygon, Rect, Region, Shape, Surface};

const WIDTH: u32 = 32;
const HEIGHT: u32 = 24;

fn main() -> raster_kit::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("raster_kit example runner");

    let mut image = RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([16, 16, 32, 255]));
    let mut surface = Surface::from_image(&mut image);

    let shapes = [
        (
            Shape::from(Circle::new(Point::new(10, 10), 6.5)),
            Color::rgb(220.0, 80.0, 40.0),
        ),
        (
            Shape::from(Rect::new(18, 2, 10, 6)),
            Color::rgba(40.0, 200.0, 90.0, 128.0),
        ),
        (
            Shape::from(Polygon::new(vec![
                Point::new(20, 12),
                Point::new(30, 22),
                Point::new(14, 22),
            ])),
            Color::grey01(0.8),
        ),
        (
            Shape::from(Line::new(Point::new(0, HEIGHT as i32 - 1), Point::new(WIDTH as i32 - 1, 0))),
            Color::rgb(255.0, 255.0, 0.0),
        ),
    ];

    for (shape, paint) in &shapes {
        let mut painted = 0usize;
        for point in shape.iter() {
            // Shapes may poke past the image edge.
            let Ok(under) = surface.get_pixel(point) else {
                continue;
            };
            let blended = raster_kit::add(under * 0.25, *paint * 0.75)?;
            if let Some(color) = blended.as_color() {
                surface.set_pixel(point, Color::compose(under, color))?;
                painted += 1;
            }
        }
        info!("{shape:?}: painted {painted} pixels inside {}", shape.bounds());
    }

    let kernel = Kernel::gauss(1);
    let center = Point::new(10, 10);
    let mut blurred = 0.0;
    for (index, offset) in Rect::new(-1, -1, 3, 3).points().enumerate() {
        let weight = kernel.at(index).unwrap_or(0.0);
        blurred += surface.get_pixel(center + offset)?.intensity() * weight;
    }
    info!(
        "gauss {}x{} (sum {}) intensity at {center}: {:.2}",
        kernel.width(),
        kernel.height(),
        kernel.sum(),
        blurred / kernel.sum()
    );

    let brightest = surface
        .bounds()
        .points()
        .filter_map(|p| surface.get_pixel(p).ok().map(|c| (p, c.intensity())))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((point, intensity)) = brightest {
        info!("brightest pixel {point} with intensity {intensity:.1}");
    }

    Ok(())
}
