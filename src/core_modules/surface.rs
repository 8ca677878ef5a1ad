// THEORY:
// The `Surface` is a window onto a pixel buffer that somebody else owns. The
// host (a decoded image, a canvas readback, a frame from a camera) allocates a
// flat row-major RGBA buffer and lends it to the surface; the surface only
// translates `Point`s into buffer offsets and `Color`s into samples.
//
// Key principles:
// 1.  **Borrowed, never owned**: the surface holds `&mut [S]`. It never
//     resizes, reallocates or copies the buffer, and it has no teardown of its
//     own. Dropping the surface hands the buffer back to the host.
// 2.  **Checked addressing**: every pixel access computes
//     `4 * (y * width + x)` only after checking `x < width` and `y < height`;
//     anything else is an `IndexOutOfRange` error, never a wild access.
// 3.  **Sample policy lives in the sample type**: a `u8` buffer clamps and
//     rounds on write, exactly like a canvas `Uint8ClampedArray`; an `f32` or
//     `f64` buffer stores channels as they are, keeping the headroom of
//     `Color` arithmetic.
// 4.  **Optional clip**: while a clip rect is set, writes that land outside it
//     are dropped silently. Reads are never clipped.

use crate::core_modules::color::{Channel, Color};
use crate::core_modules::error::{RasterError, Result};
use crate::core_modules::point::Point;
use crate::core_modules::region::{Rect, Region};
use image::RgbaImage;
use log::{debug, trace};

pub const CHANNELS: usize = 4;

/// Storage type of one channel in a surface buffer.
pub trait Sample: Copy {
    fn from_channel(channel: Channel) -> Self;
    fn to_channel(self) -> Channel;
}

impl Sample for u8 {
    fn from_channel(channel: Channel) -> Self {
        channel.clamp(0.0, 255.0).round() as u8
    }

    fn to_channel(self) -> Channel {
        self as Channel
    }
}

impl Sample for f32 {
    fn from_channel(channel: Channel) -> Self {
        channel as f32
    }

    fn to_channel(self) -> Channel {
        self as Channel
    }
}

impl Sample for f64 {
    fn from_channel(channel: Channel) -> Self {
        channel
    }

    fn to_channel(self) -> Channel {
        self
    }
}

/// Pixel accessor over a caller-owned RGBA buffer of `width * height * 4` samples.
#[derive(Debug)]
pub struct Surface<'a, S: Sample = u8> {
    pixels: &'a mut [S],
    width: u32,
    height: u32,
    clip: Option<Rect>,
}

impl<'a, S: Sample> Surface<'a, S> {
    /// Wraps `pixels`, which must hold exactly `width * height * 4` samples.
    pub fn new(pixels: &'a mut [S], width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        debug!("surface attached to {width}x{height} buffer");
        Ok(Self {
            pixels,
            width,
            height,
            clip: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole surface as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Offset of the first (red) sample of `point`.
    pub fn offset(&self, point: Point) -> Result<usize> {
        let out_of_range = || RasterError::IndexOutOfRange {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        };
        let x = u32::try_from(point.x).map_err(|_| out_of_range())?;
        let y = u32::try_from(point.y).map_err(|_| out_of_range())?;
        if x >= self.width || y >= self.height {
            return Err(out_of_range());
        }
        Ok(CHANNELS * (y as usize * self.width as usize + x as usize))
    }

    pub fn get_pixel(&self, point: Point) -> Result<Color> {
        let offset = self.offset(point)?;
        let samples = &self.pixels[offset..offset + CHANNELS];
        Ok(Color::rgba(
            samples[0].to_channel(),
            samples[1].to_channel(),
            samples[2].to_channel(),
            samples[3].to_channel(),
        ))
    }

    /// Writes R, G, B, A at `point`. Inside the surface but outside the clip
    /// rect the write is dropped and `Ok(())` is returned.
    pub fn set_pixel(&mut self, point: Point, color: Color) -> Result<()> {
        let offset = self.offset(point)?;
        if let Some(clip) = self.clip {
            if !clip.contains(point) {
                trace!("dropping write at {point}, outside clip {clip}");
                return Ok(());
            }
        }
        let samples = &mut self.pixels[offset..offset + CHANNELS];
        samples[0] = S::from_channel(color.r());
        samples[1] = S::from_channel(color.g());
        samples[2] = S::from_channel(color.b());
        samples[3] = S::from_channel(color.a());
        Ok(())
    }

    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Restricts writes to `clip`; `None` removes the restriction.
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    /// The raw buffer, for a host that flushes or displays it.
    pub fn pixels(&self) -> &[S] {
        self.pixels
    }
}

impl<'a> Surface<'a, u8> {
    /// Borrows the pixel storage of an `image` RGBA buffer.
    pub fn from_image(image: &'a mut RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        debug!("surface attached to {width}x{height} RgbaImage");
        Self {
            pixels: &mut **image,
            width,
            height,
            clip: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_row_major() {
        let mut buffer = vec![0u8; 5 * 3 * CHANNELS];
        let surface = Surface::new(&mut buffer, 5, 3).expect("sized buffer");
        assert_eq!(surface.offset(Point::new(0, 0)), Ok(0));
        assert_eq!(surface.offset(Point::new(2, 1)), Ok(4 * (5 + 2)));
        assert_eq!(surface.offset(Point::new(4, 2)), Ok(4 * 14));
    }

    #[test]
    fn wrong_buffer_size_is_rejected() {
        let mut buffer = vec![0u8; 10];
        let error = Surface::new(&mut buffer, 2, 2).expect_err("too small");
        assert_eq!(
            error,
            RasterError::BufferSize {
                expected: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn channels_are_written_in_rgba_order() {
        let mut buffer = vec![0u8; 2 * 2 * CHANNELS];
        {
            let mut surface = Surface::new(&mut buffer, 2, 2).expect("sized buffer");
            surface
                .set_pixel(Point::new(1, 1), Color::rgba(1.0, 2.0, 3.0, 4.0))
                .expect("in bounds");
        }
        assert_eq!(&buffer[12..16], &[1, 2, 3, 4]);
        assert!(buffer[..12].iter().all(|&b| b == 0));
    }

    #[test]
    fn byte_surface_clamps_and_rounds() {
        let mut buffer = vec![0u8; CHANNELS];
        let mut surface = Surface::new(&mut buffer, 1, 1).expect("sized buffer");
        let origin = Point::new(0, 0);
        surface
            .set_pixel(origin, Color::rgba(-20.0, 300.0, 99.5, 12.2))
            .expect("in bounds");
        assert_eq!(
            surface.get_pixel(origin),
            Ok(Color::rgba(0.0, 255.0, 100.0, 12.0))
        );
    }

    #[test]
    fn float_surface_keeps_headroom() {
        let mut buffer = vec![0.0f64; CHANNELS];
        let mut surface = Surface::new(&mut buffer, 1, 1).expect("sized buffer");
        let color = Color::rgba(-20.0, 300.0, 99.5, 12.2);
        surface.set_pixel(Point::new(0, 0), color).expect("in bounds");
        assert_eq!(surface.get_pixel(Point::new(0, 0)), Ok(color));
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut buffer = vec![0u8; 3 * 2 * CHANNELS];
        let mut surface = Surface::new(&mut buffer, 3, 2).expect("sized buffer");
        for point in [Point::new(3, 0), Point::new(0, 2), Point::new(-1, 0), Point::new(0, -1)] {
            assert_eq!(
                surface.get_pixel(point),
                Err(RasterError::IndexOutOfRange {
                    x: point.x,
                    y: point.y,
                    width: 3,
                    height: 2
                })
            );
            assert!(surface.set_pixel(point, Color::grey(1.0)).is_err());
        }
    }

    #[test]
    fn clip_drops_writes_outside() {
        let mut buffer = vec![0u8; 4 * 4 * CHANNELS];
        let mut surface = Surface::new(&mut buffer, 4, 4).expect("sized buffer");
        surface.set_clip(Some(Rect::new(1, 1, 2, 2)));
        let white = Color::grey(255.0);
        for point in surface.bounds().points() {
            surface.set_pixel(point, white).expect("in bounds");
        }
        let written = surface
            .bounds()
            .points()
            .filter(|p| surface.get_pixel(*p) == Ok(white))
            .count();
        assert_eq!(written, 4);
        surface.set_clip(None);
        assert_eq!(surface.clip(), None);
    }

    #[test]
    fn wraps_an_rgba_image() {
        let mut image = RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 6]));
        {
            let mut surface = Surface::from_image(&mut image);
            assert_eq!((surface.width(), surface.height()), (3, 2));
            assert_eq!(surface.get_pixel(Point::new(2, 1)), Ok(Color::rgba(9.0, 8.0, 7.0, 6.0)));
            surface
                .set_pixel(Point::new(0, 1), Color::rgb(1.0, 2.0, 3.0))
                .expect("in bounds");
        }
        assert_eq!(image.get_pixel(0, 1).0, [1, 2, 3, 255]);
    }
}
