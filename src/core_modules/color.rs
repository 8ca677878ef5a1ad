// THEORY (Color):
// `Color` is the value type that flows between a `Surface` and the arithmetic
// layer. It is a "dumb" record of four channels plus a handful of derived
// readings that can be computed from those channels alone.
//
// Channel space:
// - raw (0..255 as f64):  what the surface stores and what add/sub operate on
// - normalized (0..1):    raw / 255, what mul/div between two colors operate on
// Channels are never clamped or rounded by arithmetic. Intermediate results may
// be negative, above 255 or fractional; callers clamp when they need a value
// that can be displayed (`clamp()`, or by writing through a `u8` surface).
//
// Alpha is carried along but never negated, and the Color-Color mul/div rules
// keep the left operand's alpha.

use crate::core_modules::op::Negatable;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub type Channel = f64;
pub type NormalizedChannel = f64;
pub type Intensity = f64;

const CHANNEL_MAX: Channel = 255.0;

/// An RGBA color with `f64` channels in raw (0..255) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: Channel,
    g: Channel,
    b: Channel,
    a: Channel,
}

impl Color {
    /// Opaque color from raw channels.
    pub const fn rgb(r: Channel, g: Channel, b: Channel) -> Self {
        Self::rgba(r, g, b, CHANNEL_MAX)
    }

    pub const fn rgba(r: Channel, g: Channel, b: Channel, a: Channel) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from normalized (0..1) channels.
    pub fn rgb01(r: NormalizedChannel, g: NormalizedChannel, b: NormalizedChannel) -> Self {
        Self::color01(r, g, b, 1.0)
    }

    pub fn rgba01(
        r: NormalizedChannel,
        g: NormalizedChannel,
        b: NormalizedChannel,
        a: NormalizedChannel,
    ) -> Self {
        Self::color01(r, g, b, a)
    }

    /// Scales every normalized input by 255.
    pub fn color01(
        r: NormalizedChannel,
        g: NormalizedChannel,
        b: NormalizedChannel,
        a: NormalizedChannel,
    ) -> Self {
        Self::rgba(
            r * CHANNEL_MAX,
            g * CHANNEL_MAX,
            b * CHANNEL_MAX,
            a * CHANNEL_MAX,
        )
    }

    /// Opaque grey with all three color channels set to `value`.
    pub const fn grey(value: Channel) -> Self {
        Self::rgb(value, value, value)
    }

    pub fn grey01(value: NormalizedChannel) -> Self {
        Self::grey(value * CHANNEL_MAX)
    }

    pub fn r(&self) -> Channel {
        self.r
    }

    pub fn g(&self) -> Channel {
        self.g
    }

    pub fn b(&self) -> Channel {
        self.b
    }

    pub fn a(&self) -> Channel {
        self.a
    }

    pub fn r01(&self) -> NormalizedChannel {
        self.r / CHANNEL_MAX
    }

    pub fn g01(&self) -> NormalizedChannel {
        self.g / CHANNEL_MAX
    }

    pub fn b01(&self) -> NormalizedChannel {
        self.b / CHANNEL_MAX
    }

    pub fn a01(&self) -> NormalizedChannel {
        self.a / CHANNEL_MAX
    }

    /// Perceived brightness (ITU-R BT.601 luma weights) in raw space.
    ///
    /// - Weighted sum of R, G and B; alpha does not contribute.
    /// - Not clamped, so out-of-range channels give out-of-range intensity.
    pub fn intensity(&self) -> Intensity {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// `intensity()` scaled to 0..1.
    pub fn intensity01(&self) -> Intensity {
        self.intensity() / CHANNEL_MAX
    }

    /// Inverts the color channels, leaving alpha untouched.
    pub fn neg(&self) -> Self {
        Self::rgba(
            CHANNEL_MAX - self.r,
            CHANNEL_MAX - self.g,
            CHANNEL_MAX - self.b,
            self.a,
        )
    }

    /// Clamps every channel, alpha included, to 0..255.
    pub fn clamp(&self) -> Self {
        Self::rgba(
            self.r.clamp(0.0, CHANNEL_MAX),
            self.g.clamp(0.0, CHANNEL_MAX),
            self.b.clamp(0.0, CHANNEL_MAX),
            self.a.clamp(0.0, CHANNEL_MAX),
        )
    }

    /// Source-over composite of `upper` onto `lower`.
    ///
    /// - The resulting color channels are clamped to 0..255.
    /// - Two fully transparent inputs give fully transparent black.
    pub fn compose(lower: Color, upper: Color) -> Self {
        let lower_alpha = lower.a01();
        let upper_alpha = upper.a01();
        let alpha = lower_alpha + (1.0 - lower_alpha) * upper_alpha;
        if alpha <= 0.0 {
            return Self::rgba(0.0, 0.0, 0.0, 0.0);
        }
        let inverse_upper_alpha = 1.0 - upper_alpha;
        let blend = |low: Channel, up: Channel| {
            ((up * upper_alpha + low * lower_alpha * inverse_upper_alpha) / alpha)
                .clamp(0.0, CHANNEL_MAX)
        };
        Self::rgba(
            blend(lower.r, upper.r),
            blend(lower.g, upper.g),
            blend(lower.b, upper.b),
            alpha * CHANNEL_MAX,
        )
    }

    /// Applies `f` to r, g and b; alpha is copied from `self`.
    pub(crate) fn map_rgb(&self, f: impl Fn(Channel) -> Channel) -> Self {
        Self::rgba(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Combines r, g and b channel-wise; alpha is copied from `self`.
    pub(crate) fn zip_rgb(&self, other: &Color, f: impl Fn(Channel, Channel) -> Channel) -> Self {
        Self::rgba(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            self.a,
        )
    }

    /// Fallible `map_rgb`; stops at the first channel error.
    pub(crate) fn try_map_rgb<E>(
        &self,
        f: impl Fn(Channel) -> Result<Channel, E>,
    ) -> Result<Self, E> {
        Ok(Self::rgba(f(self.r)?, f(self.g)?, f(self.b)?, self.a))
    }

    /// Fallible `zip_rgb`; stops at the first channel error.
    pub(crate) fn try_zip_rgb<E>(
        &self,
        other: &Color,
        f: impl Fn(Channel, Channel) -> Result<Channel, E>,
    ) -> Result<Self, E> {
        Ok(Self::rgba(
            f(self.r, other.r)?,
            f(self.g, other.g)?,
            f(self.b, other.b)?,
            self.a,
        ))
    }
}

impl Negatable for Color {
    fn negate(&self) -> Self {
        self.neg()
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.zip_rgb(&rhs, |l, r| l + r)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.zip_rgb(&rhs, |l, r| l - r)
    }
}

// Color * Color and Color / Color run in normalized space while add/sub run in
// raw space. The asymmetry is part of the arithmetic contract.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::color01(
            self.r01() * rhs.r01(),
            self.g01() * rhs.g01(),
            self.b01() * rhs.b01(),
            self.a01(),
        )
    }
}

impl Div for Color {
    type Output = Color;

    fn div(self, rhs: Color) -> Color {
        Color::color01(
            self.r01() / rhs.r01(),
            self.g01() / rhs.g01(),
            self.b01() / rhs.b01(),
            self.a01(),
        )
    }
}

impl Add<f64> for Color {
    type Output = Color;

    fn add(self, rhs: f64) -> Color {
        self.map_rgb(|c| c + rhs)
    }
}

impl Sub<f64> for Color {
    type Output = Color;

    fn sub(self, rhs: f64) -> Color {
        self.map_rgb(|c| c - rhs)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        self.map_rgb(|c| c * rhs)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, rhs: f64) -> Color {
        self.map_rgb(|c| c / rhs)
    }
}

impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Color {
        Color::neg(&self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{}:{})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        Color::rgba(
            bytes[0] as Channel,
            bytes[1] as Channel,
            bytes[2] as Channel,
            bytes[3] as Channel,
        )
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Color::from(pixel.0)
    }
}

/// Clamps and rounds each channel into a byte.
impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        let clamped = color.clamp();
        image::Rgba([
            clamped.r.round() as u8,
            clamped.g.round() as u8,
            clamped.b.round() as u8,
            clamped.a.round() as u8,
        ])
    }
}
