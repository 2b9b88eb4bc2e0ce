//! The [`Color`] type and the arithmetic defined on it.
//!
//! Colors are plain values: every operation takes its inputs by value and
//! returns a new [`Color`], so they can be shared freely across threads.
//! Named presets live on [`Color`] as associated constants (see
//! [`palette`](crate::palette)).

use std::ops::Mul;

mod parse;
pub use parse::ParseColorError;

/// A linear RGBA color represented by 4 [f32]s.
///
/// Channels are nominally in `0.0..=1.0`, but nothing stops a color from
/// leaving that range. [`multiply`](Color::multiply) in particular is
/// allowed to push channels above 1.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The red component of the color.
    pub r: f32,
    /// The green component of the color.
    pub g: f32,
    /// The blue component of the color.
    pub b: f32,
    /// The alpha component of the color.
    pub a: f32,
}

/// Packs four 8-bit channels into a single `u32`, red in the most
/// significant byte and alpha in the least.
pub const fn pack_rgba32(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
}

impl Color {
    /// Creates a new color with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Creates a new color with the given components and an alpha of 1.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1. }
    }

    /// Creates a new color from 8-bit channels, mapping `0..=255` onto
    /// `0.0..=1.0`.
    pub const fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.,
            g: g as f32 / 255.,
            b: b as f32 / 255.,
            a: a as f32 / 255.,
        }
    }

    /// Creates a new color from a packed RGBA32 value, laid out as
    /// `0xRRGGBBAA`.
    ///
    /// ```
    /// # use pufferfish_color::Color;
    /// assert_eq!(Color::from_packed(0xFF0000FF), Color::RED);
    /// ```
    pub const fn from_packed(rgba: u32) -> Color {
        Color::from_bytes(
            (rgba >> 24) as u8,
            (rgba >> 16) as u8,
            (rgba >> 8) as u8,
            rgba as u8,
        )
    }

    /// Quantizes the color to 8 bits per channel.
    ///
    /// Channels are clamped to `0.0..=1.0` before rounding. A NaN channel
    /// becomes 0.
    pub fn to_bytes(self) -> [u8; 4] {
        fn quantize(c: f32) -> u8 {
            (c.clamp(0., 1.) * 255.).round() as u8
        }

        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Quantizes the color and packs it as `0xRRGGBBAA`, the inverse of
    /// [`from_packed`](Color::from_packed).
    pub fn to_packed(self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        pack_rgba32(r, g, b, a)
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `amount` is clamped to `0.0..=1.0`, so the result always lies between
    /// the two inputs. Each channel is computed as `a + (b - a) * amount`.
    pub fn lerp(self, other: Color, amount: f32) -> Color {
        let t = amount.clamp(0., 1.);
        self.zip_with(other, |a, b| a + (b - a) * t)
    }

    /// Like [`lerp`](Color::lerp), but computed as
    /// `(1 - amount) * a + amount * b`.
    ///
    /// This form is exact at both ends of the range, which matters when
    /// blending colors whose channels differ greatly in magnitude.
    pub fn lerp_precise(self, other: Color, amount: f32) -> Color {
        let t = amount.clamp(0., 1.);
        self.zip_with(other, |a, b| (1. - t) * a + b * t)
    }

    /// Scales every channel, alpha included, by `scale`.
    ///
    /// The result is not clamped.
    pub fn multiply(self, scale: f32) -> Color {
        Color {
            r: self.r * scale,
            g: self.g * scale,
            b: self.b * scale,
            a: self.a * scale,
        }
    }

    /// Looks up a named preset. See [`palette::lookup`](crate::palette::lookup)
    /// for the accepted spellings.
    pub fn from_name(name: &str) -> Option<Color> {
        crate::palette::lookup(name).map(|named| named.color)
    }

    fn zip_with(self, other: Color, f: impl Fn(f32, f32) -> f32) -> Color {
        Color {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: f(self.a, other.a),
        }
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, scale: f32) -> Color {
        self.multiply(scale)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::from_bytes(r, g, b, a)
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
