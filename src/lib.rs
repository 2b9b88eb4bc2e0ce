//! Named colors and color math for the pufferfish 2D game framework.
//!
//! The central type is [`Color`], a linear RGBA color with four `f32`
//! channels. On top of it this crate provides:
//!
//! * constructors from 8-bit channels ([`Color::from_bytes`]) and packed
//!   `0xRRGGBBAA` integers ([`Color::from_packed`]),
//! * interpolation ([`Color::lerp`], [`Color::lerp_precise`]) and scaling
//!   ([`Color::multiply`]),
//! * the full X11 palette as constants, both as [`Color`]s and packed
//!   integers (see [`palette`]),
//! * parsing from hex literals and palette names through [`FromStr`].
//!
//! ```
//! use pufferfish_color::{palette, Color};
//!
//! let sky = Color::CORNFLOWER_BLUE;
//! let dusk = sky.lerp(Color::MIDNIGHT_BLUE, 0.75);
//! assert_eq!(sky.to_packed(), palette::CORNFLOWER_BLUE_RGBA32);
//! assert!(dusk.b < sky.b);
//! ```
//!
//! # Features
//!
//! * `bytemuck` (default): `Color` implements `Pod` and `Zeroable`, so color
//!   slices can be uploaded to vertex buffers directly.
//! * `serde`: `Color` implements `Serialize` and `Deserialize`.
//!
//! [`FromStr`]: std::str::FromStr

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod color;
pub use color::*;

pub mod palette;
pub use palette::NamedColor;

mod util;
