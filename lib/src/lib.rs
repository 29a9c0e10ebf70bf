//! A library for turning ordinary images into Worms Armageddon colour maps.
//!
//! The game loads custom landscapes from 8-bit palette PNG files whose sides
//! are multiples of 8 pixels, with at most 112 colours plus one transparent
//! entry. Landscape settings such as water level live in a private `w2lv` or
//! `waLV` chunk, which this crate can copy from an existing map.
//!
//! ```no_run
//! use libwamap::{ConvertOptions, convert};
//! use std::path::Path;
//!
//! convert(
//!     "photo.jpg",
//!     "photo_wa.png",
//!     Some(Path::new("template.png")),
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//! ```
pub(crate) mod chunk;
pub(crate) mod encode;
pub(crate) mod error;
pub(crate) mod map;
pub(crate) mod options;
pub mod prelude;
pub(crate) mod quantize;
pub(crate) mod splice;
pub(crate) mod stream;

pub use chunk::*;
pub use error::*;
pub use map::*;
pub use options::*;
pub use splice::*;
pub use stream::*;
