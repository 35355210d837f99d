//! Extract the dominant colors of an image
//!
//! Pixels are sampled on a fixed stride, each sample is snapped to the nearest color of a fixed
//! reference palette (the 216 web-safe colors plus a handful of named extras) by squared RGB
//! distance, and the reference colors are ranked by how many samples they received.
//!
//! ```no_run
//! use websafe_palette::{Options, Palette};
//!
//! let palette = Palette::new("photo.jpg", &Options::new().precision(5).length(3))?;
//! for color in &palette {
//!     println!("{}", color);
//! }
//! # Ok::<(), websafe_palette::Error>(())
//! ```

#![deny(missing_docs)]

pub use color::{rgb_to_string, Color, ColorLiteral};
pub use error::{Error, Result};
pub use matcher::{closest, NearestColor};
pub use palette::{Options, Palette};
pub use ranker::RankedPalette;
pub use reference::{build_reference_table, reference_table};
pub use sampler::{scan, HitCounts};
pub use source::{open, Backend, ImageAccessor, ImageSource, RgbaBuffer, SampledPixel};

pub mod color;
mod error;
mod matcher;
mod palette;
mod ranker;
pub mod reference;
pub mod settings;
mod sampler;
pub mod source;
