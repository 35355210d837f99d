use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::ranker::RankedPalette;
use crate::reference::reference_table;
use crate::sampler::scan;
use crate::settings;
use crate::source::{self, Backend, ImageAccessor, ImageSource};

/// How an image is sampled and how many colors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    precision: u32,
    length: usize,
    backend: Backend,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: settings::DEFAULT_PRECISION,
            length: settings::DEFAULT_PALETTE_LENGTH,
            backend: Backend::Auto,
        }
    }
}

impl Options {
    /// Default options: every 10th pixel, 5 colors, first available backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample every `precision`-th column and row. Must be at least 1.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Number of colors returned by [`Palette::colors`]. `0` keeps the default.
    pub fn length(mut self, length: usize) -> Self {
        self.length = if length == 0 {
            settings::DEFAULT_PALETTE_LENGTH
        } else {
            length
        };
        self
    }

    /// Decoding backend for file and byte sources.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Configured sampling stride
    pub fn get_precision(&self) -> u32 {
        self.precision
    }

    /// Configured palette length
    pub fn get_length(&self) -> usize {
        self.length
    }

    /// Configured backend
    pub fn get_backend(&self) -> Backend {
        self.backend
    }
}

/// Dominant colors of an image, snapped to the reference palette and ranked by frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    ranked: RankedPalette,
    length: usize,
    samples: usize,
}

impl Palette {
    /// Decodes `source` and builds its palette.
    ///
    /// The image is opened, scanned and released before this returns.
    pub fn new(input: impl Into<ImageSource>, options: &Options) -> Result<Palette> {
        if options.precision == 0 {
            return Err(Error::InvalidPrecision(options.precision));
        }

        let image = source::open(&input.into(), options.backend)?;
        Self::from_image(&image, options)
    }

    /// Builds the palette of an already decoded image.
    pub fn from_image<A>(image: &A, options: &Options) -> Result<Palette>
    where
        A: ImageAccessor + ?Sized,
    {
        let hits = scan(image, options.precision, reference_table())?;
        let samples = hits.total();
        let ranked = RankedPalette::rank(&hits);
        debug!(
            "Built palette of {} from {} samples",
            ranked.top(options.length).join(", "),
            samples
        );

        Ok(Palette {
            ranked,
            length: options.length,
            samples,
        })
    }

    /// The configured number of most frequent colors.
    pub fn colors(&self) -> Vec<Color> {
        self.top(self.length)
    }

    /// The `n` most frequent colors; `0` means the configured length.
    pub fn top(&self, n: usize) -> Vec<Color> {
        let n = if n == 0 { self.length } else { n };
        self.ranked.top(n).collect()
    }

    /// [`top`](Palette::top) as channel triples.
    pub fn rgb(&self, n: usize) -> Vec<(u8, u8, u8)> {
        self.top(n).into_iter().map(Color::to_rgb).collect()
    }

    /// [`top`](Palette::top) as `#rrggbb` strings.
    pub fn hex(&self, n: usize) -> Vec<String> {
        self.top(n).into_iter().map(Color::to_hex_string).collect()
    }

    /// [`top`](Palette::top) as `rgb(r,g,b)` strings.
    pub fn rgb_strings(&self, n: usize) -> Vec<String> {
        self.top(n).into_iter().map(Color::to_rgb_string).collect()
    }

    /// Every reference color with its hit count, most frequent first.
    pub fn counts(&self) -> &[(Color, usize)] {
        self.ranked.entries()
    }

    /// Number of opaque samples that were classified.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Configured palette length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Iterates over [`colors`](Palette::colors).
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.ranked.top(self.length)
    }

    /// The default colors as a JSON array of hex strings.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.hex(self.length))?)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors().into_iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Color Palette {{ {} }}", self.iter().join(", "))
    }
}
