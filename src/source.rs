//! Image decoding backends and the pixel accessor the sampler reads through.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};

/// A sampled pixel: its coordinates and RGBA channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledPixel {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Red, green, blue, alpha
    pub rgba: [u8; 4],
}

impl SampledPixel {
    /// The color channels without alpha.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.rgba[0], self.rgba[1], self.rgba[2])
    }
}

/// Read-only pixel access to a decoded image.
pub trait ImageAccessor {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// When `(x, y)` lies outside [`dimensions`](ImageAccessor::dimensions).
    fn pixel_at(&self, x: u32, y: u32) -> SampledPixel;
}

impl<A: ImageAccessor + ?Sized> ImageAccessor for &A {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn pixel_at(&self, x: u32, y: u32) -> SampledPixel {
        (**self).pixel_at(x, y)
    }
}

impl<A: ImageAccessor + ?Sized> ImageAccessor for Box<A> {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn pixel_at(&self, x: u32, y: u32) -> SampledPixel {
        (**self).pixel_at(x, y)
    }
}

/// Where the image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file on disk; the format is guessed from its contents and extension.
    Path(PathBuf),
    /// An encoded image held in memory.
    Bytes(Vec<u8>),
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

/// Decoding library selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// First backend compiled in.
    #[default]
    Auto,
    /// The `image` crate.
    Image,
}

impl Backend {
    /// Every backend this build can decode with, in `Auto` preference order.
    pub fn available() -> &'static [Backend] {
        const AVAILABLE: &[Backend] = if cfg!(feature = "decode") {
            &[Backend::Image]
        } else {
            &[]
        };
        AVAILABLE
    }

    /// Picks the concrete backend `self` stands for.
    pub fn resolve(self) -> Result<Backend> {
        match self {
            Backend::Auto => Backend::available()
                .first()
                .copied()
                .ok_or(Error::NoDecodingBackendAvailable),
            Backend::Image if Backend::available().contains(&Backend::Image) => Ok(Backend::Image),
            Backend::Image => Err(Error::UnsupportedBackend(self.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Backend::Auto => write!(f, "auto"),
            Backend::Image => write!(f, "image"),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Backend::Auto),
            "image" => Ok(Backend::Image),
            other => Err(Error::UnsupportedBackend(other.to_owned())),
        }
    }
}

/// Decodes `source` with `backend` and returns an accessor over its pixels.
///
/// The accessor owns the decoded pixels and releases them when dropped.
pub fn open(source: &ImageSource, backend: Backend) -> Result<Box<dyn ImageAccessor>> {
    let backend = backend.resolve()?;
    debug!("Decoding {} with the {} backend", describe(source), backend);

    match backend {
        #[cfg(feature = "decode")]
        Backend::Image => Ok(Box::new(image_backend::decode(source)?)),
        _ => Err(Error::UnsupportedBackend(backend.to_string())),
    }
}

fn describe(source: &ImageSource) -> String {
    match source {
        ImageSource::Path(path) => format!("{:?}", path),
        ImageSource::Bytes(bytes) => format!("{} in-memory bytes", bytes.len()),
    }
}

/// Undecoded RGBA pixels, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Wraps `data`, checking it holds exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(Error::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// An image filled with one RGBA value.
    pub fn from_pixel(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }
}

impl ImageAccessor for RgbaBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel_at(&self, x: u32, y: u32) -> SampledPixel {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let rgba = [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ];
        SampledPixel { x, y, rgba }
    }
}

#[cfg(feature = "decode")]
mod image_backend {
    use image::error::ImageError;
    use image::{DynamicImage, GenericImageView, RgbaImage};

    use super::{ImageAccessor, ImageSource, SampledPixel};
    use crate::error::{Error, Result};

    /// Decodes `source` and converts it to 8-bit RGBA once up front.
    pub(super) fn decode(source: &ImageSource) -> Result<RgbaImage> {
        let decoded = match source {
            ImageSource::Path(path) => image::open(path).map_err(|e| match e {
                ImageError::IoError(source) => Error::Io {
                    path: path.clone(),
                    source,
                },
                other => convert(other),
            }),
            ImageSource::Bytes(bytes) => image::load_from_memory(bytes).map_err(convert),
        }?;

        Ok(decoded.to_rgba8())
    }

    fn convert(error: ImageError) -> Error {
        match error {
            ImageError::Unsupported(unsupported) => Error::UnsupportedFormat(unsupported.to_string()),
            other => Error::Decode(other),
        }
    }

    impl ImageAccessor for RgbaImage {
        fn dimensions(&self) -> (u32, u32) {
            RgbaImage::dimensions(self)
        }

        fn pixel_at(&self, x: u32, y: u32) -> SampledPixel {
            let rgba = self.get_pixel(x, y).0;
            SampledPixel { x, y, rgba }
        }
    }

    impl ImageAccessor for DynamicImage {
        fn dimensions(&self) -> (u32, u32) {
            GenericImageView::dimensions(self)
        }

        fn pixel_at(&self, x: u32, y: u32) -> SampledPixel {
            let rgba = GenericImageView::get_pixel(self, x, y).0;
            SampledPixel { x, y, rgba }
        }
    }
}
