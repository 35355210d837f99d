use std::collections::HashMap;

use log::{debug, warn};

use crate::color::{is_transparent, Color};
use crate::error::{Error, Result};
use crate::matcher::NearestColor;
use crate::source::ImageAccessor;

/// Number of samples classified to each reference color, in reference table order.
///
/// A color listed twice in the table shares the counter of its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitCounts {
    counts: Vec<(Color, usize)>,
    index: HashMap<Color, usize>,
}

impl HitCounts {
    /// Every color of `table` at zero.
    pub fn new(table: &[Color]) -> Self {
        let mut counts = Vec::with_capacity(table.len());
        let mut index = HashMap::with_capacity(table.len());
        for &color in table {
            index.entry(color).or_insert_with(|| {
                counts.push((color, 0));
                counts.len() - 1
            });
        }
        Self { counts, index }
    }

    /// Adds one hit for `color`. Returns `false` if `color` is not a tracked color.
    pub fn increment(&mut self, color: Color) -> bool {
        match self.index.get(&color) {
            Some(&i) => {
                self.counts[i].1 += 1;
                true
            }
            None => false,
        }
    }

    /// Hits recorded for `color`, `None` if it is not tracked.
    pub fn get(&self, color: Color) -> Option<usize> {
        self.index.get(&color).map(|&i| self.counts[i].1)
    }

    /// `(color, hits)` in reference table order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Number of distinct colors tracked.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no colors are tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all hits.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }
}

/// Samples every `precision`-th column and row of `image`, snapping each opaque sample to the
/// nearest color in `table` and counting it.
///
/// Samples start at `(0, 0)`; a `width x height` image yields
/// `ceil(width / precision) * ceil(height / precision)` samples before transparency filtering.
pub fn scan<A>(image: &A, precision: u32, table: &[Color]) -> Result<HitCounts>
where
    A: ImageAccessor + ?Sized,
{
    if precision == 0 {
        return Err(Error::InvalidPrecision(precision));
    }

    let (width, height) = image.dimensions();
    let step = precision as usize;
    debug!(
        "Scanning {}x{} image every {} pixels against {} colors",
        width,
        height,
        precision,
        table.len()
    );

    let mut hits = HitCounts::new(table);
    let mut matcher = NearestColor::new(table);
    let mut transparent = 0usize;

    for x in (0..width).step_by(step) {
        for y in (0..height).step_by(step) {
            let pixel = image.pixel_at(x, y);
            if is_transparent(&pixel.rgba) {
                transparent += 1;
                continue;
            }

            let (r, g, b) = pixel.rgb();
            if let Some(color) = matcher.closest(r, g, b) {
                hits.increment(color);
            }
        }
    }

    let counted = hits.total();
    debug!("Counted {} samples, skipped {} transparent", counted, transparent);
    if counted == 0 {
        warn!("No opaque samples in {}x{} image", width, height);
    }

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_table;
    use crate::source::RgbaBuffer;

    fn ceil_div(a: u32, b: u32) -> usize {
        ((a + b - 1) / b) as usize
    }

    #[test]
    fn test_duplicate_table_entries_collapse() {
        let red = Color::from_rgb(255, 0, 0);
        let blue = Color::from_rgb(0, 0, 255);
        let mut hits = HitCounts::new(&[red, blue, red]);
        assert_eq!(hits.len(), 2);
        assert!(hits.increment(red));
        assert!(!hits.increment(Color::from_rgb(1, 2, 3)));
        assert_eq!(hits.iter().collect::<Vec<_>>(), vec![(red, 1), (blue, 0)]);
    }

    #[test]
    fn test_solid_image_counts_every_sample() {
        let teal = Color::from_rgb(0x00, 0x99, 0x99);
        for &(width, height) in &[(1, 1), (10, 7), (33, 20)] {
            for precision in 1..=12 {
                let image = RgbaBuffer::from_pixel(width, height, [0x00, 0x99, 0x99, 255]);
                let hits = scan(&image, precision, reference_table()).unwrap();
                let expected = ceil_div(width, precision) * ceil_div(height, precision);
                assert_eq!(hits.get(teal), Some(expected));
                assert_eq!(hits.total(), expected);
            }
        }
    }

    #[test]
    fn test_transparent_image_counts_nothing() {
        let image = RgbaBuffer::from_pixel(16, 16, [200, 10, 10, 0]);
        let hits = scan(&image, 1, reference_table()).unwrap();
        assert_eq!(hits.total(), 0);
        assert_eq!(hits.len(), reference_table().len());
    }

    #[test]
    fn test_partially_transparent_pixels_are_counted() {
        // columns: alpha 1, alpha 254, alpha 0
        let mut data = Vec::new();
        for _ in 0..3 {
            data.extend_from_slice(&[255, 0, 0, 1]);
            data.extend_from_slice(&[0, 0, 255, 254]);
            data.extend_from_slice(&[0, 255, 0, 0]);
        }
        let image = RgbaBuffer::new(3, 3, data).unwrap();
        let hits = scan(&image, 1, reference_table()).unwrap();
        assert_eq!(hits.get(Color::from_rgb(255, 0, 0)), Some(3));
        assert_eq!(hits.get(Color::from_rgb(0, 0, 255)), Some(3));
        assert_eq!(hits.get(Color::from_rgb(0, 255, 0)), Some(0));
        assert_eq!(hits.total(), 6);
    }

    #[test]
    fn test_only_strided_pixels_are_read() {
        // red everywhere except the sampled lattice, which is black
        let mut data = Vec::new();
        for y in 0..6u32 {
            for x in 0..6u32 {
                if x % 3 == 0 && y % 3 == 0 {
                    data.extend_from_slice(&[0, 0, 0, 255]);
                } else {
                    data.extend_from_slice(&[255, 0, 0, 255]);
                }
            }
        }
        let image = RgbaBuffer::new(6, 6, data).unwrap();
        let hits = scan(&image, 3, reference_table()).unwrap();
        assert_eq!(hits.get(Color::from_rgb(0, 0, 0)), Some(4));
        assert_eq!(hits.get(Color::from_rgb(255, 0, 0)), Some(0));
    }

    #[test]
    fn test_zero_precision_is_rejected() {
        let image = RgbaBuffer::from_pixel(4, 4, [0, 0, 0, 255]);
        assert!(matches!(
            scan(&image, 0, reference_table()),
            Err(Error::InvalidPrecision(0))
        ));
    }

    #[test]
    fn test_empty_image() {
        let image = RgbaBuffer::from_pixel(0, 0, [0, 0, 0, 255]);
        let hits = scan(&image, 10, reference_table()).unwrap();
        assert_eq!(hits.total(), 0);
    }
}
