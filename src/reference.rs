//! The fixed table of candidate colors every sample is snapped to.

use std::sync::OnceLock;

use crate::color::{Color, ColorLiteral};
use crate::settings::{GRID_STEPS, SUPPLEMENTARY_COLORS};

static REFERENCE_TABLE: OnceLock<Vec<Color>> = OnceLock::new();

/// Number of entries in the web-safe grid.
pub const GRID_SIZE: usize = GRID_STEPS.len() * GRID_STEPS.len() * GRID_STEPS.len();

/// Table entries before expansion: the 6x6x6 web-safe grid as shorthand, red-major, then the
/// supplementary colors.
pub fn reference_literals() -> impl Iterator<Item = ColorLiteral> {
    let grid = GRID_STEPS.iter().flat_map(|&r| {
        GRID_STEPS.iter().flat_map(move |&g| {
            GRID_STEPS
                .iter()
                .map(move |&b| ColorLiteral::Short((r << 8) | (g << 4) | b))
        })
    });

    let supplementary = SUPPLEMENTARY_COLORS.iter().copied().map(ColorLiteral::Full);

    grid.chain(supplementary)
}

/// Builds the expanded table. Prefer [`reference_table`], which computes this once.
pub fn build_reference_table() -> Vec<Color> {
    reference_literals().map(ColorLiteral::expand).collect()
}

/// The shared, expanded reference table.
pub fn reference_table() -> &'static [Color] {
    REFERENCE_TABLE.get_or_init(build_reference_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(GRID_SIZE, 216);
        assert_eq!(reference_table().len(), 216 + SUPPLEMENTARY_COLORS.len());
    }

    #[test]
    fn test_grid_order() {
        let table = reference_table();
        assert_eq!(table[0], Color::from_rgb(0, 0, 0));
        assert_eq!(table[1], Color::from_rgb(0, 0, 0x33));
        assert_eq!(table[6], Color::from_rgb(0, 0x33, 0));
        assert_eq!(table[36], Color::from_rgb(0x33, 0, 0));
        assert_eq!(table[GRID_SIZE - 1], Color::from_rgb(0xff, 0xff, 0xff));
        assert_eq!(table[GRID_SIZE].to_u32(), 0xea4c88);
        assert_eq!(table.last().map(|c| c.to_u32()), Some(0xf5dd01));
    }

    #[test]
    fn test_supplementary_colors_all_present() {
        let table = reference_table();
        assert_eq!(&table[GRID_SIZE..], &SUPPLEMENTARY_COLORS[..]);
        let packed: Vec<u32> = table[GRID_SIZE..].iter().map(|c| c.to_u32()).collect();
        assert_eq!(
            packed,
            vec![0xea4c88, 0x77cc33, 0xe7d8b1, 0xfdadc7, 0x424153, 0xabbcda, 0xf5dd01]
        );
    }

    #[test]
    fn test_grid_channels_are_web_safe() {
        let steps = [0x00, 0x33, 0x66, 0x99, 0xcc, 0xff];
        for color in &reference_table()[..GRID_SIZE] {
            let (r, g, b) = color.to_rgb();
            assert!(steps.contains(&r) && steps.contains(&g) && steps.contains(&b));
        }
    }

    #[test]
    fn test_shared_table_matches_fresh_build() {
        assert_eq!(reference_table(), build_reference_table().as_slice());
        assert!(std::ptr::eq(reference_table(), reference_table()));
    }
}
