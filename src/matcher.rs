use crate::color::Color;

/// Squared euclidean distance between two colors in RGB space.
fn distance((r, g, b): (u8, u8, u8), candidate: Color) -> u32 {
    let dr = r as i32 - candidate.red() as i32;
    let dg = g as i32 - candidate.green() as i32;
    let db = b as i32 - candidate.blue() as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Returns the table entry nearest to `(r, g, b)`.
///
/// Ties go to the entry that comes first in `table`. `None` only for an empty table.
pub fn closest(r: u8, g: u8, b: u8, table: &[Color]) -> Option<Color> {
    let mut best = None;
    let mut best_distance = u32::MAX;

    for &candidate in table {
        let d = distance((r, g, b), candidate);
        // strict: an equal distance later in the table never wins
        if best.is_none() || d < best_distance {
            best = Some(candidate);
            best_distance = d;
        }
    }

    best
}

/// Number of memo slots in [`NearestColor`], one per 4-bit-per-channel bucket.
pub const CACHE_SLOTS: usize = 1 << 12;

/// Nearest-color lookup over a fixed table with a direct-mapped memo.
///
/// Each slot remembers the last triple resolved in its bucket, so memory stays at
/// [`CACHE_SLOTS`] entries however many distinct colors an image holds.
#[derive(Debug)]
pub struct NearestColor<'a> {
    table: &'a [Color],
    slots: Vec<Option<((u8, u8, u8), Color)>>,
}

impl<'a> NearestColor<'a> {
    /// Matcher over `table`.
    pub fn new(table: &'a [Color]) -> Self {
        Self {
            table,
            slots: vec![None; CACHE_SLOTS],
        }
    }

    fn slot((r, g, b): (u8, u8, u8)) -> usize {
        ((r as usize >> 4) << 8) | ((g as usize >> 4) << 4) | (b as usize >> 4)
    }

    /// Same result as [`closest`].
    pub fn closest(&mut self, r: u8, g: u8, b: u8) -> Option<Color> {
        let key = (r, g, b);
        let slot = Self::slot(key);
        if let Some((cached, color)) = self.slots[slot] {
            if cached == key {
                return Some(color);
            }
        }

        let color = closest(r, g, b, self.table)?;
        self.slots[slot] = Some((key, color));
        Some(color)
    }

    /// Number of occupied memo slots.
    pub fn cached(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{reference_table, GRID_SIZE};

    #[test]
    fn test_snaps_to_grid() {
        let grid = &reference_table()[..GRID_SIZE];
        assert_eq!(closest(10, 10, 10, grid), Some(Color::from_rgb(0, 0, 0)));
        assert_eq!(closest(250, 10, 10, grid), Some(Color::from_rgb(0xff, 0, 0)));
        assert_eq!(closest(0x34, 0x98, 0xcd, grid), Some(Color::from_rgb(0x33, 0x99, 0xcc)));
    }

    #[test]
    fn test_exact_match() {
        for &color in reference_table() {
            let (r, g, b) = color.to_rgb();
            assert_eq!(closest(r, g, b, reference_table()), Some(color));
        }
    }

    #[test]
    fn test_first_entry_wins_tie() {
        let low = Color::from_rgb(0, 0, 0);
        let high = Color::from_rgb(0, 0, 2);
        assert_eq!(closest(0, 0, 1, &[low, high]), Some(low));
        assert_eq!(closest(0, 0, 1, &[high, low]), Some(high));
    }

    #[test]
    fn test_supplementary_beats_grid() {
        // 0x424153 is far closer to (0x40, 0x40, 0x50) than any grid entry
        assert_eq!(closest(0x40, 0x40, 0x50, reference_table()).map(Color::to_u32), Some(0x424153));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(closest(1, 2, 3, &[]), None);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let mut matcher = NearestColor::new(reference_table());
        let first = matcher.closest(120, 7, 200);
        assert_eq!(first, closest(120, 7, 200, reference_table()));
        assert_eq!(matcher.closest(120, 7, 200), first);
        assert_eq!(closest(120, 7, 200, reference_table()), first);
    }

    #[test]
    fn test_memo_stays_bounded() {
        let table = reference_table();
        let mut matcher = NearestColor::new(table);
        for value in 0u32..1 << 18 {
            let (r, g, b) = ((value >> 10) as u8, (value >> 2) as u8, ((value << 6) as u8) | 7);
            let color = matcher.closest(r, g, b);
            if value % 4099 == 0 {
                assert_eq!(color, closest(r, g, b, table));
            }
        }
        assert!(matcher.cached() <= CACHE_SLOTS);
    }

    #[test]
    fn test_memo_collisions_resolve_correctly() {
        let table = reference_table();
        let mut matcher = NearestColor::new(table);
        // both triples land in slot 0; the later one evicts the earlier
        assert_eq!(matcher.closest(0, 0, 0), Some(Color::from_rgb(0, 0, 0)));
        assert_eq!(matcher.closest(15, 15, 15), closest(15, 15, 15, table));
        assert_eq!(matcher.closest(0, 0, 0), Some(Color::from_rgb(0, 0, 0)));
        assert_eq!(matcher.cached(), 1);
    }
}
