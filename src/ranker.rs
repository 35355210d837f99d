use std::cmp::Reverse;

use itertools::Itertools;
use log::trace;

use crate::color::Color;
use crate::sampler::HitCounts;

/// Colors with their hit counts, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedPalette {
    entries: Vec<(Color, usize)>,
}

impl RankedPalette {
    /// Sorts `hits` by count, descending. Equal counts keep reference table order.
    pub fn rank(hits: &HitCounts) -> Self {
        let entries: Vec<_> = hits
            .iter()
            .sorted_by_key(|&(_, count)| Reverse(count))
            .collect();

        if let Some(&(color, count)) = entries.first() {
            trace!("Ranked {} colors, leader {} with {} hits", entries.len(), color, count);
        }

        Self { entries }
    }

    /// The `n` most frequent colors, or all of them if there are fewer.
    pub fn top(&self, n: usize) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().take(n).map(|&(color, _)| color)
    }

    /// Every `(color, hits)` pair in rank order.
    pub fn entries(&self) -> &[(Color, usize)] {
        &self.entries
    }

    /// Number of ranked colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
