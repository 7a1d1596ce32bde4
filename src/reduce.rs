// src/reduce.rs
//! Fold rare color combos into a single "Other" row.
use std::cmp::Ordering;

use crate::partition::ComboCount;

pub const OTHER: &str = "Other";

/// Result of `reduce`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    // Never empty: `reduce` always pushes the `Other` row last.
    above: Vec<ComboCount>,
    below: Vec<ComboCount>,
    threshold: usize,
}

impl Reduction {
    /// Rows with `count >= threshold`, most common first, then the `Other` row last.
    pub fn above(&self) -> &[ComboCount] { &self.above }

    /// Rows folded into `Other`, in sorted order.
    pub fn below(&self) -> &[ComboCount] { &self.below }

    pub fn threshold(&self) -> usize { self.threshold }

    /// The `Other` row. Always present.
    pub fn other(&self) -> &ComboCount {
        &self.above[self.above.len() - 1]
    }

    /// Above-threshold rows without `Other`.
    pub fn kept(&self) -> &[ComboCount] {
        &self.above[..self.above.len() - 1]
    }

    /// Number of combos folded into `Other`.
    pub fn folded(&self) -> usize { self.below.len() }

    /// Sum over every row of `above`, `Other` included.
    pub fn total(&self) -> usize {
        self.above.iter().map(|r| r.count).sum()
    }
}

/// Count descending, then combo ascending.
pub fn by_frequency(a: &ComboCount, b: &ComboCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.combo.cmp(&b.combo))
}

/// Split `catalog` at `threshold` and append `("Other", sum of below)` to the upper part.
/// `Other` is appended even when nothing falls below (sum 0).
pub fn reduce(mut catalog: Vec<ComboCount>, threshold: usize) -> Reduction {
    catalog.sort_by(by_frequency);

    let split = catalog.partition_point(|r| r.count >= threshold);
    let below = catalog.split_off(split);
    let mut above = catalog;

    let other_total = below.iter().map(|r| r.count).sum();
    above.push(ComboCount::new(OTHER, other_total));

    log::debug!(
        "threshold {threshold}: kept {} combos, folded {} into {OTHER} ({other_total} rows)",
        above.len() - 1,
        below.len(),
    );

    Reduction { above, below, threshold }
}
