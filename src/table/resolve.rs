//! Width resolution for table columns.
//!
//! Fixed and bounded columns are sized first. Flex columns then split what is
//! left in proportion to their weights; a flex column whose share would fall
//! below its minimum is pinned at the minimum and the rest is split again.

use super::types::{TableSpec, Width};
use crate::util::display_width;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Sum of column widths, without decorations.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// A flex column waiting for its share: (column index, weight in tenths, min).
struct FlexSlot {
    index: usize,
    weight: usize,
    min: usize,
}

impl TableSpec {
    /// Resolves widths, sizing bounded columns to their widest cell.
    ///
    /// `total_width` includes decorations. Bounded columns with no data take
    /// their minimum.
    ///
    /// # Example
    ///
    /// ```rust
    /// use betboard::table::{Column, TableSpec, Width};
    ///
    /// let spec = TableSpec::builder()
    ///     .column(Column::new(Width::Bounded { min: Some(4), max: Some(14) }))
    ///     .column(Column::new(Width::Flex { weight: 1.0, min: 4 }))
    ///     .separator("  ")
    ///     .build();
    ///
    /// let data = vec![vec!["2024-01-03", "Arsenal"]];
    /// let widths = spec.resolve_widths_from_data(40, &data);
    /// assert_eq!(widths.widths, vec![10, 28]);
    /// ```
    pub fn resolve_widths_from_data<S: AsRef<str>>(
        &self,
        total_width: usize,
        data: &[Vec<S>],
    ) -> ResolvedWidths {
        let mut max_data_widths: Vec<usize> = vec![0; self.columns.len()];

        for row in data {
            for (i, cell) in row.iter().enumerate() {
                if let Some(max) = max_data_widths.get_mut(i) {
                    *max = (*max).max(display_width(cell.as_ref()));
                }
            }
        }

        self.resolve_widths_impl(total_width, &max_data_widths)
    }

    fn resolve_widths_impl(
        &self,
        total_width: usize,
        data_widths: &[usize],
    ) -> ResolvedWidths {
        if self.columns.is_empty() {
            return ResolvedWidths { widths: vec![] };
        }

        let overhead = self.decorations.overhead(self.columns.len());
        let available = total_width.saturating_sub(overhead);

        let mut widths: Vec<usize> = Vec::with_capacity(self.columns.len());
        let mut flex: Vec<FlexSlot> = Vec::new();
        let mut used_width: usize = 0;

        for (i, col) in self.columns.iter().enumerate() {
            match &col.width {
                Width::Fixed(w) => {
                    widths.push(*w);
                    used_width += w;
                }
                Width::Bounded { min, max } => {
                    let min_w = min.unwrap_or(0);
                    let max_w = max.unwrap_or(usize::MAX);
                    let data_w = data_widths.get(i).copied().unwrap_or(0);
                    let width = data_w.max(min_w).min(max_w.max(min_w));

                    widths.push(width);
                    used_width += width;
                }
                Width::Flex { weight, min } => {
                    widths.push(0);
                    flex.push(FlexSlot {
                        index: i,
                        weight: ((weight * 10.0).round() as usize).max(1),
                        min: *min,
                    });
                }
            }
        }

        let remaining = available.saturating_sub(used_width);
        distribute_flex(remaining, &flex, &mut widths);

        tracing::trace!(total_width, available, ?widths, "resolved column widths");
        ResolvedWidths { widths }
    }
}

fn distribute_flex(pool: usize, slots: &[FlexSlot], widths: &mut [usize]) {
    let mut pinned = vec![false; slots.len()];

    loop {
        let pinned_total: usize = slots
            .iter()
            .zip(&pinned)
            .filter(|(_, p)| **p)
            .map(|(slot, _)| slot.min)
            .sum();
        let space = pool.saturating_sub(pinned_total);
        let free: Vec<usize> = (0..slots.len()).filter(|&k| !pinned[k]).collect();
        if free.is_empty() {
            break;
        }

        let total_weight: usize = free.iter().map(|&k| slots[k].weight).sum();
        // Widened so huge widths cannot overflow the product
        let share = |k: usize| {
            (space as u128 * slots[k].weight as u128 / total_weight as u128) as usize
        };

        let mut newly_pinned = false;
        for &k in &free {
            if share(k) < slots[k].min {
                pinned[k] = true;
                newly_pinned = true;
            }
        }
        if newly_pinned {
            continue;
        }

        let mut used = 0;
        for &k in &free {
            widths[slots[k].index] = share(k);
            used += share(k);
        }
        // Rounding leftovers go one column each, left to right
        let mut extra = space - used;
        for &k in &free {
            if extra == 0 {
                break;
            }
            widths[slots[k].index] += 1;
            extra -= 1;
        }
        break;
    }

    for (slot, &p) in slots.iter().zip(&pinned) {
        if p {
            widths[slot.index] = slot.min;
        }
    }
}
