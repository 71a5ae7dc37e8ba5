// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam in an energy map
//!
//! Two passes.  The first fills a table in which every cell holds the
//! lowest total energy of any connected path from the top row down to
//! that cell.  The second starts at the cheapest cell of the bottom row
//! and walks back up, at each row choosing among the (at most) three
//! cells above the current one.
//!
//! Unlike the energy calculation, the table never wraps: a cell in the
//! first or last column simply has one fewer parent.

use crate::energy::EnergyMap;
use crate::error::Result;
use crate::twodmap::TwoDimensionalMap;
use std::ops::RangeInclusive;

/// Minimum cumulative energy of a seam ending at each pixel.
pub type CumulativeTable = TwoDimensionalMap<f64>;

/// The candidate parents of column `x`, clamped to the image.
#[inline]
fn parents(x: u32, maxwidth: u32) -> RangeInclusive<u32> {
    let first = if x == 0 { 0 } else { x - 1 };
    let last = if x == maxwidth { maxwidth } else { x + 1 };
    first..=last
}

/// Fill the cumulative energy table.  Row 0 is the energy itself;
/// every later cell adds its own energy to the cheapest of its parents
/// in the row above.
pub fn build_cumulative_table(energy: &EnergyMap) -> Result<CumulativeTable> {
    let (width, height) = (energy.width(), energy.height());
    let mut best = CumulativeTable::new(width, height)?;

    for x in 0..width {
        best[(x, 0)] = f64::from(energy.energy(x, 0));
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let cheapest_parent = parents(x, maxwidth)
                .map(|px| best[(px, y - 1)])
                .fold(f64::INFINITY, f64::min);
            best[(x, y)] = f64::from(energy.energy(x, y)) + cheapest_parent;
        }
    }
    Ok(best)
}

// The order in which the cells above are considered during the walk
// back up.  Each later candidate must be strictly cheaper than the
// best so far to win, so ties go to Center, then Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Center,
    Left,
    Right,
}

const STEP_PRIORITY: [Step; 3] = [Step::Center, Step::Left, Step::Right];

impl Step {
    fn column(self, from: u32, maxwidth: u32) -> Option<u32> {
        match self {
            Step::Center => Some(from),
            Step::Left => from.checked_sub(1),
            Step::Right => Some(from + 1).filter(|&x| x <= maxwidth),
        }
    }
}

/// Given a cumulative table, return the list of x-coordinates that,
/// paired with `0..height`, address every pixel of the cheapest seam.
pub fn extract_minimum_seam(best: &CumulativeTable) -> Vec<u32> {
    let (width, height) = (best.width(), best.height());
    let maxwidth = width - 1;
    let bottom = height - 1;

    // The leftmost of equally cheap bottom cells wins.
    let mut seam_col = 0;
    for x in 1..width {
        if best[(x, bottom)] < best[(seam_col, bottom)] {
            seam_col = x;
        }
    }

    let mut seam = vec![0; height as usize];
    seam[bottom as usize] = seam_col;
    for y in (0..bottom).rev() {
        let mut chosen = seam_col;
        for step in STEP_PRIORITY.iter() {
            if let Some(x) = step.column(seam_col, maxwidth) {
                if best[(x, y)] < best[(chosen, y)] {
                    chosen = x;
                }
            }
        }
        seam_col = chosen;
        seam[y as usize] = seam_col;
    }
    seam
}

/// True when every entry is inside `0..width` and adjacent rows differ
/// by at most one column.
pub fn is_connected_seam(seam: &[u32], width: u32) -> bool {
    seam.iter().all(|&x| x < width)
        && seam
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // From the classic 5x4 example: the cheapest path threads the
    // zeroes down the right half.
    const ENERGY_DATA: [u8; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn table(width: u32, height: u32, cells: &[f64]) -> CumulativeTable {
        TwoDimensionalMap::from_vec(width, height, cells.to_vec()).unwrap()
    }

    #[test]
    fn first_row_is_copied_from_energy() {
        let energy = EnergyMap::from_values(5, 4, &ENERGY_DATA).unwrap();
        let best = build_cumulative_table(&energy).unwrap();
        assert_eq!(best.row(0), [9.0, 9.0, 0.0, 9.0, 9.0]);
    }

    #[test]
    fn table_adds_cheapest_clamped_parent() {
        let energy = EnergyMap::from_values(5, 4, &ENERGY_DATA).unwrap();
        let best = build_cumulative_table(&energy).unwrap();
        assert_eq!(best.row(1), [18.0, 1.0, 9.0, 8.0, 18.0]);
        assert_eq!(best.row(2), [10.0, 10.0, 10.0, 17.0, 8.0]);
        assert_eq!(best.row(3), [19.0, 19.0, 19.0, 8.0, 17.0]);
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energy = EnergyMap::from_values(5, 4, &ENERGY_DATA).unwrap();
        let seam = extract_minimum_seam(&build_cumulative_table(&energy).unwrap());
        assert_eq!(seam, [2, 3, 4, 3]);
        assert!(is_connected_seam(&seam, 5));
    }

    #[test]
    fn increasing_columns_give_leftmost_seam() {
        let energy = EnergyMap::from_values(3, 3, &[1, 2, 3, 1, 2, 3, 1, 2, 3]).unwrap();
        let seam = extract_minimum_seam(&build_cumulative_table(&energy).unwrap());
        assert_eq!(seam, [0, 0, 0]);
    }

    #[test]
    fn single_row_picks_leftmost_on_tie() {
        let energy = EnergyMap::from_values(5, 1, &[0; 5]).unwrap();
        let best = build_cumulative_table(&energy).unwrap();
        assert_eq!(best.row(0), [0.0; 5]);
        assert_eq!(extract_minimum_seam(&best), [0]);
    }

    #[test]
    fn bottom_row_tie_keeps_first_minimum() {
        let best = table(4, 1, &[3.0, 1.0, 2.0, 1.0]);
        assert_eq!(extract_minimum_seam(&best), [1]);
    }

    #[test]
    fn backtrack_prefers_staying_on_tie() {
        let best = table(3, 2, &[1.0, 1.0, 1.0, 5.0, 0.0, 5.0]);
        assert_eq!(extract_minimum_seam(&best), [1, 1]);
    }

    #[test]
    fn backtrack_prefers_left_over_equal_right() {
        let best = table(3, 2, &[0.0, 5.0, 0.0, 9.0, 1.0, 9.0]);
        assert_eq!(extract_minimum_seam(&best), [0, 1]);
    }

    #[test]
    fn backtrack_takes_strictly_cheaper_right() {
        let best = table(3, 2, &[4.0, 5.0, 3.0, 9.0, 1.0, 9.0]);
        assert_eq!(extract_minimum_seam(&best), [2, 1]);
    }

    #[test]
    fn edges_only_consider_existing_columns() {
        let best = table(3, 3, &[0.0, 9.0, 9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 0.0]);
        assert_eq!(extract_minimum_seam(&best), [2, 2, 2]);
        let best = table(3, 2, &[9.0, 0.0, 9.0, 0.0, 9.0, 9.0]);
        assert_eq!(extract_minimum_seam(&best), [1, 0]);
    }

    #[test]
    fn single_column_table() {
        let energy = EnergyMap::from_values(1, 3, &[4, 5, 6]).unwrap();
        let best = build_cumulative_table(&energy).unwrap();
        assert_eq!(best[(0, 2)], 15.0);
        assert_eq!(extract_minimum_seam(&best), [0, 0, 0]);
    }

    #[test]
    fn seams_stay_connected() {
        let values: Vec<u8> = (0..64u32).map(|i| ((i * 37 + 11) % 23) as u8).collect();
        let energy = EnergyMap::from_values(8, 8, &values).unwrap();
        let seam = extract_minimum_seam(&build_cumulative_table(&energy).unwrap());
        assert_eq!(seam.len(), 8);
        assert!(is_connected_seam(&seam, 8));
    }

    #[test]
    fn disconnected_seam_is_detected() {
        assert!(!is_connected_seam(&[0, 2], 3));
        assert!(!is_connected_seam(&[3], 3));
    }
}
