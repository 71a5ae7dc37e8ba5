// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::buffer::try_filled;
use crate::error::{check_dimensions, Result, SeamError};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, row-major, addressed as
/// `map[(x, y)]`.  The seam solver keeps its running cumulative costs
/// in one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given size with every cell at its default.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(TwoDimensionalMap {
            width,
            height,
            cells: try_filled(len, P::default(), width, height)?,
        })
    }

    /// Adopt row-major cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Result<Self> {
        check_dimensions(width, height)?;
        if cells.len() != width as usize * height as usize {
            return Err(SeamError::InvalidArgument(format!(
                "{} cells cannot fill a {}x{} map",
                cells.len(),
                width,
                height
            )));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// One full row.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    // Keep the index math in exactly one place.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
