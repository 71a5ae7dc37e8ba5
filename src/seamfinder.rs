// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::energy::compute_energy;
use crate::error::Result;
use crate::seam::{build_cumulative_table, extract_minimum_seam};
use image::{GenericImageView, Rgba};

/// This trait defines how we get seams out of an image.  It's a
/// primitive interface, just enough to make room for more than one
/// seam search.
pub trait SeamFinder {
    /// Once a SeamFinder has an image, request the cheapest
    /// top-to-bottom seam as one column index per row.
    fn find_vertical_seam(&self) -> Result<Vec<u32>>;
}

/// The dual-gradient seam search: a simple image reference holder.
/// Nothing is cached; every request recomputes the energy map and the
/// cumulative table, and both are dropped before the seam is returned.
pub struct DualGradient<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    image: &'a I,
}

impl<'a, I> DualGradient<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        DualGradient { image }
    }
}

impl<'a, I> SeamFinder for DualGradient<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    fn find_vertical_seam(&self) -> Result<Vec<u32>> {
        let table = build_cumulative_table(&compute_energy(self.image)?)?;
        Ok(extract_minimum_seam(&table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seam::is_connected_seam;
    use image::{ImageBuffer, RgbaImage};

    #[test]
    fn seam_avoids_columns_beside_an_edge() {
        // A white stripe in column 3 lights up columns 2 and 4; every
        // other column is flat, and the leftmost of them wins.
        let image: RgbaImage = ImageBuffer::from_fn(6, 4, |x, _| match x {
            3 => Rgba([255, 255, 255, 255]),
            _ => Rgba([0, 0, 0, 255]),
        });
        let seam = DualGradient::new(&image).find_vertical_seam().unwrap();
        assert_eq!(seam.len(), 4);
        assert!(is_connected_seam(&seam, 6));
        assert!(seam.iter().all(|&x| x == 0));
    }
}
