// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Removing one seam is energy map -> cumulative table -> seam ->
//! narrower image.  Shrinking by more than one column is nothing more
//! than doing that repeatedly, each time on the previous result.

use crate::buffer::try_new_rgba;
use crate::error::{check_dimensions, Result, SeamError};
use crate::seamfinder::{DualGradient, SeamFinder};
use image::{GenericImageView, Rgba, RgbaImage};
use log::{debug, info, trace};

/// Copy `image` into a new buffer one column narrower, leaving out the
/// pixel at `seam[y]` in every row `y`.  Pixels left of the seam keep
/// their column, pixels right of it move one column left; nothing is
/// blended.
pub fn remove_vertical_seam<I>(image: &I, seam: &[u32]) -> Result<RgbaImage>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    check_dimensions(width, height)?;
    if width < 2 {
        return Err(SeamError::InvalidDimension { width, height });
    }
    if seam.len() != height as usize {
        return Err(SeamError::InvalidArgument(format!(
            "seam has {} entries for an image {} rows tall",
            seam.len(),
            height
        )));
    }
    if let Some(&x) = seam.iter().find(|&&x| x >= width) {
        return Err(SeamError::InvalidArgument(format!(
            "seam column {} lies outside an image {} columns wide",
            x, width
        )));
    }

    let mut imgbuf = try_new_rgba(width - 1, height)?;
    for (y, &cut) in (0..height).zip(seam) {
        for x in (0..width).filter(|&x| x != cut) {
            let target = if x < cut { x } else { x - 1 };
            imgbuf.put_pixel(target, y, image.get_pixel(x, y));
        }
    }
    Ok(imgbuf)
}

/// Remove the single cheapest vertical seam from `image`, returning a
/// new image one column narrower.  The energy map and cumulative table
/// live only for the duration of this call.
pub fn remove_one_seam<I>(image: &I) -> Result<RgbaImage>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    if width < 2 || height < 1 {
        return Err(SeamError::InvalidDimension { width, height });
    }
    let seam = DualGradient::new(image).find_vertical_seam()?;
    trace!("seam: {:?}", seam);
    let carved = remove_vertical_seam(image, &seam)?;
    debug!("carved {}x{} -> {}x{}", width, height, carved.width(), height);
    Ok(carved)
}

/// A struct for holding the image to be carved.  The source is only
/// ever read; every carve produces a fresh image.
pub struct SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    image: &'a I,
}

impl<'a, I> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Carve seams out of the image until it is `newwidth` wide.
    pub fn carve(&self, newwidth: u32) -> Result<RgbaImage> {
        self.carve_while(newwidth, |_| true)
    }

    /// Carve exactly `seams` seams out of the image.
    pub fn carve_seams(&self, seams: u32) -> Result<RgbaImage> {
        let width = self.image.width();
        match width.checked_sub(seams) {
            Some(newwidth) => self.carve(newwidth),
            None => Err(SeamError::InvalidArgument(format!(
                "cannot remove {} seams from an image {} columns wide",
                seams, width
            ))),
        }
    }

    /// Carve towards `newwidth`, asking `keep_going` with the current
    /// width before every removal.  Returning `false` stops the carve
    /// early and hands back the image as it stands.
    pub fn carve_while<F>(&self, newwidth: u32, mut keep_going: F) -> Result<RgbaImage>
    where
        F: FnMut(u32) -> bool,
    {
        let (width, height) = self.image.dimensions();
        check_dimensions(width, height)?;
        if newwidth > width {
            return Err(SeamError::InvalidArgument(
                "seamcarve cannot upscale an image".to_string(),
            ));
        }
        if newwidth < 1 {
            return Err(SeamError::InvalidArgument(
                "seamcarve cannot carve an image down to nothing".to_string(),
            ));
        }

        info!("carving {}x{} down to width {}", width, height, newwidth);
        let mut scratch = try_new_rgba(width, height)?;

        // Initialize the scratch space.
        self.image
            .pixels()
            .for_each(|(x, y, p)| scratch.put_pixel(x, y, p));

        while scratch.width() > newwidth {
            if !keep_going(scratch.width()) {
                info!("carve stopped at width {}", scratch.width());
                return Ok(scratch);
            }
            scratch = remove_one_seam(&scratch)?;
        }
        info!("carve finished at {}x{}", scratch.width(), scratch.height());
        Ok(scratch)
    }
}
