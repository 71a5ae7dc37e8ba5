// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the dual-gradient energy of every pixel:
//! the color difference between its left and right neighbors plus the
//! difference between the neighbors above and below.  Neighbors wrap
//! around the opposite edge of the image (the image is treated as a
//! torus), so a pixel in column 0 is compared against the last column.
//!
//! The result is stored as a grayscale RGBA raster, R = G = B = energy
//! and A = 255, so an energy map can be saved or shown like any other
//! image.

use crate::buffer::try_new_rgba;
use crate::error::{check_dimensions, Result, SeamError};
use crate::pixelpairs::squared_gradient;
use image::{GenericImageView, Rgba, RgbaImage};
use itertools::iproduct;

/// Raw gradient magnitudes are divided by this (truncating) before
/// being stored.
pub const ENERGY_SCALE: u32 = 10;

// The border rules are a small matrix of conditionals; this reads
// better than rustfmt's rendition of four if/else blocks.
macro_rules! t {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

/// A per-pixel importance map with the same dimensions as its source.
/// Only the red channel carries information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyMap {
    raster: RgbaImage,
}

impl EnergyMap {
    /// Build an energy map directly from row-major energy values.
    pub fn from_values(width: u32, height: u32, values: &[u8]) -> Result<Self> {
        check_dimensions(width, height)?;
        if values.len() != width as usize * height as usize {
            return Err(SeamError::InvalidArgument(format!(
                "{} energy values cannot fill a {}x{} map",
                values.len(),
                width,
                height
            )));
        }
        let mut raster = try_new_rgba(width, height)?;
        for (pixel, &e) in raster.pixels_mut().zip(values) {
            *pixel = Rgba([e, e, e, 255]);
        }
        Ok(EnergyMap { raster })
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// The energy at column `x`, row `y`.
    #[inline]
    pub fn energy(&self, x: u32, y: u32) -> u8 {
        self.raster.get_pixel(x, y).0[0]
    }

    /// View the map as a displayable grayscale image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.raster
    }

    pub fn into_image(self) -> RgbaImage {
        self.raster
    }
}

// Gradient² -> stored energy.  Both steps truncate: floor of the
// square root, then integer division by the scale.
#[inline]
fn normalize(gradient: u32) -> u8 {
    let magnitude = f64::from(gradient).sqrt() as u32;
    (magnitude / ENERGY_SCALE) as u8
}

fn fill_energy<I>(image: &I, target: &mut RgbaImage)
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    for (y, x) in iproduct!(0..height, 0..width) {
        let (left, right, up, down) = (
            t!(x == 0, mw, x - 1),
            t!(x == mw, 0, x + 1),
            t!(y == 0, mh, y - 1),
            t!(y == mh, 0, y + 1),
        );
        let gradient = squared_gradient(&image.get_pixel(right, y), &image.get_pixel(left, y))
            + squared_gradient(&image.get_pixel(x, up), &image.get_pixel(x, down));
        let e = normalize(gradient);
        target.put_pixel(x, y, Rgba([e, e, e, 255]));
    }
}

/// Compute the energy of every pixel in an image.
pub fn compute_energy<I>(image: &I) -> Result<EnergyMap>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let mut raster = try_new_rgba(width, height)?;
    fill_energy(image, &mut raster);
    Ok(EnergyMap { raster })
}

/// Compute the energy of `image` into a caller-provided raster, which
/// must have exactly the same dimensions.
pub fn compute_energy_into<I>(image: &I, target: &mut RgbaImage) -> Result<()>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    check_dimensions(width, height)?;
    if target.dimensions() != (width, height) {
        return Err(SeamError::InvalidArgument(format!(
            "energy target is {}x{}, source is {}x{}",
            target.width(),
            target.height(),
            width,
            height
        )));
    }
    fill_energy(image, target);
    Ok(())
}
