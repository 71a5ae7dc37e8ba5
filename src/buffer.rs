// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixel buffers and the owning handle handed across the library
//! boundary.
//!
//! Every raster the engine produces is an `image::RgbaImage`: four
//! interleaved bytes (R, G, B, A) per pixel, row-major, top row first,
//! no padding.  That is the only layout image decoders need to agree
//! with.  Allocation goes through `try_reserve_exact` so that an
//! oversized request comes back as `SeamError::Allocation` rather than
//! taking the whole process down.

use crate::energy::compute_energy_into;
use crate::error::{check_dimensions, Result, SeamError};
use crate::seamcarver::remove_one_seam;
use image::{ImageBuffer, RgbaImage};

/// Bytes per pixel in the wire format.
pub const CHANNELS: usize = 4;

fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(SeamError::Allocation {
            width,
            height,
            bytes: usize::MAX,
        })
}

/// Reserve `len` cells filled with `value`, reporting failure instead
/// of aborting.  The width and height are only carried for the error.
pub(crate) fn try_filled<P: Clone>(len: usize, value: P, width: u32, height: u32) -> Result<Vec<P>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| SeamError::Allocation {
            width,
            height,
            bytes: len.saturating_mul(std::mem::size_of::<P>()),
        })?;
    cells.resize(len, value);
    Ok(cells)
}

/// A fresh, zeroed RGBA raster.
pub(crate) fn try_new_rgba(width: u32, height: u32) -> Result<RgbaImage> {
    check_dimensions(width, height)?;
    let raw = try_filled(byte_len(width, height)?, 0u8, width, height)?;
    ImageBuffer::from_raw(width, height, raw).ok_or(SeamError::InvalidDimension { width, height })
}

/// An owned RGBA buffer.  Whoever holds the handle owns the pixels;
/// the only way to give them up is to drop it or pass it to
/// `release_image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    raster: RgbaImage,
}

impl ImageHandle {
    /// Adopt a decoded buffer.  The byte count must be exactly
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = byte_len(width, height)?;
        if bytes.len() != expected {
            return Err(SeamError::InvalidArgument(format!(
                "a {}x{} RGBA buffer needs {} bytes, got {}",
                width,
                height,
                expected,
                bytes.len()
            )));
        }
        ImageBuffer::from_raw(width, height, bytes)
            .map(|raster| ImageHandle { raster })
            .ok_or(SeamError::InvalidDimension { width, height })
    }

    /// Wrap an image that already lives in memory.
    pub fn from_image(raster: RgbaImage) -> Result<Self> {
        check_dimensions(raster.width(), raster.height())?;
        Ok(ImageHandle { raster })
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.raster
    }

    pub fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.raster
    }

    /// The raw interleaved bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.raster.as_raw()
    }

    pub fn into_image(self) -> RgbaImage {
        self.raster
    }

    /// Remove the cheapest vertical seam, returning a new handle one
    /// column narrower.  `self` is left untouched.
    pub fn remove_one_seam(&self) -> Result<ImageHandle> {
        remove_one_seam(&self.raster).map(|raster| ImageHandle { raster })
    }

    /// Write the energy map of this buffer into `target`, which must be
    /// the same size.
    pub fn compute_energy_into(&self, target: &mut ImageHandle) -> Result<()> {
        compute_energy_into(&self.raster, target.as_image_mut())
    }
}

/// Reserve a `width * height * 4` byte buffer.  Safe Rust does not hand
/// out uninitialized memory, so the pixels start out transparent black.
pub fn allocate_image(width: u32, height: u32) -> Result<ImageHandle> {
    try_new_rgba(width, height).map(|raster| ImageHandle { raster })
}

/// Give a buffer back.  Taking the handle by value makes a second
/// release of the same buffer a compile error.
pub fn release_image(handle: ImageHandle) {
    drop(handle)
}
