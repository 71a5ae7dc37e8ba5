// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image width reduction.
//!
//! The engine removes one seam at a time: a connected top-to-bottom
//! path of pixels whose summed energy is as low as possible.  Callers
//! who want a narrower image call [`remove_one_seam`] repeatedly, or
//! let [`SeamCarver`] do it for them.
//!
//! Pixels are `image::RgbaImage`s: four bytes per pixel, row-major.
//!
//! ```
//! use image::{ImageBuffer, Rgba, RgbaImage};
//!
//! let image: RgbaImage = ImageBuffer::from_fn(8, 4, |x, _| Rgba([(x * 30) as u8, 0, 0, 255]));
//! let narrower = seamcarve::SeamCarver::new(&image).carve_seams(3).unwrap();
//! assert_eq!(narrower.dimensions(), (5, 4));
//! ```

pub mod buffer;
pub use buffer::{allocate_image, release_image, ImageHandle};

pub mod error;
pub use error::{Result, SeamError};

pub mod energy;
pub use energy::{compute_energy, compute_energy_into, EnergyMap};

mod pixelpairs;

pub mod reduction;
pub use reduction::Reduction;

pub mod seam;
pub use seam::{build_cumulative_table, extract_minimum_seam, CumulativeTable};

pub mod seamcarver;
pub use seamcarver::{remove_one_seam, remove_vertical_seam, SeamCarver};

pub mod seamfinder;
pub use seamfinder::{DualGradient, SeamFinder};

#[cfg(feature = "threaded")]
pub mod threaded;
#[cfg(feature = "threaded")]
pub use threaded::carve_batch;

pub mod twodmap;
