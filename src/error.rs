// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carving engine.

use thiserror::Error;

/// Everything that can go wrong in a single carving call.  None of
/// these are retryable: the engine is deterministic, so the same
/// input will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeamError {
    /// The image (or the result it would produce) has no pixels.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A seam, buffer, or parameter does not fit the image it was
    /// handed with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A working buffer could not be reserved.
    #[error("could not allocate {bytes} bytes for a {width}x{height} buffer")]
    Allocation { width: u32, height: u32, bytes: usize },
}

pub type Result<T> = std::result::Result<T, SeamError>;

/// Fail fast on a raster with no rows or no columns.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width < 1 || height < 1 {
        return Err(SeamError::InvalidDimension { width, height });
    }
    Ok(())
}
