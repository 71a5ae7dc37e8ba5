// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given the two pixels on either side of a point, the squared
//! gradient between them is the sum of the squared differences of
//! their color channels.  Alpha does not take part.

use image::Rgba;

/// The number of color channels that contribute to the gradient.
const COLOR_CHANNELS: usize = 3;

/// (Pixel, Pixel) -> squared gradient
///
/// This is the rusty expression of
///
/// ```text
/// |Δ|² = (Δr)² + (Δg)² + (Δb)²
/// ```
///
/// mapping over the color channels and folding the squares.  The
/// result for two `u8` pixels is at most 3·255², which fits easily.
#[inline]
pub fn squared_gradient(p1: &Rgba<u8>, p2: &Rgba<u8>) -> u32 {
    p1.0[..COLOR_CHANNELS]
        .iter()
        .zip(&p2.0[..COLOR_CHANNELS])
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_pixels_have_no_gradient() {
        let p = Rgba([12, 200, 7, 255]);
        assert_eq!(squared_gradient(&p, &p), 0);
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(squared_gradient(&Rgba([1, 2, 3, 0]), &Rgba([1, 2, 3, 255])), 0);
    }

    #[test]
    fn channels_are_squared_and_summed() {
        let (p1, p2) = (Rgba([10, 0, 255, 9]), Rgba([13, 4, 0, 9]));
        assert_eq!(squared_gradient(&p1, &p2), 9 + 16 + 255 * 255);
        assert_eq!(squared_gradient(&p2, &p1), 9 + 16 + 255 * 255);
    }
}
