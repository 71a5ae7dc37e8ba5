// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! How much narrower the caller wants the image.
//!
//! The engine only knows how to remove one seam; this turns a request
//! like "30%" or "12" into a seam count that is safe for a given width.

use crate::error::{Result, SeamError};
use std::fmt;
use std::str::FromStr;

/// Percentages above this are clamped down to it.
pub const MAX_REDUCTION_PERCENT: f64 = 90.0;

/// No reduction ever leaves the image narrower than this.
pub const MIN_OUTPUT_WIDTH: u32 = 1;

/// A requested width reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    /// A share of the current width, in percent.
    Percent(f64),
    /// An exact number of seams.
    Seams(u32),
}

impl Reduction {
    /// The number of seams to remove from an image `width` columns
    /// wide.
    pub fn seams_for(&self, width: u32) -> Result<u32> {
        let ceiling = width.saturating_sub(MIN_OUTPUT_WIDTH);
        let seams = match *self {
            Reduction::Percent(percent) => {
                if !percent.is_finite() || percent < 0.0 {
                    return Err(SeamError::InvalidArgument(format!(
                        "reduction of {}% is not a usable percentage",
                        percent
                    )));
                }
                let percent = percent.min(MAX_REDUCTION_PERCENT);
                (f64::from(width) * percent / 100.0).floor() as u32
            }
            Reduction::Seams(seams) => seams,
        };
        Ok(seams.min(ceiling))
    }
}

impl Default for Reduction {
    fn default() -> Self {
        Reduction::Percent(10.0)
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Percent(percent) => write!(f, "{}%", percent),
            Reduction::Seams(seams) => write!(f, "{}", seams),
        }
    }
}

impl FromStr for Reduction {
    type Err = SeamError;

    /// `"30%"` is a percentage, a bare `"12"` is a seam count.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || SeamError::InvalidArgument(format!("cannot read {:?} as a reduction", s));
        match s.strip_suffix('%') {
            Some(percent) => percent.trim().parse().map(Reduction::Percent).map_err(|_| bad()),
            None => s.parse().map(Reduction::Seams).map_err(|_| bad()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_floored() {
        assert_eq!(Reduction::Percent(30.0).seams_for(99).unwrap(), 29);
        assert_eq!(Reduction::Percent(0.0).seams_for(99).unwrap(), 0);
    }

    #[test]
    fn percent_is_capped_at_the_ceiling() {
        assert_eq!(Reduction::Percent(100.0).seams_for(200).unwrap(), 180);
    }

    #[test]
    fn counts_never_empty_the_image() {
        assert_eq!(Reduction::Seams(50).seams_for(10).unwrap(), 9);
        assert_eq!(Reduction::Percent(90.0).seams_for(2).unwrap(), 1);
        assert_eq!(Reduction::Seams(3).seams_for(1).unwrap(), 0);
    }

    #[test]
    fn unusable_percentages_are_rejected() {
        assert!(Reduction::Percent(-1.0).seams_for(10).is_err());
        assert!(Reduction::Percent(f64::NAN).seams_for(10).is_err());
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!("25%".parse::<Reduction>().unwrap(), Reduction::Percent(25.0));
        assert_eq!(" 12 ".parse::<Reduction>().unwrap(), Reduction::Seams(12));
        assert!("twelve".parse::<Reduction>().is_err());
        assert!("-3".parse::<Reduction>().is_err());
    }
}
