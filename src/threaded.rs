// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carve many images at once.
//!
//! Carving one image is strictly sequential, but separate images share
//! nothing, so a batch can be spread over every core.  Workers pull
//! images from a shared injector queue until it runs dry.

use crate::error::Result;
use crate::seamcarver::SeamCarver;
use crossbeam::thread;
use crossbeam_deque::{Injector, Steal};
use image::RgbaImage;
use log::debug;
use std::panic;

/// Remove `seams` seams from every image, in parallel.  Results come
/// back in the order the images went in.
pub fn carve_batch(images: Vec<RgbaImage>, seams: u32) -> Vec<Result<RgbaImage>> {
    let count = images.len();
    let queue = Injector::new();
    images.into_iter().enumerate().for_each(|job| queue.push(job));

    let workers = num_cpus::get().min(count).max(1);
    debug!("carving {} images on {} workers", count, workers);

    let finished = thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(|_| {
                    let mut done = Vec::new();
                    loop {
                        match queue.steal() {
                            Steal::Success((index, image)) => {
                                done.push((index, SeamCarver::new(&image).carve_seams(seams)))
                            }
                            Steal::Retry => continue,
                            Steal::Empty => break,
                        }
                    }
                    done
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|e| panic::resume_unwind(e));

    let mut slots: Vec<Option<Result<RgbaImage>>> = (0..count).map(|_| None).collect();
    for (index, result) in finished {
        slots[index] = Some(result);
    }
    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeamError;
    use crate::seamcarver::remove_one_seam;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn batch_matches_sequential_carving() {
        let images: Vec<RgbaImage> = (1..6u32)
            .map(|n| ImageBuffer::from_fn(4 + n, 3, |x, y| Rgba([(x * n) as u8, y as u8, 9, 255])))
            .collect();
        let expected: Vec<RgbaImage> = images.iter().map(|i| remove_one_seam(i).unwrap()).collect();
        let carved = carve_batch(images, 1);
        assert_eq!(carved.len(), 5);
        for (got, want) in carved.into_iter().zip(expected) {
            assert_eq!(got.unwrap(), want);
        }
    }

    #[test]
    fn failures_stay_with_their_image() {
        let images = vec![
            ImageBuffer::from_pixel(5, 2, Rgba([1, 2, 3, 4])),
            ImageBuffer::from_pixel(2, 2, Rgba([1, 2, 3, 4])),
        ];
        let carved = carve_batch(images, 3);
        assert_eq!(carved[0].as_ref().unwrap().width(), 2);
        assert!(matches!(carved[1], Err(SeamError::InvalidArgument(_))));
    }

    #[test]
    fn empty_batch() {
        assert!(carve_batch(Vec::new(), 1).is_empty());
    }
}
