/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate image histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
//!
//! The histogram of an image with maximum intensity `max` has `max + 1` bins,
//! a pixel brighter than `max` is treated as an error rather than being clamped.
use std::cell::{BorrowError, Ref, RefCell};

use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::PgmImage;
use tinypnm_image::traits::OperationsTrait;

/// Count the pixels at each intensity level in `0..=max_value`
///
/// # Errors
/// [`ImageErrors::PixelOutOfRange`] for the first pixel above `max_value`
///
/// # Example
/// ```
/// use tinypnm_imageprocs::histogram::histogram;
///
/// let counts = histogram(&[0, 3, 3, 1], 3).unwrap();
/// assert_eq!(counts, [1, 1, 0, 2]);
/// ```
pub fn histogram(pixels: &[u16], max_value: u16) -> Result<Vec<u64>, ImageErrors> {
    let mut counts = vec![0_u64; usize::from(max_value) + 1];

    for pixel in pixels {
        match counts.get_mut(usize::from(*pixel)) {
            Some(count) => *count += 1,
            None => {
                return Err(ImageErrors::PixelOutOfRange {
                    value: *pixel,
                    max:   max_value
                })
            }
        }
    }
    Ok(counts)
}

/// An image histogram instance
///
/// Histogram statistics can be fetched via `.histogram()` after calling `execute`
///
/// This struct does not mutate the image in any way, but it needs to conform to the trait
/// definition of `OperationsTrait` hence why it needs a mutable image
///
/// # Example
/// ```rust
/// use tinypnm_image::image::PgmImage;
/// use tinypnm_image::traits::OperationsTrait;
/// use tinypnm_imageprocs::histogram::Histogram;
///
/// let mut image = PgmImage::fill(100, 100, 100, 255).unwrap();
/// let histogram = Histogram::new();
/// histogram.execute(&mut image).unwrap();
///
/// let values = histogram.histogram().unwrap();
/// assert_eq!(values.len(), 256);
/// assert_eq!(values[100], 100 * 100);
/// ```
#[derive(Default)]
pub struct Histogram {
    histogram: RefCell<Vec<u64>>
}

impl Histogram {
    /// Create a new histogram operation
    #[must_use]
    pub fn new() -> Histogram {
        Histogram::default()
    }

    /// Returns the histogram computed by the last execution
    ///
    /// # Returns
    /// - Ok(reference): A reference to the underlying result
    /// - Err(BorrowError): Indicates this filter has borrowed the reference
    pub fn histogram(&self) -> Result<Ref<'_, Vec<u64>>, BorrowError> {
        self.histogram.try_borrow()
    }
}

impl OperationsTrait for Histogram {
    fn name(&self) -> &'static str {
        "Histogram"
    }

    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        let counts = histogram(image.pixels(), image.max_intensity())?;

        *self.histogram.borrow_mut() = counts;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::histogram::histogram;
    use tinypnm_image::errors::ImageErrors;

    #[test]
    fn counts_sum_to_pixel_count() {
        let pixels: Vec<u16> = (0..1000).map(|x| x % 37).collect();
        let counts = histogram(&pixels, 40).unwrap();

        assert_eq!(counts.len(), 41);
        assert_eq!(counts.iter().sum::<u64>(), 1000);
        assert_eq!(counts[40], 0);
    }

    #[test]
    fn pixel_above_max_is_an_error() {
        assert!(matches!(
            histogram(&[1, 2, 9], 8),
            Err(ImageErrors::PixelOutOfRange { value: 9, max: 8 })
        ));
    }

    #[test]
    fn full_sixteen_bit_range() {
        let counts = histogram(&[u16::MAX, 0], u16::MAX).unwrap();
        assert_eq!(counts.len(), 65536);
        assert_eq!(counts[65535], 1);
    }
}
