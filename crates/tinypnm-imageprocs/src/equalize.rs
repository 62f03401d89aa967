/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Histogram equalization
//!
//! Spread the intensity levels of an image so that its cumulative histogram
//! becomes close to linear.
//!
//! The level `v` is remapped to
//!
//! ```text
//! trunc(0.5 + (cdf[v] - h_min) / (total - h_min) * max)
//! ```
//!
//! where `h_min` is the count of the darkest level present, so the darkest
//! level always lands on zero. Equalizing twice does not in general give the
//! same result as equalizing once.
use tinypnm_core::log::trace;
use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::PgmImage;
use tinypnm_image::traits::OperationsTrait;

use crate::histogram::histogram;
use crate::mathops::round_to_level;

/// Equalize the histogram of `pixels` in place
///
/// An image with a single intensity level is left untouched.
///
/// # Errors
/// - [`ImageErrors::EmptyImage`] if there are no pixels
/// - [`ImageErrors::PixelOutOfRange`] if a pixel is above `max_value`
///
/// Pixels are untouched on error.
#[allow(clippy::cast_precision_loss)]
pub fn equalize(pixels: &mut [u16], max_value: u16) -> Result<(), ImageErrors> {
    let mut cdf = histogram(pixels, max_value)?;

    let h_min = match cdf.iter().find(|x| **x != 0) {
        Some(count) => *count,
        None => return Err(ImageErrors::EmptyImage("histogram equalization"))
    };
    // prefix sum, in place
    let mut total = 0_u64;

    for count in cdf.iter_mut() {
        total += *count;
        *count = total;
    }
    if total == h_min {
        trace!("Image has a single intensity level, skipping equalization");
        return Ok(());
    }
    let range = (total - h_min) as f64;
    let max = f64::from(max_value);

    let lut: Vec<u16> = cdf
        .iter()
        .map(|cumulative| {
            // levels darker than the darkest present are never looked up
            let above = cumulative.saturating_sub(h_min) as f64;
            round_to_level(above / range * max, max_value)
        })
        .collect();

    for pixel in pixels.iter_mut() {
        *pixel = lut[usize::from(*pixel)];
    }
    Ok(())
}

/// Histogram equalization operation
///
/// # Example
/// ```
/// use tinypnm_image::image::PgmImage;
/// use tinypnm_image::traits::OperationsTrait;
/// use tinypnm_imageprocs::equalize::HistogramEqualization;
///
/// let mut image = PgmImage::new(3, 1, 255, vec![50, 100, 150]).unwrap();
/// HistogramEqualization::new().execute(&mut image).unwrap();
///
/// assert_eq!(image.pixels(), &[0, 128, 255]);
/// ```
#[derive(Default, Copy, Clone)]
pub struct HistogramEqualization;

impl HistogramEqualization {
    #[must_use]
    pub fn new() -> HistogramEqualization {
        HistogramEqualization
    }
}

impl OperationsTrait for HistogramEqualization {
    fn name(&self) -> &'static str {
        "Histogram Equalization"
    }

    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        let max_value = image.max_intensity();

        equalize(image.pixels_mut(), max_value)
    }
}
