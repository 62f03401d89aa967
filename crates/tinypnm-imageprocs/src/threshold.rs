/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Thresholding
//!
//! [`Threshold`] applies a caller chosen threshold, [`OtsuThreshold`]
//! finds one from the image histogram first.
use std::cell::Cell;

use tinypnm_core::log::{debug, trace};
use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::PgmImage;
use tinypnm_image::traits::OperationsTrait;

use crate::histogram::histogram;

/// How pixels are compared against the threshold
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ThresholdMethod {
    /// `x > t` becomes max, everything else becomes zero
    Binary,
    /// `x > t` becomes zero, everything else becomes max
    BinaryInv,
    /// `x > t` becomes `t`, everything else is kept
    ThreshTrunc,
    /// `x > t` is kept, everything else becomes zero
    ThreshToZero
}

/// Threshold `in_channel` in place
pub fn threshold(in_channel: &mut [u16], threshold: u16, max_value: u16, method: ThresholdMethod) {
    match method {
        ThresholdMethod::Binary => {
            for x in in_channel.iter_mut() {
                *x = if *x > threshold { max_value } else { 0 };
            }
        }
        ThresholdMethod::BinaryInv => {
            for x in in_channel.iter_mut() {
                *x = if *x > threshold { 0 } else { max_value };
            }
        }
        ThresholdMethod::ThreshTrunc => {
            for x in in_channel.iter_mut() {
                *x = (*x).min(threshold);
            }
        }
        ThresholdMethod::ThreshToZero => {
            for x in in_channel.iter_mut() {
                if *x <= threshold {
                    *x = 0;
                }
            }
        }
    }
}

/// Threshold an image with a fixed value
///
/// # Example
/// ```
/// use tinypnm_image::image::PgmImage;
/// use tinypnm_image::traits::OperationsTrait;
/// use tinypnm_imageprocs::threshold::{Threshold, ThresholdMethod};
///
/// let mut image = PgmImage::new(4, 1, 255, vec![10, 100, 101, 250]).unwrap();
/// Threshold::new(100, ThresholdMethod::Binary).execute(&mut image).unwrap();
///
/// assert_eq!(image.pixels(), &[0, 0, 255, 255]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Threshold {
    threshold: u16,
    method:    ThresholdMethod
}

impl Threshold {
    #[must_use]
    pub fn new(threshold: u16, method: ThresholdMethod) -> Threshold {
        Threshold { threshold, method }
    }
}

impl OperationsTrait for Threshold {
    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        let max_value = image.max_intensity();

        threshold(image.pixels_mut(), self.threshold, max_value, self.method);

        Ok(())
    }
}

/// Find the threshold maximising the between-class variance of a histogram
///
/// Levels at or below the threshold form the background class, levels
/// above it the foreground. When several thresholds reach the maximum the
/// lowest one wins.
///
/// Returns `None` when the histogram is empty or holds a single level,
/// since no threshold separates two classes.
///
/// ```
/// use tinypnm_imageprocs::threshold::otsu_threshold;
///
/// assert_eq!(otsu_threshold(&[3, 0, 0, 0, 5]), Some(0));
/// assert_eq!(otsu_threshold(&[0, 4, 0]), None);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn otsu_threshold(histogram: &[u64]) -> Option<u16> {
    let total: u64 = histogram.iter().sum();

    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(level, count)| level as f64 * *count as f64)
        .sum();

    let mut weight_b = 0_u64;
    let mut sum_b = 0.0_f64;
    let mut best: Option<(f64, usize)> = None;

    for (level, count) in histogram.iter().enumerate() {
        weight_b += *count;

        if weight_b == 0 {
            continue;
        }
        let weight_f = total - weight_b;

        if weight_f == 0 {
            break;
        }
        sum_b += level as f64 * *count as f64;

        let mean_b = sum_b / weight_b as f64;
        let mean_f = (sum_total - sum_b) / weight_f as f64;

        let between = weight_b as f64 * weight_f as f64 * (mean_b - mean_f).powi(2);

        if best.map_or(true, |(variance, _)| between > variance) {
            best = Some((between, level));
        }
    }
    // histograms never have more than 65536 bins
    best.map(|(_, level)| level as u16)
}

/// Binarize an image with a threshold found by Otsu's method
///
/// Pixels at or below the threshold become zero, the rest become the
/// maximum intensity. Images with fewer than two intensity levels are left
/// unchanged.
///
/// The threshold found by the last execution can be fetched via `.threshold()`
///
/// # Example
/// ```
/// use tinypnm_image::image::PgmImage;
/// use tinypnm_image::traits::OperationsTrait;
/// use tinypnm_imageprocs::threshold::OtsuThreshold;
///
/// let mut image = PgmImage::new(4, 1, 255, vec![20, 30, 200, 220]).unwrap();
/// let otsu = OtsuThreshold::new();
/// otsu.execute(&mut image).unwrap();
///
/// assert_eq!(otsu.threshold(), Some(30));
/// assert_eq!(image.pixels(), &[0, 0, 255, 255]);
/// ```
#[derive(Default)]
pub struct OtsuThreshold {
    threshold: Cell<Option<u16>>
}

impl OtsuThreshold {
    #[must_use]
    pub fn new() -> OtsuThreshold {
        OtsuThreshold::default()
    }

    /// The threshold found by the last execution, `None` before
    /// execution or when the image had fewer than two levels
    pub fn threshold(&self) -> Option<u16> {
        self.threshold.get()
    }
}

impl OperationsTrait for OtsuThreshold {
    fn name(&self) -> &'static str {
        "Otsu Threshold"
    }

    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        let max_value = image.max_intensity();
        let counts = histogram(image.pixels(), max_value)?;

        let found = otsu_threshold(&counts);
        self.threshold.set(found);

        match found {
            Some(value) => {
                debug!("Otsu threshold: {}", value);
                threshold(
                    image.pixels_mut(),
                    value,
                    max_value,
                    ThresholdMethod::Binary
                );
            }
            None => {
                trace!("Fewer than two intensity levels, image left unchanged");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tinypnm_image::image::PgmImage;
    use tinypnm_image::traits::OperationsTrait;

    use crate::threshold::{otsu_threshold, threshold, OtsuThreshold, ThresholdMethod};

    #[test]
    fn methods() {
        let input = [10_u16, 50, 51, 90];

        let mut pixels = input;
        threshold(&mut pixels, 50, 100, ThresholdMethod::BinaryInv);
        assert_eq!(pixels, [100, 100, 0, 0]);

        let mut pixels = input;
        threshold(&mut pixels, 50, 100, ThresholdMethod::ThreshTrunc);
        assert_eq!(pixels, [10, 50, 50, 50]);

        let mut pixels = input;
        threshold(&mut pixels, 50, 100, ThresholdMethod::ThreshToZero);
        assert_eq!(pixels, [0, 0, 51, 90]);
    }

    #[test]
    fn otsu_separates_two_clusters() {
        let mut histogram = vec![0_u64; 256];
        for level in 10..20 {
            histogram[level] = 5;
        }
        for level in 180..200 {
            histogram[level] = 3;
        }
        let found = otsu_threshold(&histogram).unwrap();
        assert!((19..180).contains(&found));
        // the first maximum wins, which is the top of the dark cluster
        assert_eq!(found, 19);
    }

    #[test]
    fn otsu_leaves_flat_images_alone() {
        let mut image = PgmImage::fill(128, 5, 5, 255).unwrap();
        let otsu = OtsuThreshold::new();

        otsu.execute(&mut image).unwrap();
        assert_eq!(otsu.threshold(), None);
        assert!(image.pixels().iter().all(|x| *x == 128));

        let mut empty = PgmImage::new(0, 0, 255, vec![]).unwrap();
        otsu.execute(&mut empty).unwrap();
        assert_eq!(otsu.threshold(), None);
    }

    #[test]
    fn otsu_output_is_binary() {
        let pixels = (0..100).map(|x| (x * 7 % 256) as u16).collect();
        let mut image = PgmImage::new(10, 10, 255, pixels).unwrap();

        OtsuThreshold::new().execute(&mut image).unwrap();
        assert!(image.pixels().iter().all(|x| *x == 0 || *x == 255));
    }
}
