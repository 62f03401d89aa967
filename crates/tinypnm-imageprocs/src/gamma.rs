/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Gamma correction
//!
//! Every level `v` of an image with maximum intensity `max` is replaced by
//! `trunc(clamp(v ^ (1 / gamma), 0, max) + 0.5)`.
//!
//! The power is applied to the raw level, not to a normalized one.
use tinypnm_core::log::trace;
use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::PgmImage;
use tinypnm_image::traits::OperationsTrait;

use crate::mathops::round_to_level;

/// Gammas closer to zero than this cannot be inverted
pub const MIN_GAMMA: f64 = 1e-6;

#[inline]
fn correct(level: u16, exponent: f64, max_value: u16) -> u16 {
    round_to_level(f64::from(level).powf(exponent), max_value)
}

/// Gamma correct `pixels` in place
///
/// The correction goes through a lookup table of `max_value + 1` entries,
/// pixels above `max_value` are computed directly.
///
/// # Errors
/// [`ImageErrors::InvalidGamma`] if `|value|` is below [`MIN_GAMMA`] or
/// `value` is not finite, pixels are then untouched.
pub fn gamma(pixels: &mut [u16], value: f64, max_value: u16) -> Result<(), ImageErrors> {
    if !value.is_finite() || value.abs() < MIN_GAMMA {
        return Err(ImageErrors::InvalidGamma(value));
    }
    let exponent = 1.0 / value;

    let lut: Vec<u16> = (0..=max_value)
        .map(|level| correct(level, exponent, max_value))
        .collect();

    for pixel in pixels.iter_mut() {
        *pixel = match lut.get(usize::from(*pixel)) {
            Some(corrected) => *corrected,
            None => correct(*pixel, exponent, max_value)
        };
    }
    Ok(())
}

/// Gamma correct an image
///
/// # Example
/// ```
/// use tinypnm_image::image::PgmImage;
/// use tinypnm_image::traits::OperationsTrait;
/// use tinypnm_imageprocs::gamma::Gamma;
///
/// let mut image = PgmImage::new(3, 1, 255, vec![4, 9, 100]).unwrap();
/// Gamma::new(2.0).execute(&mut image).unwrap();
///
/// assert_eq!(image.pixels(), &[2, 3, 10]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Gamma {
    value: f64
}

impl Gamma {
    #[must_use]
    pub fn new(value: f64) -> Gamma {
        Gamma { value }
    }
}

impl OperationsTrait for Gamma {
    fn name(&self) -> &'static str {
        "Gamma Correction"
    }

    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        trace!("Gamma correcting with {}", self.value);

        let max_value = image.max_intensity();
        gamma(image.pixels_mut(), self.value, max_value)
    }
}

#[cfg(test)]
mod tests {
    use tinypnm_image::errors::ImageErrors;

    use crate::gamma::gamma;

    #[test]
    fn unit_gamma_is_identity() {
        let original: Vec<u16> = (0..=1000).collect();
        let mut pixels = original.clone();

        gamma(&mut pixels, 1.0, 1000).unwrap();
        assert_eq!(pixels, original);
    }

    #[test]
    fn near_zero_gamma_is_rejected() {
        let mut pixels = [1, 2, 3];

        for value in [0.0, 1e-7, -1e-7, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                gamma(&mut pixels, value, 255),
                Err(ImageErrors::InvalidGamma(_))
            ));
        }
        assert_eq!(pixels, [1, 2, 3]);
    }

    #[test]
    fn results_are_clamped_to_max() {
        let mut pixels = [0, 15, 16, 255];
        gamma(&mut pixels, 0.5, 255).unwrap();
        // squares: 0, 225, 256, 65025
        assert_eq!(pixels, [0, 225, 255, 255]);
    }

    #[test]
    fn pixels_above_max_are_still_corrected() {
        let mut pixels = [400];
        gamma(&mut pixels, 2.0, 255).unwrap();
        assert_eq!(pixels, [20]);
    }
}
