/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reduce color pixels to a single gray level
//!
//! The reductions keep the pixel a color pixel, setting all three
//! channels to the computed level. Once every pixel is gray a
//! [`PgmImage`](crate::image::PgmImage) can be derived from the image.
//!
//! Levels are rounded half up and saturate at `u16::MAX`, they are not
//! clamped to the image maximum intensity.
use tinypnm_core::log::trace;

use crate::image::{PpmImage, RgbPixel};

/// Weights applied to the red, green and blue channels by the
/// weighted reduction
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LumaCoefficients {
    pub red:   f64,
    pub green: f64,
    pub blue:  f64
}

impl LumaCoefficients {
    /// ITU-R BT.601 luma weights
    pub const REC601: LumaCoefficients = LumaCoefficients::new(0.299, 0.587, 0.114);
    /// A cheaper approximation that favours green
    pub const GREEN_HEAVY: LumaCoefficients = LumaCoefficients::new(0.35, 0.50, 0.15);

    pub const fn new(red: f64, green: f64, blue: f64) -> LumaCoefficients {
        LumaCoefficients { red, green, blue }
    }
}

/// How to turn a color pixel into a gray level
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GrayscaleMethod {
    /// Mean of the three channels
    Average,
    /// Weighted sum of the three channels
    Weighted(LumaCoefficients)
}

impl GrayscaleMethod {
    /// Compute the gray level of `pixel`
    pub fn level(self, pixel: RgbPixel) -> u16 {
        match self {
            Self::Average => average_level(pixel),
            Self::Weighted(coefficients) => weighted_level(pixel, coefficients)
        }
    }

    /// Return a gray pixel with the level of `pixel`
    pub fn apply(self, pixel: RgbPixel) -> RgbPixel {
        RgbPixel::splat(self.level(pixel))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_level(value: f64) -> u16 {
    // float to int casts saturate, negative weights land on zero
    (value + 0.5) as u16
}

/// Mean of the channels, rounded half up
///
/// ```
/// use tinypnm_image::core_filters::grayscale::average_level;
/// use tinypnm_image::image::RgbPixel;
///
/// assert_eq!(average_level(RgbPixel::new(0, 0, 1)), 0);
/// assert_eq!(average_level(RgbPixel::new(0, 1, 1)), 1);
/// ```
pub fn average_level(pixel: RgbPixel) -> u16 {
    let sum = f64::from(pixel.r) + f64::from(pixel.g) + f64::from(pixel.b);
    round_level(sum / 3.0)
}

/// Weighted sum of the channels, rounded half up
pub fn weighted_level(pixel: RgbPixel, coefficients: LumaCoefficients) -> u16 {
    let sum = coefficients.red * f64::from(pixel.r)
        + coefficients.green * f64::from(pixel.g)
        + coefficients.blue * f64::from(pixel.b);

    round_level(sum)
}

/// Replace a pixel by a gray pixel of its mean level
pub fn average(pixel: RgbPixel) -> RgbPixel {
    RgbPixel::splat(average_level(pixel))
}

/// Replace a pixel by a gray pixel of its weighted level
pub fn weighted(pixel: RgbPixel, coefficients: LumaCoefficients) -> RgbPixel {
    RgbPixel::splat(weighted_level(pixel, coefficients))
}

impl PpmImage {
    /// Make every pixel gray using `method`
    ///
    /// # Example
    /// ```
    /// use tinypnm_image::core_filters::grayscale::GrayscaleMethod;
    /// use tinypnm_image::image::{PgmImage, PpmImage, RgbPixel};
    ///
    /// let mut image = PpmImage::fill(RgbPixel::new(10, 20, 60), 2, 1, 255).unwrap();
    /// image.to_grayscale_in_place(GrayscaleMethod::Average);
    ///
    /// let gray = PgmImage::from_ppm(&image).unwrap();
    /// assert_eq!(gray.pixels(), &[30, 30]);
    /// ```
    pub fn to_grayscale_in_place(&mut self, method: GrayscaleMethod) {
        trace!("Converting to grayscale using {:?}", method);
        self.map(|pixel| method.apply(pixel));
    }
}

#[cfg(test)]
mod tests {
    use crate::core_filters::grayscale::{
        average, average_level, weighted_level, GrayscaleMethod, LumaCoefficients
    };
    use crate::image::RgbPixel;

    #[test]
    fn average_rounds_half_up() {
        // 5/3 = 1.67
        assert_eq!(average_level(RgbPixel::new(1, 2, 2)), 2);
        // 4/3 = 1.33
        assert_eq!(average_level(RgbPixel::new(1, 1, 2)), 1);
        assert_eq!(average(RgbPixel::new(3, 6, 9)), RgbPixel::splat(6));
    }

    #[test]
    fn average_of_white_does_not_overflow() {
        assert_eq!(average_level(RgbPixel::splat(u16::MAX)), u16::MAX);
    }

    #[test]
    fn weighted_presets() {
        let pixel = RgbPixel::new(100, 200, 41);
        // 35 + 100 + 6.15
        assert_eq!(weighted_level(pixel, LumaCoefficients::GREEN_HEAVY), 141);
        // 29.9 + 117.4 + 4.674
        assert_eq!(weighted_level(pixel, LumaCoefficients::REC601), 152);
    }

    #[test]
    fn weighted_saturates() {
        let loud = LumaCoefficients::new(2.0, 2.0, 2.0);
        assert_eq!(weighted_level(RgbPixel::splat(60000), loud), u16::MAX);

        let negative = LumaCoefficients::new(-1.0, 0.0, 0.0);
        assert_eq!(weighted_level(RgbPixel::splat(10), negative), 0);
    }

    #[test]
    fn gray_pixels_are_fixed_points_of_average() {
        for level in [0, 1, 127, 255, 65535] {
            let pixel = RgbPixel::splat(level);
            assert_eq!(GrayscaleMethod::Average.apply(pixel), pixel);
        }
    }
}
