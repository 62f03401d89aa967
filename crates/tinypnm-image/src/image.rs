/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color and grayscale image representations
//!
//! Both images store pixels row major, with every sample widened to
//! a `u16` irrespective of the bit depth the image is stored with on disk.
//!
//! The pixel buffer is empty exactly when one of the dimensions is zero,
//! otherwise it holds `width * height` pixels. Constructors reject buffers
//! that break this, the maximum intensity is however only a convention
//! and pixels above it are not rejected.
use bytemuck::{Pod, Zeroable};
use tinypnm_core::bit_depth::BitDepth;
use tinypnm_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// A single color pixel
///
/// The layout is fixed so that a slice of pixels can be viewed
/// as a flat slice of interleaved `r,g,b` samples.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct RgbPixel {
    pub r: u16,
    pub g: u16,
    pub b: u16
}

impl RgbPixel {
    pub const fn new(r: u16, g: u16, b: u16) -> RgbPixel {
        RgbPixel { r, g, b }
    }

    /// A pixel with all three channels set to `value`
    pub const fn splat(value: u16) -> RgbPixel {
        RgbPixel::new(value, value, value)
    }

    /// Return true if all channels hold the same value
    pub const fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

/// Compute the pixel count for the given dimensions
fn pixel_count(width: usize, height: usize) -> Result<usize, ImageErrors> {
    width.checked_mul(height).ok_or_else(|| {
        ImageErrors::InvalidDimensions(format!("{width}x{height} overflows a usize"))
    })
}

fn check_buffer(width: usize, height: usize, found: usize) -> Result<(), ImageErrors> {
    let expected = pixel_count(width, height)?;

    if expected != found {
        return Err(ImageErrors::InvalidDimensions(format!(
            "a {width}x{height} image needs {expected} pixels but found {found}"
        )));
    }
    Ok(())
}

fn check_max_intensity(max_intensity: u16) -> Result<(), ImageErrors> {
    if max_intensity == 0 {
        return Err(ImageErrors::GenericStr("Maximum intensity cannot be zero"));
    }
    Ok(())
}

/// A color image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PpmImage {
    width:         usize,
    height:        usize,
    max_intensity: u16,
    pixels:        Vec<RgbPixel>
}

impl PpmImage {
    /// Create a new color image from its pixels
    ///
    /// # Errors
    /// - `pixels.len()` is not `width * height`
    /// - `max_intensity` is zero
    pub fn new(
        width: usize, height: usize, max_intensity: u16, pixels: Vec<RgbPixel>
    ) -> Result<PpmImage, ImageErrors> {
        check_max_intensity(max_intensity)?;
        check_buffer(width, height, pixels.len())?;

        Ok(PpmImage {
            width,
            height,
            max_intensity,
            pixels
        })
    }

    /// Create an image where every pixel is `pixel`
    pub fn fill(
        pixel: RgbPixel, width: usize, height: usize, max_intensity: u16
    ) -> Result<PpmImage, ImageErrors> {
        let count = pixel_count(width, height)?;
        PpmImage::new(width, height, max_intensity, vec![pixel; count])
    }

    /// Create an image by calling `func(x, y)` for every pixel
    pub fn from_fn<F>(
        width: usize, height: usize, max_intensity: u16, mut func: F
    ) -> Result<PpmImage, ImageErrors>
    where
        F: FnMut(usize, usize) -> RgbPixel
    {
        pixel_count(width, height)?;

        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| func(x, y))
            .collect();

        PpmImage::new(width, height, max_intensity, pixels)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn max_intensity(&self) -> u16 {
        self.max_intensity
    }

    pub fn pixels(&self) -> &[RgbPixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [RgbPixel] {
        &mut self.pixels
    }

    /// Return the pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<RgbPixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        // in bounds, so the index fits the pixel buffer
        self.pixels.get(y * self.width + x).copied()
    }

    /// Interleaved samples, three per pixel
    pub fn samples(&self) -> &[u16] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Replace every pixel with the result of calling `func` on it
    pub fn map<F>(&mut self, mut func: F)
    where
        F: FnMut(RgbPixel) -> RgbPixel
    {
        for pixel in self.pixels.iter_mut() {
            *pixel = func(*pixel);
        }
    }

    pub fn metadata(&self) -> ImageMetadata {
        ImageMetadata::new(
            self.width,
            self.height,
            self.max_intensity,
            ColorSpace::RGB
        )
    }

    /// Bit depth the image is stored with on disk
    pub const fn depth(&self) -> BitDepth {
        BitDepth::from_max_value(self.max_intensity)
    }
}

/// A grayscale image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PgmImage {
    width:         usize,
    height:        usize,
    max_intensity: u16,
    pixels:        Vec<u16>
}

impl PgmImage {
    /// Create a new grayscale image from its pixels
    ///
    /// # Errors
    /// - `pixels.len()` is not `width * height`
    /// - `max_intensity` is zero
    pub fn new(
        width: usize, height: usize, max_intensity: u16, pixels: Vec<u16>
    ) -> Result<PgmImage, ImageErrors> {
        check_max_intensity(max_intensity)?;
        check_buffer(width, height, pixels.len())?;

        Ok(PgmImage {
            width,
            height,
            max_intensity,
            pixels
        })
    }

    /// Create an image where every pixel is `value`
    pub fn fill(
        value: u16, width: usize, height: usize, max_intensity: u16
    ) -> Result<PgmImage, ImageErrors> {
        let count = pixel_count(width, height)?;
        PgmImage::new(width, height, max_intensity, vec![value; count])
    }

    /// Derive a grayscale image from a color image whose pixels all have
    /// equal channels
    ///
    /// # Errors
    /// [`ImageErrors::NotConvertible`] with the coordinates of the first
    /// pixel, in row major order, whose channels differ.
    ///
    /// # Example
    /// ```
    /// use tinypnm_image::image::{PgmImage, PpmImage, RgbPixel};
    ///
    /// let color = PpmImage::fill(RgbPixel::splat(9), 2, 2, 255).unwrap();
    /// let gray = PgmImage::from_ppm(&color).unwrap();
    ///
    /// assert_eq!(gray.pixels(), &[9, 9, 9, 9]);
    /// ```
    pub fn from_ppm(image: &PpmImage) -> Result<PgmImage, ImageErrors> {
        if let Some(pos) = image.pixels.iter().position(|pix| !pix.is_gray()) {
            let (x, y) = (pos % image.width, pos / image.width);
            return Err(ImageErrors::NotConvertible { x, y });
        }
        let pixels = image.pixels.iter().map(|pix| pix.r).collect();

        Ok(PgmImage {
            width: image.width,
            height: image.height,
            max_intensity: image.max_intensity,
            pixels
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn max_intensity(&self) -> u16 {
        self.max_intensity
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pixels
    }

    /// Return the pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        // in bounds, so the index fits the pixel buffer
        self.pixels.get(y * self.width + x).copied()
    }

    /// Replace the pixel buffer, keeping dimensions and maximum intensity
    ///
    /// # Errors
    /// If `pixels` does not hold `width * height` values, the image is then left untouched
    pub fn set_pixels(&mut self, pixels: Vec<u16>) -> Result<(), ImageErrors> {
        check_buffer(self.width, self.height, pixels.len())?;
        self.pixels = pixels;
        Ok(())
    }

    pub fn metadata(&self) -> ImageMetadata {
        ImageMetadata::new(
            self.width,
            self.height,
            self.max_intensity,
            ColorSpace::Luma
        )
    }

    /// Bit depth the image is stored with on disk
    pub const fn depth(&self) -> BitDepth {
        BitDepth::from_max_value(self.max_intensity)
    }
}

impl TryFrom<&PpmImage> for PgmImage {
    type Error = ImageErrors;

    fn try_from(value: &PpmImage) -> Result<Self, Self::Error> {
        PgmImage::from_ppm(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ImageErrors;
    use crate::image::{PgmImage, PpmImage, RgbPixel};

    #[test]
    fn buffer_length_must_match() {
        assert!(matches!(
            PgmImage::new(2, 2, 255, vec![0; 3]),
            Err(ImageErrors::InvalidDimensions(_))
        ));
        assert!(PgmImage::new(0, 7, 255, vec![]).is_ok());
        assert!(PpmImage::new(3, 1, 255, vec![RgbPixel::default(); 3]).is_ok());
    }

    #[test]
    fn zero_max_intensity_is_rejected() {
        assert!(PgmImage::new(1, 1, 0, vec![0]).is_err());
    }

    #[test]
    fn samples_are_interleaved() {
        let image = PpmImage::new(2, 1, 255, vec![RgbPixel::new(1, 2, 3), RgbPixel::new(4, 5, 6)])
            .unwrap();
        assert_eq!(image.samples(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn from_fn_is_row_major() {
        let image = PpmImage::from_fn(3, 2, 255, |x, y| RgbPixel::splat((y * 10 + x) as u16))
            .unwrap();
        assert_eq!(image.get(2, 1), Some(RgbPixel::splat(12)));
        assert_eq!(image.get(3, 0), None);
    }

    #[test]
    fn get_outside_the_image_is_none() {
        let color = PpmImage::fill(RgbPixel::splat(7), 2, 3, 255).unwrap();
        assert_eq!(color.get(1, 2), Some(RgbPixel::splat(7)));
        assert_eq!(color.get(0, 3), None);
        assert_eq!(color.get(0, usize::MAX), None);

        let gray = PgmImage::fill(9, 2, 3, 255).unwrap();
        assert_eq!(gray.get(1, 2), Some(9));
        assert_eq!(gray.get(1, usize::MAX), None);
        assert_eq!(gray.get(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn set_pixels_checks_length() {
        let mut image = PgmImage::fill(4, 2, 2, 255).unwrap();
        assert!(image.set_pixels(vec![1; 5]).is_err());
        assert_eq!(image.pixels(), &[4; 4]);
        assert!(image.set_pixels(vec![1; 4]).is_ok());
    }
}
