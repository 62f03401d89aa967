/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image operations
use std::time::Instant;

use tinypnm_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::PgmImage;

/// This encapsulates an image operation.
///
/// Operations work on grayscale images in place. An operation that
/// fails leaves the image untouched.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image, without any bookkeeping
    ///
    /// Implementers should validate their parameters before touching the image.
    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors>;

    /// Execute the operation, logging how long it took
    ///
    /// # Example
    /// ```
    /// use tinypnm_image::errors::ImageErrors;
    /// use tinypnm_image::image::PgmImage;
    /// use tinypnm_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///
    ///     fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
    ///         let max = image.max_intensity();
    ///         image.pixels_mut().iter_mut().for_each(|x| *x = max.saturating_sub(*x));
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut image = PgmImage::fill(5, 1, 1, 255).unwrap();
    /// Invert.execute(&mut image).unwrap();
    /// assert_eq!(image.pixels(), &[250]);
    /// ```
    fn execute(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        let start = Instant::now();

        self.execute_impl(image)?;

        trace!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}
