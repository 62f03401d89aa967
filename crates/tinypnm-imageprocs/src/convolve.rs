/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Two dimensional convolution
//!
//! Each output pixel is the weighted sum of the input pixels under a kernel
//! centred on it, clamped to `0..=max` and rounded half up.
//! The kernel is applied as is (a correlation), it is not flipped.
//!
//! Results are written to a separate buffer so every sum reads the original pixels.
use tinypnm_core::log::trace;
use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::PgmImage;
use tinypnm_image::traits::OperationsTrait;

use crate::mathops::round_to_level;
pub use crate::pad::BoundaryPolicy;
use crate::pad::pad;

/// A row major kernel with odd dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Vec<f64>,
    width:   usize,
    height:  usize
}

impl Kernel {
    /// Create a kernel of `width` columns and `height` rows
    ///
    /// # Errors
    /// [`ImageErrors::InvalidKernel`] if a dimension is zero or even, or if
    /// `weights` does not hold `width * height` values
    pub fn new(weights: Vec<f64>, width: usize, height: usize) -> Result<Kernel, ImageErrors> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(ImageErrors::InvalidKernel(format!(
                "dimensions must be odd and positive, found {width}x{height}"
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            ImageErrors::InvalidKernel(format!("{width}x{height} overflows a usize"))
        })?;

        if weights.len() != expected {
            return Err(ImageErrors::InvalidKernel(format!(
                "a {width}x{height} kernel needs {expected} weights but found {}",
                weights.len()
            )));
        }
        Ok(Kernel {
            weights,
            width,
            height
        })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Convolve rows of a padded image into `out`
///
/// `out` holds whole output rows starting at output row `first_row`.
fn convolve_rows(
    padded: &[u16], padded_w: usize, out: &mut [u16], width: usize, first_row: usize,
    kernel: &Kernel, max_value: u16
) {
    for (row, out_row) in out.chunks_exact_mut(width).enumerate() {
        let y = first_row + row;

        for (x, out_pix) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0_f64;

            for (ky, weights) in kernel.weights.chunks_exact(kernel.width).enumerate() {
                let start = (y + ky) * padded_w + x;
                let window = &padded[start..start + kernel.width];

                for (weight, pix) in weights.iter().zip(window) {
                    sum += weight * f64::from(*pix);
                }
            }
            *out_pix = round_to_level(sum, max_value);
        }
    }
}

/// Convolve `in_channel` with `kernel`, writing results to `out_channel`
///
/// Both channels hold `width * height` pixels.
///
/// With the `threads` feature, rows are split across scoped threads. The
/// result does not depend on how they are split.
pub fn convolve(
    in_channel: &[u16], out_channel: &mut [u16], width: usize, height: usize, kernel: &Kernel,
    policy: BoundaryPolicy, max_value: u16
) {
    if width == 0 || height == 0 {
        return;
    }
    let (pad_x, pad_y) = (kernel.width / 2, kernel.height / 2);

    let padded = pad(in_channel, width, height, pad_x, pad_y, policy);
    let padded_w = width + pad_x * 2;

    #[cfg(feature = "threads")]
    {
        let threads = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1);
        let rows_per_thread = height.div_ceil(threads);

        trace!(
            "Running convolve in multithreaded mode, {} rows per thread",
            rows_per_thread
        );
        let padded = &padded;

        std::thread::scope(|s| {
            for (i, chunk) in out_channel
                .chunks_mut(rows_per_thread * width)
                .enumerate()
            {
                s.spawn(move || {
                    convolve_rows(
                        padded,
                        padded_w,
                        chunk,
                        width,
                        i * rows_per_thread,
                        kernel,
                        max_value
                    );
                });
            }
        });
    }
    #[cfg(not(feature = "threads"))]
    {
        trace!("Running convolve in single threaded mode");

        convolve_rows(
            &padded,
            padded_w,
            out_channel,
            width,
            0,
            kernel,
            max_value
        );
    }
}

/// Convolve an image with an arbitrary odd sized kernel
///
/// # Example
/// - A 3x3 box blur
/// ```
/// use tinypnm_image::image::PgmImage;
/// use tinypnm_image::traits::OperationsTrait;
/// use tinypnm_imageprocs::convolve::{BoundaryPolicy, Convolve};
///
/// let mut image = PgmImage::fill(90, 4, 4, 255).unwrap();
/// let blur = Convolve::new(vec![1.0 / 9.0; 9], 3, 3).with_boundary(BoundaryPolicy::Replicate);
///
/// blur.execute(&mut image).unwrap();
/// assert!(image.pixels().iter().all(|x| *x == 90));
/// ```
#[derive(Clone, Debug)]
pub struct Convolve {
    weights:       Vec<f64>,
    kernel_width:  usize,
    kernel_height: usize,
    boundary:      BoundaryPolicy
}

impl Convolve {
    /// Create a new convolution of `kernel_width` columns and `kernel_height` rows
    ///
    /// The kernel is validated when the operation is executed.
    #[must_use]
    pub fn new(weights: Vec<f64>, kernel_width: usize, kernel_height: usize) -> Convolve {
        Convolve {
            weights,
            kernel_width,
            kernel_height,
            boundary: BoundaryPolicy::default()
        }
    }

    /// Set what pixels outside the image read as, zero by default
    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Convolve {
        self.boundary = boundary;
        self
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, image: &mut PgmImage) -> Result<(), ImageErrors> {
        let kernel = Kernel::new(
            self.weights.clone(),
            self.kernel_width,
            self.kernel_height
        )?;
        let (width, height) = image.dimensions();

        if image.pixels().is_empty() {
            return Ok(());
        }
        let mut out_channel = vec![0_u16; image.pixels().len()];

        convolve(
            image.pixels(),
            &mut out_channel,
            width,
            height,
            &kernel,
            self.boundary,
            image.max_intensity()
        );
        image.set_pixels(out_channel)
    }
}

#[cfg(test)]
mod tests {
    use crate::convolve::{convolve, BoundaryPolicy, Kernel};

    #[test]
    fn kernel_validation() {
        assert!(Kernel::new(vec![1.0; 9], 3, 3).is_ok());
        assert!(Kernel::new(vec![1.0; 3], 3, 1).is_ok());
        assert!(Kernel::new(vec![1.0; 4], 2, 2).is_err());
        assert!(Kernel::new(vec![], 0, 0).is_err());
        assert!(Kernel::new(vec![1.0; 8], 3, 3).is_err());
    }

    #[test]
    fn reads_old_pixels_only() {
        // a shift right kernel, writing in place would smear the first pixel
        let kernel = Kernel::new(vec![1.0, 0.0, 0.0], 3, 1).unwrap();
        let input = [10, 20, 30, 40];
        let mut output = [0; 4];

        convolve(&input, &mut output, 4, 1, &kernel, BoundaryPolicy::Zero, 255);
        assert_eq!(output, [0, 10, 20, 30]);

        convolve(
            &input,
            &mut output,
            4,
            1,
            &kernel,
            BoundaryPolicy::Replicate,
            255
        );
        assert_eq!(output, [10, 10, 20, 30]);
    }

    #[test]
    fn clamps_and_rounds() {
        let input = [100, 200];
        let mut output = [0; 2];

        let double = Kernel::new(vec![2.0], 1, 1).unwrap();
        convolve(&input, &mut output, 2, 1, &double, BoundaryPolicy::Zero, 255);
        assert_eq!(output, [200, 255]);

        let negative = Kernel::new(vec![-1.0], 1, 1).unwrap();
        convolve(&input, &mut output, 2, 1, &negative, BoundaryPolicy::Zero, 255);
        assert_eq!(output, [0, 0]);

        let half = Kernel::new(vec![0.5], 1, 1).unwrap();
        convolve(&[101, 3], &mut output, 2, 1, &half, BoundaryPolicy::Zero, 255);
        // 50.5 and 1.5
        assert_eq!(output, [51, 2]);
    }
}
