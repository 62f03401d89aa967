/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `tinypnm-image`
//!
//! This implements intensity transforms for grayscale images,
//! each one available as a plain function over a pixel slice and as
//! a struct implementing the `OperationsTrait` defined by tinypnm-image.
//!
//! # Example
//! - Equalize the histogram of an image, then stretch it with gamma 2.2
//! ```
//! use tinypnm_image::image::PgmImage;
//! use tinypnm_image::traits::OperationsTrait;
//! use tinypnm_imageprocs::equalize::HistogramEqualization;
//! use tinypnm_imageprocs::gamma::Gamma;
//!
//! let mut image = PgmImage::new(2, 2, 255, vec![10, 10, 200, 200]).unwrap();
//!
//! HistogramEqualization::new().execute(&mut image).unwrap();
//! assert_eq!(image.pixels(), &[0, 0, 255, 255]);
//!
//! Gamma::new(2.2).execute(&mut image).unwrap();
//! ```
//!
//! # Features
//! - `threads`: Run convolution on multiple threads, enabled by default
//! - `log`: Log operation progress via the `log` crate
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]

pub mod convolve;
pub mod equalize;
pub mod gamma;
pub mod histogram;
mod mathops;
pub mod pad;
pub mod threshold;
