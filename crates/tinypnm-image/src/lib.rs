/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm images and the operations that can be carried on them
//!
//! This crate holds the two in memory image models, [`PpmImage`](image::PpmImage)
//! for color pixmaps and [`PgmImage`](image::PgmImage) for grayscale graymaps,
//! and glues them to the byte level codec in `tinypnm-ppm`.
//!
//! A color image can be reduced to gray per pixel with the routines in
//! [`core_filters::grayscale`], and once every pixel has equal channels a
//! grayscale image can be derived from it.
//!
//! # Example
//! ```no_run
//! use tinypnm_image::core_filters::grayscale::GrayscaleMethod;
//! use tinypnm_image::errors::ImageErrors;
//! use tinypnm_image::image::{PgmImage, PpmImage};
//!
//! fn main() -> Result<(), ImageErrors> {
//!     let mut image = PpmImage::open("sample.ppm")?;
//!     image.to_grayscale_in_place(GrayscaleMethod::Average);
//!
//!     let gray = PgmImage::from_ppm(&image)?;
//!     gray.save("sample.pgm")
//! }
//! ```
//!
//! # Features
//! - `log`: Forward decoder and operation logging to the `log` crate
//! - `serde-support`: Serialize [`ImageMetadata`](metadata::ImageMetadata)
#![forbid(unsafe_code)]

pub use tinypnm_core;
pub use tinypnm_ppm;

pub mod codecs;
pub mod core_filters;
pub mod errors;
pub mod image;
pub mod metadata;
mod serde;
pub mod traits;
