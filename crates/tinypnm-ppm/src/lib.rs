/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A binary netpbm decoder and encoder
//!
//! This crate reads and writes the two binary netpbm flavours,
//! `P6` (color pixmaps) and `P5` (grayscale graymaps), with either
//! one byte samples (max value below 256) or two byte big-endian samples.
//!
//! Samples are always handed out as `u16` in host byte order.
//!
//! # Example
//! ```
//! use tinypnm_ppm::PPMDecoder;
//!
//! let mut decoder = PPMDecoder::new(b"P5\n2 1\n255\n\x01\x02");
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.dimensions(), Some((2, 1)));
//! assert_eq!(pixels, [1, 2]);
//! ```
//!
//! # Features
//! - `log`: Print header information via the `log` crate.
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use tinypnm_core;

mod decoder;
mod encoder;
mod errors;
