/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all tinypnm libraries
//!
//! This crate provides a set of core routines shared
//! by the netpbm decoder, encoder and the image processing routines.
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads
//! - Host endianness detection and 16 bit byte swapping
//! - Colorspace and bit depth information shared by images
//! - Decoder options
//! - Logging macros that compile to nothing when the `log` feature is off
//!
//! # Features
//!  - `std`: Disables `#[no_std]` compilation.
//!
//!  - `log`: Routes the logging macros to the [log](https://docs.rs/log) crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![macro_use]

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod endian;
pub mod options;
pub mod serde;

#[cfg(not(feature = "log"))]
pub mod log;

#[cfg(feature = "log")]
pub use log;
