/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use tinypnm_ppm::{PnmDecodeErrors, PnmEncodeErrors};

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// The input file could not be opened or read
    OpenFailed(std::io::Error),
    /// The output file could not be created
    CreateFailed(std::io::Error),
    /// Writing to an output failed midway
    WriteFailed(std::io::Error),
    DecodeErrors(PnmDecodeErrors),
    EncodeErrors(PnmEncodeErrors),
    /// The first pixel, scanning row major, whose channels differ
    NotConvertible { x: usize, y: usize },
    /// The pixel buffer does not match the dimensions
    InvalidDimensions(String),
    InvalidKernel(String),
    /// Gamma too close to zero to be inverted
    InvalidGamma(f64),
    /// An operation needs at least one pixel
    EmptyImage(&'static str),
    /// A pixel value exceeds the declared maximum intensity
    PixelOutOfRange { value: u16, max: u16 },
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenFailed(err) => {
                writeln!(f, "Could not open input: {err}")
            }
            Self::CreateFailed(err) => {
                writeln!(f, "Could not create output: {err}")
            }
            Self::WriteFailed(err) => {
                writeln!(f, "Could not write output: {err}")
            }
            Self::DecodeErrors(err) => {
                writeln!(f, "Decoding failed: {err:?}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Encoding failed: {err:?}")
            }
            Self::NotConvertible { x, y } => {
                writeln!(
                    f,
                    "Cannot derive a grayscale image, pixel ({x},{y}) has unequal channels"
                )
            }
            Self::InvalidDimensions(reason) => {
                writeln!(f, "Invalid dimensions: {reason}")
            }
            Self::InvalidKernel(reason) => {
                writeln!(f, "Invalid kernel: {reason}")
            }
            Self::InvalidGamma(value) => {
                writeln!(f, "Invalid gamma {value}, its magnitude must be at least 1e-6")
            }
            Self::EmptyImage(operation) => {
                writeln!(f, "Cannot run {operation} on an image with no pixels")
            }
            Self::PixelOutOfRange { value, max } => {
                writeln!(f, "Pixel value {value} exceeds the maximum intensity {max}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PnmDecodeErrors> for ImageErrors {
    fn from(from: PnmDecodeErrors) -> Self {
        ImageErrors::DecodeErrors(from)
    }
}

impl From<PnmEncodeErrors> for ImageErrors {
    fn from(from: PnmEncodeErrors) -> Self {
        match from {
            PnmEncodeErrors::IoErrors(err) => ImageErrors::WriteFailed(err),
            err => ImageErrors::EncodeErrors(err)
        }
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}
