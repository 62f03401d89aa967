/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use tinypnm_core::bytestream::ZByteIoError;

use crate::decoder::PnmVersion;

/// Errors that can occur when decoding a netpbm image
pub enum PnmDecodeErrors {
    /// The first two bytes are not `P5` or `P6`, or are the other
    /// magic from the one requested
    InvalidMagic([u8; 2]),
    /// The header could not be parsed, with a reason
    InvalidHeader(String),
    /// The header declares a maximum value of zero
    ZeroMaxValue,
    /// The byte after the max value is not whitespace,
    /// `None` if the stream ended there
    InvalidSeparator(Option<u8>),
    /// Computing the pixel buffer size overflows a `usize`
    TooLarge { width: usize, height: usize },
    /// A dimension exceeds the configured limit: limit, found
    LargeDimensions(usize, usize),
    /// The stream ended before all samples were read
    UnexpectedEof { expected: usize, found: usize },
    /// Bytes left after the samples, reported in strict mode
    TrailingBytes(usize),
    /// The stream holds the other netpbm flavour
    WrongVersion {
        expected: PnmVersion,
        found:    PnmVersion
    }
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagic(magic) => {
                writeln!(
                    f,
                    "Invalid magic bytes {:?}, expected P5 or P6",
                    String::from_utf8_lossy(magic)
                )
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            Self::ZeroMaxValue => {
                writeln!(f, "Invalid header, reason: max value cannot be zero")
            }
            Self::InvalidSeparator(Some(byte)) => {
                writeln!(
                    f,
                    "Invalid header, expected a single whitespace after the max value but found byte {byte:#04x}"
                )
            }
            Self::InvalidSeparator(None) => {
                writeln!(
                    f,
                    "Invalid header, stream ended before the whitespace following the max value"
                )
            }
            Self::TooLarge { width, height } => {
                writeln!(
                    f,
                    "Image of {width}x{height} pixels is too large to be held in memory"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::UnexpectedEof { expected, found } => {
                writeln!(
                    f,
                    "Not enough pixel data, expected {expected} bytes but found {found}"
                )
            }
            Self::TrailingBytes(count) => {
                writeln!(f, "Found {count} unexpected bytes after the pixel data")
            }
            Self::WrongVersion { expected, found } => {
                writeln!(f, "Expected a {expected} image but found a {found} image")
            }
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmDecodeErrors {}

impl From<ZByteIoError> for PnmDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                PnmDecodeErrors::UnexpectedEof { expected, found }
            }
        }
    }
}

/// Errors that can occur when encoding a netpbm image
pub enum PnmEncodeErrors {
    Static(&'static str),
    /// The sample buffer does not match the dimensions: expected, found
    WrongInputSize(usize, usize),
    IoErrors(std::io::Error)
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Static(error) => writeln!(f, "{error}"),
            Self::WrongInputSize(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} samples from the image dimensions but found {found}"
                )
            }
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}")
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmEncodeErrors {}

impl From<std::io::Error> for PnmEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        PnmEncodeErrors::IoErrors(value)
    }
}
