/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

use tinypnm_core::bit_depth::BitDepth;
use tinypnm_core::bytestream::ZByteReader;
use tinypnm_core::colorspace::ColorSpace;
use tinypnm_core::log::{info, trace, warn};
use tinypnm_core::options::DecoderOptions;

use crate::errors::PnmDecodeErrors;

/// The binary netpbm flavours understood by this crate
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PnmVersion {
    /// Binary graymap, one sample per pixel
    P5,
    /// Binary pixmap, three samples per pixel
    P6
}

impl PnmVersion {
    /// The two magic bytes starting a file of this flavour
    pub const fn magic(self) -> &'static [u8; 2] {
        match self {
            Self::P5 => b"P5",
            Self::P6 => b"P6"
        }
    }

    pub const fn colorspace(self) -> ColorSpace {
        match self {
            Self::P5 => ColorSpace::Luma,
            Self::P6 => ColorSpace::RGB
        }
    }

    pub const fn from_colorspace(colorspace: ColorSpace) -> PnmVersion {
        match colorspace {
            ColorSpace::Luma => Self::P5,
            ColorSpace::RGB => Self::P6
        }
    }
}

impl Display for PnmVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::P5 => write!(f, "P5"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// An instance of a binary netpbm decoder
///
/// The decoder understands P5 and P6 files, with one
/// or two byte samples.
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       u16,
    version:         PnmVersion,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    bit_depth:       BitDepth,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: netpbm encoded bytes
    ///
    /// # Example
    /// ```
    /// use tinypnm_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use tinypnm_core::options::DecoderOptions;
    /// use tinypnm_ppm::{PnmDecodeErrors, PPMDecoder};
    ///
    /// let options = DecoderOptions::default().set_max_width(10);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P5 20 1 255\n");
    ///
    /// assert!(matches!(
    ///     decoder.decode_headers(),
    ///     Err(PnmDecodeErrors::LargeDimensions(10, 20))
    /// ));
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            version: PnmVersion::P6,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            bit_depth: BitDepth::Eight,
            options
        }
    }

    /// Read the header and store it in internal state
    ///
    /// The whitespace byte separating the header from the samples
    /// is not consumed here, it is checked by [`decode`](Self::decode).
    ///
    /// Calling this more than once is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = [self.reader.get_u8(), self.reader.get_u8()];

        self.version = version_from_magic(&magic).ok_or(PnmDecodeErrors::InvalidMagic(magic))?;

        let width = self.get_integer("width")?;
        let height = self.get_integer("height")?;
        let max_value = self.get_integer("max value")?;

        if max_value > usize::from(u16::MAX) {
            let msg = format!("max value {max_value} greater than 65535");
            return Err(PnmDecodeErrors::InvalidHeader(msg));
        }
        if max_value == 0 {
            return Err(PnmDecodeErrors::ZeroMaxValue);
        }
        if width > self.options.max_width() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.max_width(),
                width
            ));
        }
        if height > self.options.max_height() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.max_height(),
                height
            ));
        }
        // checked above
        let max_value = max_value as u16;

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.bit_depth = BitDepth::from_max_value(max_value);
        self.decoded_headers = true;

        trace!("Version: {}", self.version);
        trace!("Bit Depth: {:?}", self.bit_depth);

        Ok(())
    }

    /// Read the header and fail unless the stream holds the `expected` flavour
    ///
    /// A mismatched magic is reported before anything else in the header is parsed.
    pub fn expect_version(&mut self, expected: PnmVersion) -> Result<(), PnmDecodeErrors> {
        let found = if self.decoded_headers {
            Some(self.version)
        } else {
            version_from_magic(self.reader.remaining_bytes())
        };
        if let Some(found) = found {
            if found != expected {
                return Err(PnmDecodeErrors::WrongVersion { expected, found });
            }
        }
        self.decode_headers()
    }

    /// Skip at least one whitespace byte then read an unsigned decimal integer
    fn get_integer(&mut self, name: &'static str) -> Result<usize, PnmDecodeErrors> {
        if skip_spaces(&mut self.reader) == 0 {
            let msg = match self.reader.peek_u8() {
                Some(byte) => format!(
                    "expected whitespace before the {name} but found byte {byte:#04x}"
                ),
                None => format!("stream ended before the {name}")
            };
            return Err(PnmDecodeErrors::InvalidHeader(msg));
        }

        let mut value = 0_usize;
        let mut digits = 0_usize;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                .ok_or_else(|| {
                    PnmDecodeErrors::InvalidHeader(format!("{name} does not fit in a usize"))
                })?;

            digits += 1;
            self.reader.skip(1);
        }
        if digits == 0 {
            let msg = match self.reader.peek_u8() {
                Some(byte) => format!("expected a decimal {name} but found byte {byte:#04x}"),
                None => format!("stream ended before the {name}")
            };
            return Err(PnmDecodeErrors::InvalidHeader(msg));
        }
        Ok(value)
    }

    /// Return the image bit depth or none if headers
    /// are not decoded
    pub const fn bit_depth(&self) -> Option<BitDepth> {
        if self.decoded_headers {
            Some(self.bit_depth)
        } else {
            None
        }
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.version.colorspace())
        } else {
            None
        }
    }

    /// Return the netpbm flavour or none if headers aren't decoded
    pub const fn version(&self) -> Option<PnmVersion> {
        if self.decoded_headers {
            Some(self.version)
        } else {
            None
        }
    }

    /// Return image dimensions as `(width, height)` or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared maximum intensity or none if headers aren't decoded
    pub const fn max_value(&self) -> Option<u16> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode the image and return its samples in host byte order
    ///
    /// The returned buffer is row major and holds `width * height * components`
    /// samples, where components is 3 for P6 and 1 for P5.
    ///
    /// An image with a zero dimension returns an empty buffer without
    /// looking past the max value.
    pub fn decode(&mut self) -> Result<Vec<u16>, PnmDecodeErrors> {
        self.decode_headers()?;

        let (width, height) = (self.width, self.height);

        if width == 0 || height == 0 {
            info!(
                "read a {} file: {}x{}, maxval {}",
                self.version, width, height, self.max_value
            );
            return Ok(Vec::new());
        }
        let components = self.version.colorspace().num_components();
        // in-memory size of a single pixel, samples are widened to u16
        let pixel_size = components * core::mem::size_of::<u16>();

        let pixel_count = width
            .checked_mul(height)
            .ok_or(PnmDecodeErrors::TooLarge { width, height })?;

        pixel_count
            .checked_mul(pixel_size)
            .ok_or(PnmDecodeErrors::TooLarge { width, height })?;

        match self.reader.get_u8_err() {
            Ok(byte) if is_space(byte) => (),
            Ok(byte) => return Err(PnmDecodeErrors::InvalidSeparator(Some(byte))),
            Err(_) => return Err(PnmDecodeErrors::InvalidSeparator(None))
        }
        // neither can overflow, both are at most pixel_count * pixel_size
        let sample_count = pixel_count * components;
        let size = sample_count * self.bit_depth.size_of();

        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(PnmDecodeErrors::UnexpectedEof {
                expected: size,
                found:    remaining
            });
        }
        let samples: Vec<u16> = match self.bit_depth {
            BitDepth::Eight => self
                .reader
                .get_as_ref(size)?
                .iter()
                .map(|x| u16::from(*x))
                .collect(),
            BitDepth::Sixteen => {
                let mut samples = Vec::with_capacity(sample_count);

                for _ in 0..sample_count {
                    samples.push(self.reader.get_u16_be_err()?);
                }
                samples
            }
        };

        let extra = self.reader.remaining();

        if extra > 0 {
            if self.options.strict_mode() {
                return Err(PnmDecodeErrors::TrailingBytes(extra));
            }
            warn!("Ignoring {} bytes after the pixel data", extra);
        }
        info!(
            "read a {} file: {}x{}, maxval {}",
            self.version, width, height, self.max_value
        );

        Ok(samples)
    }
}

fn version_from_magic(bytes: &[u8]) -> Option<PnmVersion> {
    match bytes.get(..2) {
        Some(b"P5") => Some(PnmVersion::P5),
        Some(b"P6") => Some(PnmVersion::P6),
        _ => None
    }
}

/// The C `isspace` set, vertical tab included
#[inline]
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Skip whitespace until a byte that isn't whitespace or the end
/// of the stream, returning how many bytes were skipped
fn skip_spaces(reader: &mut ZByteReader) -> usize {
    let mut count = 0;

    while let Some(byte) = reader.peek_u8() {
        if !is_space(byte) {
            break;
        }
        reader.skip(1);
        count += 1;
    }
    count
}
