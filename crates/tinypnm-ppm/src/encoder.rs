/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use tinypnm_core::bit_depth::BitDepth;
use tinypnm_core::colorspace::ColorSpace;
use tinypnm_core::endian::u16_to_be;
use tinypnm_core::log::trace;

use crate::decoder::PnmVersion;
use crate::errors::PnmEncodeErrors;

/// A binary netpbm encoder
///
/// RGB input is written as P6, Luma input as P5.
/// Samples are written as the low byte when the max value
/// is below 256 and as two big-endian bytes otherwise.
///
/// # Example
/// ```
/// use tinypnm_core::colorspace::ColorSpace;
/// use tinypnm_ppm::PPMEncoder;
///
/// let mut output = vec![];
/// let mut encoder = PPMEncoder::new(2, 1, 255, ColorSpace::Luma, &mut output);
/// encoder.encode(&[7, 9]).unwrap();
///
/// assert_eq!(output, b"P5\n2 1\n255\n\x07\x09");
/// ```
pub struct PPMEncoder<'a, W: Write> {
    version:   PnmVersion,
    width:     usize,
    height:    usize,
    max_value: u16,
    writer:    &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    pub fn new(
        width: usize, height: usize, max_value: u16, colorspace: ColorSpace, dest: &'a mut W
    ) -> PPMEncoder<'a, W> {
        Self {
            version: PnmVersion::from_colorspace(colorspace),
            width,
            height,
            max_value,
            writer: dest
        }
    }

    /// Write `<magic>\n<width> <height>\n<maxval>\n`
    pub fn write_headers(&mut self) -> Result<(), PnmEncodeErrors> {
        if self.max_value == 0 {
            return Err(PnmEncodeErrors::Static("Max value cannot be zero"));
        }
        let header = format!(
            "{}\n{} {}\n{}\n",
            self.version, self.width, self.height, self.max_value
        );
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write the header followed by `samples`
    ///
    /// `samples` must hold exactly `width * height * components` values
    /// in host byte order.
    pub fn encode(&mut self, samples: &[u16]) -> Result<(), PnmEncodeErrors> {
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.version.colorspace().num_components()))
            .ok_or(PnmEncodeErrors::Static("Image dimensions overflow"))?;

        if expected != samples.len() {
            return Err(PnmEncodeErrors::WrongInputSize(expected, samples.len()));
        }
        self.write_headers()?;

        let bit_depth = BitDepth::from_max_value(self.max_value);

        let mut out = Vec::with_capacity(samples.len() * bit_depth.size_of());

        match bit_depth {
            BitDepth::Eight => {
                // only the low byte is stored
                out.extend(samples.iter().map(|x| (*x & 0xFF) as u8));
            }
            BitDepth::Sixteen => {
                for sample in samples {
                    out.extend_from_slice(&u16_to_be(*sample).to_ne_bytes());
                }
            }
        }
        self.writer.write_all(&out)?;

        trace!(
            "Wrote {} {}x{} image, maxval {}",
            self.version,
            self.width,
            self.height,
            self.max_value
        );
        Ok(())
    }
}
