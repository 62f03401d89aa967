/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing netpbm files
//!
//! Files are read whole into memory and handed to the byte level decoder,
//! written files go through a buffered writer.
//!
//! Partially written files are left in place when writing fails.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tinypnm_core::colorspace::ColorSpace;
use tinypnm_core::log::trace;
use tinypnm_core::options::DecoderOptions;
pub use tinypnm_ppm::{PPMDecoder, PPMEncoder, PnmDecodeErrors, PnmEncodeErrors, PnmVersion};

use crate::errors::ImageErrors;
use crate::image::{PgmImage, PpmImage, RgbPixel};
use crate::metadata::ImageMetadata;

/// Header fields and samples of a decoded file
struct Decoded {
    width:     usize,
    height:    usize,
    max_value: u16,
    samples:   Vec<u16>
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, ImageErrors> {
    let path = path.as_ref();
    trace!("Reading {:?}", path);

    std::fs::read(path).map_err(ImageErrors::OpenFailed)
}

fn decode_version(
    data: &[u8], options: DecoderOptions, version: PnmVersion
) -> Result<Decoded, ImageErrors> {
    let mut decoder = PPMDecoder::new_with_options(options, data);

    decoder.expect_version(version)?;

    let samples = decoder.decode()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;
    let max_value = decoder
        .max_value()
        .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;

    Ok(Decoded {
        width,
        height,
        max_value,
        samples
    })
}

fn save_with<P, F>(path: P, encode: F) -> Result<(), ImageErrors>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ImageErrors>
{
    let file = File::create(path).map_err(ImageErrors::CreateFailed)?;
    let mut writer = BufWriter::new(file);

    encode(&mut writer)?;

    writer.flush().map_err(ImageErrors::WriteFailed)
}

/// Read the header of a P5 or P6 stream without decoding pixels
///
/// # Example
/// ```
/// use tinypnm_core::colorspace::ColorSpace;
/// use tinypnm_core::options::DecoderOptions;
/// use tinypnm_image::codecs::ppm::probe;
///
/// let metadata = probe(b"P6\n4 3\n1023\n", DecoderOptions::default()).unwrap();
///
/// assert_eq!(metadata.dimensions(), (4, 3));
/// assert_eq!(metadata.colorspace(), ColorSpace::RGB);
/// ```
pub fn probe(data: &[u8], options: DecoderOptions) -> Result<ImageMetadata, ImageErrors> {
    let mut decoder = PPMDecoder::new_with_options(options, data);

    decoder.decode_headers()?;

    match (
        decoder.dimensions(),
        decoder.max_value(),
        decoder.colorspace()
    ) {
        (Some((width, height)), Some(max_value), Some(colorspace)) => Ok(ImageMetadata::new(
            width, height, max_value, colorspace
        )),
        _ => Err(ImageErrors::GenericStr("Headers were not decoded"))
    }
}

/// Read the header of a P5 or P6 file without decoding pixels
pub fn probe_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<ImageMetadata, ImageErrors> {
    probe(&read_file(path)?, options)
}

impl PpmImage {
    /// Open and decode a P6 file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<PpmImage, ImageErrors> {
        PpmImage::open_with_options(path, DecoderOptions::default())
    }

    /// Open and decode a P6 file with the specified decoder options
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<PpmImage, ImageErrors> {
        PpmImage::from_bytes_with_options(&read_file(path)?, options)
    }

    /// Decode a P6 image already in memory
    pub fn from_bytes(data: &[u8]) -> Result<PpmImage, ImageErrors> {
        PpmImage::from_bytes_with_options(data, DecoderOptions::default())
    }

    pub fn from_bytes_with_options(
        data: &[u8], options: DecoderOptions
    ) -> Result<PpmImage, ImageErrors> {
        let decoded = decode_version(data, options, PnmVersion::P6)?;

        let pixels = decoded
            .samples
            .chunks_exact(3)
            .map(|rgb| RgbPixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();

        PpmImage::new(decoded.width, decoded.height, decoded.max_value, pixels)
    }

    /// Encode the image into `sink` as a P6 stream
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<(), ImageErrors> {
        let (width, height) = self.dimensions();

        PPMEncoder::new(width, height, self.max_intensity(), ColorSpace::RGB, sink)
            .encode(self.samples())?;

        Ok(())
    }

    /// Create or truncate the file at `path` and write the image to it as P6
    ///
    /// # Errors
    /// - [`ImageErrors::CreateFailed`] if the file cannot be created
    /// - [`ImageErrors::WriteFailed`] if writing fails, the partial file is kept
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        save_with(path, |writer| self.encode(writer))
    }
}

impl PgmImage {
    /// Open and decode a P5 file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<PgmImage, ImageErrors> {
        PgmImage::open_with_options(path, DecoderOptions::default())
    }

    /// Open and decode a P5 file with the specified decoder options
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<PgmImage, ImageErrors> {
        PgmImage::from_bytes_with_options(&read_file(path)?, options)
    }

    /// Decode a P5 image already in memory
    pub fn from_bytes(data: &[u8]) -> Result<PgmImage, ImageErrors> {
        PgmImage::from_bytes_with_options(data, DecoderOptions::default())
    }

    pub fn from_bytes_with_options(
        data: &[u8], options: DecoderOptions
    ) -> Result<PgmImage, ImageErrors> {
        let decoded = decode_version(data, options, PnmVersion::P5)?;

        PgmImage::new(
            decoded.width,
            decoded.height,
            decoded.max_value,
            decoded.samples
        )
    }

    /// Encode the image into `sink` as a P5 stream
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<(), ImageErrors> {
        let (width, height) = self.dimensions();

        PPMEncoder::new(width, height, self.max_intensity(), ColorSpace::Luma, sink)
            .encode(self.pixels())?;

        Ok(())
    }

    /// Create or truncate the file at `path` and write the image to it as P5
    ///
    /// # Errors
    /// - [`ImageErrors::CreateFailed`] if the file cannot be created
    /// - [`ImageErrors::WriteFailed`] if writing fails, the partial file is kept
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        save_with(path, |writer| self.encode(writer))
    }
}
