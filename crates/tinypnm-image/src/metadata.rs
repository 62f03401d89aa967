/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! Everything a netpbm header says about an image, available
//! without decoding the pixels.
use tinypnm_core::bit_depth::BitDepth;
use tinypnm_core::colorspace::ColorSpace;

/// Image metadata
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to the serde module
    pub(crate) width:         usize,
    pub(crate) height:        usize,
    pub(crate) max_intensity: u16,
    pub(crate) colorspace:    ColorSpace,
    pub(crate) depth:         BitDepth
}

impl ImageMetadata {
    pub(crate) const fn new(
        width: usize, height: usize, max_intensity: u16, colorspace: ColorSpace
    ) -> ImageMetadata {
        ImageMetadata {
            width,
            height,
            max_intensity,
            colorspace,
            depth: BitDepth::from_max_value(max_intensity)
        }
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn max_intensity(&self) -> u16 {
        self.max_intensity
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Bit depth of samples on disk
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }
}
