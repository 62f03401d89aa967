/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth, information and manipulations

/// The on-disk bit depth of a netpbm image.
///
/// Samples are always held in memory as [`u16`], the depth only
/// decides how many bytes a sample occupies in the encoded stream.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Used when the declared maximum intensity is below 256,
    /// each sample is stored as a single byte.
    #[default]
    Eight,
    /// Sixteen bit depth
    ///
    /// Used when the declared maximum intensity is 256 or above,
    /// each sample is stored as two big-endian bytes.
    Sixteen
}

impl BitDepth {
    /// Select the bit depth a given maximum intensity is stored with
    ///
    /// # Example
    /// ```
    /// use tinypnm_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::from_max_value(255), BitDepth::Eight);
    /// assert_eq!(BitDepth::from_max_value(256), BitDepth::Sixteen);
    /// ```
    pub const fn from_max_value(max_value: u16) -> BitDepth {
        if max_value < 256 {
            BitDepth::Eight
        } else {
            BitDepth::Sixteen
        }
    }

    /// Get the number of bytes a single sample occupies on disk
    ///
    /// ```
    /// use tinypnm_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Eight.size_of(), 1);
    /// assert_eq!(BitDepth::Sixteen.size_of(), 2);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2
        }
    }
}
