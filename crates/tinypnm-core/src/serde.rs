/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::bit_depth::BitDepth;
use crate::colorspace::ColorSpace;

impl Serialize for ColorSpace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply it's debug value
        let name = match self {
            ColorSpace::RGB => "RGB",
            ColorSpace::Luma => "Luma"
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for BitDepth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            BitDepth::Eight => "Eight",
            BitDepth::Sixteen => "Sixteen"
        };
        serializer.serialize_str(name)
    }
}
