/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! Only the binary netpbm formats are supported, `P6` for
//! color images and `P5` for grayscale images.
pub mod ppm;
