/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core filters that every image needs
//!
//! These convert between the color and grayscale representations,
//! richer processing lives in `tinypnm-imageprocs`.
pub mod grayscale;
