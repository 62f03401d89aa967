/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Host byte order detection and 16 bit byte swapping
//!
//! Multi-byte netpbm samples are always big-endian on disk.
//! A sample assembled from two bytes in host order has to be swapped
//! on little-endian hosts before it means anything, and swapped back
//! before being written out.

/// Return true if the host stores multi-byte integers least significant byte first
///
/// This is a runtime probe rather than a `cfg!` check
#[inline]
pub fn host_is_little_endian() -> bool {
    let probe: u16 = 1;
    probe.to_ne_bytes()[0] == 1
}

/// Reverse the two bytes of a 16 bit value
///
/// ```
/// use tinypnm_core::endian::swap16;
/// assert_eq!(swap16(0x1234), 0x3412);
/// ```
#[inline]
pub const fn swap16(value: u16) -> u16 {
    ((value & 0x00ff) << 8) | ((value & 0xff00) >> 8)
}

/// Normalize a value whose bytes were copied verbatim from a big-endian stream
/// into host order
#[inline]
pub fn u16_from_be(value: u16) -> u16 {
    if host_is_little_endian() {
        swap16(value)
    } else {
        value
    }
}

/// Convert a host order value into the big-endian representation stored on disk
///
/// Calling `to_ne_bytes` on the result yields the on-disk bytes.
#[inline]
pub fn u16_to_be(value: u16) -> u16 {
    // byte swapping is its own inverse
    u16_from_be(value)
}
