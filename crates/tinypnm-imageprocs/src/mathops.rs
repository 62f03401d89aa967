/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mathematical operations shared amongst functions

/// Clamp `value` to `0..=max` then round half up to the nearest level
///
/// `NaN` maps to zero.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_to_level(value: f64, max: u16) -> u16 {
    let clamped = value.clamp(0.0, f64::from(max));
    // the cast truncates, after the clamp it cannot leave 0..=max
    (clamped + 0.5) as u16
}
