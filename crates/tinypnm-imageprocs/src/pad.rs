/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Methods used for duplicating pixels around the border
//!
//! Neighbourhood operations such as convolution read pixels outside the image
//! near its edges, padding builds a larger buffer where those reads land on
//! values chosen by a [`BoundaryPolicy`].

/// What pixels outside the image read as
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BoundaryPolicy {
    /// Pixels outside the image are zero
    #[default]
    Zero,
    /// Pixels outside the image take the value of the nearest
    /// pixel on the image border
    ///
    /// ```text
    ///  a,b,c
    ///  d,e,f
    /// ```
    /// Becomes
    /// ```text
    /// a a,b,c c
    /// a a,b,c c
    /// d d,e,f f
    /// d d,e,f f
    /// ```
    Replicate
}

/// Pad pixels creating a buffer around actual pixels
///
///```text
///    padded width ──────────────────────►
/// │ ┌─────────────────────────────┐
/// │ │          PADDING            │
/// │ │     ┌──────────────┐        │
/// │ │     │              │        │
/// │ │     │    IMAGE     │        │
/// │ │     │              │        │
/// │ │     └──────────────┘        │
/// ▼ │                             │
///   └─────────────────────────────┘
/// ```
///
/// # Arguments
///  - pixels: Un-padded raw pixels, `width * height` of them
///  - pad_x: Number of columns added on each of the left and right
///  - pad_y: Number of rows added on each of the top and bottom
///  - policy: Values the new pixels take
///
/// # Returns
///  - A vec of `(width + 2 * pad_x) * (height + 2 * pad_y)` pixels
///
/// An image with a zero dimension pads to an all default buffer.
pub fn pad<T: Copy + Default>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize, policy: BoundaryPolicy
) -> Vec<T> {
    let padded_w = width + pad_x * 2;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![T::default(); padded_w * padded_h];

    if width == 0 || height == 0 {
        return out_pixels;
    }
    let (start, end) = (pad_x, pad_x + width);

    for (y, out) in out_pixels.chunks_exact_mut(padded_w).enumerate() {
        // row of the image this padded row reads from
        let source_y = match policy {
            BoundaryPolicy::Zero if y < pad_y || y >= pad_y + height => continue,
            _ => y.saturating_sub(pad_y).min(height - 1)
        };
        let in_pix = &pixels[source_y * width..(source_y + 1) * width];

        out[start..end].copy_from_slice(in_pix);

        if policy == BoundaryPolicy::Replicate {
            out[..start].fill(in_pix[0]);
            out[end..].fill(in_pix[width - 1]);
        }
    }
    out_pixels
}

#[cfg(test)]
mod tests {
    use crate::pad::{pad, BoundaryPolicy};

    #[test]
    fn zero_padding() {
        let pixels = [1, 2, 3, 4];
        let padded = pad(&pixels, 2, 2, 1, 1, BoundaryPolicy::Zero);
        #[rustfmt::skip]
        assert_eq!(padded, [
            0, 0, 0, 0,
            0, 1, 2, 0,
            0, 3, 4, 0,
            0, 0, 0, 0
        ]);
    }

    #[test]
    fn replicate_padding() {
        let pixels = [1, 2, 3, 4, 5, 6];
        let padded = pad(&pixels, 3, 2, 1, 2, BoundaryPolicy::Replicate);
        #[rustfmt::skip]
        assert_eq!(padded, [
            1, 1, 2, 3, 3,
            1, 1, 2, 3, 3,
            1, 1, 2, 3, 3,
            4, 4, 5, 6, 6,
            4, 4, 5, 6, 6,
            4, 4, 5, 6, 6
        ]);
    }

    #[test]
    fn no_padding_is_a_copy() {
        let pixels = [9, 8, 7];
        assert_eq!(pad(&pixels, 3, 1, 0, 0, BoundaryPolicy::Replicate), pixels);
    }
}
