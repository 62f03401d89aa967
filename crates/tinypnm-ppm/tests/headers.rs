/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header validation and sizing failures
use tinypnm_core::options::DecoderOptions;
use tinypnm_ppm::{PPMDecoder, PnmDecodeErrors, PnmVersion};

fn decode_err(data: &[u8]) -> PnmDecodeErrors {
    match PPMDecoder::new(data).decode() {
        Ok(_) => panic!("decoding {:?} should fail", String::from_utf8_lossy(data)),
        Err(e) => e
    }
}

#[test]
fn bad_magic() {
    assert!(matches!(
        decode_err(b"P3\n1 1\n255\n\0\0\0"),
        PnmDecodeErrors::InvalidMagic(_)
    ));
    assert!(matches!(decode_err(b""), PnmDecodeErrors::InvalidMagic(_)));
}

#[test]
fn missing_integer() {
    assert!(matches!(
        decode_err(b"P6\n1\n"),
        PnmDecodeErrors::InvalidHeader(_)
    ));
    assert!(matches!(
        decode_err(b"P6\n1 x 255\n"),
        PnmDecodeErrors::InvalidHeader(_)
    ));
}

#[test]
fn unrepresentable_integer() {
    let data = b"P6\n99999999999999999999999999 1\n255\n";
    assert!(matches!(decode_err(data), PnmDecodeErrors::InvalidHeader(_)));
}

#[test]
fn max_value_above_16_bits() {
    assert!(matches!(
        decode_err(b"P5\n1 1\n65536\n\0\0"),
        PnmDecodeErrors::InvalidHeader(_)
    ));
}

#[test]
fn zero_max_value() {
    assert!(matches!(
        decode_err(b"P5\n1 1\n0\n\0"),
        PnmDecodeErrors::ZeroMaxValue
    ));
}

#[test]
fn zero_max_value_is_checked_before_separator() {
    assert!(matches!(
        decode_err(b"P5\n1 1\n0X\0"),
        PnmDecodeErrors::ZeroMaxValue
    ));
}

#[test]
fn separator_must_be_whitespace() {
    assert!(matches!(
        decode_err(b"P5\n1 1\n255#\x05"),
        PnmDecodeErrors::InvalidSeparator(Some(b'#'))
    ));
    assert!(matches!(
        decode_err(b"P5\n1 1\n255"),
        PnmDecodeErrors::InvalidSeparator(None)
    ));
}

#[test]
fn vertical_tab_is_a_separator() {
    let pixels = PPMDecoder::new(b"P5\n1 1\n255\x0b\x05").decode().unwrap();
    assert_eq!(pixels, [5]);
}

#[test]
fn dimension_product_overflow() {
    let data = format!("P6\n{} 4\n255\n", usize::MAX / 2);
    assert!(matches!(
        decode_err(data.as_bytes()),
        PnmDecodeErrors::TooLarge { height: 4, .. }
    ));
}

#[test]
fn buffer_size_overflow() {
    // width * height fits but not once multiplied by the pixel size
    let width = usize::MAX / 4;
    let data = format!("P6\n{width} 1\n255\n");
    assert!(matches!(
        decode_err(data.as_bytes()),
        PnmDecodeErrors::TooLarge { width: w, height: 1 } if w == width
    ));
}

#[test]
fn truncated_samples() {
    assert!(matches!(
        decode_err(b"P6\n2 2\n255\n\x01\x02\x03"),
        PnmDecodeErrors::UnexpectedEof {
            expected: 12,
            found:    3
        }
    ));
    // 16 bit samples need two bytes each
    assert!(matches!(
        decode_err(b"P5\n2 1\n1000\n\x01\x02\x03"),
        PnmDecodeErrors::UnexpectedEof {
            expected: 4,
            found:    3
        }
    ));
}

#[test]
fn dimension_limits() {
    let options = DecoderOptions::default().set_max_height(4);
    let mut decoder = PPMDecoder::new_with_options(options, b"P5\n1 5\n255\n\0\0\0\0\0");

    assert!(matches!(
        decoder.decode(),
        Err(PnmDecodeErrors::LargeDimensions(4, 5))
    ));
}

#[test]
fn trailing_bytes_in_strict_mode() {
    let data = b"P5\n1 1\n255\n\x01\x02\x03";

    assert_eq!(PPMDecoder::new(data).decode().unwrap(), [1]);

    let options = DecoderOptions::default().set_strict_mode(true);
    assert!(matches!(
        PPMDecoder::new_with_options(options, data).decode(),
        Err(PnmDecodeErrors::TrailingBytes(2))
    ));
}

#[test]
fn empty_image_needs_no_separator() {
    let mut decoder = PPMDecoder::new(b"P6\n0 3\n255");
    assert!(decoder.decode().unwrap().is_empty());
    assert_eq!(decoder.dimensions(), Some((0, 3)));
}

#[test]
fn wrong_version() {
    let mut decoder = PPMDecoder::new(b"P5\n1 1\n255\n\0");
    assert!(matches!(
        decoder.expect_version(PnmVersion::P6),
        Err(PnmDecodeErrors::WrongVersion {
            expected: PnmVersion::P6,
            found:    PnmVersion::P5
        })
    ));

    let mut decoder = PPMDecoder::new(b"P5\n1 1\n255\n\0");
    assert!(decoder.expect_version(PnmVersion::P5).is_ok());
}
