/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use tinypnm_core::bit_depth::BitDepth;
use tinypnm_core::colorspace::ColorSpace;
use tinypnm_ppm::{PPMDecoder, PPMEncoder, PnmEncodeErrors};

#[test]
fn eight_bit_color() {
    let samples: Vec<u16> = (0..2 * 3 * 3).map(|x| x * 13).collect();

    let mut encoded = vec![];
    PPMEncoder::new(2, 3, 255, ColorSpace::RGB, &mut encoded)
        .encode(&samples)
        .unwrap();

    assert!(encoded.starts_with(b"P6\n2 3\n255\n"));
    assert_eq!(encoded.len(), 11 + samples.len());

    let mut decoder = PPMDecoder::new(&encoded);
    assert_eq!(decoder.decode().unwrap(), samples);
    assert_eq!(decoder.bit_depth(), Some(BitDepth::Eight));
    assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
}

#[test]
fn sixteen_bit_is_big_endian_on_disk() {
    let samples = [0x0102_u16, 0xfffe, 0x0000, 0x8001];

    let mut encoded = vec![];
    PPMEncoder::new(2, 2, 65535, ColorSpace::Luma, &mut encoded)
        .encode(&samples)
        .unwrap();

    assert_eq!(
        encoded,
        b"P5\n2 2\n65535\n\x01\x02\xff\xfe\x00\x00\x80\x01"
    );

    let mut decoder = PPMDecoder::new(&encoded);
    assert_eq!(decoder.decode().unwrap(), samples);
    assert_eq!(decoder.bit_depth(), Some(BitDepth::Sixteen));
}

#[test]
fn eight_bit_keeps_low_byte() {
    let mut encoded = vec![];
    PPMEncoder::new(1, 1, 100, ColorSpace::Luma, &mut encoded)
        .encode(&[0x0163])
        .unwrap();
    assert_eq!(encoded, b"P5\n1 1\n100\n\x63");
}

#[test]
fn empty_image_round_trip() {
    let mut encoded = vec![];
    PPMEncoder::new(0, 0, 255, ColorSpace::RGB, &mut encoded)
        .encode(&[])
        .unwrap();
    assert_eq!(encoded, b"P6\n0 0\n255\n");

    let mut decoder = PPMDecoder::new(&encoded);
    assert!(decoder.decode().unwrap().is_empty());

    let mut again = vec![];
    PPMEncoder::new(0, 0, decoder.max_value().unwrap(), ColorSpace::RGB, &mut again)
        .encode(&[])
        .unwrap();
    assert_eq!(encoded, again);
}

#[test]
fn rejects_mismatched_sample_count() {
    let mut encoded = vec![];
    let result = PPMEncoder::new(2, 2, 255, ColorSpace::RGB, &mut encoded).encode(&[0; 4]);

    assert!(matches!(result, Err(PnmEncodeErrors::WrongInputSize(12, 4))));
    assert!(encoded.is_empty());
}
