/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Behaviour of the operations on whole images
use nanorand::Rng;
use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::PgmImage;
use tinypnm_image::traits::OperationsTrait;
use tinypnm_imageprocs::convolve::{BoundaryPolicy, Convolve};
use tinypnm_imageprocs::equalize::HistogramEqualization;
use tinypnm_imageprocs::gamma::Gamma;
use tinypnm_imageprocs::threshold::OtsuThreshold;

fn random_image(width: usize, height: usize, max: u16, seed: u64) -> PgmImage {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let pixels = (0..width * height)
        .map(|_| rand.generate_range(0..=max))
        .collect();

    PgmImage::new(width, height, max, pixels).unwrap()
}

#[test]
fn zero_kernel_gives_black_image() {
    for policy in [BoundaryPolicy::Zero, BoundaryPolicy::Replicate] {
        let mut image = random_image(31, 17, 255, 1);

        Convolve::new(vec![0.0; 15], 5, 3)
            .with_boundary(policy)
            .execute(&mut image)
            .unwrap();

        assert!(image.pixels().iter().all(|x| *x == 0));
    }
}

#[test]
fn centre_one_kernel_is_identity() {
    let mut weights = vec![0.0; 7 * 5];
    weights[2 * 7 + 3] = 1.0;

    for policy in [BoundaryPolicy::Zero, BoundaryPolicy::Replicate] {
        let original = random_image(64, 49, 65535, 2);
        let mut image = original.clone();

        Convolve::new(weights.clone(), 7, 5)
            .with_boundary(policy)
            .execute(&mut image)
            .unwrap();

        assert_eq!(image, original);
    }
}

#[test]
fn box_blur_of_a_step() {
    let pixels = vec![0, 0, 90, 90, 0, 0, 90, 90, 0, 0, 90, 90];
    let mut image = PgmImage::new(4, 3, 255, pixels).unwrap();

    Convolve::new(vec![1.0 / 3.0; 3], 3, 1)
        .with_boundary(BoundaryPolicy::Replicate)
        .execute(&mut image)
        .unwrap();

    assert_eq!(image.pixels()[..4], [0, 30, 60, 90]);
}

#[test]
fn invalid_kernel_leaves_image_untouched() {
    let original = random_image(8, 8, 255, 3);

    for (weights, w, h) in [(vec![1.0; 4], 2, 2), (vec![1.0; 8], 3, 3), (vec![], 0, 1)] {
        let mut image = original.clone();
        let result = Convolve::new(weights, w, h).execute(&mut image);

        assert!(matches!(result, Err(ImageErrors::InvalidKernel(_))));
        assert_eq!(image, original);
    }
}

#[test]
fn convolving_an_empty_image_is_a_no_op() {
    let mut image = PgmImage::new(0, 4, 255, vec![]).unwrap();
    Convolve::new(vec![1.0; 9], 3, 3).execute(&mut image).unwrap();
    assert!(image.pixels().is_empty());

    // the kernel is still checked
    assert!(Convolve::new(vec![1.0; 9], 9, 3).execute(&mut image).is_err());
}

#[test]
fn unit_gamma_is_identity() {
    let original = random_image(20, 20, 1023, 4);
    let mut image = original.clone();

    Gamma::new(1.0).execute(&mut image).unwrap();
    assert_eq!(image, original);
}

#[test]
fn zero_gamma_is_rejected() {
    let original = random_image(4, 4, 255, 5);
    let mut image = original.clone();

    assert!(matches!(
        Gamma::new(0.0).execute(&mut image),
        Err(ImageErrors::InvalidGamma(_))
    ));
    assert_eq!(image, original);
}

#[test]
fn equalization_is_deterministic() {
    let original = random_image(40, 30, 255, 6);

    let mut first = original.clone();
    let mut second = original.clone();
    HistogramEqualization::new().execute(&mut first).unwrap();
    HistogramEqualization::new().execute(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn equalizing_an_empty_image_fails() {
    let mut image = PgmImage::new(3, 0, 255, vec![]).unwrap();
    assert!(matches!(
        HistogramEqualization::new().execute(&mut image),
        Err(ImageErrors::EmptyImage(_))
    ));
}

#[test]
fn otsu_on_random_image_is_binary() {
    let mut image = random_image(33, 33, 4095, 7);
    let otsu = OtsuThreshold::new();

    otsu.execute(&mut image).unwrap();

    assert!(otsu.threshold().is_some());
    assert!(image.pixels().iter().all(|x| *x == 0 || *x == 4095));
}
