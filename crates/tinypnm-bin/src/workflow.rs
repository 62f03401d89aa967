/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{debug, info};
use tinypnm_image::errors::ImageErrors;
use tinypnm_image::image::{PgmImage, PpmImage};
use tinypnm_image::traits::OperationsTrait;
use tinypnm_imageprocs::convolve::Convolve;
use tinypnm_imageprocs::equalize::HistogramEqualization;
use tinypnm_imageprocs::gamma::Gamma;
use tinypnm_imageprocs::threshold::OtsuThreshold;

use crate::cmd_args::{get_kernel, grayscale_method, BoundaryArg, CoefficientsArg, GrayscaleArg};
use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;

/// Collect the grayscale operations in the order they run
///
/// Equalization, gamma, convolution then thresholding, irrespective of
/// the order the flags were given in.
pub(crate) fn add_operations(args: &ArgMatches) -> Vec<Box<dyn OperationsTrait>> {
    let mut operations: Vec<Box<dyn OperationsTrait>> = Vec::new();

    if args.get_flag("equalize") {
        debug!("Added histogram equalization");
        operations.push(Box::new(HistogramEqualization::new()));
    }
    if let Some(value) = args.get_one::<f64>("gamma") {
        debug!("Added gamma correction with {}", value);
        operations.push(Box::new(Gamma::new(*value)));
    }
    if let Some(kernel) = get_kernel(args) {
        let boundary = args
            .get_one::<BoundaryArg>("boundary")
            .copied()
            .unwrap_or(BoundaryArg::Zero);

        debug!(
            "Added {}x{} convolution with {:?} boundary",
            kernel.width,
            kernel.height,
            boundary
        );
        let convolve = Convolve::new(kernel.weights.clone(), kernel.width, kernel.height)
            .with_boundary(boundary.to_policy());

        operations.push(Box::new(convolve));
    }
    if args.get_flag("otsu") {
        debug!("Added otsu threshold");
        operations.push(Box::new(OtsuThreshold::new()));
    }
    operations
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<String>("in")
        .ok_or(ImageErrors::GenericStr("No input file"))?;
    let out_file = args
        .get_one::<String>("out")
        .ok_or(ImageErrors::GenericStr("No output file"))?;

    let mut image = PpmImage::open_with_options(in_file, get_decoder_options(cmd_opts))?;

    let grayscale = args
        .get_one::<GrayscaleArg>("grayscale")
        .copied()
        .unwrap_or(GrayscaleArg::Average);
    let coefficients = args.get_one::<CoefficientsArg>("coefficients").copied();

    let method = grayscale_method(grayscale, coefficients).ok_or(ImageErrors::GenericStr(
        "The weighted grayscale reduction needs --coefficients"
    ))?;

    image.to_grayscale_in_place(method);

    if let Some(keep) = args.get_one::<String>("keep-gray") {
        info!("Writing reduced color image to {}", keep);
        image.save(keep)?;
    }

    let mut gray = PgmImage::from_ppm(&image)?;

    for operation in add_operations(args) {
        info!("Running {}", operation.name());
        operation.execute(&mut gray)?;
    }

    info!("Writing grayscale image to {}", out_file);
    gray.save(out_file)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tinypnm_image::image::{PgmImage, PpmImage, RgbPixel};

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::workflow::{add_operations, create_and_exec_workflow_from_cmd};

    #[test]
    fn color_to_gray_pipeline() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("tinypnm-bin-{}-in.ppm", std::process::id()));
        let output = dir.join(format!("tinypnm-bin-{}-out.pgm", std::process::id()));

        let image = PpmImage::from_fn(4, 2, 255, |x, _| {
            RgbPixel::new(x as u16 * 30, 0, x as u16 * 60)
        })
        .unwrap();
        image.save(&input).unwrap();

        let args = create_cmd_args()
            .try_get_matches_from([
                "tinypnm",
                "-i",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap()
            ])
            .unwrap();

        create_and_exec_workflow_from_cmd(&args, &parse_options(&args)).unwrap();
        let gray = PgmImage::open(&output).unwrap();

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        // (x*30 + x*60) / 3
        assert_eq!(gray.pixels(), &[0, 30, 60, 90, 0, 30, 60, 90]);
    }

    #[test]
    fn operations_run_in_fixed_order() {
        let args = create_cmd_args()
            .try_get_matches_from([
                "tinypnm",
                "-i",
                "in.ppm",
                "-o",
                "out.pgm",
                "--otsu",
                "--convolve",
                "1x1:1",
                "--gamma",
                "2.2",
                "--equalize"
            ])
            .unwrap();

        let names: Vec<&str> = add_operations(&args).iter().map(|x| x.name()).collect();
        assert_eq!(
            names,
            [
                "Histogram Equalization",
                "Gamma Correction",
                "2D convolution",
                "Otsu Threshold"
            ]
        );
    }

    #[test]
    fn weighted_needs_coefficients() {
        let result = create_cmd_args().try_get_matches_from([
            "tinypnm",
            "-i",
            "in.ppm",
            "-o",
            "out.pgm",
            "--grayscale",
            "weighted"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn probe_needs_no_output() {
        let result =
            create_cmd_args().try_get_matches_from(["tinypnm", "-i", "in.ppm", "--probe"]);
        assert!(result.is_ok());
    }
}
